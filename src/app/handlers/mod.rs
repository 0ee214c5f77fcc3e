//! Command handlers: each maps one CLI command group onto the API methods
//! and words the result for the user.

pub mod csd_group;
pub mod define;
pub mod delete;
pub mod discard;
pub mod enable;
pub mod get;
pub mod install;
pub mod parms;
pub mod refresh;

use crate::domain::model::CmciApiResponse;
use crate::domain::ports::CommandResponse;

pub(crate) fn completed(kind: &str, name: &str, outcome: &str, response: CmciApiResponse) -> CommandResponse {
    CommandResponse {
        message: format!("The {} '{}' was {} successfully.", kind, name, outcome),
        response,
    }
}
