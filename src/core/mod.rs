pub mod constants;
pub mod rest_client;
pub mod runner;
pub mod session;
pub mod xml;

pub use crate::domain::model::{CmciApiResponse, CmciRecord, ResultSummary};
pub use crate::domain::ports::{CommandHandler, CommandResponse, TargetProvider};
pub use crate::utils::error::Result;
