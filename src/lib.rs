pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};

pub use config::{resolve_connection, ConnectionContext, ConnectionSettings};
pub use core::{
    rest_client::{CmciResource, CmciRestClient},
    runner::CommandRunner,
    session::{Protocol, Session},
};
pub use domain::model::{CmciApiResponse, CmciRecord, ResultSummary};
pub use utils::error::{CicsError, Result};
