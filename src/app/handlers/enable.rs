use super::completed;
use crate::app::methods::{disable_urimap, enable_urimap};
use crate::config::cli::{DisableCommand, EnableCommand};
use crate::core::session::Session;
use crate::domain::ports::{CommandHandler, CommandResponse, TargetProvider};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl CommandHandler for EnableCommand {
    async fn process(&self, session: &Session, target: &dyn TargetProvider) -> Result<CommandResponse> {
        match self {
            EnableCommand::Urimap(args) => {
                let response = enable_urimap(session, &args.to_parms(target)).await?;
                Ok(completed("URIMAP", &args.urimap_name, "enabled", response))
            }
        }
    }
}

#[async_trait]
impl CommandHandler for DisableCommand {
    async fn process(&self, session: &Session, target: &dyn TargetProvider) -> Result<CommandResponse> {
        match self {
            DisableCommand::Urimap(args) => {
                let response = disable_urimap(session, &args.to_parms(target)).await?;
                Ok(completed("URIMAP", &args.urimap_name, "disabled", response))
            }
        }
    }
}
