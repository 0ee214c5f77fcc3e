use crate::app::methods::{add_csd_group_to_list, remove_csd_group_from_list};
use crate::config::cli::{AddToListCommand, RemoveFromListCommand};
use crate::core::session::Session;
use crate::domain::ports::{CommandHandler, CommandResponse, TargetProvider};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl CommandHandler for AddToListCommand {
    async fn process(&self, session: &Session, target: &dyn TargetProvider) -> Result<CommandResponse> {
        match self {
            AddToListCommand::CsdGroup(args) => {
                let response = add_csd_group_to_list(session, &args.to_parms(target)).await?;
                Ok(CommandResponse {
                    message: format!(
                        "The CSD group '{}' was added to list '{}' successfully.",
                        args.name, args.csd_list
                    ),
                    response,
                })
            }
        }
    }
}

#[async_trait]
impl CommandHandler for RemoveFromListCommand {
    async fn process(&self, session: &Session, target: &dyn TargetProvider) -> Result<CommandResponse> {
        match self {
            RemoveFromListCommand::CsdGroup(args) => {
                let response = remove_csd_group_from_list(session, &args.to_parms(target)).await?;
                Ok(CommandResponse {
                    message: format!(
                        "The CSD group '{}' was removed from list '{}' successfully.",
                        args.name, args.csd_list
                    ),
                    response,
                })
            }
        }
    }
}
