use super::completed;
use crate::app::methods::{delete_program, delete_transaction, delete_urimap, delete_webservice};
use crate::config::cli::DeleteCommand;
use crate::core::session::Session;
use crate::domain::ports::{CommandHandler, CommandResponse, TargetProvider};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl CommandHandler for DeleteCommand {
    async fn process(&self, session: &Session, target: &dyn TargetProvider) -> Result<CommandResponse> {
        match self {
            DeleteCommand::Program(args) => {
                let response = delete_program(session, &args.to_parms(target)).await?;
                Ok(completed("program", &args.program_name, "deleted", response))
            }
            DeleteCommand::Transaction(args) => {
                let response = delete_transaction(session, &args.to_parms(target)).await?;
                Ok(completed("transaction", &args.transaction_name, "deleted", response))
            }
            DeleteCommand::Urimap(args) => {
                let response = delete_urimap(session, &args.to_parms(target)).await?;
                Ok(completed("URIMAP", &args.urimap_name, "deleted", response))
            }
            DeleteCommand::Webservice(args) => {
                let response = delete_webservice(session, &args.to_parms(target)).await?;
                Ok(completed("web service", &args.webservice_name, "deleted", response))
            }
        }
    }
}
