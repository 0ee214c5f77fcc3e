use super::completed;
use crate::app::methods::{discard_program, discard_transaction, discard_urimap};
use crate::config::cli::DiscardCommand;
use crate::core::session::Session;
use crate::domain::ports::{CommandHandler, CommandResponse, TargetProvider};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl CommandHandler for DiscardCommand {
    async fn process(&self, session: &Session, target: &dyn TargetProvider) -> Result<CommandResponse> {
        match self {
            DiscardCommand::Program(args) => {
                let response = discard_program(session, &args.to_parms(target)).await?;
                Ok(completed("program", &args.program_name, "discarded", response))
            }
            DiscardCommand::Transaction(args) => {
                let response = discard_transaction(session, &args.to_parms(target)).await?;
                Ok(completed("transaction", &args.transaction_name, "discarded", response))
            }
            DiscardCommand::Urimap(args) => {
                let response = discard_urimap(session, &args.to_parms(target)).await?;
                Ok(completed("URIMAP", &args.urimap_name, "discarded", response))
            }
        }
    }
}
