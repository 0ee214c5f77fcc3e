use super::completed;
use crate::app::methods::refresh_program;
use crate::config::cli::RefreshCommand;
use crate::core::session::Session;
use crate::domain::ports::{CommandHandler, CommandResponse, TargetProvider};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl CommandHandler for RefreshCommand {
    async fn process(&self, session: &Session, target: &dyn TargetProvider) -> Result<CommandResponse> {
        match self {
            RefreshCommand::Program(args) => {
                let response = refresh_program(session, &args.to_parms(target)).await?;
                Ok(completed("program", &args.program_name, "refreshed", response))
            }
        }
    }
}
