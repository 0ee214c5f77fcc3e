use super::completed;
use crate::app::methods::{install_program, install_transaction, install_urimap, install_webservice};
use crate::config::cli::InstallCommand;
use crate::core::session::Session;
use crate::domain::ports::{CommandHandler, CommandResponse, TargetProvider};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl CommandHandler for InstallCommand {
    async fn process(&self, session: &Session, target: &dyn TargetProvider) -> Result<CommandResponse> {
        match self {
            InstallCommand::Program(args) => {
                let response = install_program(session, &args.to_parms(target)).await?;
                Ok(completed("program", &args.program_name, "installed", response))
            }
            InstallCommand::Transaction(args) => {
                let response = install_transaction(session, &args.to_parms(target)).await?;
                Ok(completed("transaction", &args.transaction_name, "installed", response))
            }
            InstallCommand::Urimap(args) => {
                let response = install_urimap(session, &args.to_parms(target)).await?;
                Ok(completed("URIMAP", &args.urimap_name, "installed", response))
            }
            InstallCommand::Webservice(args) => {
                let response = install_webservice(session, &args.to_parms(target)).await?;
                Ok(completed("web service", &args.webservice_name, "installed", response))
            }
        }
    }
}
