use super::completed;
use crate::app::methods::{
    define_program, define_transaction, define_urimap_client, define_urimap_pipeline,
    define_urimap_server, define_webservice,
};
use crate::config::cli::DefineCommand;
use crate::core::session::Session;
use crate::domain::ports::{CommandHandler, CommandResponse, TargetProvider};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl CommandHandler for DefineCommand {
    async fn process(&self, session: &Session, target: &dyn TargetProvider) -> Result<CommandResponse> {
        match self {
            DefineCommand::Program(args) => {
                let response = define_program(session, &args.to_parms(target)).await?;
                Ok(completed("program", &args.program_name, "defined", response))
            }
            DefineCommand::Transaction(args) => {
                let response = define_transaction(session, &args.to_parms(target)).await?;
                Ok(completed("transaction", &args.transaction_name, "defined", response))
            }
            DefineCommand::UrimapServer(args) => {
                let response = define_urimap_server(session, &args.to_parms(target)).await?;
                Ok(completed("URIMAP", &args.urimap.urimap_name, "defined", response))
            }
            DefineCommand::UrimapClient(args) => {
                let response = define_urimap_client(session, &args.to_parms(target)).await?;
                Ok(completed("URIMAP", &args.urimap.urimap_name, "defined", response))
            }
            DefineCommand::UrimapPipeline(args) => {
                let response = define_urimap_pipeline(session, &args.to_parms(target)).await?;
                Ok(completed("URIMAP", &args.urimap.urimap_name, "defined", response))
            }
            DefineCommand::Webservice(args) => {
                let response = define_webservice(session, &args.to_parms(target)).await?;
                Ok(completed("web service", &args.webservice_name, "defined", response))
            }
        }
    }
}
