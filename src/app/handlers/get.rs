use crate::app::methods::get_resource;
use crate::config::cli::GetCommand;
use crate::core::session::Session;
use crate::domain::ports::{CommandHandler, CommandResponse, TargetProvider};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl CommandHandler for GetCommand {
    async fn process(&self, session: &Session, target: &dyn TargetProvider) -> Result<CommandResponse> {
        match self {
            GetCommand::Resource(args) => {
                let response = get_resource(session, &args.to_parms(target)).await?;
                let count = response.records().len();
                tracing::debug!("{} returned {} record(s)", args.resource_name, count);
                Ok(CommandResponse {
                    message: format!(
                        "The resource '{}' was read successfully: {} record(s) found.",
                        args.resource_name, count
                    ),
                    response,
                })
            }
        }
    }
}
