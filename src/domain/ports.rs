use crate::core::session::Session;
use crate::domain::model::CmciApiResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where a handler reads the region and CICSplex it should address.
pub trait TargetProvider: Send + Sync {
    fn region_name(&self) -> &str;
    fn cics_plex(&self) -> Option<&str>;
}

/// Outcome of one CLI action: the text shown to the user and the raw envelope.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    pub message: String,
    pub response: CmciApiResponse,
}

#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn process(&self, session: &Session, target: &dyn TargetProvider)
        -> Result<CommandResponse>;
}
