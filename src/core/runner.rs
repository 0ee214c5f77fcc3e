use crate::core::session::Session;
use crate::domain::ports::{CommandHandler, CommandResponse, TargetProvider};
use crate::utils::error::{CicsError, Result};
use serde_json::json;

pub struct CommandRunner {
    handler: Box<dyn CommandHandler>,
}

impl CommandRunner {
    pub fn new(handler: Box<dyn CommandHandler>) -> Self {
        Self { handler }
    }

    pub async fn run(&self, session: &Session, target: &dyn TargetProvider) -> Result<CommandResponse> {
        tracing::debug!(
            "Running command against {}:{} region '{}'",
            session.hostname,
            session.port,
            target.region_name()
        );
        let response = self.handler.process(session, target).await?;
        tracing::info!("{}", response.message);
        Ok(response)
    }
}

/// Text shown on stdout for a successful command.
pub fn render_success(response: &CommandResponse, json_output: bool) -> Result<String> {
    if json_output {
        let document = json!({
            "success": true,
            "exitCode": 0,
            "message": response.message,
            "data": response.response,
        });
        return Ok(serde_json::to_string_pretty(&document)?);
    }

    let mut lines = vec![response.message.clone()];
    for record in response.response.records() {
        lines.push(format!("{}:", record.resource));
        for (key, value) in &record.attributes {
            lines.push(format!("  {}: {}", key, value));
        }
    }
    Ok(lines.join("\n"))
}

/// JSON document printed on stdout for a failed command under `--rfj`.
pub fn render_failure_json(err: &CicsError) -> String {
    let document = json!({
        "success": false,
        "exitCode": err.exit_code(),
        "message": err.user_friendly_message(),
        "category": format!("{:?}", err.category()),
    });
    serde_json::to_string_pretty(&document).unwrap_or_else(|_| err.to_string())
}
