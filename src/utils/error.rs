use crate::domain::model::{CmciFeedback, ResultSummary};
use crate::core::constants::response_name;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CicsError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid CMCI URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unable to parse CMCI response: {message}")]
    XmlError { message: String },

    #[error("Syntax Error:\nMissing Positional Argument: {argument}")]
    MissingPositionalError { argument: String },

    #[error("Syntax Error:\nMissing Required Option: {option}")]
    MissingOptionError { option: String },

    #[error("Syntax Error:\n{message}")]
    SyntaxError { message: String },

    #[error("Expect Error: Required parameter '{field}' must not be blank")]
    MissingParameterError { field: String },

    #[error("Missing connection option: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("{}", cmci_failure_message(.summary, .feedback))]
    CmciError {
        summary: ResultSummary,
        feedback: Vec<CmciFeedback>,
    },

    #[error("CMCI REST API request failed with HTTP status {status}: {body}")]
    HttpStatusError { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, CicsError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Validation,
    Configuration,
    Cmci,
    Network,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl CicsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CicsError::MissingPositionalError { .. }
            | CicsError::MissingOptionError { .. }
            | CicsError::SyntaxError { .. } => ErrorCategory::Syntax,
            CicsError::MissingParameterError { .. } => ErrorCategory::Validation,
            CicsError::MissingConfigError { .. }
            | CicsError::InvalidConfigValueError { .. }
            | CicsError::ConfigError { .. } => ErrorCategory::Configuration,
            CicsError::CmciError { .. } => ErrorCategory::Cmci,
            CicsError::HttpError(_) | CicsError::UrlError(_) | CicsError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            CicsError::IoError(_)
            | CicsError::SerializationError(_)
            | CicsError::XmlError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Internal => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CicsError::HttpError(e) if e.is_timeout() => {
                "The CMCI server did not answer before the request timed out".to_string()
            }
            CicsError::HttpError(e) if e.is_connect() => {
                format!("Could not connect to the CMCI server: {}", e)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Syntax => "Run the command with --help to see its required arguments",
            ErrorCategory::Validation => "Supply a non-blank value for every required parameter",
            ErrorCategory::Configuration => {
                "Pass the connection option on the command line, set its CICS_* environment variable or add it to your profile"
            }
            ErrorCategory::Cmci => {
                "Check the region name, CICSplex and resource names against the CICS system"
            }
            ErrorCategory::Network => {
                "Check host, port, protocol and credentials, and that the CMCI server is reachable"
            }
            ErrorCategory::Internal => "Re-run with --verbose and report the output",
        }
    }

    pub(crate) fn xml(err: impl std::fmt::Display) -> Self {
        CicsError::XmlError {
            message: err.to_string(),
        }
    }
}

fn cmci_failure_message(summary: &ResultSummary, feedback: &[CmciFeedback]) -> String {
    let mut message = format!(
        "Did not receive the expected response from CMCI REST API. Response details: api_response1={} ({}), api_response2={}",
        summary.api_response1,
        describe(&summary.api_response1, &summary.api_response1_alt),
        summary.api_response2,
    );
    if !summary.api_response2_alt.is_empty() {
        message.push_str(&format!(" ({})", summary.api_response2_alt));
    }
    for item in feedback {
        message.push_str(&format!("\n  feedback: {}", item));
    }
    message
}

fn describe<'a>(code: &str, alt: &'a str) -> &'a str {
    if alt.is_empty() {
        response_name(code).unwrap_or("UNKNOWN")
    } else {
        alt
    }
}
