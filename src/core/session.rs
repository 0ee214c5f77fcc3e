use crate::core::constants::DEFAULT_PORT;
use crate::utils::error::{CicsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Protocol {
    type Err = CicsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(CicsError::InvalidConfigValueError {
                field: "protocol".to_string(),
                value: other.to_string(),
                reason: "expected http or https".to_string(),
            }),
        }
    }
}

/// Connection details for one CMCI server, using basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub hostname: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub protocol: Protocol,
    pub reject_unauthorized: bool,
    pub timeout: Option<Duration>,
}

impl Session {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            user: None,
            password: None,
            protocol: Protocol::default(),
            reject_unauthorized: true,
            timeout: None,
        }
    }

    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn with_reject_unauthorized(mut self, reject_unauthorized: bool) -> Self {
        self.reject_unauthorized = reject_unauthorized;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&format!("{}://{}:{}", self.protocol, self.hostname, self.port))?;
        Ok(url)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_PORT)
    }
}

// Keeps the password out of debug logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .field("protocol", &self.protocol)
            .field("reject_unauthorized", &self.reject_unauthorized)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Validate for Session {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.hostname)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}
