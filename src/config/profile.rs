use crate::core::constants::DEFAULT_PORT;
use crate::core::session::Protocol;
use crate::utils::error::{CicsError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Connection settings stored under `[profiles.<name>]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CicsProfile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub protocol: Option<Protocol>,
    pub reject_unauthorized: Option<bool>,
    pub region_name: Option<String>,
    pub cics_plex: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, CicsProfile>,
}

impl ProfileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CicsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// `${VAR}` references are replaced from the environment; unset
    /// variables are left untouched.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: ProfileConfig =
            toml::from_str(&processed_content).map_err(|e| CicsError::ConfigError {
                message: format!("Profile file parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CicsError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Reads `path` when given (it must exist); otherwise the default
    /// location if present, else an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                validate_path("profile-file", &path.to_string_lossy())?;
                tracing::debug!("Loading profiles from {}", path.display());
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(default) if default.is_file() => {
                    tracing::debug!("Loading profiles from {}", default.display());
                    Self::from_file(default)
                }
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "cics-cmci")
            .map(|dirs| dirs.config_dir().join("profiles.toml"))
    }

    /// Select a profile: the named one (which must exist), else
    /// `default_profile`, else the only profile in the file.
    pub fn profile(&self, name: Option<&str>) -> Result<Option<&CicsProfile>> {
        if let Some(name) = name {
            return self
                .profiles
                .get(name)
                .map(Some)
                .ok_or_else(|| CicsError::ConfigError {
                    message: format!("Profile '{}' not found", name),
                });
        }

        if let Some(default) = &self.default_profile {
            return self.profile(Some(default));
        }

        if self.profiles.len() == 1 {
            return Ok(self.profiles.values().next());
        }
        Ok(None)
    }
}

impl Validate for CicsProfile {
    fn validate(&self) -> Result<()> {
        if let Some(port) = self.port {
            validate_range("port", port, 1, u16::MAX)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        for profile in self.profiles.values() {
            profile.validate()?;
        }
        if let Some(default) = &self.default_profile {
            if !self.profiles.contains_key(default) {
                return Err(CicsError::InvalidConfigValueError {
                    field: "default_profile".to_string(),
                    value: default.clone(),
                    reason: "no profile with this name".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl CicsProfile {
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}
