#[cfg(feature = "cli")]
pub mod cli;
pub mod profile;

use crate::core::session::{Protocol, Session};
use crate::core::TargetProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_required_field, Validate};
use profile::{CicsProfile, ProfileConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Connection values given explicitly (flags or environment). Anything left
/// unset falls back to the selected profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub protocol: Option<Protocol>,
    pub reject_unauthorized: Option<bool>,
    pub region_name: Option<String>,
    pub cics_plex: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub profile_name: Option<String>,
    pub profile_file: Option<PathBuf>,
}

/// A ready-to-use session plus the region it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionContext {
    pub session: Session,
    pub region_name: String,
    pub cics_plex: Option<String>,
}

impl TargetProvider for ConnectionContext {
    fn region_name(&self) -> &str {
        &self.region_name
    }

    fn cics_plex(&self) -> Option<&str> {
        self.cics_plex.as_deref()
    }
}

impl ConnectionSettings {
    /// Load the profile file and merge it under these settings.
    pub fn resolve(&self) -> Result<ConnectionContext> {
        let profiles = ProfileConfig::load(self.profile_file.as_deref())?;
        let profile = profiles.profile(self.profile_name.as_deref())?;
        resolve_connection(self, profile)
    }
}

pub fn resolve_connection(
    settings: &ConnectionSettings,
    profile: Option<&CicsProfile>,
) -> Result<ConnectionContext> {
    let fallback = CicsProfile::default();
    let profile = profile.unwrap_or(&fallback);

    let host = settings.host.clone().or_else(|| profile.host.clone());
    let user = settings.user.clone().or_else(|| profile.user.clone());
    let password = settings.password.clone().or_else(|| profile.password.clone());
    let host = validate_required_field("host", &host)?;
    let user = validate_required_field("user", &user)?;
    let password = validate_required_field("password", &password)?;

    let port = settings.port.unwrap_or_else(|| profile.port_or_default());
    let protocol = settings.protocol.or(profile.protocol).unwrap_or_default();
    let reject_unauthorized = settings
        .reject_unauthorized
        .or(profile.reject_unauthorized)
        .unwrap_or(true);

    let mut session = Session::new(host.as_str(), port)
        .with_credentials(user.as_str(), password.as_str())
        .with_protocol(protocol)
        .with_reject_unauthorized(reject_unauthorized);
    if let Some(timeout) = settings.timeout_seconds.or(profile.timeout_seconds) {
        validate_positive_number("timeout", timeout, 1)?;
        session = session.with_timeout(Duration::from_secs(timeout));
    }
    session.validate()?;

    let region_name = settings
        .region_name
        .clone()
        .or_else(|| profile.region_name.clone())
        .unwrap_or_default();
    let cics_plex = settings
        .cics_plex
        .clone()
        .or_else(|| profile.cics_plex.clone())
        .filter(|plex| !plex.trim().is_empty());

    tracing::debug!(
        "Resolved connection: {:?}, region '{}', CICSplex {:?}",
        session,
        region_name,
        cics_plex
    );

    Ok(ConnectionContext {
        session,
        region_name,
        cics_plex,
    })
}
