use super::{CSD_GROUP_LABEL, REGION_LABEL};
use crate::core::constants::{
    CICS_DEFINITION_PROGRAM, CICS_DEFINITION_TRANSACTION, CICS_DEFINITION_URIMAP,
    CICS_DEFINITION_WEBSERVICE,
};
use crate::core::rest_client::{CmciResource, CmciRestClient};
use crate::core::session::Session;
use crate::core::xml::{Attributes, CmciRequest};
use crate::domain::model::{CmciApiResponse, ProgramParms, TransactionParms, UrimapParms, WebServiceParms};
use crate::utils::error::Result;
use crate::utils::validation::{require_optional_parameter, require_parameter, validate_choice};

const URIMAP_SCHEMES: &[&str] = &["HTTP", "HTTPS"];
const URIMAP_AUTHENTICATE: &[&str] = &["NO", "BASIC"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UrimapUsage {
    Server,
    Client,
    Pipeline,
}

impl UrimapUsage {
    fn as_str(self) -> &'static str {
        match self {
            UrimapUsage::Server => "server",
            UrimapUsage::Client => "client",
            UrimapUsage::Pipeline => "pipeline",
        }
    }
}

pub async fn define_program(session: &Session, parms: &ProgramParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Program name", &parms.name)?;
    let csd_group = require_optional_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    require_parameter(REGION_LABEL, &parms.region_name)?;

    tracing::debug!("Defining program '{}' in CSD group '{}'", parms.name, csd_group);
    let resource = CmciResource::new(CICS_DEFINITION_PROGRAM)
        .scope(parms.cics_plex.as_deref(), &parms.region_name);
    let body = CmciRequest::Create(
        Attributes::new()
            .with("name", &parms.name)
            .with("csdgroup", csd_group),
    );

    CmciRestClient::new(session)?.post(&resource, &body).await
}

pub async fn define_transaction(session: &Session, parms: &TransactionParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Transaction name", &parms.name)?;
    let program = require_optional_parameter("CICS Program name", &parms.program_name)?;
    let csd_group = require_optional_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    require_parameter(REGION_LABEL, &parms.region_name)?;

    tracing::debug!(
        "Defining transaction '{}' for program '{}' in CSD group '{}'",
        parms.name,
        program,
        csd_group
    );
    let resource = CmciResource::new(CICS_DEFINITION_TRANSACTION)
        .scope(parms.cics_plex.as_deref(), &parms.region_name);
    let body = CmciRequest::Create(
        Attributes::new()
            .with("name", &parms.name)
            .with("program", program)
            .with("csdgroup", csd_group),
    );

    CmciRestClient::new(session)?.post(&resource, &body).await
}

/// URIMAP of usage `server`: maps an inbound path to a program.
pub async fn define_urimap_server(session: &Session, parms: &UrimapParms) -> Result<CmciApiResponse> {
    let program = require_optional_parameter("CICS URIMap program name", &parms.program_name)?;
    let attributes = urimap_attributes(parms, UrimapUsage::Server)?
        .with("program", program)
        .with_opt("transaction", parms.transaction_name.as_deref())
        .with_opt("tcpipservice", parms.tcpipservice.as_deref());

    post_urimap(session, parms, attributes).await
}

/// URIMAP of usage `client`: describes an outbound connection.
pub async fn define_urimap_client(session: &Session, parms: &UrimapParms) -> Result<CmciApiResponse> {
    let authenticate = parms
        .authenticate
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(|v| validate_choice("authenticate", v, URIMAP_AUTHENTICATE))
        .transpose()?;
    let attributes = urimap_attributes(parms, UrimapUsage::Client)?
        .with_opt("authenticate", authenticate.as_deref())
        .with_opt("certificate", parms.certificate.as_deref());

    post_urimap(session, parms, attributes).await
}

/// URIMAP of usage `pipeline`: routes an inbound path to a web service pipeline.
pub async fn define_urimap_pipeline(session: &Session, parms: &UrimapParms) -> Result<CmciApiResponse> {
    let pipeline = require_optional_parameter("CICS URIMap pipeline name", &parms.pipeline_name)?;
    let attributes = urimap_attributes(parms, UrimapUsage::Pipeline)?
        .with("pipeline", pipeline)
        .with_opt("transaction", parms.transaction_name.as_deref())
        .with_opt("webservice", parms.webservice_name.as_deref())
        .with_opt("tcpipservice", parms.tcpipservice.as_deref());

    post_urimap(session, parms, attributes).await
}

pub async fn define_webservice(session: &Session, parms: &WebServiceParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Web Service name", &parms.name)?;
    require_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    require_parameter("CICS Pipeline name", &parms.pipeline_name)?;
    require_parameter("CICS WSBind file", &parms.wsbind)?;
    require_parameter(REGION_LABEL, &parms.region_name)?;

    tracing::debug!(
        "Defining web service '{}' on pipeline '{}' in CSD group '{}'",
        parms.name,
        parms.pipeline_name,
        parms.csd_group
    );
    let resource = CmciResource::new(CICS_DEFINITION_WEBSERVICE)
        .scope(parms.cics_plex.as_deref(), &parms.region_name);
    let body = CmciRequest::Create(
        Attributes::new()
            .with("name", &parms.name)
            .with("csdgroup", &parms.csd_group)
            .with("pipeline", &parms.pipeline_name)
            .with("wsbind", &parms.wsbind)
            .with("validation", if parms.validation { "YES" } else { "NO" })
            .with_opt("description", parms.description.as_deref()),
    );

    CmciRestClient::new(session)?.post(&resource, &body).await
}

fn urimap_attributes(parms: &UrimapParms, usage: UrimapUsage) -> Result<Attributes> {
    require_parameter("CICS URIMap name", &parms.name)?;
    let csd_group = require_optional_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    let path = require_optional_parameter("CICS URIMap path", &parms.path)?;
    let host = require_optional_parameter("CICS URIMap host", &parms.host)?;
    require_parameter(REGION_LABEL, &parms.region_name)?;
    let scheme = match parms.scheme.as_deref() {
        Some(scheme) if !scheme.trim().is_empty() => validate_choice("scheme", scheme, URIMAP_SCHEMES)?,
        _ => "HTTP".to_string(),
    };
    let status = if parms.enable == Some(false) {
        "DISABLED"
    } else {
        "ENABLED"
    };

    Ok(Attributes::new()
        .with("name", &parms.name)
        .with("csdgroup", csd_group)
        .with("path", path)
        .with("host", host)
        .with("scheme", scheme)
        .with("usage", usage.as_str())
        .with("status", status)
        .with_opt("description", parms.description.as_deref()))
}

async fn post_urimap(session: &Session, parms: &UrimapParms, attributes: Attributes) -> Result<CmciApiResponse> {
    tracing::debug!(
        "Defining {} urimap '{}'",
        attributes.get("usage").unwrap_or_default(),
        parms.name
    );
    let resource = CmciResource::new(CICS_DEFINITION_URIMAP)
        .scope(parms.cics_plex.as_deref(), &parms.region_name);

    CmciRestClient::new(session)?
        .post(&resource, &CmciRequest::Create(attributes))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::methods::test_support::unreachable_session;
    use crate::utils::error::CicsError;

    fn server_parms() -> UrimapParms {
        UrimapParms {
            name: "URI1".to_string(),
            csd_group: Some("GRP1".to_string()),
            path: Some("fake/path".to_string()),
            host: Some("www.example.com".to_string()),
            program_name: Some("FAKEPGM".to_string()),
            region_name: "REGION1".to_string(),
            ..UrimapParms::default()
        }
    }

    #[test]
    fn test_urimap_attributes_defaults() {
        let attributes = urimap_attributes(&server_parms(), UrimapUsage::Server).unwrap();
        assert_eq!(attributes.get("scheme"), Some("HTTP"));
        assert_eq!(attributes.get("status"), Some("ENABLED"));
        assert_eq!(attributes.get("usage"), Some("server"));
        assert_eq!(attributes.get("description"), None);
    }

    #[test]
    fn test_urimap_attributes_disabled_https() {
        let mut parms = server_parms();
        parms.scheme = Some("https".to_string());
        parms.enable = Some(false);
        parms.description = Some("test map".to_string());
        let attributes = urimap_attributes(&parms, UrimapUsage::Pipeline).unwrap();
        assert_eq!(attributes.get("scheme"), Some("HTTPS"));
        assert_eq!(attributes.get("status"), Some("DISABLED"));
        assert_eq!(attributes.get("description"), Some("test map"));
    }

    #[test]
    fn test_urimap_attributes_reject_unknown_scheme() {
        let mut parms = server_parms();
        parms.scheme = Some("ftp".to_string());
        assert!(matches!(
            urimap_attributes(&parms, UrimapUsage::Server),
            Err(CicsError::InvalidConfigValueError { .. })
        ));
    }

    #[tokio::test]
    async fn test_define_program_requires_csd_group() {
        let parms = ProgramParms {
            name: "PGM1".to_string(),
            region_name: "REGION1".to_string(),
            ..ProgramParms::default()
        };
        let err = define_program(&unreachable_session(), &parms).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expect Error: Required parameter 'CICS CSD Group' must not be blank"
        );
    }

    #[tokio::test]
    async fn test_define_transaction_requires_program() {
        let parms = TransactionParms {
            name: "TRN1".to_string(),
            csd_group: Some("GRP1".to_string()),
            region_name: "REGION1".to_string(),
            ..TransactionParms::default()
        };
        let err = define_transaction(&unreachable_session(), &parms).await.unwrap_err();
        assert!(err.to_string().contains("CICS Program name"));
    }

    #[tokio::test]
    async fn test_define_urimap_server_requires_program() {
        let mut parms = server_parms();
        parms.program_name = None;
        let err = define_urimap_server(&unreachable_session(), &parms).await.unwrap_err();
        assert!(err.to_string().contains("CICS URIMap program name"));
    }

    #[tokio::test]
    async fn test_define_urimap_pipeline_requires_pipeline() {
        let err = define_urimap_pipeline(&unreachable_session(), &server_parms())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("CICS URIMap pipeline name"));
    }

    #[tokio::test]
    async fn test_define_urimap_client_rejects_bad_authenticate() {
        let mut parms = server_parms();
        parms.authenticate = Some("DIGEST".to_string());
        let err = define_urimap_client(&unreachable_session(), &parms).await.unwrap_err();
        assert!(matches!(err, CicsError::InvalidConfigValueError { .. }));
    }

    #[tokio::test]
    async fn test_define_webservice_requires_wsbind() {
        let parms = WebServiceParms {
            name: "WS1".to_string(),
            csd_group: "GRP1".to_string(),
            pipeline_name: "PIPE1".to_string(),
            region_name: "REGION1".to_string(),
            ..WebServiceParms::default()
        };
        let err = define_webservice(&unreachable_session(), &parms).await.unwrap_err();
        assert!(err.to_string().contains("CICS WSBind file"));
    }
}
