use super::{csd_definition, CSD_GROUP_LABEL, REGION_LABEL};
use crate::core::constants::{
    CICS_DEFINITION_PROGRAM, CICS_DEFINITION_TRANSACTION, CICS_DEFINITION_URIMAP,
    CICS_DEFINITION_WEBSERVICE,
};
use crate::core::rest_client::CmciRestClient;
use crate::core::session::Session;
use crate::domain::model::{CmciApiResponse, ProgramParms, TransactionParms, UrimapParms, WebServiceParms};
use crate::utils::error::Result;
use crate::utils::validation::{require_optional_parameter, require_parameter};

pub async fn delete_program(session: &Session, parms: &ProgramParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Program name", &parms.name)?;
    let csd_group = require_optional_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    delete_definition(
        session,
        CICS_DEFINITION_PROGRAM,
        &parms.name,
        csd_group,
        &parms.region_name,
        parms.cics_plex.as_deref(),
    )
    .await
}

pub async fn delete_transaction(session: &Session, parms: &TransactionParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Transaction name", &parms.name)?;
    let csd_group = require_optional_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    delete_definition(
        session,
        CICS_DEFINITION_TRANSACTION,
        &parms.name,
        csd_group,
        &parms.region_name,
        parms.cics_plex.as_deref(),
    )
    .await
}

pub async fn delete_urimap(session: &Session, parms: &UrimapParms) -> Result<CmciApiResponse> {
    require_parameter("CICS URIMap name", &parms.name)?;
    let csd_group = require_optional_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    delete_definition(
        session,
        CICS_DEFINITION_URIMAP,
        &parms.name,
        csd_group,
        &parms.region_name,
        parms.cics_plex.as_deref(),
    )
    .await
}

pub async fn delete_webservice(session: &Session, parms: &WebServiceParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Web Service name", &parms.name)?;
    require_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    delete_definition(
        session,
        CICS_DEFINITION_WEBSERVICE,
        &parms.name,
        &parms.csd_group,
        &parms.region_name,
        parms.cics_plex.as_deref(),
    )
    .await
}

async fn delete_definition(
    session: &Session,
    table: &str,
    name: &str,
    csd_group: &str,
    region_name: &str,
    cics_plex: Option<&str>,
) -> Result<CmciApiResponse> {
    require_parameter(REGION_LABEL, region_name)?;

    tracing::debug!("Deleting {} '{}' from CSD group '{}'", table, name, csd_group);
    let resource = csd_definition(table, name, csd_group, cics_plex, region_name);
    CmciRestClient::new(session)?.delete(&resource).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::methods::test_support::unreachable_session;

    #[tokio::test]
    async fn test_delete_program_requires_region() {
        let parms = ProgramParms {
            name: "PGM1".to_string(),
            csd_group: Some("GRP1".to_string()),
            ..ProgramParms::default()
        };
        let err = delete_program(&unreachable_session(), &parms).await.unwrap_err();
        assert!(err.to_string().contains("CICS Region name"));
    }

    #[tokio::test]
    async fn test_delete_urimap_requires_csd_group() {
        let parms = UrimapParms {
            name: "URI1".to_string(),
            region_name: "REGION1".to_string(),
            ..UrimapParms::default()
        };
        let err = delete_urimap(&unreachable_session(), &parms).await.unwrap_err();
        assert!(err.to_string().contains("CICS CSD Group"));
    }
}
