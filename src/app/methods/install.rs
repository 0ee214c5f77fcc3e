use super::{csd_definition, CSD_GROUP_LABEL, REGION_LABEL};
use crate::core::constants::{
    ACTION_CSD_INSTALL, CICS_DEFINITION_PROGRAM, CICS_DEFINITION_TRANSACTION,
    CICS_DEFINITION_URIMAP, CICS_DEFINITION_WEBSERVICE,
};
use crate::core::rest_client::CmciRestClient;
use crate::core::session::Session;
use crate::core::xml::CmciRequest;
use crate::domain::model::{CmciApiResponse, ProgramParms, TransactionParms, UrimapParms, WebServiceParms};
use crate::utils::error::Result;
use crate::utils::validation::{require_optional_parameter, require_parameter};

pub async fn install_program(session: &Session, parms: &ProgramParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Program name", &parms.name)?;
    let csd_group = require_optional_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    install_definition(
        session,
        CICS_DEFINITION_PROGRAM,
        &parms.name,
        csd_group,
        &parms.region_name,
        parms.cics_plex.as_deref(),
    )
    .await
}

pub async fn install_transaction(session: &Session, parms: &TransactionParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Transaction name", &parms.name)?;
    let csd_group = require_optional_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    install_definition(
        session,
        CICS_DEFINITION_TRANSACTION,
        &parms.name,
        csd_group,
        &parms.region_name,
        parms.cics_plex.as_deref(),
    )
    .await
}

pub async fn install_urimap(session: &Session, parms: &UrimapParms) -> Result<CmciApiResponse> {
    require_parameter("CICS URIMap name", &parms.name)?;
    let csd_group = require_optional_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    install_definition(
        session,
        CICS_DEFINITION_URIMAP,
        &parms.name,
        csd_group,
        &parms.region_name,
        parms.cics_plex.as_deref(),
    )
    .await
}

pub async fn install_webservice(session: &Session, parms: &WebServiceParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Web Service name", &parms.name)?;
    require_parameter(CSD_GROUP_LABEL, &parms.csd_group)?;
    install_definition(
        session,
        CICS_DEFINITION_WEBSERVICE,
        &parms.name,
        &parms.csd_group,
        &parms.region_name,
        parms.cics_plex.as_deref(),
    )
    .await
}

async fn install_definition(
    session: &Session,
    table: &str,
    name: &str,
    csd_group: &str,
    region_name: &str,
    cics_plex: Option<&str>,
) -> Result<CmciApiResponse> {
    require_parameter(REGION_LABEL, region_name)?;

    tracing::debug!("Installing {} '{}' from CSD group '{}'", table, name, csd_group);
    let resource = csd_definition(table, name, csd_group, cics_plex, region_name);
    CmciRestClient::new(session)?
        .put(&resource, &CmciRequest::action(ACTION_CSD_INSTALL))
        .await
}
