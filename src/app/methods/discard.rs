use super::{installed_resource, REGION_LABEL};
use crate::core::constants::{CICS_LOCAL_TRANSACTION, CICS_PROGRAM_RESOURCE, CICS_URIMAP};
use crate::core::rest_client::CmciRestClient;
use crate::core::session::Session;
use crate::domain::model::{CmciApiResponse, ProgramParms, TransactionParms, UrimapParms};
use crate::utils::error::Result;
use crate::utils::validation::require_parameter;

pub async fn discard_program(session: &Session, parms: &ProgramParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Program name", &parms.name)?;
    discard_installed(
        session,
        CICS_PROGRAM_RESOURCE,
        "PROGRAM",
        &parms.name,
        &parms.region_name,
        parms.cics_plex.as_deref(),
    )
    .await
}

pub async fn discard_transaction(session: &Session, parms: &TransactionParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Transaction name", &parms.name)?;
    discard_installed(
        session,
        CICS_LOCAL_TRANSACTION,
        "TRANID",
        &parms.name,
        &parms.region_name,
        parms.cics_plex.as_deref(),
    )
    .await
}

pub async fn discard_urimap(session: &Session, parms: &UrimapParms) -> Result<CmciApiResponse> {
    require_parameter("CICS URIMap name", &parms.name)?;
    discard_installed(
        session,
        CICS_URIMAP,
        "NAME",
        &parms.name,
        &parms.region_name,
        parms.cics_plex.as_deref(),
    )
    .await
}

async fn discard_installed(
    session: &Session,
    table: &str,
    key: &str,
    name: &str,
    region_name: &str,
    cics_plex: Option<&str>,
) -> Result<CmciApiResponse> {
    require_parameter(REGION_LABEL, region_name)?;

    tracing::debug!("Discarding {} '{}' from region '{}'", table, name, region_name);
    let resource = installed_resource(table, key, name, cics_plex, region_name);
    CmciRestClient::new(session)?.delete(&resource).await
}
