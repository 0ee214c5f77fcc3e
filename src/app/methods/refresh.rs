use super::{installed_resource, REGION_LABEL};
use crate::core::constants::{ACTION_NEWCOPY, CICS_PROGRAM_RESOURCE};
use crate::core::rest_client::CmciRestClient;
use crate::core::session::Session;
use crate::core::xml::CmciRequest;
use crate::domain::model::{CmciApiResponse, ProgramParms};
use crate::utils::error::Result;
use crate::utils::validation::require_parameter;

/// NEWCOPY: load a fresh copy of an installed program.
pub async fn refresh_program(session: &Session, parms: &ProgramParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Program name", &parms.name)?;
    require_parameter(REGION_LABEL, &parms.region_name)?;

    tracing::debug!("Refreshing program '{}'", parms.name);
    let resource = installed_resource(
        CICS_PROGRAM_RESOURCE,
        "PROGRAM",
        &parms.name,
        parms.cics_plex.as_deref(),
        &parms.region_name,
    );

    CmciRestClient::new(session)?
        .put(&resource, &CmciRequest::action(ACTION_NEWCOPY))
        .await
}
