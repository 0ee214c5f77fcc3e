use super::{installed_resource, REGION_LABEL};
use crate::core::constants::CICS_URIMAP;
use crate::core::rest_client::CmciRestClient;
use crate::core::session::Session;
use crate::core::xml::{Attributes, CmciRequest};
use crate::domain::model::{CmciApiResponse, UrimapParms};
use crate::utils::error::Result;
use crate::utils::validation::require_parameter;

pub async fn enable_urimap(session: &Session, parms: &UrimapParms) -> Result<CmciApiResponse> {
    set_urimap_status(session, parms, "ENABLED").await
}

pub async fn disable_urimap(session: &Session, parms: &UrimapParms) -> Result<CmciApiResponse> {
    set_urimap_status(session, parms, "DISABLED").await
}

async fn set_urimap_status(session: &Session, parms: &UrimapParms, status: &str) -> Result<CmciApiResponse> {
    require_parameter("CICS URIMap name", &parms.name)?;
    require_parameter(REGION_LABEL, &parms.region_name)?;

    tracing::debug!("Setting urimap '{}' to {}", parms.name, status);
    let resource = installed_resource(
        CICS_URIMAP,
        "NAME",
        &parms.name,
        parms.cics_plex.as_deref(),
        &parms.region_name,
    );
    let body = CmciRequest::Update(Attributes::new().with("enablestatus", status));

    CmciRestClient::new(session)?.put(&resource, &body).await
}
