use super::REGION_LABEL;
use crate::core::rest_client::{CmciResource, CmciRestClient};
use crate::core::session::Session;
use crate::domain::model::{CmciApiResponse, ResourceParms};
use crate::utils::error::Result;
use crate::utils::validation::require_parameter;

/// Read records from any CMCI resource table. Without a region the request
/// is scoped to the whole CICSplex.
pub async fn get_resource(session: &Session, parms: &ResourceParms) -> Result<CmciApiResponse> {
    require_parameter("CICS Resource name", &parms.name)?;
    let has_plex = parms
        .cics_plex
        .as_deref()
        .is_some_and(|plex| !plex.trim().is_empty());
    if !has_plex {
        require_parameter(REGION_LABEL, &parms.region_name)?;
    }

    let mut resource =
        CmciResource::new(parms.name.as_str()).scope(parms.cics_plex.as_deref(), &parms.region_name);
    if let Some(criteria) = &parms.criteria {
        resource = resource.criteria(criteria.as_str());
    }
    if let Some(parameter) = &parms.parameter {
        resource = resource.parameter(parameter.as_str());
    }

    tracing::debug!("Reading {} records", parms.name);
    let client = CmciRestClient::new(session)?;
    if parms.fail_on_no_data {
        client.get(&resource).await
    } else {
        client.get_allow_no_data(&resource).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::methods::test_support::unreachable_session;

    #[tokio::test]
    async fn test_get_resource_requires_region_or_plex() {
        let parms = ResourceParms {
            name: "CICSProgram".to_string(),
            ..ResourceParms::default()
        };
        let err = get_resource(&unreachable_session(), &parms).await.unwrap_err();
        assert!(err.to_string().contains("CICS Region name"));
    }

    #[tokio::test]
    async fn test_get_resource_requires_name() {
        let parms = ResourceParms {
            region_name: "REGION1".to_string(),
            ..ResourceParms::default()
        };
        let err = get_resource(&unreachable_session(), &parms).await.unwrap_err();
        assert!(err.to_string().contains("CICS Resource name"));
    }
}
