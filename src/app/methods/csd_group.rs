use super::{CSD_GROUP_LABEL, REGION_LABEL};
use crate::core::constants::{
    ACTION_CSD_ADD, ACTION_CSD_REMOVE, CICS_CSDGROUP, CICS_CSDGROUP_IN_LIST, TO_CSDLIST,
};
use crate::core::rest_client::{CmciResource, CmciRestClient};
use crate::core::session::Session;
use crate::core::xml::CmciRequest;
use crate::domain::model::{CmciApiResponse, CsdGroupParms};
use crate::utils::error::Result;
use crate::utils::validation::require_parameter;

const CSD_LIST_LABEL: &str = "CICS CSD List";

pub async fn add_csd_group_to_list(session: &Session, parms: &CsdGroupParms) -> Result<CmciApiResponse> {
    validate(parms)?;

    tracing::debug!("Adding CSD group '{}' to list '{}'", parms.name, parms.csd_list);
    let resource = CmciResource::new(CICS_CSDGROUP)
        .scope(parms.cics_plex.as_deref(), &parms.region_name)
        .criteria(format!("(GROUP={})", parms.name));
    let body = CmciRequest::action_with(ACTION_CSD_ADD, TO_CSDLIST, parms.csd_list.as_str());

    CmciRestClient::new(session)?.put(&resource, &body).await
}

pub async fn remove_csd_group_from_list(session: &Session, parms: &CsdGroupParms) -> Result<CmciApiResponse> {
    validate(parms)?;

    tracing::debug!("Removing CSD group '{}' from list '{}'", parms.name, parms.csd_list);
    let resource = CmciResource::new(CICS_CSDGROUP_IN_LIST)
        .scope(parms.cics_plex.as_deref(), &parms.region_name)
        .criteria(format!("(LIST={}) AND (GROUP={})", parms.csd_list, parms.name));

    CmciRestClient::new(session)?
        .put(&resource, &CmciRequest::action(ACTION_CSD_REMOVE))
        .await
}

fn validate(parms: &CsdGroupParms) -> Result<()> {
    require_parameter(CSD_GROUP_LABEL, &parms.name)?;
    require_parameter(CSD_LIST_LABEL, &parms.csd_list)?;
    require_parameter(REGION_LABEL, &parms.region_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::methods::test_support::unreachable_session;

    #[tokio::test]
    async fn test_add_to_list_requires_list() {
        let parms = CsdGroupParms {
            name: "GRP1".to_string(),
            region_name: "REGION1".to_string(),
            ..CsdGroupParms::default()
        };
        let err = add_csd_group_to_list(&unreachable_session(), &parms).await.unwrap_err();
        assert!(err.to_string().contains("CICS CSD List"));
    }
}
