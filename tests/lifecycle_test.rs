mod common;

use anyhow::Result;
use cics_cmci::app::methods::{define_program, delete_program, get_resource};
use cics_cmci::domain::model::{ProgramParms, ResourceParms};
use common::*;
use httpmock::prelude::*;

/// define, then delete, then look the definition up again: the CSD must
/// no longer hold it.
#[tokio::test]
async fn test_define_then_delete_leaves_no_definition() -> Result<()> {
    let server = MockServer::start_async().await;
    let session = session_for(&server);
    let program = ProgramParms {
        name: "LIFEPGM".to_string(),
        csd_group: Some(CSD_GROUP.to_string()),
        region_name: REGION.to_string(),
        cics_plex: None,
    };
    let lookup = ResourceParms {
        name: "CICSDefinitionProgram".to_string(),
        criteria: Some("(NAME=LIFEPGM)".to_string()),
        parameter: Some("CSDGROUP(GRP1)".to_string()),
        region_name: REGION.to_string(),
        ..ResourceParms::default()
    };

    let define = server
        .mock_async(|when, then| {
            when.method(POST).path(definition_path("CICSDefinitionProgram"));
            then.status(200).body(ok_envelope(""));
        })
        .await;
    let mut defined = server
        .mock_async(|when, then| {
            when.method(GET).path(definition_path("CICSDefinitionProgram"));
            then.status(200)
                .body(ok_envelope(r#"<cicsdefinitionprogram name="LIFEPGM" csdgroup="GRP1"/>"#));
        })
        .await;

    define_program(&session, &program).await?;
    define.assert_async().await;
    assert_eq!(get_resource(&session, &lookup).await?.records().len(), 1);

    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path(definition_path("CICSDefinitionProgram"))
                .query_param("CRITERIA", "(NAME=LIFEPGM)")
                .query_param("PARAMETER", "CSDGROUP(GRP1)");
            then.status(200).body(ok_envelope(""));
        })
        .await;
    let response = delete_program(&session, &program).await?;
    delete.assert_async().await;
    assert_eq!(response.summary().api_response1, "1024");

    defined.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(definition_path("CICSDefinitionProgram"));
            then.status(200).body(nodata_envelope());
        })
        .await;

    let after = get_resource(&session, &lookup).await?;
    assert!(after.summary().is_no_data());
    assert!(after.records().is_empty());
    Ok(())
}
