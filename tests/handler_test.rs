mod common;

use anyhow::Result;
use cics_cmci::config::cli::{
    CsdGroupListArgs, DefineCommand, GetCommand, ProgramDefinitionArgs, RemoveFromListCommand,
    ResourceArgs,
};
use cics_cmci::core::runner::render_success;
use cics_cmci::{Command, CommandRunner, ConnectionSettings};
use common::*;
use httpmock::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn profile_file(server: &MockServer) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
default_profile = "mock"

[profiles.mock]
host = "{}"
port = {}
user = "user"
password = "pass"
protocol = "http"
region_name = "REGION1"
"#,
        server.host(),
        server.port()
    )?;
    Ok(file)
}

#[tokio::test]
async fn test_define_handler_uses_profile_session_and_arguments() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/CICSSystemManagement/CICSDefinitionProgram/REGION1")
                .header("authorization", BASIC_AUTH)
                .body_contains(r#"name="PGM1""#)
                .body_contains(r#"csdgroup="GRP1""#);
            then.status(200).body(ok_envelope(""));
        })
        .await;

    let file = profile_file(&server)?;
    let settings = ConnectionSettings {
        profile_file: Some(file.path().to_path_buf()),
        ..ConnectionSettings::default()
    };
    let context = settings.resolve()?;
    assert_eq!(context.session.hostname, server.host());
    assert_eq!(context.session.port, server.port());

    let command = Command::Define(DefineCommand::Program(ProgramDefinitionArgs {
        program_name: "PGM1".to_string(),
        csd_group: "GRP1".to_string(),
    }));
    let response = CommandRunner::new(command.into_handler())
        .run(&context.session, &context)
        .await?;

    mock.assert_async().await;
    assert_eq!(response.message, "The program 'PGM1' was defined successfully.");
    assert_eq!(response.response.summary().api_response1, "1024");
    Ok(())
}

#[tokio::test]
async fn test_region_flag_overrides_profile_region() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/CICSSystemManagement/CICSCSDGroupInList/OTHER")
                .query_param("CRITERIA", "(LIST=LIST1) AND (GROUP=GRP1)");
            then.status(200).body(ok_envelope(""));
        })
        .await;

    let file = profile_file(&server)?;
    let settings = ConnectionSettings {
        region_name: Some("OTHER".to_string()),
        profile_file: Some(file.path().to_path_buf()),
        ..ConnectionSettings::default()
    };
    let context = settings.resolve()?;

    let command = Command::RemoveFromList(RemoveFromListCommand::CsdGroup(CsdGroupListArgs {
        name: "GRP1".to_string(),
        csd_list: "LIST1".to_string(),
    }));
    let response = CommandRunner::new(command.into_handler())
        .run(&context.session, &context)
        .await?;

    mock.assert_async().await;
    assert!(response.message.contains("successfully"));
    Ok(())
}

#[tokio::test]
async fn test_get_handler_renders_records() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/CICSSystemManagement/CICSProgram/REGION1");
            then.status(200)
                .body(ok_envelope(r#"<cicsprogram program="PGM1" status="ENABLED"/>"#));
        })
        .await;

    let file = profile_file(&server)?;
    let context = ConnectionSettings {
        profile_file: Some(file.path().to_path_buf()),
        ..ConnectionSettings::default()
    }
    .resolve()?;

    let command = Command::Get(GetCommand::Resource(ResourceArgs {
        resource_name: "CICSProgram".to_string(),
        criteria: None,
        parameter: None,
        fail_on_no_data: false,
    }));
    let response = CommandRunner::new(command.into_handler())
        .run(&context.session, &context)
        .await?;

    let text = render_success(&response, false)?;
    assert!(text.contains("1 record(s) found"));
    assert!(text.contains("cicsprogram:\n  program: PGM1\n  status: ENABLED"));

    let json: serde_json::Value = serde_json::from_str(&render_success(&response, true)?)?;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["response"]["records"][0]["attributes"]["program"], "PGM1");
    Ok(())
}
