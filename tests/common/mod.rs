#![allow(dead_code)]

use cics_cmci::core::session::{Protocol, Session};
use httpmock::MockServer;

pub const REGION: &str = "REGION1";
pub const CSD_GROUP: &str = "GRP1";

/// `user:pass` as sent by basic authentication.
pub const BASIC_AUTH: &str = "Basic dXNlcjpwYXNz";

pub fn session_for(server: &MockServer) -> Session {
    Session::new(server.host(), server.port())
        .with_credentials("user", "pass")
        .with_protocol(Protocol::Http)
}

pub fn definition_path(table: &str) -> String {
    format!("/CICSSystemManagement/{}/{}", table, REGION)
}

pub fn ok_envelope(records: &str) -> String {
    let count = records.matches("/>").count();
    let records = if records.is_empty() {
        String::new()
    } else {
        format!("<records>{}</records>", records)
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns="http://www.ibm.com/xmlns/prod/CICS/smw2int" version="3.0">
  <resultsummary api_response1="1024" api_response2="0" api_response1_alt="OK" api_response2_alt="" recordcount="{count}" displayed_recordcount="{count}"/>
  {records}
</response>"#
    )
}

pub fn nodata_envelope() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns="http://www.ibm.com/xmlns/prod/CICS/smw2int" version="3.0">
  <resultsummary api_response1="1027" api_response2="0" api_response1_alt="NODATA" api_response2_alt="" recordcount="0" displayed_recordcount="0"/>
</response>"#
        .to_string()
}

pub fn invalidparm_envelope() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns="http://www.ibm.com/xmlns/prod/CICS/smw2int" version="3.0">
  <resultsummary api_response1="1028" api_response2="1361" api_response1_alt="INVALIDPARM" api_response2_alt="SCOPE" recordcount="0" displayed_recordcount="0"/>
</response>"#
        .to_string()
}

pub fn feedback_envelope() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns="http://www.ibm.com/xmlns/prod/CICS/smw2int" version="3.0">
  <resultsummary api_response1="1041" api_response2="0" api_response1_alt="INVALIDDATA" api_response2_alt="" recordcount="0" displayed_recordcount="0"/>
  <errors>
    <feedback errorcode="1" eibfn_alt="CREATE" resp_alt="INVREQ" resp2="2"/>
  </errors>
</response>"#
        .to_string()
}
