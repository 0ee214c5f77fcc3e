use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Parameters for program actions. `csd_group` is only needed for
/// definition-level actions (define, delete, install).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramParms {
    pub name: String,
    pub csd_group: Option<String>,
    pub region_name: String,
    pub cics_plex: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParms {
    pub name: String,
    pub program_name: Option<String>,
    pub csd_group: Option<String>,
    pub region_name: String,
    pub cics_plex: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrimapParms {
    pub name: String,
    pub csd_group: Option<String>,
    pub path: Option<String>,
    pub host: Option<String>,
    pub scheme: Option<String>,
    pub program_name: Option<String>,
    pub pipeline_name: Option<String>,
    pub transaction_name: Option<String>,
    pub webservice_name: Option<String>,
    pub description: Option<String>,
    pub tcpipservice: Option<String>,
    pub authenticate: Option<String>,
    pub certificate: Option<String>,
    pub enable: Option<bool>,
    pub region_name: String,
    pub cics_plex: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebServiceParms {
    pub name: String,
    pub csd_group: String,
    pub pipeline_name: String,
    pub wsbind: String,
    pub validation: bool,
    pub description: Option<String>,
    pub region_name: String,
    pub cics_plex: Option<String>,
}

/// Generic lookup of any CMCI resource table, e.g. `CICSProgram`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceParms {
    pub name: String,
    pub criteria: Option<String>,
    pub parameter: Option<String>,
    pub fail_on_no_data: bool,
    pub region_name: String,
    pub cics_plex: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsdGroupParms {
    pub name: String,
    pub csd_list: String,
    pub region_name: String,
    pub cics_plex: Option<String>,
}

/// The `resultsummary` element of every CMCI reply. Values stay strings,
/// exactly as the server sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub api_response1: String,
    pub api_response2: String,
    pub api_response1_alt: String,
    pub api_response2_alt: String,
    pub recordcount: String,
    pub displayed_recordcount: String,
}

impl ResultSummary {
    pub fn is_ok(&self) -> bool {
        self.api_response1 == crate::core::constants::RESPONSE_OK
    }

    pub fn is_no_data(&self) -> bool {
        self.api_response1 == crate::core::constants::RESPONSE_NODATA
    }
}

/// One record returned under `<records>`; `resource` is the element name
/// (e.g. `cicsprogram`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmciRecord {
    pub resource: String,
    pub attributes: BTreeMap<String, String>,
}

impl CmciRecord {
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }
}

/// Diagnostic `<feedback>` entry attached to failed requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmciFeedback {
    pub attributes: BTreeMap<String, String>,
}

impl fmt::Display for CmciFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .attributes
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmciResponse {
    pub resultsummary: ResultSummary,
    pub records: Vec<CmciRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<CmciFeedback>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmciApiResponse {
    pub response: CmciResponse,
}

impl CmciApiResponse {
    pub fn summary(&self) -> &ResultSummary {
        &self.response.resultsummary
    }

    pub fn records(&self) -> &[CmciRecord] {
        &self.response.records
    }
}
