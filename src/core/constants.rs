//! Names and codes of the CMCI REST API.

/// Root path segment of every CMCI resource URI.
pub const CICS_SYSTEM_MANAGEMENT: &str = "CICSSystemManagement";

pub const CICS_DEFINITION_PROGRAM: &str = "CICSDefinitionProgram";
pub const CICS_DEFINITION_TRANSACTION: &str = "CICSDefinitionTransaction";
pub const CICS_DEFINITION_URIMAP: &str = "CICSDefinitionURIMap";
pub const CICS_DEFINITION_WEBSERVICE: &str = "CICSDefinitionWebService";
pub const CICS_PROGRAM_RESOURCE: &str = "CICSProgram";
pub const CICS_LOCAL_TRANSACTION: &str = "CICSLocalTransaction";
pub const CICS_URIMAP: &str = "CICSURIMap";
pub const CICS_CSDGROUP: &str = "CICSCSDGroup";
pub const CICS_CSDGROUP_IN_LIST: &str = "CICSCSDGroupInList";

pub const CRITERIA: &str = "CRITERIA";
pub const PARAMETER: &str = "PARAMETER";

/// `<parameter name="CSD"/>` on create requests targets the CSD.
pub const CSD_PARAMETER: &str = "CSD";

pub const ACTION_CSD_INSTALL: &str = "CSDINSTALL";
pub const ACTION_CSD_ADD: &str = "CSDADD";
pub const ACTION_CSD_REMOVE: &str = "CSDREMOVE";
pub const ACTION_NEWCOPY: &str = "NEWCOPY";
pub const TO_CSDLIST: &str = "TO_CSDLIST";

pub const RESPONSE_OK: &str = "1024";
pub const RESPONSE_NODATA: &str = "1027";
pub const RESPONSE_INVALIDPARM: &str = "1028";

pub const DEFAULT_PORT: u16 = 1490;

const RESPONSE_NAMES: &[(&str, &str)] = &[
    (RESPONSE_OK, "OK"),
    (RESPONSE_NODATA, "NODATA"),
    (RESPONSE_INVALIDPARM, "INVALIDPARM"),
    ("1034", "NOTAVAILABLE"),
    ("1038", "TABLEERROR"),
    ("1041", "INVALIDDATA"),
];

/// Symbolic name for an `api_response1` code, used when the server omits
/// `api_response1_alt`.
pub fn response_name(code: &str) -> Option<&'static str> {
    RESPONSE_NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}
