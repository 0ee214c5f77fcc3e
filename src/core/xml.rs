//! CMCI request bodies and response envelopes.
//!
//! Requests are small, fixed-shape documents so they are rendered directly;
//! responses are read with a streaming `quick_xml` reader because record
//! elements carry arbitrary, resource-specific attributes.

use crate::core::constants::CSD_PARAMETER;
use crate::domain::model::{CmciApiResponse, CmciFeedback, CmciRecord, CmciResponse, ResultSummary};
use crate::utils::error::{CicsError, Result};
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use std::fmt::Write;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Ordered attribute list; optional values are dropped when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(&'static str, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.0.push((name, value.into()));
        self
    }

    pub fn with_opt(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.with(name, v),
            _ => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn render(&self, out: &mut String) {
        for (name, value) in &self.0 {
            let _ = write!(out, " {}=\"{}\"", name, escape(value.as_str()));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmciRequest {
    /// Create a definition in the CSD.
    Create(Attributes),
    /// Perform a named action, e.g. CSDINSTALL or NEWCOPY.
    Action {
        name: &'static str,
        parameters: Vec<(&'static str, String)>,
    },
    /// Set attributes on installed resources.
    Update(Attributes),
}

impl CmciRequest {
    pub fn action(name: &'static str) -> Self {
        CmciRequest::Action {
            name,
            parameters: Vec::new(),
        }
    }

    pub fn action_with(name: &'static str, parameter: &'static str, value: impl Into<String>) -> Self {
        CmciRequest::Action {
            name,
            parameters: vec![(parameter, value.into())],
        }
    }

    pub fn to_xml(&self) -> String {
        let mut out = String::from(XML_DECLARATION);
        out.push_str("<request>");
        match self {
            CmciRequest::Create(attributes) => {
                let _ = write!(out, "<create><parameter name=\"{}\"/><attributes", CSD_PARAMETER);
                attributes.render(&mut out);
                out.push_str("/></create>");
            }
            CmciRequest::Action { name, parameters } => {
                let _ = write!(out, "<action name=\"{}\"", escape(*name));
                if parameters.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for (parameter, value) in parameters {
                        let _ = write!(
                            out,
                            "<parameter name=\"{}\" value=\"{}\"/>",
                            escape(*parameter),
                            escape(value.as_str())
                        );
                    }
                    out.push_str("</action>");
                }
            }
            CmciRequest::Update(attributes) => {
                out.push_str("<update><attributes");
                attributes.render(&mut out);
                out.push_str("/></update>");
            }
        }
        out.push_str("</request>");
        out
    }
}

/// Parse a CMCI `<response>` document. Fails when the document is not XML
/// or carries no `resultsummary`.
pub fn parse_response(xml: &str) -> Result<CmciApiResponse> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut summary: Option<ResultSummary> = None;
    let mut records = Vec::new();
    let mut errors = Vec::new();
    let mut path: Vec<String> = Vec::new();

    loop {
        match reader.read_event().map_err(CicsError::xml)? {
            Event::Start(ref element) => {
                let name = element_name(element);
                collect(&path, &name, element, &mut summary, &mut records, &mut errors)?;
                path.push(name);
            }
            Event::Empty(ref element) => {
                let name = element_name(element);
                collect(&path, &name, element, &mut summary, &mut records, &mut errors)?;
            }
            Event::End(_) => {
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let resultsummary = summary.ok_or_else(|| CicsError::XmlError {
        message: "response contains no resultsummary".to_string(),
    })?;

    Ok(CmciApiResponse {
        response: CmciResponse {
            resultsummary,
            records,
            errors,
        },
    })
}

fn collect(
    path: &[String],
    name: &str,
    element: &BytesStart<'_>,
    summary: &mut Option<ResultSummary>,
    records: &mut Vec<CmciRecord>,
    errors: &mut Vec<CmciFeedback>,
) -> Result<()> {
    match (path.last().map(String::as_str), name) {
        (Some("response"), "resultsummary") => {
            *summary = Some(summary_from(attributes_of(element)?));
        }
        (Some("records"), _) => records.push(CmciRecord {
            resource: name.to_string(),
            attributes: attributes_of(element)?,
        }),
        (Some("errors"), "feedback") => errors.push(CmciFeedback {
            attributes: attributes_of(element)?,
        }),
        _ => {}
    }
    Ok(())
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

fn attributes_of(element: &BytesStart<'_>) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for attribute in element.attributes() {
        let attribute = attribute.map_err(CicsError::xml)?;
        if attribute.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(CicsError::xml)?.into_owned();
        map.insert(key, value);
    }
    Ok(map)
}

fn summary_from(mut attributes: BTreeMap<String, String>) -> ResultSummary {
    let mut take = |key: &str| attributes.remove(key).unwrap_or_default();
    ResultSummary {
        api_response1: take("api_response1"),
        api_response2: take("api_response2"),
        api_response1_alt: take("api_response1_alt"),
        api_response2_alt: take("api_response2_alt"),
        recordcount: take("recordcount"),
        displayed_recordcount: take("displayed_recordcount"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM_LIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns="http://www.ibm.com/xmlns/prod/CICS/smw2int" version="3.0" connect_version="0560">
  <resultsummary api_response1="1024" api_response2="0" api_response1_alt="OK" api_response2_alt="" recordcount="2" displayed_recordcount="2"/>
  <records>
    <cicsprogram program="PGM1" status="ENABLED" language="COBOL"/>
    <cicsprogram program="PGM&amp;2" status="DISABLED" language="ASSEMBLER"/>
  </records>
</response>"#;

    const INVALID_REGION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns="http://www.ibm.com/xmlns/prod/CICS/smw2int" version="3.0">
  <resultsummary api_response1="1028" api_response2="1361" api_response1_alt="INVALIDPARM" api_response2_alt="SCOPE" recordcount="0" displayed_recordcount="0"/>
  <errors>
    <feedback errorcode="1" eibfn_alt="CREATE" resp_alt="INVREQ"/>
  </errors>
</response>"#;

    #[test]
    fn test_parse_records() {
        let parsed = parse_response(PROGRAM_LIST).unwrap();
        let summary = parsed.summary();
        assert!(summary.is_ok());
        assert_eq!(summary.recordcount, "2");
        assert_eq!(parsed.records().len(), 2);
        assert_eq!(parsed.records()[0].resource, "cicsprogram");
        assert_eq!(parsed.records()[0].get("program"), Some("PGM1"));
        assert_eq!(parsed.records()[1].get("program"), Some("PGM&2"));
        assert!(parsed.response.errors.is_empty());
    }

    #[test]
    fn test_parse_failure_with_feedback() {
        let parsed = parse_response(INVALID_REGION).unwrap();
        assert!(!parsed.summary().is_ok());
        assert_eq!(parsed.summary().api_response1_alt, "INVALIDPARM");
        assert_eq!(parsed.response.errors.len(), 1);
        assert_eq!(
            parsed.response.errors[0].attributes.get("resp_alt").map(String::as_str),
            Some("INVREQ")
        );
    }

    #[test]
    fn test_parse_rejects_non_cmci_documents() {
        assert!(parse_response("<html><body>Unauthorized</body></html>").is_err());
        assert!(parse_response("not xml at all <").is_err());
    }

    #[test]
    fn test_create_request_escapes_values() {
        let body = CmciRequest::Create(
            Attributes::new()
                .with("name", "URI1")
                .with("description", "a < b & \"c\"")
                .with_opt("certificate", None),
        )
        .to_xml();
        assert!(body.starts_with(XML_DECLARATION));
        assert!(body.contains(r#"<create><parameter name="CSD"/><attributes name="URI1" description="a &lt; b &amp; &quot;c&quot;"/></create>"#));
        assert!(!body.contains("certificate"));
    }

    #[test]
    fn test_action_request() {
        assert!(CmciRequest::action("CSDINSTALL")
            .to_xml()
            .ends_with(r#"<request><action name="CSDINSTALL"/></request>"#));
        assert!(CmciRequest::action_with("CSDADD", "TO_CSDLIST", "LIST1")
            .to_xml()
            .contains(r#"<action name="CSDADD"><parameter name="TO_CSDLIST" value="LIST1"/></action>"#));
    }

    #[test]
    fn test_update_request() {
        let body = CmciRequest::Update(Attributes::new().with("enablestatus", "ENABLED")).to_xml();
        assert!(body.contains(r#"<update><attributes enablestatus="ENABLED"/></update>"#));
    }
}
