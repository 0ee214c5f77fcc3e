use crate::core::constants::{CICS_SYSTEM_MANAGEMENT, CRITERIA, PARAMETER};
use crate::core::session::Session;
use crate::core::xml::{parse_response, CmciRequest};
use crate::domain::model::CmciApiResponse;
use crate::utils::error::{CicsError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use url::Url;

/// Address of a CMCI resource table plus its filters:
/// `/CICSSystemManagement/{resource}/{cicsPlex}/{region}?CRITERIA=…&PARAMETER=…`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmciResource {
    resource: String,
    cics_plex: Option<String>,
    region_name: Option<String>,
    criteria: Option<String>,
    parameter: Option<String>,
}

impl CmciResource {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            ..Self::default()
        }
    }

    pub fn scope(mut self, cics_plex: Option<&str>, region_name: &str) -> Self {
        self.cics_plex = non_blank(cics_plex);
        self.region_name = non_blank(Some(region_name));
        self
    }

    pub fn criteria(mut self, criteria: impl Into<String>) -> Self {
        let criteria: String = criteria.into();
        self.criteria = non_blank(Some(&criteria));
        self
    }

    pub fn parameter(mut self, parameter: impl Into<String>) -> Self {
        let parameter: String = parameter.into();
        self.parameter = non_blank(Some(&parameter));
        self
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        [Some(CICS_SYSTEM_MANAGEMENT), Some(self.resource.as_str())]
            .into_iter()
            .chain([self.cics_plex.as_deref(), self.region_name.as_deref()])
            .flatten()
    }

    /// CMCI syntax characters are kept verbatim; `Url::set_query` only
    /// encodes what a query cannot carry (spaces, quotes).
    pub fn query(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(criteria) = &self.criteria {
            parts.push(format!("{}={}", CRITERIA, criteria));
        }
        if let Some(parameter) = &self.parameter {
            parts.push(format!("{}={}", PARAMETER, parameter));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("&"))
        }
    }

    /// Each path segment is percent-encoded, so names such as `CICS#1`
    /// stay one segment instead of opening a fragment.
    pub fn to_url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .clear()
            .extend(self.segments());
        url.set_query(self.query().as_deref());
        Ok(url)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// HTTP client bound to one session. Every call expects a CMCI envelope
/// back and turns any non-OK result into [`CicsError::CmciError`].
#[derive(Debug, Clone)]
pub struct CmciRestClient {
    http_client: Client,
    session: Session,
    base_url: Url,
}

impl CmciRestClient {
    pub fn new(session: &Session) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(concat!("cics-cmci/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(!session.reject_unauthorized);
        if let Some(timeout) = session.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: session.base_url()?,
            session: session.clone(),
        })
    }

    pub async fn get(&self, resource: &CmciResource) -> Result<CmciApiResponse> {
        self.request(Method::GET, resource, None, false).await
    }

    /// Like [`get`](Self::get) but a NODATA reply is an empty result.
    pub async fn get_allow_no_data(&self, resource: &CmciResource) -> Result<CmciApiResponse> {
        self.request(Method::GET, resource, None, true).await
    }

    pub async fn post(&self, resource: &CmciResource, body: &CmciRequest) -> Result<CmciApiResponse> {
        self.request(Method::POST, resource, Some(body), false).await
    }

    pub async fn put(&self, resource: &CmciResource, body: &CmciRequest) -> Result<CmciApiResponse> {
        self.request(Method::PUT, resource, Some(body), false).await
    }

    pub async fn delete(&self, resource: &CmciResource) -> Result<CmciApiResponse> {
        self.request(Method::DELETE, resource, None, false).await
    }

    async fn request(
        &self,
        method: Method,
        resource: &CmciResource,
        body: Option<&CmciRequest>,
        allow_no_data: bool,
    ) -> Result<CmciApiResponse> {
        let url = resource.to_url(&self.base_url)?;
        tracing::debug!("{} {}", method, url);

        let mut request = self.http_client.request(method, url);
        if let Some(user) = &self.session.user {
            request = request.basic_auth(user, self.session.password.as_ref());
        }
        if let Some(body) = body {
            let xml = body.to_xml();
            tracing::debug!("Request body: {}", xml);
            request = request.header(CONTENT_TYPE, "application/xml").body(xml);
        }

        let response = request.send().await?;
        self.handle_response(response, allow_no_data).await
    }

    async fn handle_response(&self, response: Response, allow_no_data: bool) -> Result<CmciApiResponse> {
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("CMCI response status: {}", status);

        let parsed = match parse_response(&text) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(CicsError::HttpStatusError {
                    status: status.as_u16(),
                    body: text,
                });
            }
            Err(e) => return Err(e),
        };

        let summary = parsed.summary();
        tracing::debug!(
            "CMCI result: api_response1={} api_response2={} recordcount={}",
            summary.api_response1,
            summary.api_response2,
            summary.recordcount
        );

        if summary.is_ok() || (allow_no_data && summary.is_no_data()) {
            Ok(parsed)
        } else {
            Err(CicsError::CmciError {
                summary: parsed.response.resultsummary,
                feedback: parsed.response.errors,
            })
        }
    }
}
