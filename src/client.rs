use reqwest::{header, Method};
use serde_json::Value;
use url::Url;

use crate::api::{
    aeo::AttachmentOrderApi, cis::CisApi, dps::DpsApi, employee::EmployeeApi,
    employer::EmployerApi, health_check::HealthCheckApi, holiday_scheme::HolidaySchemeApi,
    jobs::JobsApi, nominal_code::NominalCodeApi, pay_code::PayCodeApi,
    pay_instruction::PayInstructionApi, pay_run::PayRunApi, pay_schedule::PayScheduleApi,
    pension::PensionApi, query::QueryApi, report::ReportApi, rti::RtiApi, tagging::TaggingApi,
};
use crate::endpoints;
use crate::error::{Error, Result};
use crate::oauth::{self, Credentials};

/// This is the client that is used for interacting with the PayRun.io API.
/// It signs every outgoing request with the consumer credentials and decodes
/// responses into generic JSON values.
#[derive(Clone, Debug)]
pub struct Client {
    credentials: Credentials,
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client bound to the production API, or the sandbox when
    /// `test_mode` is true.
    pub fn new(credentials: Credentials, test_mode: bool) -> Result<Self> {
        Ok(Self::with_base_url(
            credentials,
            endpoints::base_url(test_mode)?,
        ))
    }

    /// Creates a client bound to an arbitrary base URL. Intended for tests
    /// and self-hosted deployments.
    #[must_use]
    pub fn with_base_url(credentials: Credentials, base_url: Url) -> Self {
        Self {
            credentials,
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn build_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = endpoints::join(&self.base_url, path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Build a request object with the signature and accept headers. The
    /// signature covers the method, URL and query string, so the URL must be
    /// final before this point.
    fn build_request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let authorization = oauth::authorization_header(&self.credentials, method.as_str(), &url);
        self.http
            .request(method, url)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, authorization)
    }

    /// Perform a signed `GET` request. Query parameters are appended as
    /// given; callers omit unset parameters entirely.
    #[instrument(skip(self))]
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        trace!(?path, ?query, "making GET request");
        let url = self.build_url(path, query)?;
        let response = self.build_request(Method::GET, url).send().await?;
        Self::handle_response(response).await
    }

    /// Perform a signed `POST` request with a JSON body.
    #[instrument(skip(self, body))]
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        trace!(?path, "making POST request");
        let url = self.build_url(path, &[])?;
        let response = self.build_request(Method::POST, url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Perform a signed `PUT` request with a JSON body.
    #[instrument(skip(self, body))]
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        trace!(?path, "making PUT request");
        let url = self.build_url(path, &[])?;
        let response = self.build_request(Method::PUT, url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Perform a signed `PATCH` request with a JSON body.
    #[instrument(skip(self, body))]
    pub async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        trace!(?path, "making PATCH request");
        let url = self.build_url(path, &[])?;
        let response = self
            .build_request(Method::PATCH, url)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Perform a signed `DELETE` request. Returns the decoded confirmation
    /// payload, or `Value::Null` when the API responds with an empty body.
    #[instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Value> {
        trace!(?path, "making DELETE request");
        let url = self.build_url(path, &[])?;
        let response = self.build_request(Method::DELETE, url).send().await?;
        Self::handle_response(response).await
    }

    #[instrument(skip(response))]
    async fn handle_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let url = response.url().to_string();
        debug!(%status, %url, "received response");

        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Api {
                status,
                url,
                body: text,
            });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            error!("failed to decode response body: {e}");
            Error::Decode(e, Some(text))
        })
    }

    /// Access the employers API
    #[must_use]
    pub fn employers(&self) -> EmployerApi {
        EmployerApi { client: self }
    }

    /// Access the employees API
    #[must_use]
    pub fn employees(&self) -> EmployeeApi {
        EmployeeApi { client: self }
    }

    /// Access the pay codes API
    #[must_use]
    pub fn pay_codes(&self) -> PayCodeApi {
        PayCodeApi { client: self }
    }

    /// Access the pay schedules API
    #[must_use]
    pub fn pay_schedules(&self) -> PayScheduleApi {
        PayScheduleApi { client: self }
    }

    /// Access the pay runs API
    #[must_use]
    pub fn pay_runs(&self) -> PayRunApi {
        PayRunApi { client: self }
    }

    /// Access the pay instructions API
    #[must_use]
    pub fn pay_instructions(&self) -> PayInstructionApi {
        PayInstructionApi { client: self }
    }

    /// Access the pensions API
    #[must_use]
    pub fn pensions(&self) -> PensionApi {
        PensionApi { client: self }
    }

    /// Access the holiday schemes API
    #[must_use]
    pub fn holiday_schemes(&self) -> HolidaySchemeApi {
        HolidaySchemeApi { client: self }
    }

    /// Access the attachment of earnings orders API
    #[must_use]
    pub fn attachment_orders(&self) -> AttachmentOrderApi {
        AttachmentOrderApi { client: self }
    }

    /// Access the CIS API
    #[must_use]
    pub fn cis(&self) -> CisApi {
        CisApi { client: self }
    }

    /// Access the RTI transactions API
    #[must_use]
    pub fn rti(&self) -> RtiApi {
        RtiApi { client: self }
    }

    /// Access the DPS messages API
    #[must_use]
    pub fn dps(&self) -> DpsApi {
        DpsApi { client: self }
    }

    /// Access the nominal codes API
    #[must_use]
    pub fn nominal_codes(&self) -> NominalCodeApi {
        NominalCodeApi { client: self }
    }

    /// Access the reports API
    #[must_use]
    pub fn reports(&self) -> ReportApi {
        ReportApi { client: self }
    }

    /// Access the query API
    #[must_use]
    pub fn query(&self) -> QueryApi {
        QueryApi { client: self }
    }

    /// Access the batch jobs API
    #[must_use]
    pub fn jobs(&self) -> JobsApi {
        JobsApi { client: self }
    }

    /// Access the tagging API
    #[must_use]
    pub fn tagging(&self) -> TaggingApi {
        TaggingApi { client: self }
    }

    /// Access the service health check
    #[must_use]
    pub fn health_check(&self) -> HealthCheckApi {
        HealthCheckApi { client: self }
    }
}
