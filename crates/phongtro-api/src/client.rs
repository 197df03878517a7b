use crate::dto::ApiEnvelope;
use crate::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client for the marketplace backend.
///
/// One instance per configured backend; handles bearer auth, the response
/// envelope, and error mapping. All calls are strictly request/response;
/// the client never pipelines.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    access_token: String,
    verbose: bool,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(Error::Config("backend base URL is empty".to_string()));
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url,
            access_token: access_token.into(),
            verbose: false,
        })
    }

    /// Trace request lines to stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn trace(&self, method: &str, url: &str) {
        if self.verbose {
            eprintln!("> {} {}", method, url);
        }
    }

    pub(crate) fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        self.trace("GET", &url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()?;
        Self::unwrap_envelope(response)
    }

    pub(crate) fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        self.trace("POST", &url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()?;
        Self::unwrap_envelope(response)
    }

    /// POST whose envelope may carry no data (transition endpoints).
    pub(crate) fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        self.trace("POST", &url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()?;
        let _ = Self::check_envelope::<serde_json::Value>(response)?;
        Ok(())
    }

    /// POST without a body (cancel endpoints).
    pub(crate) fn post_empty(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        self.trace("POST", &url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .send()?;
        let _ = Self::check_envelope::<serde_json::Value>(response)?;
        Ok(())
    }

    /// GET returning raw bytes plus the `Content-Disposition` header value.
    pub(crate) fn get_bytes(&self, path: &str) -> Result<(Vec<u8>, Option<String>)> {
        let url = self.url(path);
        self.trace("GET", &url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()?;

        let status = response.status();
        let disposition = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Self::status_error(status.as_u16(), &body));
        }

        let bytes = response.bytes()?.to_vec();
        Ok((bytes, disposition))
    }

    /// Decode the envelope and require data.
    fn unwrap_envelope<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T> {
        let envelope = Self::check_envelope::<T>(response)?;
        envelope.data.ok_or(Error::MissingData)
    }

    /// Decode the envelope, mapping HTTP and `success == false` failures,
    /// preserving the server message for the UI.
    fn check_envelope<T: DeserializeOwned>(
        response: reqwest::blocking::Response,
    ) -> Result<ApiEnvelope<T>> {
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(Self::status_error(status.as_u16(), &body));
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&body)?;
        if !envelope.success {
            return Err(Error::Api(
                envelope
                    .message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            ));
        }
        Ok(envelope)
    }

    fn status_error(status: u16, body: &str) -> Error {
        // Failure bodies usually still carry the envelope with a message.
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
            .ok()
            .and_then(|env| env.message)
            .unwrap_or_else(|| body.trim().to_string());
        Error::Status { status, message }
    }
}
