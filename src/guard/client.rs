//! Authenticated request executor: one reqwest wrapper that attaches bearer
//! headers, parses JSON bodies on every status, and folds any non-2xx answer
//! into a single failure variant.

use crate::guard::Error;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{info_span, warn, Instrument};
use url::Url;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Header set for an API call: JSON content type always, bearer auth only
/// when a token is actually present. Never emits a placeholder value.
#[must_use]
pub fn auth_headers(token: Option<&SecretString>) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        match HeaderValue::from_str(&format!("Bearer {}", token.expose_secret())) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                warn!("access token is not a valid header value, sending unauthenticated");
            }
        }
    }

    headers
}

fn normalize_base_url(url: &str) -> Result<String, Error> {
    let url = Url::parse(url).map_err(|err| Error::InvalidUrl(err.to_string()))?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| Error::InvalidUrl("no host specified".to_string()))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(Error::InvalidUrl(format!("unsupported scheme {scheme}"))),
        },
    };

    Ok(format!("{scheme}://{host}:{port}"))
}

/// HTTP client bound to the backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    /// Returns an error if `base_url` cannot be parsed, has no host, or uses
    /// an unsupported scheme.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = normalize_base_url(base_url)?;
        let http = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issue an authenticated call and return the parsed JSON body, if any.
    ///
    /// The body is parsed regardless of status code; a body that is empty or
    /// not JSON simply becomes `None`. A 2xx status yields `Ok`, anything
    /// else `Error::RequestFailed` carrying the serialized error body when
    /// one parsed, otherwise the canonical status reason.
    ///
    /// # Errors
    /// Returns an error on transport failure or any non-2xx response.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&SecretString>,
    ) -> Result<Option<Value>, Error> {
        let url = self.endpoint_url(path);

        let span = info_span!(
            "api.request",
            http.method = %method,
            url = %url
        );
        let response = self
            .http
            .request(method, &url)
            .headers(auth_headers(token))
            .send()
            .instrument(span)
            .await?;

        let status = response.status();

        let body = response
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok());

        if !status.is_success() {
            let message = body.as_ref().map_or_else(
                || status.canonical_reason().unwrap_or("unknown status").to_string(),
                Value::to_string,
            );

            return Err(Error::RequestFailed { status, message });
        }

        Ok(body)
    }

    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn get(
        &self,
        path: &str,
        token: Option<&SecretString>,
    ) -> Result<Option<Value>, Error> {
        self.request(Method::GET, path, token).await
    }

    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn post(
        &self,
        path: &str,
        token: Option<&SecretString>,
    ) -> Result<Option<Value>, Error> {
        self.request(Method::POST, path, token).await
    }
}
