use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::{Credentials, SiteConfig};
use crate::errors::ClientError;

const INVALID_CREDENTIALS_MESSAGE: &str =
    "Invalid credentials: the site rejected the given username or password";

/// Raw response surface handed back to callers.
///
/// The client does not model response bodies; callers inspect the
/// status and body themselves. [`ApiResponse::json`] is a convenience
/// parser only.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Detect a rejected-credentials response.
    ///
    /// The site reports bad credentials as a 200-status HTML error page
    /// rather than a proper 401, so the status code cannot be trusted.
    /// Normal API responses are never HTML: a `text/html` content type
    /// with a `401 - Unauthorized` marker in the body means the
    /// username or password was rejected.
    pub fn auth_failure(&self) -> Option<String> {
        let content_type = self
            .headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());

        if content_type != Some("text/html") {
            return None;
        }

        debug!("Site returned text/html, checking for errors");

        if self.body.contains("401 - Unauthorized") {
            return Some(INVALID_CREDENTIALS_MESSAGE.to_string());
        }

        None
    }
}

/// Client for one site's Kudu management API.
///
/// Holds the site base URL, the basic-auth credentials, and a shared
/// HTTP client. Every operation issues a single stateless request (two
/// for webjob upload) and returns the raw response.
pub struct KuduClient {
    site_url: String,
    credentials: Credentials,
    client: Client,
}

impl KuduClient {
    pub fn new(site: &SiteConfig) -> Self {
        Self::with_credentials(site.site_url.clone(), site.credentials.clone())
    }

    pub fn with_credentials(site_url: impl Into<String>, credentials: Credentials) -> Self {
        // No timeout - the transport defaults apply
        let client = Client::new();

        Self {
            site_url: site_url.into(),
            credentials,
            client,
        }
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub(crate) fn vfs_url(&self, target: &str) -> String {
        format!("{}/api/vfs/{}", self.site_url.trim_end_matches('/'), target)
    }

    pub(crate) fn webjob_url(&self, name: &str) -> String {
        format!(
            "{}/api/triggeredwebjobs/{}",
            self.site_url.trim_end_matches('/'),
            name
        )
    }

    /// Start a request with the site credentials attached.
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
    }

    /// Send a prepared request and collect the response.
    ///
    /// Transport failures reject with [`ClientError::Transport`]. A
    /// response that sniffs as a rejected-credentials page rejects with
    /// [`ClientError::InvalidCredentials`]. Every other response,
    /// whatever its HTTP status, resolves with the raw [`ApiResponse`].
    pub(crate) async fn dispatch(
        &self,
        builder: RequestBuilder,
        url: &str,
    ) -> Result<ApiResponse, ClientError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::transport(url, &e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::transport(url, &e))?;

        let api_response = ApiResponse {
            status,
            headers,
            body,
        };

        if let Some(message) = api_response.auth_failure() {
            warn!("{}: {}", url, message);
            return Err(ClientError::InvalidCredentials {
                url: url.to_string(),
            });
        }

        Ok(api_response)
    }

    /// Open a local source file for streaming, rejecting before any
    /// network call if it is missing or unreadable.
    pub(crate) async fn open_source(&self, source: &Path) -> Result<tokio::fs::File, ClientError> {
        tokio::fs::File::open(source)
            .await
            .map_err(|e| ClientError::SourceFile {
                path: source.display().to_string(),
                reason: e.to_string(),
            })
    }
}

impl Clone for KuduClient {
    fn clone(&self) -> Self {
        Self {
            site_url: self.site_url.clone(),
            credentials: self.credentials.clone(),
            client: self.client.clone(),
        }
    }
}
