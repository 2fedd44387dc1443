//! Main FollowMee API client implementation.

use crate::api::{DevicesApi, TracksApi};
use followmee_core::{Envelope, FollowMeeError, Result};
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// The FollowMee service hostname
const DEFAULT_HOSTNAME: &str = "www.followmee.com";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Main FollowMee API client
#[derive(Clone)]
pub struct FollowMeeClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: String,
    username: String,
    base_url: String,
}

impl FollowMeeClient {
    /// Create a new client with the given credentials using default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>, username: impl Into<String>) -> Self {
        FollowMeeClientBuilder::new(api_key, username).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(
        api_key: impl Into<String>,
        username: impl Into<String>,
    ) -> FollowMeeClientBuilder {
        FollowMeeClientBuilder::new(api_key, username)
    }

    /// Access device listing endpoints
    #[must_use]
    pub fn devices(&self) -> DevicesApi<'_> {
        DevicesApi::new(self)
    }

    /// Access location query endpoints
    #[must_use]
    pub fn tracks(&self) -> TracksApi<'_> {
        TracksApi::new(self)
    }

    /// Perform a GET request against an endpoint path.
    ///
    /// The account credentials are injected into the query automatically.
    pub async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Envelope> {
        self.execute(Method::GET, endpoint, params, None::<&serde_json::Value>)
            .await
    }

    /// Perform a POST request with an optional JSON body
    pub async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Envelope> {
        self.execute(Method::POST, endpoint, params, body).await
    }

    /// Issue one request and normalize the outcome into an [`Envelope`]
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Envelope> {
        let url = self.build_url(endpoint, params);
        debug!(method = %method, url = %url, "sending request");

        let mut request = self.inner.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!(method = %method, url = %url, success = false, error = %e, "request failed");
            FollowMeeError::Transport {
                detail: e.to_string(),
            }
        })?;

        self.handle_response(&method, &url, response).await
    }

    /// Check the status and decode the body into an envelope
    async fn handle_response(
        &self,
        method: &Method,
        url: &str,
        response: reqwest::Response,
    ) -> Result<Envelope> {
        let status = response.status();
        let code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();

        if !status.is_success() {
            error!(
                method = %method,
                url = %url,
                success = false,
                status = code,
                message = %reason,
                "request rejected"
            );
            return Err(FollowMeeError::Status { code, reason });
        }

        let body = response.text().await.map_err(|e| {
            error!(method = %method, url = %url, success = false, error = %e, "request failed");
            FollowMeeError::Transport {
                detail: e.to_string(),
            }
        })?;

        let data = serde_json::from_str(&body).map_err(|e| {
            error!(
                method = %method,
                url = %url,
                success = false,
                status = code,
                error = %e,
                "undecodable response body"
            );
            FollowMeeError::Decode {
                detail: e.to_string(),
            }
        })?;

        debug!(
            method = %method,
            url = %url,
            success = true,
            status = code,
            message = %reason,
            "request completed"
        );
        Ok(Envelope::new(code, reason, data))
    }

    /// Build a URL with query parameters (including the account credentials)
    fn build_url(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);

        url.push_str("?key=");
        url.push_str(&urlencoding::encode(&self.inner.api_key));
        url.push_str("&username=");
        url.push_str(&urlencoding::encode(&self.inner.username));

        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }
}

/// Builder for configuring a [`FollowMeeClient`]
pub struct FollowMeeClientBuilder {
    api_key: String,
    username: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    verify_tls: bool,
}

impl FollowMeeClientBuilder {
    /// Create a new builder with the given credentials
    #[must_use]
    pub fn new(api_key: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            username: username.into(),
            base_url: format!("https://{DEFAULT_HOSTNAME}/api/"),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("followmee-rs/{}", env!("CARGO_PKG_VERSION")),
            verify_tls: true,
        }
    }

    /// Point the client at a different service hostname
    #[must_use]
    pub fn hostname(mut self, hostname: impl AsRef<str>) -> Self {
        self.base_url = format!("https://{}/api/", hostname.as_ref());
        self
    }

    /// Override the full base URL, trailing slash included (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Accept invalid TLS certificates. Verification stays on unless this
    /// is explicitly set to `true`.
    #[must_use]
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.verify_tls = !accept;
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> FollowMeeClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .danger_accept_invalid_certs(!self.verify_tls)
            .build()
            .expect("Failed to build HTTP client");

        FollowMeeClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                username: self.username,
                base_url: self.base_url,
            }),
        }
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_injects_credentials_and_encodes_params() {
        let client = FollowMeeClient::new("k y", "user@example.com");
        let url = client.build_url("tracks.aspx", &[("deviceid", "5,9".to_string())]);
        assert_eq!(
            url,
            "https://www.followmee.com/api/tracks.aspx?key=k+y&username=user%40example.com&deviceid=5%2C9"
        );
    }

    #[test]
    fn hostname_overrides_service_host() {
        let client = FollowMeeClient::builder("k", "u")
            .hostname("tracking.example.org")
            .build();
        let url = client.build_url("info.aspx", &[]);
        assert!(url.starts_with("https://tracking.example.org/api/info.aspx?key=k&username=u"));
    }
}
