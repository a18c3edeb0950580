/*
[INPUT]:  HTTP configuration (base URL, timeouts) and session credentials
[OUTPUT]: Configured reqwest client and the authenticated request chokepoint
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Body, Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::{WalletProvider, WalletSigner};
use crate::http::{ClientError, Result};
use crate::types::ApiErrorResponse;

/// Default API origin
pub const DEFAULT_BASE_URL: &str = "http://localhost:6065";

/// HTTP client configuration
///
/// Timeouts are unset by default so the transport defaults apply.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Client session for a WebDAV server with wallet-based login
///
/// Holds the connected wallet and the bearer token. `connect_wallet` and
/// `authenticate` take `&mut self`; callers that share a client across tasks
/// must serialize those calls against file operations themselves.
pub struct WebDavClient {
    http_client: Client,
    base_url: String,
    provider: Option<Arc<dyn WalletProvider>>,
    pub(crate) signer: Option<Box<dyn WalletSigner>>,
    pub(crate) wallet_address: Option<String>,
    pub(crate) auth_token: Option<String>,
}

impl WebDavClient {
    /// Create a new client against the default base URL
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client against `base_url`
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::with_base_url(base_url))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            provider: None,
            signer: None,
            wallet_address: None,
            auth_token: None,
        })
    }

    /// Attach the wallet provider used by `connect_wallet`
    pub fn with_wallet_provider(mut self, provider: Arc<dyn WalletProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// API origin, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn wallet_address(&self) -> Option<&str> {
        self.wallet_address.as_deref()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.wallet_address.is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    pub(crate) fn provider(&self) -> Option<Arc<dyn WalletProvider>> {
        self.provider.clone()
    }

    /// Build full URL by appending `path` to the base URL
    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Build request builder for endpoints that need no token
    pub(crate) fn public_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send an auth endpoint request and decode its JSON body.
    ///
    /// Rejections are mapped through `reject` with the server's `message`,
    /// or `default_message` when the body carries none.
    pub(crate) async fn send_json<T, F>(
        &self,
        builder: RequestBuilder,
        reject: F,
        default_message: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce(String) -> ClientError,
    {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await?;
            let message = ApiErrorResponse::from_body(&body)
                .message()
                .unwrap_or(default_message)
                .to_string();
            warn!(status = status.as_u16(), message = %message, "auth endpoint rejected request");
            return Err(reject(message));
        }

        decode_json(response).await
    }

    /// Send an authenticated request.
    ///
    /// Every file operation goes through here. Fails with `NotAuthenticated`
    /// before touching the network when no token is held. `extra_headers` are
    /// merged over `Authorization`, so a caller-supplied `Authorization` wins.
    /// Non-success statuses become `RequestFailed` without reading the body;
    /// on success the response is returned unconsumed.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Body>,
        extra_headers: HeaderMap,
    ) -> Result<Response> {
        let token = self
            .auth_token
            .as_deref()
            .ok_or(ClientError::NotAuthenticated)?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer(token)?);
        headers.extend(extra_headers);

        let url = self.url(path)?;
        debug!(method = %method, path, "sending authenticated request");

        let mut builder = self.http_client.request(method.clone(), url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(method = %method, path, status = status.as_u16(), "request failed");
            return Err(ClientError::request_failed(status));
        }

        Ok(response)
    }
}

/// Read a success body and decode it; malformed JSON is a `Serialization` error
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn bearer(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| ClientError::Config(format!("Invalid bearer token: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

impl fmt::Debug for WebDavClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDavClient")
            .field("base_url", &self.base_url)
            .field("has_provider", &self.provider.is_some())
            .field("wallet_address", &self.wallet_address)
            .field("authenticated", &self.auth_token.is_some())
            .finish()
    }
}
