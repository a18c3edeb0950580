/*
[INPUT]:  Remote paths, file content and bearer token
[OUTPUT]: Raw WebDAV responses and downloaded text
[POS]:    HTTP layer - file endpoints (require bearer auth)
[UPDATE]: When adding new WebDAV verbs or changing header sets
*/

// ### File Endpoints

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Body, Method, Response};
use tracing::debug;

use crate::http::client::decode_json;
use crate::http::{ClientError, Result, WebDavClient};
use crate::types::HealthResponse;

/// Path listed by `list_root`
pub const ROOT_PATH: &str = "/";

const HEALTH_ENDPOINT: &str = "/health";

fn webdav_method(name: &'static str) -> Result<Method> {
    Method::from_bytes(name.as_bytes())
        .map_err(|e| ClientError::Config(format!("Invalid HTTP method {name}: {e}")))
}

impl WebDavClient {
    /// List a collection
    ///
    /// PROPFIND {path} with `Depth: 1`. The multi-status body is left unread.
    pub async fn list_directory(&self, path: &str) -> Result<Response> {
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("depth"), HeaderValue::from_static("1"));
        self.request(webdav_method("PROPFIND")?, path, None, headers)
            .await
    }

    /// List the root collection; same request as `list_directory("/")`
    pub async fn list_root(&self) -> Result<Response> {
        self.list_directory(ROOT_PATH).await
    }

    /// Upload a file
    ///
    /// PUT {path}. No content type is set; the server decides how to store it.
    pub async fn upload_file(&self, path: &str, content: impl Into<Body>) -> Result<Response> {
        self.request(Method::PUT, path, Some(content.into()), HeaderMap::new())
            .await
    }

    /// Download a file as text
    ///
    /// GET {path}. The body is always decoded as text, so binary content is
    /// not preserved. Decoding follows the `Content-Type` charset (UTF-8 when
    /// none is given); invalid sequences are replaced.
    pub async fn download_file(&self, path: &str) -> Result<String> {
        let response = self
            .request(Method::GET, path, None, HeaderMap::new())
            .await?;
        let content = response.text().await?;
        debug!(path, bytes = content.len(), "downloaded file");
        Ok(content)
    }

    /// Delete a file or collection
    ///
    /// DELETE {path}
    pub async fn delete_file(&self, path: &str) -> Result<Response> {
        self.request(Method::DELETE, path, None, HeaderMap::new())
            .await
    }

    /// Create a collection
    ///
    /// MKCOL {path}
    pub async fn create_directory(&self, path: &str) -> Result<Response> {
        self.request(webdav_method("MKCOL")?, path, None, HeaderMap::new())
            .await
    }

    /// Query server health
    ///
    /// GET /health (no auth required)
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .public_request(Method::GET, HEALTH_ENDPOINT)?
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::request_failed(status));
        }
        decode_json(response).await
    }
}
