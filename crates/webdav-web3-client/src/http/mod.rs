/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST and WebDAV communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod webdav;

pub use error::{ClientError, Result};

pub use client::{ClientConfig, DEFAULT_BASE_URL, WebDavClient};
