/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public WebDAV Web3 client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    EvmWalletSigner,
    LocalWalletProvider,
    MockWalletProvider,
    MockWalletSigner,
    WalletProvider,
    WalletSigner,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    ClientError,
    DEFAULT_BASE_URL,
    Result,
    WebDavClient,
};

// Re-export all types
pub use types::*;
