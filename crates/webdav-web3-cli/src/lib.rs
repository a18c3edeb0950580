/*
[INPUT]:  Public API exports for webdav-web3-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod commands;
pub mod config;

// Re-export main types for convenience
pub use commands::{DemoReport, FileAction, execute, login, run_demo};
pub use config::CliConfig;
