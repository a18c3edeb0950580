/*
[INPUT]:  Configured WebDavClient and a requested action
[OUTPUT]: Command output (listing, file content, status) or error
[POS]:    Command layer - login flow and file verbs
[UPDATE]: When adding subcommands or changing the demo flow
*/

use anyhow::{Context, Result};
use tracing::info;
use webdav_web3_client::{VerifyResponse, WebDavClient};

/// Remote path used by the demo upload/download
pub const DEMO_PATH: &str = "/test.txt";
/// Content written by the demo
pub const DEMO_CONTENT: &str = "Hello, Web3!";

/// A single file verb against the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    List { path: String },
    Put { remote: String, content: Vec<u8> },
    Get { remote: String },
    Remove { remote: String },
    Mkdir { remote: String },
}

/// Summary of a demo run
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub address: String,
    pub auth: VerifyResponse,
    pub listing: String,
    pub content: String,
}

/// Connect the wallet and authenticate
pub async fn login(client: &mut WebDavClient) -> Result<VerifyResponse> {
    let address = client.connect_wallet().await.context("connect wallet")?;
    info!(address = %address, "connected");

    let auth = client.authenticate().await.context("authenticate")?;
    match auth.user_info() {
        Some(user) => info!(
            username = %user.username,
            permissions = ?user.permissions,
            "authenticated"
        ),
        None => info!(user = ?auth.user, "authenticated"),
    }

    Ok(auth)
}

/// Run one file verb; returns text to print, if any
pub async fn execute(client: &WebDavClient, action: FileAction) -> Result<Option<String>> {
    match action {
        FileAction::List { path } => {
            let response = client
                .list_directory(&path)
                .await
                .with_context(|| format!("list {path}"))?;
            let body = response.text().await.context("read listing")?;
            Ok(Some(body))
        }
        FileAction::Put { remote, content } => {
            let size = content.len();
            let response = client
                .upload_file(&remote, content)
                .await
                .with_context(|| format!("upload {remote}"))?;
            info!(path = %remote, bytes = size, status = response.status().as_u16(), "file uploaded");
            Ok(None)
        }
        FileAction::Get { remote } => {
            let content = client
                .download_file(&remote)
                .await
                .with_context(|| format!("download {remote}"))?;
            Ok(Some(content))
        }
        FileAction::Remove { remote } => {
            let response = client
                .delete_file(&remote)
                .await
                .with_context(|| format!("delete {remote}"))?;
            info!(path = %remote, status = response.status().as_u16(), "file deleted");
            Ok(None)
        }
        FileAction::Mkdir { remote } => {
            let response = client
                .create_directory(&remote)
                .await
                .with_context(|| format!("create directory {remote}"))?;
            info!(path = %remote, status = response.status().as_u16(), "directory created");
            Ok(None)
        }
    }
}

/// Connect, authenticate, list `/`, upload a file and read it back
pub async fn run_demo(client: &mut WebDavClient) -> Result<DemoReport> {
    let auth = login(client).await?;
    let address = client
        .wallet_address()
        .unwrap_or_default()
        .to_string();

    let listing = execute(client, FileAction::List { path: "/".to_string() })
        .await?
        .unwrap_or_default();
    info!(bytes = listing.len(), "listed /");

    execute(
        client,
        FileAction::Put {
            remote: DEMO_PATH.to_string(),
            content: DEMO_CONTENT.as_bytes().to_vec(),
        },
    )
    .await?;

    let content = execute(
        client,
        FileAction::Get {
            remote: DEMO_PATH.to_string(),
        },
    )
    .await?
    .unwrap_or_default();
    info!(content = %content, "file content");

    Ok(DemoReport {
        address,
        auth,
        listing,
        content,
    })
}
