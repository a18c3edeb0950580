/*
[INPUT]:  CLI arguments, YAML configuration file, wallet private key
[OUTPUT]: Authenticated WebDAV operations printed to stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use webdav_web3_cli::config::{DEFAULT_PRIVATE_KEY_ENV, default_config_path};
use webdav_web3_cli::{CliConfig, FileAction, execute, login, run_demo};
use webdav_web3_client::{LocalWalletProvider, WebDavClient};

#[derive(Parser, Debug)]
#[command(name = "webdav-web3", version, about = "WebDAV client with wallet sign-in")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[arg(
        long = "private-key-env",
        value_name = "VAR",
        default_value = DEFAULT_PRIVATE_KEY_ENV,
        global = true
    )]
    private_key_env: String,
    /// Validate configuration and exit
    #[arg(long = "dry-run", global = true)]
    dry_run: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Connect, authenticate, list /, upload and download a test file
    Demo,
    /// List a directory
    Ls {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Upload a file
    Put {
        remote: String,
        #[arg(long, value_name = "LOCAL", conflicts_with = "content")]
        file: Option<PathBuf>,
        #[arg(long, value_name = "TEXT")]
        content: Option<String>,
    },
    /// Download a file as text
    Get {
        remote: String,
        #[arg(long, value_name = "LOCAL")]
        output: Option<PathBuf>,
    },
    /// Delete a file or directory
    Rm { remote: String },
    /// Create a directory
    Mkdir { remote: String },
    /// Check server health
    Health,
    /// Write a configuration file interactively
    Init {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    if let Command::Init { output } = &args.command {
        let output = match output.clone().or_else(default_config_path) {
            Some(path) => path,
            None => return Err(anyhow!("could not determine config directory; pass --output")),
        };
        cli::init::run_init(output)?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    let client_config = config.client_config(args.base_url.as_deref());
    info!(base_url = %client_config.base_url, "configuration loaded");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(ExitCode::SUCCESS);
    }

    let client = WebDavClient::with_config(client_config).context("build client")?;

    // Logged here only; main returns a bare exit code.
    if let Err(err) = run(client, &config, &args).await {
        error!(error = %format!("{err:#}"), "command failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

async fn run(client: WebDavClient, config: &CliConfig, args: &Cli) -> Result<()> {
    let action = match &args.command {
        Command::Health => {
            let health = client.health().await.context("health check")?;
            info!(status = %health.status, version = ?health.version, uptime = ?health.uptime(), "server health");
            println!("{}", health.status);
            return Ok(());
        }
        Command::Demo => None,
        Command::Ls { path } => Some(FileAction::List { path: path.clone() }),
        Command::Put {
            remote,
            file,
            content,
        } => Some(FileAction::Put {
            remote: remote.clone(),
            content: read_upload_content(file.as_ref(), content.as_deref())?,
        }),
        Command::Get { remote, .. } => Some(FileAction::Get {
            remote: remote.clone(),
        }),
        Command::Rm { remote } => Some(FileAction::Remove {
            remote: remote.clone(),
        }),
        Command::Mkdir { remote } => Some(FileAction::Mkdir {
            remote: remote.clone(),
        }),
        Command::Init { .. } => return Ok(()),
    };

    let private_key = match config.private_key(&args.private_key_env) {
        Some(key) => key,
        None => cli::prompt::prompt_private_key(&args.private_key_env)?,
    };
    let provider = LocalWalletProvider::from_private_key(&private_key).context("load wallet")?;
    let mut client = client.with_wallet_provider(Arc::new(provider));

    let Some(action) = action else {
        let report = run_demo(&mut client).await?;
        println!("Connected: {}", report.address);
        println!("Files:\n{}", report.listing);
        println!("File content: {}", report.content);
        return Ok(());
    };

    login(&mut client).await?;
    let output = execute(&client, action).await?;

    match (&args.command, output) {
        (Command::Get { output: Some(path), .. }, Some(content)) => {
            std::fs::write(path, content)
                .with_context(|| format!("write {}", path.display()))?;
        }
        (_, Some(text)) => println!("{text}"),
        (_, None) => {}
    }

    Ok(())
}

fn read_upload_content(file: Option<&PathBuf>, content: Option<&str>) -> Result<Vec<u8>> {
    match (file, content) {
        (Some(path), _) => {
            std::fs::read(path).with_context(|| format!("read {}", path.display()))
        }
        (None, Some(text)) => Ok(text.as_bytes().to_vec()),
        (None, None) => Err(anyhow!("put needs --file or --content")),
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
