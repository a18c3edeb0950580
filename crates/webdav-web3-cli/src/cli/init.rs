/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When CliConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};
use std::path::PathBuf;

use webdav_web3_cli::config::{CliConfig, DEFAULT_PRIVATE_KEY_ENV};
use webdav_web3_client::{DEFAULT_BASE_URL, EvmWalletSigner};

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Welcome to WebDAV Web3 Init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a client configuration.").dim()
    );

    let theme = ColorfulTheme::default();

    let base_url: String = Input::with_theme(&theme)
        .with_prompt("Server URL")
        .default(DEFAULT_BASE_URL.to_string())
        .interact_text()?;

    let timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Request timeout in seconds (0 = transport default)")
        .default(0)
        .interact_text()?;

    println!("\n{}", style("--- Wallet ---").bold());
    let store_key = Confirm::with_theme(&theme)
        .with_prompt(format!(
            "Store the private key in the file? (otherwise set {DEFAULT_PRIVATE_KEY_ENV})"
        ))
        .default(false)
        .interact()?;

    let private_key = if store_key {
        let key = Password::with_theme(&theme)
            .with_prompt("Wallet private key (hex)")
            .interact()?;
        let signer = EvmWalletSigner::new(&key).context("invalid private key")?;
        println!("Wallet address: {}", style(signer.address()).cyan());
        Some(key)
    } else {
        None
    };

    let config = CliConfig {
        base_url: Some(base_url),
        private_key,
        timeout_secs: (timeout_secs > 0).then_some(timeout_secs),
    };
    config.validate()?;
    config.write_to(&output)?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );

    Ok(())
}
