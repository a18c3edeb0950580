/*
[INPUT]:  Terminal, when attached
[OUTPUT]: Wallet private key typed by the user
[POS]:    CLI layer - secret prompts
[UPDATE]: When changing how secrets are collected
*/

use anyhow::{Result, anyhow};
use console::Term;
use dialoguer::{Password, theme::ColorfulTheme};

/// Prompt for the wallet private key; fails when no terminal is attached
pub fn prompt_private_key(env_var: &str) -> Result<String> {
    if !Term::stderr().is_term() {
        return Err(anyhow!(
            "no private key configured; set {env_var} or private_key in the config file"
        ));
    }

    let key = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Wallet private key (hex)")
        .interact()?;
    Ok(key)
}
