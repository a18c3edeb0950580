/*
[INPUT]:  EVM private key (hex string)
[OUTPUT]: Signed messages and wallet address for EVM chains
[POS]:    Auth layer - local EVM wallet implementation
[UPDATE]: When signing logic or EVM address formatting changes
*/

use std::str::FromStr;

use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use crate::auth::{WalletProvider, WalletSigner};
use crate::http::{ClientError, Result};

/// Signer for EVM-compatible wallets backed by a local private key
///
/// Messages are signed with EIP-191 `personal_sign`, which is what the
/// server recovers the address from.
#[derive(Clone)]
pub struct EvmWalletSigner {
    signer: PrivateKeySigner,
    address: String,
}

impl EvmWalletSigner {
    /// Create a new EVM wallet signer from a hex-encoded private key
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings.
    pub fn new(private_key_hex: &str) -> Result<Self> {
        let private_key_hex = private_key_hex.trim();
        let private_key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let signer = PrivateKeySigner::from_str(private_key_hex)
            .map_err(|e| ClientError::Config(format!("Invalid EVM private key: {}", e)))?;

        let address = signer.address().to_checksum(None);

        Ok(Self { signer, address })
    }

    /// Checksummed address of the key
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl std::fmt::Debug for EvmWalletSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmWalletSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WalletSigner for EvmWalletSigner {
    async fn get_address(&self) -> Result<String> {
        Ok(self.address.clone())
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        let signature = self
            .signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| ClientError::Wallet(format!("Failed to sign EVM message: {}", e)))?;

        // alloy's Signature as_bytes() returns [r, s, v]
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}

/// Wallet provider exposing a single local EVM key
#[derive(Debug, Clone)]
pub struct LocalWalletProvider {
    signer: EvmWalletSigner,
}

impl LocalWalletProvider {
    pub fn new(signer: EvmWalletSigner) -> Self {
        Self { signer }
    }

    pub fn from_private_key(private_key_hex: &str) -> Result<Self> {
        Ok(Self::new(EvmWalletSigner::new(private_key_hex)?))
    }
}

#[async_trait]
impl WalletProvider for LocalWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        Ok(vec![self.signer.address.clone()])
    }

    async fn get_signer(&self) -> Result<Box<dyn WalletSigner>> {
        Ok(Box::new(self.signer.clone()))
    }
}
