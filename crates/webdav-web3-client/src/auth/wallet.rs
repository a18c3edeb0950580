/*
[INPUT]:  Message to sign and wallet account access
[OUTPUT]: Signature string and controlling account address
[POS]:    Auth layer - wallet integration abstraction
[UPDATE]: When adding new wallet types or changing signature format
*/

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::http::{ClientError, Result};

/// Trait for wallet signing operations
///
/// The trait is async to support hardware wallets and external signers.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Resolve the address of the account this signer controls
    async fn get_address(&self) -> Result<String>;

    /// Sign a message and return the signature
    ///
    /// For EVM: Returns hex-encoded signature (0x...)
    async fn sign_message(&self, message: &str) -> Result<String>;
}

/// Trait for the wallet capability the client connects to
///
/// Mirrors an injected browser wallet: the user authorizes account access,
/// then the provider hands out a signer for the controlling account.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet for account access
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// Get a signer for the controlling account
    async fn get_signer(&self) -> Result<Box<dyn WalletSigner>>;
}

/// Mock wallet signer for testing
///
/// Signs by prefixing the message, so tests can check exactly what was signed.
#[derive(Debug, Clone)]
pub struct MockWalletSigner {
    address: String,
    signature_prefix: String,
}

impl MockWalletSigner {
    /// Create a new mock signer; signatures are `"{signature_prefix}{message}"`
    pub fn new(address: &str, signature_prefix: &str) -> Self {
        Self {
            address: address.to_string(),
            signature_prefix: signature_prefix.to_string(),
        }
    }

    /// The signature this mock produces for `message`
    pub fn signature_for(&self, message: &str) -> String {
        format!("{}{}", self.signature_prefix, message)
    }
}

#[async_trait]
impl WalletSigner for MockWalletSigner {
    async fn get_address(&self) -> Result<String> {
        Ok(self.address.clone())
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        Ok(self.signature_for(message))
    }
}

/// Mock wallet provider for testing
#[derive(Debug, Clone)]
pub struct MockWalletProvider {
    signer: MockWalletSigner,
    reject: bool,
    account_requests: Arc<AtomicUsize>,
}

impl MockWalletProvider {
    pub fn new(signer: MockWalletSigner) -> Self {
        Self {
            signer,
            reject: false,
            account_requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A provider whose user declines the account request
    pub fn rejecting(signer: MockWalletSigner) -> Self {
        Self {
            reject: true,
            ..Self::new(signer)
        }
    }

    /// Number of `request_accounts` calls seen so far
    pub fn account_requests(&self) -> usize {
        self.account_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        self.account_requests.fetch_add(1, Ordering::SeqCst);
        if self.reject {
            return Err(ClientError::Wallet("User rejected the request".to_string()));
        }
        Ok(vec![self.signer.address.clone()])
    }

    async fn get_signer(&self) -> Result<Box<dyn WalletSigner>> {
        Ok(Box::new(self.signer.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_signer() {
        let signer = MockWalletSigner::new("0x1234567890abcdef", "sig:");

        assert_eq!(signer.get_address().await.unwrap(), "0x1234567890abcdef");

        let signature = signer.sign_message("test message").await.unwrap();
        assert_eq!(signature, "sig:test message");
    }

    #[tokio::test]
    async fn test_mock_provider_rejects() {
        let provider = MockWalletProvider::rejecting(MockWalletSigner::new("0xabc", "sig:"));

        let err = provider.request_accounts().await.unwrap_err();
        assert!(matches!(err, ClientError::Wallet(_)));
        assert_eq!(provider.account_requests(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_hands_out_signer() {
        let provider = MockWalletProvider::new(MockWalletSigner::new("0xabc", "sig:"));

        assert_eq!(provider.request_accounts().await.unwrap(), vec!["0xabc"]);
        let signer = provider.get_signer().await.unwrap();
        assert_eq!(signer.get_address().await.unwrap(), "0xabc");
    }
}
