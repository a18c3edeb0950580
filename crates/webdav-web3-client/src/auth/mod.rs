/*
[INPUT]:  Wallet provider and challenge/verify endpoints
[OUTPUT]: Connected wallet address, bearer token, and auth errors
[POS]:    Auth layer - handles Web3 login against the API
[UPDATE]: When auth flow or signature methods change
*/

pub mod evm_wallet;
pub mod handshake;
pub mod wallet;

pub use evm_wallet::{EvmWalletSigner, LocalWalletProvider};
pub use wallet::{MockWalletProvider, MockWalletSigner, WalletProvider, WalletSigner};
