/*
[INPUT]:  Wallet provider, signer and HTTP client
[OUTPUT]: Connected address and authenticated session (bearer token)
[POS]:    Auth layer - orchestrates complete authentication flow
[UPDATE]: When auth endpoints or flow steps change
*/

use reqwest::Method;
use tracing::{debug, info};

use crate::http::error::{DEFAULT_CHALLENGE_ERROR, DEFAULT_VERIFY_ERROR};
use crate::http::{ClientError, Result, WebDavClient};
use crate::types::{ChallengeResponse, VerifyRequest, VerifyResponse};

const CHALLENGE_ENDPOINT: &str = "/api/auth/challenge";
const VERIFY_ENDPOINT: &str = "/api/auth/verify";

impl WebDavClient {
    /// Connect the injected wallet provider
    ///
    /// Requests account access, takes a signer for the controlling account
    /// and stores both the signer and its address. Provider errors are
    /// returned as-is.
    pub async fn connect_wallet(&mut self) -> Result<String> {
        let provider = self.provider().ok_or(ClientError::ProviderUnavailable)?;

        let accounts = provider.request_accounts().await?;
        debug!(accounts = accounts.len(), "wallet granted account access");

        let signer = provider.get_signer().await?;
        let address = signer.get_address().await?;

        self.signer = Some(signer);
        self.wallet_address = Some(address.clone());
        info!(address = %address, "wallet connected");

        Ok(address)
    }

    /// Step 1: Get a challenge for `address`
    ///
    /// GET /api/auth/challenge?address={address}
    pub async fn get_challenge(&self, address: &str) -> Result<ChallengeResponse> {
        let builder = self
            .public_request(Method::GET, CHALLENGE_ENDPOINT)?
            .query(&[("address", address)]);
        self.send_json(
            builder,
            |message| ClientError::ChallengeFailed { message },
            DEFAULT_CHALLENGE_ERROR,
        )
        .await
    }

    /// Step 2: Submit the signed challenge
    ///
    /// POST /api/auth/verify
    pub async fn verify_signature(&self, address: &str, signature: &str) -> Result<VerifyResponse> {
        let builder = self
            .public_request(Method::POST, VERIFY_ENDPOINT)?
            .json(&VerifyRequest::new(address, signature));
        self.send_json(
            builder,
            |message| ClientError::VerificationFailed { message },
            DEFAULT_VERIFY_ERROR,
        )
        .await
    }

    /// Complete authentication flow
    ///
    /// 1. Get challenge for the connected address
    /// 2. Sign the challenge message with the connected signer
    /// 3. Verify signature to get the bearer token
    /// 4. Store the token
    ///
    /// The whole verify body is returned so callers can read `user`.
    pub async fn authenticate(&mut self) -> Result<VerifyResponse> {
        let address = self
            .wallet_address
            .clone()
            .ok_or(ClientError::NotConnected)?;
        let signer = self.signer.as_ref().ok_or(ClientError::NotConnected)?;

        let challenge = self.get_challenge(&address).await?;
        debug!(address = %address, nonce = ?challenge.nonce, "challenge received");

        let signature = signer.sign_message(&challenge.message).await?;

        let response = self.verify_signature(&address, &signature).await?;

        self.auth_token = Some(response.token.clone());
        info!(address = %address, "authenticated");

        Ok(response)
    }
}
