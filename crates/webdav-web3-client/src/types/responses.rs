/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Accept RFC 3339 strings or Unix seconds; anything else becomes `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => DateTime::parse_from_rfc3339(&text)
            .ok()
            .map(|time| time.with_timezone(&Utc)),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        _ => None,
    })
}

/// Body of a successful `GET /api/auth/challenge`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeResponse {
    /// The exact string the wallet must sign
    pub message: String,
    #[serde(default)]
    pub nonce: Option<String>,
    #[serde(default, alias = "expiresAt", deserialize_with = "lenient_timestamp")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Body of a successful `POST /api/auth/verify`
///
/// Fields the client does not model are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub token: String,
    #[serde(
        default,
        alias = "expiresAt",
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VerifyResponse {
    /// Interpret `user` as the server's structured user record.
    ///
    /// Returns `None` when `user` is absent or has a different shape.
    pub fn user_info(&self) -> Option<UserInfo> {
        self.user
            .as_ref()
            .and_then(|user| serde_json::from_value(user.clone()).ok())
    }
}

/// User record returned by the verify endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    #[serde(alias = "walletAddress")]
    pub wallet_address: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Error body of the auth endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<i32>,
}

impl ApiErrorResponse {
    /// Parse an error body; anything that is not a JSON object yields an empty record.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Server message, skipping empty strings
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Server uptime in nanoseconds
    #[serde(default)]
    pub uptime: Option<u64>,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }

    pub fn uptime(&self) -> Option<Duration> {
        self.uptime.map(Duration::from_nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_response_minimal() {
        let challenge: ChallengeResponse =
            serde_json::from_str(r#"{"message": "abc123"}"#).unwrap();
        assert_eq!(challenge.message, "abc123");
        assert!(challenge.nonce.is_none());
        assert!(challenge.expires_at.is_none());
    }

    #[test]
    fn test_challenge_response_full() {
        let challenge: ChallengeResponse = serde_json::from_str(
            r#"{"nonce": "n-1", "message": "Sign in: n-1", "expires_at": "2026-01-01T00:05:00Z"}"#,
        )
        .unwrap();
        assert_eq!(challenge.nonce.as_deref(), Some("n-1"));
        assert_eq!(
            challenge.expires_at.unwrap().to_rfc3339(),
            "2026-01-01T00:05:00+00:00"
        );
    }

    #[test]
    fn test_expires_at_tolerates_other_shapes() {
        let challenge: ChallengeResponse =
            serde_json::from_str(r#"{"message": "abc123", "expires_at": 1700000000}"#).unwrap();
        assert_eq!(challenge.expires_at.unwrap().timestamp(), 1_700_000_000);

        let challenge: ChallengeResponse =
            serde_json::from_str(r#"{"message": "abc123", "expires_at": "in five minutes"}"#)
                .unwrap();
        assert!(challenge.expires_at.is_none());

        let response: VerifyResponse =
            serde_json::from_str(r#"{"token": "T", "expiresAt": {"seconds": 300}}"#).unwrap();
        assert_eq!(response.token, "T");
        assert!(response.expires_at.is_none());

        let response: VerifyResponse =
            serde_json::from_str(r#"{"token": "T", "expires_at": null}"#).unwrap();
        assert!(response.expires_at.is_none());
    }

    #[test]
    fn test_verify_response_keeps_unknown_fields() {
        let response: VerifyResponse = serde_json::from_str(
            r#"{"token": "T", "user": "alice", "session": {"id": 7}}"#,
        )
        .unwrap();
        assert_eq!(response.token, "T");
        assert_eq!(response.user, Some(Value::String("alice".to_string())));
        assert_eq!(response.extra.get("session"), Some(&serde_json::json!({"id": 7})));
        assert!(response.user_info().is_none());
    }

    #[test]
    fn test_verify_response_user_info() {
        let response: VerifyResponse = serde_json::from_value(serde_json::json!({
            "token": "T",
            "expires_at": "2026-01-02T00:00:00Z",
            "user": {
                "username": "alice",
                "wallet_address": "0xabc",
                "permissions": ["read", "create"]
            }
        }))
        .unwrap();

        let user = response.user_info().unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.wallet_address, "0xabc");
        assert_eq!(user.permissions, vec!["read", "create"]);
    }

    #[test]
    fn test_api_error_response_parsing() {
        let err = ApiErrorResponse::from_body(
            br#"{"error": "USER_NOT_FOUND", "message": "Wallet address not registered"}"#,
        );
        assert_eq!(err.error.as_deref(), Some("USER_NOT_FOUND"));
        assert_eq!(err.message(), Some("Wallet address not registered"));

        assert_eq!(ApiErrorResponse::from_body(b"not json").message(), None);
        assert_eq!(ApiErrorResponse::from_body(br#"{"message": ""}"#).message(), None);
    }

    #[test]
    fn test_health_response() {
        let health: HealthResponse = serde_json::from_str(
            r#"{"status": "healthy", "uptime": 1500000000, "version": "2.0.0"}"#,
        )
        .unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.uptime(), Some(Duration::from_millis(1500)));
    }
}
