/*
[INPUT]:  Auth handshake parameters
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/verify`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub address: String,
    pub signature: String,
}

impl VerifyRequest {
    pub fn new(address: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            signature: signature.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_request_shape() {
        let request = VerifyRequest::new("0xabc", "0xsig");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"address": "0xabc", "signature": "0xsig"})
        );
    }
}
