use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims of the backend's access token.
///
/// The signature is never checked on the client. Use the claims for display
/// and navigation hints only; the backend re-checks every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token does not consist of three segments")]
    Malformed,

    #[error("token payload is not base64url")]
    Encoding,

    #[error("token claims are invalid: {0}")]
    Claims(String),
}

pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    let raw = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::Encoding)?;

    serde_json::from_slice(&raw).map_err(|e| TokenError::Claims(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.c2ln",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decodes_subject_role_and_expiry() {
        let token = token_with_payload(r#"{"sub":"anna","role":"planner","exp":1718000000}"#);
        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.sub, "anna");
        assert_eq!(claims.role.as_deref(), Some("planner"));
        assert_eq!(claims.exp, Some(1718000000));
    }

    #[test]
    fn accepts_padded_payload() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"abc"}"#);
        let token = format!("e30.{payload}.c2ln");

        assert!(payload.ends_with('='));
        assert_eq!(decode_claims(&token).unwrap().sub, "abc");
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert_eq!(decode_claims("abc.def"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
    }

    #[test]
    fn rejects_non_json_payload() {
        let token = token_with_payload("not json");
        assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
    }

    #[test]
    fn expiry_is_inclusive() {
        let claims = Claims {
            sub: "anna".into(),
            role: None,
            exp: Some(100),
        };
        assert!(!claims.is_expired(99));
        assert!(claims.is_expired(100));

        let no_expiry = Claims { exp: None, ..claims };
        assert!(!no_expiry.is_expired(i64::MAX));
    }
}
