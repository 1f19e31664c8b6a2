use serde::{Deserialize, Serialize};

use crate::user::{Role, lenient_role};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<Role>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_with_unknown_role_still_decodes() {
        let token: TokenResponse = serde_json::from_str(
            r#"{"access_token": "jwt", "token_type": "bearer", "role": "viewer"}"#,
        )
        .unwrap();
        assert_eq!(token.access_token, "jwt");
        assert_eq!(token.role, None);

        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token": "jwt", "role": "admin"}"#).unwrap();
        assert_eq!(token.role, Some(Role::Admin));
    }
}
