use data::auth::{PasswordChange, TokenResponse};

use crate::{ApiClient, ApiError, Transport};

pub async fn login<T: Transport>(
    api: &ApiClient<T>,
    username: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    api.post_form("/auth/token", &[("username", username), ("password", password)])
        .await
}

pub async fn change_password<T: Transport>(
    api: &ApiClient<T>,
    old_password: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    let change = PasswordChange {
        old_password: old_password.to_string(),
        new_password: new_password.to_string(),
    };
    api.post_json_unit("/auth/change-password", &change).await
}
