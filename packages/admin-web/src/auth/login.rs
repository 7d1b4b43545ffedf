//! Administrator sign-in

use crate::api::{ApiClient, ApiError};
use crate::auth::Session;
use crate::types::AdminUser;

/// Exchange credentials for a token and persist it.
///
/// Blank fields are rejected before any request is made.
pub async fn sign_in(
    api: &ApiClient,
    session: &Session,
    email: &str,
    password: &str,
) -> Result<AdminUser, ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Completá email y contraseña".to_string(),
        ));
    }

    let response = api.login(email, password).await?;
    session.persist(&response.token, &response.user)?;
    tracing::info!(email, "Administrator signed in");

    Ok(response.user)
}
