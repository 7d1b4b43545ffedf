//! Administrator login and credential changes

use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::types::LoginResponse;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ChangeEmailRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    password_actual: &'a str,
    password_nueva: &'a str,
}

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let req = self
            .public(Method::POST, "/api/admin/login")
            .json(&LoginRequest { email, password });

        self.send_json(req, "Credenciales inválidas").await
    }

    pub async fn change_email(&self, email: &str) -> ApiResult<()> {
        let req = self
            .request(Method::PUT, "/api/admin/cambiar-email")
            .json(&ChangeEmailRequest { email });

        self.send_empty(req, "No se pudo actualizar el email").await
    }

    pub async fn change_password(&self, current: &str, new: &str) -> ApiResult<()> {
        let req = self
            .request(Method::PUT, "/api/admin/cambiar-password")
            .json(&ChangePasswordRequest {
                password_actual: current,
                password_nueva: new,
            });

        self.send_credential_check(req, "No se pudo actualizar la contraseña").await
    }
}
