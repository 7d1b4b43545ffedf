//! HTTP client for the Multigremial REST backend

use std::rc::Rc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};

use crate::auth::{Session, StorageError};

/// Error type for backend operations.
///
/// The display text is what pages show inline, so API variants carry the
/// backend's own `message` (or a caller-supplied fallback).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Respuesta inválida del servidor: {0}")]
    Parse(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("No se pudo guardar la sesión: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// REST client carrying the session's bearer token
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: Session,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl ApiClient {
    /// Create a new client for the given backend base URL
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            on_unauthorized: None,
        }
    }

    /// Hook run after a 401 has cleared the stored session.
    pub fn on_unauthorized(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request with the bearer token attached when one is stored.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.client.request(method, self.url(path));
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Request without credentials.
    pub(crate) fn public(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Send a request and decode a JSON body.
    pub(crate) async fn send_json<R>(&self, req: RequestBuilder, fallback: &str) -> ApiResult<R>
    where
        R: DeserializeOwned,
    {
        let response = self.send(req, fallback).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Send a request whose success body is irrelevant.
    pub(crate) async fn send_empty(&self, req: RequestBuilder, fallback: &str) -> ApiResult<()> {
        self.send(req, fallback).await.map(|_| ())
    }

    /// Send a request that verifies the operator's own credentials. A 401 here
    /// means the submitted password was wrong, not that the session expired.
    pub(crate) async fn send_credential_check(&self, req: RequestBuilder, fallback: &str) -> ApiResult<()> {
        self.dispatch(req, fallback, false).await.map(|_| ())
    }

    /// Send a request and return the raw successful response.
    pub(crate) async fn send(&self, req: RequestBuilder, fallback: &str) -> ApiResult<Response> {
        self.dispatch(req, fallback, true).await
    }

    async fn dispatch(&self, req: RequestBuilder, fallback: &str, sign_out_on_401: bool) -> ApiResult<Response> {
        let response = req.send().await?;
        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "Backend response");

        if status.is_success() {
            return Ok(response);
        }

        // A body that is not JSON (or has no message) falls back to the caller's text
        let message = response
            .bytes()
            .await
            .ok()
            .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
            .and_then(|body| body.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        Err(self.classify(status, message, sign_out_on_401))
    }

    fn classify(&self, status: StatusCode, message: String, sign_out_on_401: bool) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED if !sign_out_on_401 => {
                tracing::warn!(%message, "Credential check rejected");
                ApiError::Unauthorized(message)
            }
            StatusCode::UNAUTHORIZED => {
                tracing::warn!("Backend rejected credentials, clearing session");
                self.invalidate();
                ApiError::Unauthorized(message)
            }
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            _ => {
                tracing::warn!(status = status.as_u16(), %message, "Backend request failed");
                ApiError::Api {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }

    /// Drop the stored credentials and notify the UI.
    pub fn invalidate(&self) {
        self.session.clear();
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }
}
