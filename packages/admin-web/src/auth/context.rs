//! Session context provider

use dioxus::prelude::*;

use super::{sign_in, Session};
use crate::api::{ApiClient, ApiError};
use crate::config;
use crate::types::AdminUser;

/// Session state shared by every page
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Whether a token is currently stored
    pub authenticated: Signal<bool>,
    /// Cached administrator shown in the header
    pub user: Signal<Option<AdminUser>>,
    session: CopyValue<Session>,
    api: CopyValue<ApiClient>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.read()
    }

    /// Client bound to this session. A 401 from any call signs the UI out.
    pub fn api(&self) -> ApiClient {
        self.api.read().clone()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AdminUser, ApiError> {
        let api = self.api();
        let session = self.session.read().clone();
        let user = sign_in(&api, &session, email, password).await?;

        let mut authenticated = self.authenticated;
        let mut current = self.user;
        current.set(Some(user.clone()));
        authenticated.set(true);
        Ok(user)
    }

    pub fn sign_out(&self) {
        self.session.read().clear();
        let mut authenticated = self.authenticated;
        let mut user = self.user;
        user.set(None);
        authenticated.set(false);
        tracing::info!("Administrator signed out");
    }
}

/// Provides [`SessionContext`] to the router
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| {
        let session = Session::platform();
        let authenticated = Signal::new(session.is_authenticated());
        let user = Signal::new(session.user());

        let api = ApiClient::new(config::api_url(), session.clone()).on_unauthorized(move || {
            let (mut user, mut authenticated) = (user, authenticated);
            user.set(None);
            authenticated.set(false);
        });

        SessionContext {
            authenticated,
            user,
            session: CopyValue::new(session),
            api: CopyValue::new(api),
        }
    });

    children
}

/// Hook to access the session context
pub fn use_auth() -> SessionContext {
    use_context::<SessionContext>()
}
