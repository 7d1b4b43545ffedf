//! Route definitions for the console

use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::forms::RecordMode;
use crate::pages::gremios::{AdminGremioDetail, AdminGremioEdit, AdminGremioNew, AdminGremios};
use crate::pages::registrados::{
    AdminRegistrado, AdminRegistradoDetail, AdminRegistradoEdit, AdminRegistradoNew,
    AdminRegistrados,
};
use crate::pages::{AdminLogin, AdminSecurity, NotFound};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::AdminLogin {})]
    #[route("/admin/login")]
    AdminLogin {},

    #[nest("/admin")]
        #[redirect("/", || Route::AdminGremios {})]
        #[layout(AdminLayout)]
            #[route("/gremios")]
            AdminGremios {},

            #[route("/gremios/nuevo")]
            AdminGremioNew {},

            #[route("/gremios/:id")]
            AdminGremioEdit { id: i64 },

            #[route("/gremios/:id/ver")]
            AdminGremioDetail { id: i64 },

            #[route("/registrados")]
            AdminRegistrados {},

            #[route("/registrados/nuevo")]
            AdminRegistradoNew {},

            #[route("/registrados/:id")]
            AdminRegistrado { id: i64 },

            #[route("/registrados/:id/editar")]
            AdminRegistradoEdit { id: i64 },

            #[route("/registrados/:id/ver")]
            AdminRegistradoDetail { id: i64 },

            #[route("/seguridad")]
            AdminSecurity {},
        #[end_layout]
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Whether the route requires a stored session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::AdminLogin {} | Route::NotFound { .. })
    }

    /// How a registrado record route opens the page.
    pub fn record_mode(&self) -> Option<RecordMode> {
        match self {
            Route::AdminRegistrado { .. } => Some(RecordMode::Viewing),
            Route::AdminRegistradoEdit { .. } => Some(RecordMode::Editing),
            Route::AdminRegistradoDetail { .. } => Some(RecordMode::ViewOnly),
            _ => None,
        }
    }
}

/// Where to send the operator instead of `route`, if anywhere.
///
/// Protected routes bounce to the login page without a session; the login
/// page bounces to the gremios list with one.
pub fn guard(route: &Route, authenticated: bool) -> Option<Route> {
    match route {
        Route::AdminLogin {} if authenticated => Some(Route::AdminGremios {}),
        r if r.is_protected() && !authenticated => Some(Route::AdminLogin {}),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_protected_routes_require_session() {
        assert_eq!(guard(&Route::AdminGremios {}, false), Some(Route::AdminLogin {}));
        assert_eq!(
            guard(&Route::AdminRegistradoDetail { id: 4 }, false),
            Some(Route::AdminLogin {})
        );
        assert_eq!(guard(&Route::AdminSecurity {}, true), None);
    }

    #[test]
    fn test_login_redirects_when_signed_in() {
        assert_eq!(guard(&Route::AdminLogin {}, true), Some(Route::AdminGremios {}));
        assert_eq!(guard(&Route::AdminLogin {}, false), None);
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::AdminGremioDetail { id: 3 }.to_string(), "/admin/gremios/3/ver");
        assert_eq!(Route::AdminRegistradoEdit { id: 8 }.to_string(), "/admin/registrados/8/editar");

        let parsed: Route = "/admin/gremios/nuevo".parse().unwrap();
        assert_eq!(parsed, Route::AdminGremioNew {});
    }

    #[test]
    fn test_registrado_sub_routes_open_in_their_own_mode() {
        let mode = |path: &str| path.parse::<Route>().unwrap().record_mode();

        assert_eq!(mode("/admin/registrados/8"), Some(RecordMode::Viewing));
        assert_eq!(mode("/admin/registrados/8/editar"), Some(RecordMode::Editing));
        assert_eq!(mode("/admin/registrados/8/ver"), Some(RecordMode::ViewOnly));
        assert_eq!(mode("/admin/registrados/nuevo"), None);
    }
}
