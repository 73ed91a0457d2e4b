use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::users::adapters::inbound::http as users_http;
use crate::shell::state::AppState;

/// Route table for the users resource, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserPaths {
    pub base: &'static str,
    pub get: &'static str,
    pub add: &'static str,
    pub delete: &'static str,
    pub get_one: &'static str,
}

impl UserPaths {
    pub const DEFAULT: Self = Self {
        base: "/users",
        get: "/",
        add: "/",
        delete: "/{id}",
        get_one: "/{id}",
    };

    pub fn full(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Default for UserPaths {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub fn router(state: AppState) -> Router {
    routes(&UserPaths::DEFAULT)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Collection routes answer with and without the trailing slash. A delete there
// has no id and fails as a missing parameter.
pub fn routes(paths: &UserPaths) -> Router<AppState> {
    Router::new()
        .route(
            paths.base,
            get(users_http::get_all)
                .post(users_http::add)
                .delete(users_http::delete_without_id),
        )
        .route(
            &paths.full(paths.get),
            get(users_http::get_all).delete(users_http::delete_without_id),
        )
        .route(&paths.full(paths.add), post(users_http::add))
        .route(&paths.full(paths.get_one), get(users_http::get_one))
        .route(&paths.full(paths.delete), delete(users_http::delete))
}
