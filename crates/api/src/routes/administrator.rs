//! Route definitions for the `/administrador` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{administrator, auth};
use crate::state::AppState;

/// Routes mounted at `/administrador`.
///
/// ```text
/// POST /login  -> login (public)
/// POST /       -> create (Adm only)
/// GET  /       -> list (Adm only)
/// GET  /{id}   -> get_by_id (Adm only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/", get(administrator::list).post(administrator::create))
        .route("/{id}", get(administrator::get_by_id))
}
