//! Route definitions for the `/veiculos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::vehicle;
use crate::state::AppState;

/// Routes mounted at `/veiculos`.
///
/// ```text
/// GET    /      -> list (public)
/// POST   /      -> create (Adm or Editor)
/// GET    /{id}  -> get_by_id (public)
/// PUT    /{id}  -> update (Adm or Editor)
/// DELETE /{id}  -> delete (Adm or Editor)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vehicle::list).post(vehicle::create))
        .route(
            "/{id}",
            get(vehicle::get_by_id)
                .put(vehicle::update)
                .delete(vehicle::delete),
        )
}
