use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Landing payload returned from the root path.
#[derive(Serialize)]
pub struct HomeResponse {
    /// Welcome message.
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET / -- public landing payload.
async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Bem-vindo à API de veículos",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount the root landing route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
