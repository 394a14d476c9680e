use axum::Router;

pub mod beers;
pub mod system;

/// Router for all stock endpoints.
pub fn router() -> Router {
    beers::router()
}
