use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};

use beerstock_core::BeerId;
use beerstock_stock::{BeerDto, QuantityDto, StockDirection};

use crate::app::errors;
use crate::app::services::AppServices;

pub const BEER_API_URL_PATH: &str = "/api/v1/beers";

pub fn router() -> Router {
    // `:key` is a name on GET and an id everywhere else; both share one segment.
    Router::new()
        .route(BEER_API_URL_PATH, post(create_beer).get(list_beers))
        .route(&format!("{BEER_API_URL_PATH}/:key"), get(find_by_name).delete(delete_by_id))
        .route(&format!("{BEER_API_URL_PATH}/:key/increment"), patch(increment))
        .route(&format!("{BEER_API_URL_PATH}/:key/decrement"), patch(decrement))
}

pub async fn create_beer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<BeerDto>, JsonRejection>,
) -> axum::response::Response {
    let Json(dto) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", e.body_text()),
    };

    if let Err(e) = dto.validate() {
        return errors::domain_error_to_response(e);
    }

    match services.beers().create_beer(dto) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn find_by_name(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.beers().find_by_name(&name) {
        Ok(beer) => (StatusCode::OK, Json(beer)).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn list_beers(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.beers().list_all() {
        Ok(beers) => (StatusCode::OK, Json(beers)).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn delete_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: BeerId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.beers().delete_by_id(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn increment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<QuantityDto>, JsonRejection>,
) -> axum::response::Response {
    change_quantity(&services, &id, body, StockDirection::Increment)
}

pub async fn decrement(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<QuantityDto>, JsonRejection>,
) -> axum::response::Response {
    change_quantity(&services, &id, body, StockDirection::Decrement)
}

fn change_quantity(
    services: &AppServices,
    id: &str,
    body: Result<Json<QuantityDto>, JsonRejection>,
    direction: StockDirection,
) -> axum::response::Response {
    let id: BeerId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let Json(quantity) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", e.body_text()),
    };

    match services.beers().change_quantity(id, quantity.quantity, direction) {
        Ok(beer) => (StatusCode::OK, Json(beer)).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}
