use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use srcsync_infra::{Intent, Outcome};
use srcsync_products::{Product, ProductRequest};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/update/:source", post(update_product).put(update_product))
        .route("/:source", get(get_product).delete(delete_product))
}

fn outcome_to_response(outcome: Outcome<Product>) -> axum::response::Response {
    match outcome {
        Outcome::Created(p) => (StatusCode::CREATED, Json(p)).into_response(),
        Outcome::Updated(p) => (StatusCode::OK, Json(p)).into_response(),
        Outcome::Deleted => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Create, update or (with `delete=true`) remove the product addressed by
/// `/:source?sourceId=...`.
pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(source): Path<String>,
    query: Result<Query<dto::SourceKeyQuery>, QueryRejection>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let query = match dto::source_key_query(query) {
        Ok(q) => q,
        Err(res) => return res,
    };
    let body = match dto::product_request(body) {
        Ok(b) => b,
        Err(res) => return res,
    };
    let key = match dto::natural_key(source, &query) {
        Ok(k) => k,
        Err(res) => return res,
    };
    let body = match dto::bind_payload(&key, body) {
        Ok(b) => b,
        Err(res) => return res,
    };

    let intent = if query.delete { Intent::Delete } else { Intent::Upsert };

    match services.products_reconcile(&body, intent).await {
        Ok(outcome) => outcome_to_response(outcome),
        Err(e) => errors::reconcile_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(source): Path<String>,
    query: Result<Query<dto::SourceKeyQuery>, QueryRejection>,
) -> axum::response::Response {
    let query = match dto::source_key_query(query) {
        Ok(q) => q,
        Err(res) => return res,
    };
    let key = match dto::natural_key(source, &query) {
        Ok(k) => k,
        Err(res) => return res,
    };

    match services.products_delete(&key).await {
        Ok(outcome) => outcome_to_response(outcome),
        Err(e) => errors::reconcile_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(source): Path<String>,
    query: Result<Query<dto::SourceKeyQuery>, QueryRejection>,
) -> axum::response::Response {
    let query = match dto::source_key_query(query) {
        Ok(q) => q,
        Err(res) => return res,
    };
    let key = match dto::natural_key(source, &query) {
        Ok(k) => k,
        Err(res) => return res,
    };

    match services.products_get(&key).await {
        Ok(Some(p)) => (StatusCode::OK, Json(p)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", format!("no product for {key}")),
        Err(e) => errors::reconcile_error_to_response(e),
    }
}
