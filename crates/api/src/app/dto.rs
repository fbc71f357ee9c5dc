use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use srcsync_core::NaturalKey;
use srcsync_products::ProductRequest;

use crate::app::errors;

/// Query string naming the source-local id, plus the delete hint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceKeyQuery {
    pub source_id: String,
    #[serde(default)]
    pub delete: bool,
}

/// Unwrap the query string, rendering a rejection as `malformed_payload`.
pub fn source_key_query(
    query: Result<Query<SourceKeyQuery>, QueryRejection>,
) -> Result<SourceKeyQuery, axum::response::Response> {
    query.map(|Query(q)| q).map_err(|rejection| {
        errors::json_error(axum::http::StatusCode::BAD_REQUEST, "malformed_payload", rejection.body_text())
    })
}

/// Unwrap the JSON body, rendering a rejection as `malformed_payload`.
pub fn product_request(
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<ProductRequest, axum::response::Response> {
    body.map(|Json(b)| b).map_err(|rejection| {
        errors::json_error(axum::http::StatusCode::BAD_REQUEST, "malformed_payload", rejection.body_text())
    })
}

/// Natural key addressed by `/:source?sourceId=...`.
pub fn natural_key(source: String, query: &SourceKeyQuery) -> Result<NaturalKey, axum::response::Response> {
    NaturalKey::try_new(source, query.source_id.clone()).map_err(|e| {
        errors::json_error(axum::http::StatusCode::BAD_REQUEST, "malformed_payload", e.to_string())
    })
}

/// Align the payload with the addressed key.
///
/// Blank `source`/`sourceId` in the body are filled from the URL; non-blank
/// values must match it.
pub fn bind_payload(
    key: &NaturalKey,
    mut body: ProductRequest,
) -> Result<ProductRequest, axum::response::Response> {
    if body.source.trim().is_empty() {
        body.source = key.source_code().to_string();
    }
    if body.source_id.trim().is_empty() {
        body.source_id = key.source_id().to_string();
    }

    if body.source != key.source_code() || body.source_id != key.source_id() {
        return Err(errors::json_error(
            axum::http::StatusCode::BAD_REQUEST,
            "natural_key_mismatch",
            format!(
                "payload names {}/{} but the URL addresses {key}",
                body.source, body.source_id
            ),
        ));
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_payload_key_is_taken_from_url() {
        let key = NaturalKey::new("src1", "id1");
        let body = ProductRequest::new("", "", "SKU", "desc");

        let bound = bind_payload(&key, body).unwrap();
        assert_eq!(bound.source, "src1");
        assert_eq!(bound.source_id, "id1");
    }

    #[test]
    fn mismatching_payload_key_is_rejected() {
        let key = NaturalKey::new("src1", "id1");
        let body = ProductRequest::new("src1", "id2", "SKU", "desc");

        let res = bind_payload(&key, body).unwrap_err();
        assert_eq!(res.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn blank_url_source_id_is_malformed() {
        let query = SourceKeyQuery {
            source_id: " ".to_string(),
            delete: false,
        };
        let res = natural_key("src1".to_string(), &query).unwrap_err();
        assert_eq!(res.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
