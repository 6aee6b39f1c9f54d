//! The single public listing endpoint.

use crate::catalog::CatalogError;
use crate::server::AppContext;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

pub fn catalog_routes() -> Router<AppContext> {
    Router::new().route("/:category/:kind", get(listing))
}

/// `GET /:category/:kind` — serve a cached, enriched TMDB listing.
async fn listing(
    State(ctx): State<AppContext>,
    Path((category, kind)): Path<(String, String)>,
) -> Response {
    match ctx.catalog.listing(&category, &kind).await {
        Ok(items) => Json(&*items).into_response(),
        Err(CatalogError::InvalidRoute) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Invalid category or type." })),
        )
            .into_response(),
        Err(CatalogError::Upstream(e)) => {
            tracing::error!(%category, %kind, error = %e, "upstream listing fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to fetch data." })),
            )
                .into_response()
        }
    }
}
