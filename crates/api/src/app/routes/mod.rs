use axum::{Router, routing::post};

pub mod export;
pub mod system;

/// Count sheet endpoints.
///
/// `/api/generate-excel` is kept as an alias of `/export-excel` for older
/// clients. Non-POST requests get `405 Method Not Allowed` from the router.
pub fn router() -> Router {
    Router::new()
        .route("/export-excel", post(export::export_excel))
        .route("/api/generate-excel", post(export::export_excel))
}
