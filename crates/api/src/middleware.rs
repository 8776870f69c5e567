use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Runs every request inside a span carrying a request id.
///
/// A well-formed UUID in the incoming `x-request-id` header is reused;
/// otherwise a fresh UUIDv7 is minted. The id is echoed on the response.
pub async fn request_id_middleware(req: Request<Body>, next: Next) -> Response {
    let request_id = incoming_request_id(&req).unwrap_or_else(Uuid::now_v7);

    let span = tracing::info_span!(
        "request",
        %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut res = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}

fn incoming_request_id(req: &Request<Body>) -> Option<Uuid> {
    let header = req.headers().get(REQUEST_ID_HEADER)?;
    let header = header.to_str().ok()?;
    header.trim().parse().ok()
}
