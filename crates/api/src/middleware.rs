use axum::{
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use brecho_core::SessionId;

use crate::app::errors;
use crate::context::SessionContext;

/// Header carrying the client-generated cart session token.
pub const SESSION_HEADER: &str = "x-session-id";

pub async fn session_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let session_id = extract_session(req.headers()).map_err(|msg| {
        errors::json_error(StatusCode::BAD_REQUEST, "missing_session", msg)
    })?;

    req.extensions_mut()
        .insert(SessionContext::new(session_id));

    Ok(next.run(req).await)
}

fn extract_session(headers: &HeaderMap) -> Result<SessionId, &'static str> {
    let header = headers
        .get(SESSION_HEADER)
        .ok_or("x-session-id header is required")?;

    let header = header
        .to_str()
        .map_err(|_| "x-session-id header must be visible ASCII")?;

    SessionId::parse(header.trim()).map_err(|_| "x-session-id header cannot be empty")
}
