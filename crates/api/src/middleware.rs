use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::SessionContext;

/// Require a valid `Authorization: Bearer <token>` session.
pub async fn session_middleware(
    Extension(services): Extension<Arc<AppServices>>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = match extract_bearer(req.headers()) {
        Ok(t) => t,
        Err(msg) => return errors::json_error(StatusCode::UNAUTHORIZED, msg),
    };

    let (account, claims) = match services.accounts.resolve(token) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::debug!("session rejected: {e}");
            return errors::account_error_to_response(e);
        }
    };

    req.extensions_mut()
        .insert(SessionContext::new(account, claims.expires_at()));

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, &'static str> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or("missing Authorization header")?;

    let header = header.to_str().map_err(|_| "malformed Authorization header")?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or("Authorization header must use the Bearer scheme")?
        .trim();
    if token.is_empty() {
        return Err("empty bearer token");
    }

    Ok(token)
}
