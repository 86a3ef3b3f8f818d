use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use gastro_accounts::{AccountError, NewAccount};

use crate::app::dto::{self, JsonPayload};
use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/registro", post(register))
        .route("/login", post(login))
}

/// Password hashing is CPU-bound; keep it off the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T, AccountError>
where
    F: FnOnce() -> Result<T, AccountError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AccountError::Internal(format!("blocking task failed: {e}")))?
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    JsonPayload(body): JsonPayload<dto::RegisterRequest>,
) -> Response {
    let new = NewAccount {
        name: body.nome,
        email: body.email,
        password: body.senha,
    };

    let account = match run_blocking(move || services.accounts.register(new)).await {
        Ok(a) => a,
        Err(e) => return errors::account_error_to_response(e),
    };

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Usuário cadastrado com sucesso!",
            "usuario": dto::account_to_json(&account),
        })),
    )
        .into_response()
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    JsonPayload(body): JsonPayload<dto::LoginRequest>,
) -> Response {
    let email = body.email.unwrap_or_default();
    let password = body.senha.unwrap_or_default();

    let session = match run_blocking(move || services.accounts.login(&email, &password)).await {
        Ok(s) => s,
        Err(e) => return errors::account_error_to_response(e),
    };
    tracing::info!(email = %session.account.email, "login succeeded");

    Json(serde_json::json!({
        "message": "Login realizado com sucesso!",
        "token": session.token,
        "usuario": dto::account_to_json(&session.account),
        "expira_em": session.expires_at.to_rfc3339(),
    }))
    .into_response()
}

pub async fn current_session(Extension(session): Extension<SessionContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "usuario": dto::account_to_json(session.account()),
        "expira_em": session.expires_at().to_rfc3339(),
    }))
}
