use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde_json::Value;

use gastro_conversion::{UnitDomain, convert};
use gastro_core::DomainResult;

use crate::app::dto::{self, JsonPayload};
use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/conversoes/peso", post(convert_weight))
        .route("/conversoes/volume", post(convert_volume))
}

fn convert_request(domain: UnitDomain, body: &dto::ConversionRequest) -> DomainResult<Value> {
    let value = dto::required_number("valor", body.valor.as_ref())?;
    let (default_from, default_to) = domain.default_units();
    let from = body.de.as_deref().unwrap_or(default_from);
    let to = body.para.as_deref().unwrap_or(default_to);

    let converted = convert(value, from, to, domain)?;

    Ok(serde_json::json!({
        "valor_original": value,
        "unidade_original": from,
        "valor_convertido": converted,
        "unidade_final": to,
        "data_conversao": Utc::now().to_rfc3339(),
    }))
}

fn respond(domain: UnitDomain, body: dto::ConversionRequest) -> Response {
    match convert_request(domain, &body) {
        Ok(out) => Json(out).into_response(),
        Err(e) => {
            tracing::debug!(%domain, error = %e, "conversion rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn convert_weight(JsonPayload(body): JsonPayload<dto::ConversionRequest>) -> Response {
    respond(UnitDomain::Weight, body)
}

pub async fn convert_volume(JsonPayload(body): JsonPayload<dto::ConversionRequest>) -> Response {
    respond(UnitDomain::Volume, body)
}
