use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;

use gastro_core::DomainResult;
use gastro_costing::{DEFAULT_MARGIN_PERCENT, IngredientLineItem, compute_cmv, compute_price};

use crate::app::dto::{self, JsonPayload};
use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/cmv/calcular", post(calculate_cmv))
        .route("/precificacao/calcular", post(calculate_price))
}

fn line_items(lines: &[dto::CmvLineRequest]) -> DomainResult<Vec<IngredientLineItem>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            Ok(IngredientLineItem::new(
                line.nome.clone().unwrap_or_default(),
                dto::required_number(&format!("ingredientes[{i}].quantidade"), line.quantidade.as_ref())?,
                dto::required_number(&format!("ingredientes[{i}].preco_unitario"), line.preco_unitario.as_ref())?,
            ))
        })
        .collect()
}

pub async fn calculate_cmv(JsonPayload(body): JsonPayload<dto::CmvRequest>) -> Response {
    let breakdown = match line_items(&body.ingredientes).and_then(|items| compute_cmv(&items)) {
        Ok(b) => b,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let mut out = dto::breakdown_to_json(&breakdown);
    out["data_calculo"] = serde_json::json!(Utc::now().to_rfc3339());
    Json(out).into_response()
}

pub async fn calculate_price(JsonPayload(body): JsonPayload<dto::PricingRequest>) -> Response {
    let result = dto::required_number("cmv", body.cmv.as_ref()).and_then(|cost| {
        let margin = dto::number_field("margem_lucro", body.margem_lucro.as_ref())?
            .unwrap_or(DEFAULT_MARGIN_PERCENT);
        compute_price(cost, margin)
    });
    let pricing = match result {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let mut out = dto::pricing_to_json(&pricing);
    out["data_calculo"] = serde_json::json!(Utc::now().to_rfc3339());
    Json(out).into_response()
}
