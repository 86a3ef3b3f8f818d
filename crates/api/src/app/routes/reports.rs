use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use serde_json::Value;

use gastro_inventory::{summarize, summarize_financials};

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/relatorios/financeiro", get(financial_report))
        .route("/relatorios/estoque", get(stock_report))
}

pub async fn financial_report(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let recipes = services.recipes.list();
    let ingredients = services.ingredients.list();
    let summary = match summarize_financials(recipes.len(), &ingredients) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    Json(serde_json::json!({
        "relatorio": "Financeiro",
        "data_geracao": Utc::now().to_rfc3339(),
        "resumo": dto::financial_summary_to_json(&summary),
        "receitas": recipes.iter().map(dto::recipe_to_json).collect::<Vec<_>>(),
        "ingredientes": ingredients.iter().map(dto::ingredient_to_json).collect::<Vec<_>>(),
    }))
    .into_response()
}

/// `?limite_estoque=` overrides the configured low-stock threshold for one report.
pub async fn stock_report(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::StockReportQuery>,
) -> Response {
    let threshold = match dto::number_field("limite_estoque", query.limite_estoque.map(Value::String).as_ref()) {
        Ok(t) => t.unwrap_or(services.low_stock_threshold),
        Err(e) => return errors::domain_error_to_response(e),
    };

    let ingredients = services.ingredients.list();
    let summary = match summarize(&ingredients, threshold) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if !summary.alerts.is_empty() {
        tracing::info!(alerts = summary.low_stock_count(), threshold, "low stock detected");
    }

    Json(serde_json::json!({
        "relatorio": "Estoque",
        "data_geracao": Utc::now().to_rfc3339(),
        "resumo": dto::inventory_summary_to_json(&summary),
        "alertas": summary.alerts.iter().map(dto::alert_to_json).collect::<Vec<_>>(),
        "ingredientes": ingredients.iter().map(dto::ingredient_to_json).collect::<Vec<_>>(),
    }))
    .into_response()
}
