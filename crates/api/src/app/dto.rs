use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use gastro_accounts::Account;
use gastro_core::{DomainError, DomainResult};
use gastro_costing::{CostBreakdown, PricingResult};
use gastro_inventory::{FinancialSummary, Ingredient, InventorySummary, StockAlert};
use gastro_recipes::{Recipe, RecipeIngredient};

use crate::app::errors;

// -------------------------
// Extractors
// -------------------------

/// `Json<T>` whose rejections are rendered as `{"erro": ...}` responses.
///
/// A body without a JSON content type is a 415; every other rejection
/// (syntax errors, wrong field types) is a 400.
#[derive(Debug, Clone)]
pub struct JsonPayload<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let status = match rejection {
                    JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    _ => StatusCode::BAD_REQUEST,
                };
                tracing::debug!(%status, "rejected request body");
                Err(errors::json_error(status, rejection.body_text()))
            }
        }
    }
}

// -------------------------
// Numeric fields
// -------------------------

/// Read an optional numeric field; JSON numbers and numeric strings are accepted.
///
/// `null` counts as absent.
pub fn number_field(field: &str, value: Option<&Value>) -> DomainResult<Option<f64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| DomainError::validation(format!("{field} must be a number"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| DomainError::validation(format!("{field} must be a number (got '{s}')"))),
        Some(_) => Err(DomainError::validation(format!("{field} must be a number"))),
    }
}

pub fn required_number(field: &str, value: Option<&Value>) -> DomainResult<f64> {
    number_field(field, value)?.ok_or_else(|| DomainError::validation(format!("{field} is required")))
}

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateIngredientRequest {
    pub nome: Option<String>,
    pub preco_unitario: Option<Value>,
    pub unidade: Option<String>,
    pub estoque_atual: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub nome: Option<String>,
    #[serde(default)]
    pub ingredientes: Vec<RecipeIngredient>,
    pub modo_preparo: Option<String>,
    pub tempo_preparo: Option<Value>,
    pub rendimento: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct CmvLineRequest {
    pub nome: Option<String>,
    pub quantidade: Option<Value>,
    pub preco_unitario: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct CmvRequest {
    #[serde(default)]
    pub ingredientes: Vec<CmvLineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct PricingRequest {
    pub cmv: Option<Value>,
    pub margem_lucro: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ConversionRequest {
    pub valor: Option<Value>,
    pub de: Option<String>,
    pub para: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StockReportQuery {
    pub limite_estoque: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn account_to_json(account: &Account) -> Value {
    serde_json::json!({
        "nome": account.name,
        "email": account.email,
    })
}

pub fn ingredient_to_json(ingredient: &Ingredient) -> Value {
    serde_json::json!({
        "id": ingredient.id.value(),
        "nome": ingredient.name,
        "preco_unitario": ingredient.unit_price,
        "unidade": ingredient.unit,
        "estoque_atual": ingredient.current_stock,
        "data_cadastro": ingredient.created_at.to_rfc3339(),
    })
}

pub fn recipe_to_json(recipe: &Recipe) -> Value {
    serde_json::json!({
        "id": recipe.id.value(),
        "nome": recipe.name,
        "ingredientes": recipe.ingredients,
        "modo_preparo": recipe.preparation_method,
        "tempo_preparo": recipe.preparation_time_minutes,
        "rendimento": recipe.yield_count,
        "data_criacao": recipe.created_at.to_rfc3339(),
    })
}

pub fn breakdown_to_json(breakdown: &CostBreakdown) -> Value {
    serde_json::json!({
        "cmv": breakdown.total_cost,
        "detalhes": breakdown.lines.iter().map(|l| serde_json::json!({
            "ingrediente": l.ingredient_name,
            "quantidade": l.quantity,
            "preco_unitario": l.unit_price,
            "custo_total": l.line_cost,
        })).collect::<Vec<_>>(),
    })
}

pub fn pricing_to_json(result: &PricingResult) -> Value {
    serde_json::json!({
        "cmv": result.cost,
        "margem_lucro": result.margin_percent,
        "preco_venda": result.sale_price,
        "lucro_unitario": result.unit_profit,
    })
}

pub fn alert_to_json(alert: &StockAlert) -> Value {
    serde_json::json!({
        "ingrediente": alert.ingredient_name,
        "estoque_atual": alert.current_stock,
        "status": alert.reason,
    })
}

pub fn inventory_summary_to_json(summary: &InventorySummary) -> Value {
    serde_json::json!({
        "total_ingredientes": summary.total_ingredients,
        "estoque_total": summary.total_stock,
        "valor_total_estoque": summary.total_value,
        "alertas_estoque_baixo": summary.low_stock_count(),
        "preco_medio_unitario": summary.average_unit_price,
        "limite_estoque": summary.low_stock_threshold,
    })
}

pub fn financial_summary_to_json(summary: &FinancialSummary) -> Value {
    serde_json::json!({
        "total_receitas": summary.total_recipes,
        "total_ingredientes": summary.total_ingredients,
        "custo_medio_ingredientes": summary.average_ingredient_cost,
    })
}
