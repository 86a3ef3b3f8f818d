use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use gastro_core::{DomainError, DomainResult, IngredientId};
use gastro_inventory::NewIngredient;

use crate::app::dto::{self, JsonPayload};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/ingredientes", get(list_ingredients).post(create_ingredient))
        .route("/ingredientes/:id", get(get_ingredient))
}

fn draft_from(body: dto::CreateIngredientRequest) -> DomainResult<NewIngredient> {
    NewIngredient {
        name: body.nome,
        unit_price: dto::number_field("preco_unitario", body.preco_unitario.as_ref())?,
        unit: body.unidade,
        current_stock: dto::number_field("estoque_atual", body.estoque_atual.as_ref())?,
    }
    .validate()
}

pub async fn create_ingredient(
    Extension(services): Extension<Arc<AppServices>>,
    JsonPayload(body): JsonPayload<dto::CreateIngredientRequest>,
) -> Response {
    let draft = match draft_from(body) {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let ingredient = services.ingredients.create(draft);
    tracing::info!(id = %ingredient.id, name = %ingredient.name, "ingredient created");

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Ingrediente cadastrado com sucesso!",
            "ingrediente": dto::ingredient_to_json(&ingredient),
        })),
    )
        .into_response()
}

pub async fn list_ingredients(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let ingredients = services.ingredients.list();
    Json(serde_json::json!({
        "total": ingredients.len(),
        "ingredientes": ingredients.iter().map(dto::ingredient_to_json).collect::<Vec<_>>(),
    }))
}

pub async fn get_ingredient(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id: IngredientId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.ingredients.get(id) {
        Some(ingredient) => Json(dto::ingredient_to_json(&ingredient)).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}
