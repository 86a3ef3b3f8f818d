use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use gastro_core::{DomainError, DomainResult, RecipeId};
use gastro_recipes::NewRecipe;

use crate::app::dto::{self, JsonPayload};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/receitas", get(list_recipes).post(create_recipe))
        .route("/receitas/:id", get(get_recipe))
}

fn draft_from(body: dto::CreateRecipeRequest) -> DomainResult<NewRecipe> {
    NewRecipe {
        name: body.nome,
        ingredients: body.ingredientes,
        preparation_method: body.modo_preparo,
        preparation_time_minutes: dto::number_field("tempo_preparo", body.tempo_preparo.as_ref())?,
        yield_count: dto::number_field("rendimento", body.rendimento.as_ref())?,
    }
    .validate()
}

pub async fn create_recipe(
    Extension(services): Extension<Arc<AppServices>>,
    JsonPayload(body): JsonPayload<dto::CreateRecipeRequest>,
) -> Response {
    let draft = match draft_from(body) {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    // Ingredient references are kept as given; they are not required to exist.
    let recipe = services.recipes.create(draft);
    tracing::info!(
        id = %recipe.id,
        name = %recipe.name,
        ingredients = recipe.ingredients.len(),
        "recipe created"
    );

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Receita criada com sucesso!",
            "receita": dto::recipe_to_json(&recipe),
        })),
    )
        .into_response()
}

pub async fn list_recipes(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let recipes = services.recipes.list();
    Json(serde_json::json!({
        "total": recipes.len(),
        "receitas": recipes.iter().map(dto::recipe_to_json).collect::<Vec<_>>(),
    }))
}

pub async fn get_recipe(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id: RecipeId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.recipes.get(id) {
        Some(recipe) => Json(dto::recipe_to_json(&recipe)).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}
