//! Static showcase content served without a session.

use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::{Value, json};

pub fn router() -> Router {
    Router::new()
        .route("/planos", get(plans))
        .route("/receitas-publicas", get(public_recipes))
}

fn plan_catalogue() -> Value {
    json!([
        {
            "nome": "Básico",
            "preco": "R$ 29,90/mês",
            "recursos": ["Até 50 receitas", "CMV básico", "Suporte email"],
        },
        {
            "nome": "Profissional",
            "preco": "R$ 59,90/mês",
            "recursos": ["Receitas ilimitadas", "Relatórios avançados", "Suporte prioritário"],
        },
        {
            "nome": "Enterprise",
            "preco": "R$ 99,90/mês",
            "recursos": ["Tudo do Profissional", "API personalizada", "Suporte 24/7"],
        },
    ])
}

fn showcase_recipes() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "nome": "Brigadeiro Gourmet",
            "ingredientes": ["Leite condensado", "Chocolate em pó", "Manteiga"],
            "tempo_preparo": 20,
            "rendimento": 30,
        }),
        json!({
            "id": 2,
            "nome": "Pão de Açúcar",
            "ingredientes": ["Farinha", "Açúcar", "Ovos", "Fermento"],
            "tempo_preparo": 45,
            "rendimento": 8,
        }),
    ]
}

pub async fn plans() -> impl IntoResponse {
    Json(json!({ "planos": plan_catalogue() }))
}

pub async fn public_recipes() -> impl IntoResponse {
    let recipes = showcase_recipes();
    Json(json!({
        "total": recipes.len(),
        "receitas_publicas": recipes,
    }))
}
