use axum::{Json, response::IntoResponse};
use chrono::Utc;

pub async fn home() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "API Gastro Mentor - custos, precificação e estoque",
        "status": "online",
        "timestamp": Utc::now().to_rfc3339(),
        "endpoints": {
            "health": "GET /api/health",
            "registro": "POST /api/registro",
            "login": "POST /api/login",
            "sessao": "GET /api/sessao",
            "receitas": "GET/POST /api/receitas",
            "ingredientes": "GET/POST /api/ingredientes",
            "cmv": "POST /api/cmv/calcular",
            "precificacao": "POST /api/precificacao/calcular",
            "conversoes": "POST /api/conversoes/peso ou /api/conversoes/volume",
            "relatorios": "GET /api/relatorios/financeiro ou /api/relatorios/estoque",
            "planos": "GET /api/planos",
            "receitas_publicas": "GET /api/receitas-publicas",
        },
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "message": "API Gastro Mentor funcionando",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
