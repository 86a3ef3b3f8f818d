use gastro_api::config::AppConfig;
use reqwest::StatusCode;
use serde_json::{Value, json};

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(AppConfig::default()).await
    }

    async fn spawn_with(config: AppConfig) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = gastro_api::app::build_app(&config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.get(self.url(path)).send().await.unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self.client.post(self.url(path)).json(&body).send().await.unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_and_banner_are_public() {
    let server = TestServer::spawn().await;

    let (status, body) = server.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");

    let (status, body) = server.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "online");
    assert_eq!(body["endpoints"]["cmv"], "POST /api/cmv/calcular");
}

#[tokio::test]
async fn cmv_for_a_single_ingredient() {
    let server = TestServer::spawn().await;

    let (status, body) = server
        .post(
            "/api/cmv/calcular",
            json!({"ingredientes": [{"nome": "Leite", "quantidade": 2, "preco_unitario": 3.5}]}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cmv"], 7.0);
    assert_eq!(body["detalhes"][0]["ingrediente"], "Leite");
    assert_eq!(body["detalhes"][0]["custo_total"], 7.0);
    assert!(body["data_calculo"].is_string());
}

#[tokio::test]
async fn cmv_accepts_numeric_strings_and_empty_lists() {
    let server = TestServer::spawn().await;

    let (status, body) = server
        .post(
            "/api/cmv/calcular",
            json!({"ingredientes": [
                {"nome": "Farinha", "quantidade": "0.5", "preco_unitario": "4"},
                {"nome": "Ovos", "quantidade": 3, "preco_unitario": 0.75}
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cmv"], 4.25);

    let (status, body) = server.post("/api/cmv/calcular", json!({"ingredientes": []})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cmv"], 0.0);
    assert_eq!(body["detalhes"], json!([]));
}

#[tokio::test]
async fn cmv_rejects_bad_lines_without_partial_output() {
    let server = TestServer::spawn().await;

    let (status, body) = server
        .post(
            "/api/cmv/calcular",
            json!({"ingredientes": [
                {"nome": "Leite", "quantidade": 2, "preco_unitario": 3.5},
                {"nome": "Sal", "quantidade": -1, "preco_unitario": 2}
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"].as_str().unwrap().contains("ingredientes[1].quantidade"));
    assert!(body.get("cmv").is_none());

    let (status, body) = server
        .post(
            "/api/cmv/calcular",
            json!({"ingredientes": [{"nome": "Leite", "quantidade": "dois", "preco_unitario": 1}]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"].as_str().unwrap().contains("quantidade"));
}

#[tokio::test]
async fn pricing_with_explicit_and_default_margin() {
    let server = TestServer::spawn().await;

    let (status, body) = server
        .post("/api/precificacao/calcular", json!({"cmv": 7.0, "margem_lucro": 30}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["preco_venda"], 10.0);
    assert_eq!(body["lucro_unitario"], 3.0);

    let (status, body) = server.post("/api/precificacao/calcular", json!({"cmv": 7.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["margem_lucro"], 30.0);
    assert_eq!(body["preco_venda"], 10.0);

    let (status, body) = server
        .post("/api/precificacao/calcular", json!({"cmv": 12.5, "margem_lucro": 0}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["preco_venda"], 12.5);
    assert_eq!(body["lucro_unitario"], 0.0);
}

#[tokio::test]
async fn pricing_rejects_margins_at_or_above_one_hundred() {
    let server = TestServer::spawn().await;

    for margin in [100, 150] {
        let (status, body) = server
            .post("/api/precificacao/calcular", json!({"cmv": 7.0, "margem_lucro": margin}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["erro"].as_str().unwrap().contains("invalid margin"));
    }

    let (status, _) = server.post("/api/precificacao/calcular", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn weight_and_volume_conversions() {
    let server = TestServer::spawn().await;

    let (status, body) = server
        .post("/api/conversoes/peso", json!({"valor": 1000, "de": "g", "para": "kg"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valor_convertido"], 1.0);
    assert_eq!(body["unidade_original"], "g");
    assert_eq!(body["unidade_final"], "kg");

    let (status, body) = server
        .post("/api/conversoes/volume", json!({"valor": 1, "de": "l", "para": "ml"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valor_convertido"], 1000.0);

    // Units default to g -> kg.
    let (status, body) = server.post("/api/conversoes/peso", json!({"valor": 500})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valor_convertido"], 0.5);
}

#[tokio::test]
async fn conversions_reject_units_from_the_other_table() {
    let server = TestServer::spawn().await;

    let (status, body) = server
        .post("/api/conversoes/peso", json!({"valor": 1, "de": "l", "para": "kg"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"].as_str().unwrap().contains("unsupported unit"));

    let (status, _) = server
        .post("/api/conversoes/volume", json!({"valor": 1, "de": "ml", "para": "oz"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let server = TestServer::spawn().await;

    let res = server
        .client
        .post(server.url("/api/cmv/calcular"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["erro"].is_string());
}

#[tokio::test]
async fn body_without_json_content_type_is_unsupported() {
    let server = TestServer::spawn().await;

    let res = server
        .client
        .post(server.url("/api/precificacao/calcular"))
        .body(r#"{"cmv": 7.0}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = res.json().await.unwrap();
    assert!(body["erro"].is_string());
}

#[tokio::test]
async fn overflowing_figures_are_client_errors() {
    let server = TestServer::spawn().await;

    let (status, body) = server
        .post(
            "/api/cmv/calcular",
            json!({"ingredientes": [{"nome": "Leite", "quantidade": 1e200, "preco_unitario": 1e200}]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"].as_str().unwrap().contains("too large"));
    assert!(body.get("cmv").is_none());

    let (status, _) = server
        .post("/api/precificacao/calcular", json!({"cmv": f64::MAX, "margem_lucro": 99}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = server
        .post("/api/conversoes/peso", json!({"valor": f64::MAX, "de": "kg", "para": "mg"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = server
        .post(
            "/api/ingredientes",
            json!({"nome": "Açafrão", "preco_unitario": 1e200, "estoque_atual": 1e200}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = server.get("/api/relatorios/estoque").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"].as_str().unwrap().contains("valor_total_estoque"));
}

#[tokio::test]
async fn ingredient_catalogue_and_stock_report() {
    let server = TestServer::spawn().await;

    let (status, body) = server
        .post(
            "/api/ingredientes",
            json!({"nome": "Sal", "preco_unitario": 2, "unidade": "kg", "estoque_atual": 5}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ingrediente"]["id"], 1);
    assert_eq!(body["ingrediente"]["nome"], "Sal");

    let (status, body) = server
        .post("/api/ingredientes", json!({"nome": "Farinha", "preco_unitario": 4, "estoque_atual": 50}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ingrediente"]["id"], 2);
    assert_eq!(body["ingrediente"]["unidade"], "kg");

    let (status, body) = server.get("/api/ingredientes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["ingredientes"][0]["nome"], "Sal");

    let (status, body) = server.get("/api/ingredientes/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nome"], "Farinha");

    let (status, body) = server.get("/api/relatorios/estoque").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["relatorio"], "Estoque");
    assert_eq!(body["resumo"]["total_ingredientes"], 2);
    assert_eq!(body["resumo"]["estoque_total"], 55.0);
    assert_eq!(body["resumo"]["valor_total_estoque"], 210.0);
    assert_eq!(body["resumo"]["alertas_estoque_baixo"], 1);
    assert_eq!(
        body["alertas"],
        json!([{"ingrediente": "Sal", "estoque_atual": 5.0, "status": "ESTOQUE BAIXO"}])
    );

    let (status, body) = server.get("/api/relatorios/estoque?limite_estoque=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resumo"]["alertas_estoque_baixo"], 2);

    let (status, _) = server.get("/api/relatorios/estoque?limite_estoque=muito").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_stock_report_has_no_alerts() {
    let server = TestServer::spawn().await;

    let (status, body) = server.get("/api/relatorios/estoque").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resumo"]["total_ingredientes"], 0);
    assert_eq!(body["resumo"]["valor_total_estoque"], 0.0);
    assert_eq!(body["alertas"], json!([]));
}

#[tokio::test]
async fn configured_threshold_drives_the_default_report() {
    let config = AppConfig {
        low_stock_threshold: 1.0,
        ..AppConfig::default()
    };
    let server = TestServer::spawn_with(config).await;

    server
        .post("/api/ingredientes", json!({"nome": "Sal", "preco_unitario": 2, "estoque_atual": 5}))
        .await;

    let (_, body) = server.get("/api/relatorios/estoque").await;
    assert_eq!(body["resumo"]["alertas_estoque_baixo"], 0);
}

#[tokio::test]
async fn ingredient_validation_and_lookup_errors() {
    let server = TestServer::spawn().await;

    let (status, body) = server.post("/api/ingredientes", json!({"preco_unitario": 2})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"].as_str().unwrap().contains("nome"));

    let (status, _) = server
        .post("/api/ingredientes", json!({"nome": "Sal", "estoque_atual": -3}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = server.get("/api/ingredientes/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server.get("/api/ingredientes/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn recipes_and_financial_report() {
    let server = TestServer::spawn().await;

    server
        .post("/api/ingredientes", json!({"nome": "Leite", "preco_unitario": 3.5, "estoque_atual": 20}))
        .await;
    server
        .post("/api/ingredientes", json!({"nome": "Chocolate", "preco_unitario": 12, "estoque_atual": 4}))
        .await;

    let (status, body) = server
        .post(
            "/api/receitas",
            json!({
                "nome": "Brigadeiro",
                "ingredientes": [1, "Manteiga"],
                "modo_preparo": "Misture e leve ao fogo.",
                "tempo_preparo": 20,
                "rendimento": 30
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["receita"]["id"], 1);
    assert_eq!(body["receita"]["ingredientes"], json!([1, "Manteiga"]));
    assert_eq!(body["receita"]["rendimento"], 30.0);

    let (status, body) = server.post("/api/receitas", json!({"nome": "Pão"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["receita"]["rendimento"], 1.0);
    assert_eq!(body["receita"]["modo_preparo"], "");

    let (status, _) = server.post("/api/receitas", json!({"nome": "Bolo", "rendimento": 0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = server.get("/api/receitas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let (status, body) = server.get("/api/receitas/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nome"], "Pão");

    let (status, body) = server.get("/api/relatorios/financeiro").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["relatorio"], "Financeiro");
    assert_eq!(body["resumo"]["total_receitas"], 2);
    assert_eq!(body["resumo"]["total_ingredientes"], 2);
    assert_eq!(body["resumo"]["custo_medio_ingredientes"], 7.75);
}

#[tokio::test]
async fn register_login_and_session() {
    let server = TestServer::spawn().await;

    let (status, body) = server
        .post(
            "/api/registro",
            json!({"nome": "Ana", "email": "Ana@Example.com", "senha": "brigadeiro"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["usuario"], json!({"nome": "Ana", "email": "ana@example.com"}));

    let (status, _) = server
        .post("/api/registro", json!({"nome": "Ana", "email": "ana@example.com", "senha": "x"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = server
        .post("/api/login", json!({"email": "ana@example.com", "senha": "brigadeiro"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let res = server
        .client
        .get(server.url("/api/sessao"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["usuario"]["email"], "ana@example.com");
    assert!(body["expira_em"].is_string());
}

#[tokio::test]
async fn bad_credentials_and_missing_sessions_are_unauthorized() {
    let server = TestServer::spawn().await;

    server
        .post("/api/registro", json!({"nome": "Ana", "email": "ana@example.com", "senha": "certa"}))
        .await;

    let (status, wrong_password) = server
        .post("/api/login", json!({"email": "ana@example.com", "senha": "errada"}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown_email) = server
        .post("/api/login", json!({"email": "ninguem@example.com", "senha": "certa"}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_email);

    let (status, _) = server.post("/api/registro", json!({"nome": "Sem email"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = server.get("/api/sessao").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let res = server
        .client
        .get(server.url("/api/sessao"))
        .bearer_auth("not.a.token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn static_catalogues() {
    let server = TestServer::spawn().await;

    let (status, body) = server.get("/api/planos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["planos"].as_array().unwrap().len(), 3);

    let (status, body) = server.get("/api/receitas-publicas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["receitas_publicas"][0]["nome"], "Brigadeiro Gourmet");
}
