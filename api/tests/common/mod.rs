#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::TestServer;
use clap::Parser;
use lumina_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tokio::sync::Notify;

/// base64 of "photo"
pub const PHOTO_B64: &str = "cGhvdG8=";
/// base64 of "edited"
pub const EDITED_B64: &str = "ZWRpdGVk";

/// Menu text containing this marker makes the fake parse call fail.
pub const FAILING_MENU: &str = "UNREADABLE";
/// Dishes whose name contains this marker fail to generate.
pub const FAILING_DISH: &str = "Burnt";
/// Menu text containing this marker holds the parse call until `release_parse`.
pub const SLOW_MENU: &str = "SLOW";

/// Minimal stand-in for the Gemini REST endpoints, recording every `model:method` it serves.
#[derive(Clone, Default)]
pub struct FakeGemini {
    calls: Arc<Mutex<Vec<String>>>,
    dishes: Arc<Mutex<Vec<(String, String)>>>,
    parse_started: Arc<Notify>,
    parse_release: Arc<Notify>,
}

impl FakeGemini {
    pub fn with_menu(dishes: &[(&str, &str)]) -> Self {
        let fake = Self::default();
        *fake.dishes.lock().unwrap() = dishes
            .iter()
            .map(|(name, description)| (name.to_string(), description.to_string()))
            .collect();
        fake
    }

    pub fn calls_to(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.ends_with(method))
            .count()
    }

    /// Resolves once a held parse call has reached the fake service.
    pub async fn parse_started(&self) {
        self.parse_started.notified().await;
    }

    pub fn release_parse(&self) {
        self.parse_release.notify_one();
    }

    async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/models/{*target}", post(fake_model))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }
}

fn first_text(body: &Value) -> String {
    body["contents"][0]["parts"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|part| part["text"].as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_candidate(text: String) -> Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

async fn fake_model(
    Path(target): Path<String>,
    State(fake): State<FakeGemini>,
    Json(body): Json<Value>,
) -> Response {
    fake.calls.lock().unwrap().push(target.clone());

    let method = target.split_once(':').map(|(_, m)| m).unwrap_or_default();
    let config = &body["generation_config"];
    let prompt = first_text(&body);

    match method {
        "predict" => Json(json!({
            "predictions": [{ "bytesBase64Encoded": PHOTO_B64, "mimeType": "image/jpeg" }]
        }))
        .into_response(),
        "generateContent" if config.get("response_schema").is_some() => {
            if prompt.contains(FAILING_MENU) {
                return (StatusCode::TOO_MANY_REQUESTS, "quota exceeded").into_response();
            }
            if prompt.contains(SLOW_MENU) {
                fake.parse_started.notify_one();
                fake.parse_release.notified().await;
            }
            let items: Vec<Value> = fake
                .dishes
                .lock()
                .unwrap()
                .iter()
                .map(|(name, description)| json!({ "name": name, "description": description }))
                .collect();
            Json(text_candidate(Value::Array(items).to_string())).into_response()
        }
        "generateContent" if config.get("response_modalities").is_some() => {
            if prompt.contains("impossible") {
                return Json(json!({ "candidates": [] })).into_response();
            }
            Json(json!({
                "candidates": [{ "content": { "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": EDITED_B64 } }
                ] } }]
            }))
            .into_response()
        }
        "generateContent" => {
            if prompt.contains(FAILING_DISH) {
                return (StatusCode::INTERNAL_SERVER_ERROR, "model overloaded").into_response();
            }
            Json(text_candidate("Overhead studio shot, soft light".to_string())).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Builds the full Lumina router against a freshly spawned fake generation service.
pub async fn studio(fake: &FakeGemini) -> TestServer {
    let base_url = fake.spawn().await;

    let args = Args::parse_from([
        "lumina-api",
        "--gemini-api-key",
        "test-key",
        "--gemini-base-url",
        &base_url,
        "--text-model",
        "fake-text",
        "--image-model",
        "fake-image",
        "--edit-model",
        "fake-edit",
        "--allowed-origins",
        "http://localhost:5173",
    ]);

    let state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

pub async fn parse(server: &TestServer, text: &str) -> Vec<Value> {
    let response = server.post("/menu/parse").json(&json!({ "text": text })).await;
    response.assert_status_ok();
    response.json::<Value>()["data"].as_array().cloned().unwrap()
}

pub fn id_of(dish: &Value) -> String {
    dish["id"].as_str().unwrap().to_string()
}
