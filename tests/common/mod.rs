#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use species_gateway::config::Settings;
use species_gateway::routes::create_router;
use species_gateway::state::AppState;
use tower::util::ServiceExt;

pub const TEST_API_KEY: &str = "sk-test-0123456789";

pub fn bulbasaur() -> Value {
    let base = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";
    json!({
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "order": 1,
        "is_default": true,
        "sprites": {
            "front_default": format!("{base}/1.png"),
            "front_shiny": format!("{base}/shiny/1.png"),
            "front_female": format!("{base}/female/1.png"),
            "front_shiny_female": format!("{base}/shiny/female/1.png"),
            "back_default": format!("{base}/back/1.png"),
            "back_shiny": format!("{base}/back/shiny/1.png"),
            "back_female": format!("{base}/back/female/1.png"),
            "back_shiny_female": format!("{base}/back/shiny/female/1.png"),
            "other": { "home": { "front_default": null } }
        }
    })
}

pub fn build_app(species_base: &str, chat_base: &str, api_key: Option<&str>) -> Router {
    let settings = Settings::from_lookup(|name| match name {
        "SPECIES_API_BASE_URL" => Some(species_base.to_string()),
        "CHAT_API_BASE_URL" => Some(chat_base.to_string()),
        "CHAT_API_KEY" => api_key.map(str::to_string),
        _ => None,
    })
    .unwrap();
    let state = Arc::new(AppState::from_settings(&settings).unwrap());
    create_router().with_state(state)
}

pub async fn post_graphql(app: &Router, body: Value) -> (StatusCode, HeaderMap, Bytes) {
    let req = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body)
}
