#![allow(dead_code)]

use axum_test::TestServer;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use domain_shortener::domain::entities::{Link, LinkTable, Settings};
use domain_shortener::domain::repositories::{KeyValueStore, LINKS_KEY, SETTINGS_KEY};
use domain_shortener::infrastructure::persistence::MemoryKeyValueStore;
use domain_shortener::routes::router;
use domain_shortener::state::AppState;
use std::sync::Arc;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "password123";

/// State over an empty in-memory store, so both documents are bootstrapped.
pub async fn create_test_state() -> AppState {
    AppState::load(Arc::new(MemoryKeyValueStore::new()))
        .await
        .unwrap()
}

/// State over an in-memory store seeded with the given documents.
pub async fn create_seeded_state(settings: &Settings, links: &LinkTable) -> AppState {
    let kv = Arc::new(MemoryKeyValueStore::new());
    kv.write(SETTINGS_KEY, serde_json::to_vec(settings).unwrap())
        .await
        .unwrap();
    kv.write(LINKS_KEY, serde_json::to_vec(links).unwrap())
        .await
        .unwrap();

    AppState::load(kv).await.unwrap()
}

/// Settings with a single domain `a.com` and a single link `promo`.
pub fn example_documents() -> (Settings, LinkTable) {
    let settings: Settings = serde_json::from_value(serde_json::json!({
        "port": 3000,
        "adminDomain": "admin.example.com",
        "adminUsername": ADMIN_USER,
        "adminPassword": ADMIN_PASSWORD,
        "domains": { "a.com": { "defaultRedirect": "https://fallback-a" } }
    }))
    .unwrap();

    let mut links = LinkTable::new();
    links.insert("promo".to_string(), Link::new("https://x", "a.com"));

    (settings, links)
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

pub fn admin_auth() -> String {
    basic_auth(ADMIN_USER, ADMIN_PASSWORD)
}
