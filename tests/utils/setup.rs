use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use okey_scorekeeper::{routes, AppState, InMemoryKeyValueStore, KeyValueStore};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub store: Arc<dyn KeyValueStore>,
    pub state: AppState,
    pub app: Router,
}

pub struct TestSetupBuilder {
    store: Option<Arc<dyn KeyValueStore>>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { store: None }
    }

    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub async fn build(self) -> TestSetup {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryKeyValueStore::new()));
        let state = AppState::initialize(store.clone()).await;
        let app = routes::router(state.clone());

        TestSetup { store, state, app }
    }
}

impl TestSetup {
    /// Sends a request and returns the status with the parsed JSON body
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    pub async fn send_ok<T: DeserializeOwned>(&self, method: &str, uri: &str, body: Option<Value>) -> T {
        let (status, value) = self.send(method, uri, body).await;
        assert_eq!(status, StatusCode::OK, "unexpected response: {value}");
        serde_json::from_value(value).unwrap()
    }

    /// Reloads every store from the same backend, as on an app restart
    pub async fn restart(&self) -> AppState {
        AppState::initialize(self.store.clone()).await
    }
}
