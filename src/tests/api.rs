use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nudgeboard_ai::{NudgeAiError, NudgeAiResult, NudgeContext, PromptGenerator};
use nudgeboard_data::MockDashboard;

use crate::service::{AppState, healthcheck_router, router};

#[derive(Clone, Copy)]
enum StubReply {
    Text(&'static str),
    Upstream(u16),
    Configuration,
}

struct StubGenerator {
    calls: Arc<AtomicUsize>,
    reply: StubReply,
}

impl PromptGenerator for StubGenerator {
    async fn generate(&self, _context: NudgeContext) -> NudgeAiResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.reply {
            StubReply::Text(text) => Ok(text.to_string()),
            StubReply::Upstream(status) => Err(NudgeAiError::Upstream(status)),
            StubReply::Configuration => Err(NudgeAiError::Configuration),
        }
    }
}

async fn spawn_api(reply: StubReply) -> (SocketAddr, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let generator = StubGenerator {
        calls: Arc::clone(&calls),
        reply,
    };
    let data = MockDashboard::new(&nudgeboard_data::Config {
        simulated_delay_ms: 0,
    });

    let state = AppState {
        generator: Arc::new(generator),
        data: Arc::new(data),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");

    tokio::spawn(async move {
        axum::serve(listener, router(state))
            .await
            .expect("server failed");
    });

    (addr, calls)
}

#[tokio::test]
async fn test_generate_prompt_returns_generated_message() {
    let (addr, calls) = spawn_api(StubReply::Text("Hi Jane, great work!")).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/generate-prompt"))
        .json(&serde_json::json!({
            "clientName": "Jane Doe",
            "task": r#"Completed "Develop Social Media Strategy" module"#,
        }))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["generatedMessage"], "Hi Jane, great work!");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_500() {
    let (addr, _calls) = spawn_api(StubReply::Upstream(503)).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/generate-prompt"))
        .json(&serde_json::json!({ "clientName": "Jane Doe", "task": "anything" }))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["error"], "API call failed with status: 503");
}

#[tokio::test]
async fn test_configuration_failure_maps_to_500() {
    let (addr, _calls) = spawn_api(StubReply::Configuration).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/generate-prompt"))
        .json(&serde_json::json!({ "clientName": "Jane Doe", "task": "anything" }))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["error"], "API key is not configured");
}

#[tokio::test]
async fn test_malformed_request_body_is_a_client_error() {
    let (addr, calls) = spawn_api(StubReply::Text("unused")).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/generate-prompt"))
        .json(&serde_json::json!({ "clientName": "Jane Doe" }))
        .send()
        .await
        .expect("request");

    assert!(response.status().is_client_error());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_dashboard_serves_snapshot() {
    let (addr, _calls) = spawn_api(StubReply::Text("unused")).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/api/dashboard"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["stats"]["clientsOnTrack"], 14);
    assert_eq!(body["recentActivity"][0]["client"], "Jane Doe");
    assert_eq!(body["recentActivity"][0]["status"], "completed");
}

#[tokio::test]
async fn test_healthcheck_responds_ok() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");

    tokio::spawn(async move {
        axum::serve(listener, healthcheck_router())
            .await
            .expect("healthcheck failed");
    });

    let response = reqwest::get(format!("http://{addr}/health"))
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.expect("body"), "OK");
}
