//! End-to-end tests for the rewrite proxy.
//!
//! A wiremock server plays the chat-completions upstream; the proxy runs on
//! an ephemeral port and the studio talks to it over real HTTP.

mod common;

use std::net::SocketAddr;
use std::sync::Arc;

use common::StudioFixture;
use serde_json::json;
use serp_studio::adapters::ReqwestHttpClient;
use serp_studio::config::ProxySettings;
use serp_studio::error::StudioError;
use serp_studio::proxy::{start_rewrite_proxy_on, REWRITE_ROUTE};
use serp_studio::snippet::SnippetDraft;
use serp_studio::studio::Studio;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UPSTREAM_PATH: &str = "/v1/chat/completions";

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
}

async fn start_proxy(upstream: &MockServer, api_key: Option<&str>) -> SocketAddr {
    let mut settings = ProxySettings::default()
        .with_upstream(format!("{}{}", upstream.uri(), UPSTREAM_PATH))
        .with_model("gpt-test");
    if let Some(key) = api_key {
        settings = settings.with_api_key(key);
    }
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let (_handle, bound) = start_rewrite_proxy_on(addr, Arc::new(ReqwestHttpClient::new()), settings)
        .await
        .expect("proxy should start");
    bound
}

fn endpoint(addr: SocketAddr) -> String {
    format!("http://{}{}", addr, REWRITE_ROUTE)
}

// ============================================================================
// Raw proxy behaviour
// ============================================================================

#[tokio::test]
async fn test_proxy_relays_upstream_json() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPSTREAM_PATH))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({ "model": "gpt-test", "max_tokens": 150 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("A\nB")))
        .expect(1)
        .mount(&upstream)
        .await;
    let addr = start_proxy(&upstream, Some("sk-test")).await;

    let response = reqwest::Client::new()
        .post(endpoint(addr))
        .json(&json!({ "title": "Old", "description": "Older" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["choices"][0]["message"]["content"], "A\nB");
}

#[tokio::test]
async fn test_proxy_forwards_prompt() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("A\nB")))
        .mount(&upstream)
        .await;
    let addr = start_proxy(&upstream, None).await;

    reqwest::Client::new()
        .post(endpoint(addr))
        .json(&json!({ "title": "Shoes", "description": "Cheap shoes" }))
        .send()
        .await
        .unwrap();

    let received = upstream.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(
        sent["messages"][0]["content"],
        r#"Rewrite as SERP snippet. Title: "Shoes". Desc: "Cheap shoes"."#
    );
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_proxy_wraps_upstream_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&upstream)
        .await;
    let addr = start_proxy(&upstream, None).await;

    let response = reqwest::Client::new()
        .post(endpoint(addr))
        .json(&json!({ "title": "T", "description": "D" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "rate limited");
}

#[tokio::test]
async fn test_proxy_rejects_malformed_request() {
    let upstream = MockServer::start().await;
    let addr = start_proxy(&upstream, None).await;

    let response = reqwest::Client::new()
        .post(endpoint(addr))
        .header("Content-Type", "application/json")
        .body("{\"title\": 1}")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Studio through the proxy
// ============================================================================

fn studio_against(fixture: &StudioFixture, addr: SocketAddr) -> Studio {
    Studio::new(
        fixture.collaborators_with_http(Arc::new(ReqwestHttpClient::new())),
        endpoint(addr),
    )
    .with_draft(SnippetDraft::new("Old title", "Old description"))
}

#[tokio::test]
async fn test_studio_rewrite_end_to_end() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPSTREAM_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("Buy Shoes Online\nFree returns, fast shipping")),
        )
        .mount(&upstream)
        .await;
    let addr = start_proxy(&upstream, Some("sk-test")).await;
    let fixture = StudioFixture::new();
    let mut studio = studio_against(&fixture, addr);

    studio.rewrite().await.unwrap();

    let view = studio.view();
    assert_eq!(view.display_title, "Buy Shoes Online");
    assert_eq!(view.display_description, "Free returns, fast shipping");
    assert_eq!(fixture.store.value("rewriteCount").as_deref(), Some("1"));
}

#[tokio::test]
async fn test_studio_upstream_failure_consumes_quota() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&upstream)
        .await;
    let addr = start_proxy(&upstream, None).await;
    let fixture = StudioFixture::new();
    let mut studio = studio_against(&fixture, addr);

    let err = studio.rewrite().await.unwrap_err();

    assert!(matches!(err, StudioError::Backend { status: 500, .. }));
    assert_eq!(studio.quota().rewrite_count, 1);
    assert_eq!(studio.view().display_title, "Old title");
}

#[tokio::test]
async fn test_studio_unreachable_backend_keeps_quota() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fixture = StudioFixture::new();
    let mut studio = studio_against(&fixture, addr);

    let err = studio.rewrite().await.unwrap_err();

    assert!(matches!(err, StudioError::BackendUnreachable(_)));
    assert_eq!(studio.quota().rewrite_count, 0);
    assert!(!studio.session_state().is_in_flight());
}
