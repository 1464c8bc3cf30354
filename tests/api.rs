mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use common::test_state;
use serde_json::Value;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    time::{timeout, Duration},
};
use tower::ServiceExt;
use twenty_twenty_twenty::{create_router, serve};

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn start_and_stop_round_trip() {
    let (state, alerter) = test_state(1200);
    let app = create_router(state.clone());

    let (status, body) = call(&app, Method::POST, "/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["timer"]["running"], true);
    assert!(body["timer"]["next_break_at"].is_string());

    let (_, body) = call(&app, Method::GET, "/status").await;
    assert_eq!(body["running"], true);
    assert_eq!(body["interval_seconds"], 1200);
    assert_eq!(body["last_action"], "start");
    let remaining = body["remaining_seconds"].as_i64().unwrap();
    assert!((1195..=1200).contains(&remaining));
    assert!(body["label"].as_str().unwrap().starts_with("Next: "));

    let (status, body) = call(&app, Method::POST, "/stop").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "stopped");
    assert_eq!(body["timer"]["next_break_at"], Value::Null);

    let (_, body) = call(&app, Method::GET, "/status").await;
    assert_eq!(body["running"], false);
    assert_eq!(body["label"], "Not running");
    assert_eq!(body["remaining_seconds"], Value::Null);
    assert_eq!(alerter.count(), 0);
}

#[tokio::test]
async fn test_alert_fires_without_starting() {
    let (state, alerter) = test_state(1200);
    let app = create_router(state);

    let (status, body) = call(&app, Method::POST, "/test-alert").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alerted");
    assert_eq!(body["timer"]["running"], false);
    assert_eq!(alerter.count(), 1);
}

#[tokio::test]
async fn quit_reports_and_requests_shutdown() {
    let (state, _alerter) = test_state(1200);
    let app = create_router(state.clone());

    call(&app, Method::POST, "/start").await;
    let (status, body) = call(&app, Method::POST, "/quit").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "quitting");
    assert_eq!(body["timer"]["running"], false);

    timeout(Duration::from_secs(1), state.quit_requested())
        .await
        .unwrap();
}

#[tokio::test]
async fn indicator_describes_glyph() {
    let (state, _alerter) = test_state(1200);
    let app = create_router(state);

    let (status, body) = call(&app, Method::GET, "/indicator").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "Not running");
    assert_eq!(body["glyph"]["size"], 64);
    assert_eq!(body["disc"]["left"], 16);
    assert_eq!(body["disc"]["right"], 48);
}

#[tokio::test]
async fn health_is_ok() {
    let (state, _alerter) = test_state(1200);
    let app = create_router(state);

    let (status, body) = call(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn quit_reply_is_delivered_before_exit() {
    let (state, _alerter) = test_state(1200);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(serve(listener, state.clone()));

    state.start().unwrap();

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"POST /quit HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = Vec::new();
    timeout(Duration::from_secs(5), stream.read_to_end(&mut raw))
        .await
        .unwrap()
        .unwrap();

    let reply = String::from_utf8(raw).unwrap();
    assert!(reply.starts_with("HTTP/1.1 200"), "unexpected reply: {}", reply);
    let (_, body) = reply.split_once("\r\n\r\n").unwrap();
    let body: Value = serde_json::from_str(body).unwrap();
    assert_eq!(body["status"], "quitting");
    assert_eq!(body["timer"]["running"], false);

    timeout(Duration::from_secs(5), server)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert!(!state.get_timer_state().unwrap().running);
}
