//! Bot API client tests against a local stub server
//!
//! The stub mimics the Bot API routing (`/bot<token>/<method>`) and answers
//! `ok: false` with HTTP 400, as Telegram does.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use guard_core::{BotApi, BotToken, ChatId, DomainError, MemberMethod, OutgoingMessage};
use guard_telegram::TelegramClient;
use serde_json::{json, Value};
use tokio::net::TcpListener;

type Seen = Arc<Mutex<Vec<(String, String, Value)>>>;

async fn stub_method(
    State(seen): State<Seen>,
    Path((bot, method)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    seen.lock().unwrap().push((bot, method, body.clone()));

    if body["chat_id"] == "@missing" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "ok": false, "error_code": 400, "description": "Bad Request: chat not found" })),
        );
    }
    (StatusCode::OK, Json(json!({ "ok": true, "result": true })))
}

async fn start_stub() -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/:bot/:method", post(stub_method))
        .with_state(seen.clone());

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (format!("http://{addr}"), seen)
}

fn chat(raw: &str) -> ChatId {
    ChatId::parse(raw).unwrap()
}

#[tokio::test]
async fn test_member_action_posts_to_method_path() {
    let (base_url, seen) = start_stub().await;
    let client = TelegramClient::new(format!("{base_url}/"), Duration::from_secs(5));
    let token = BotToken::new("123456:secret");

    let body = client
        .member_action(&token, MemberMethod::Unban, &chat("-1001"), &chat("42"))
        .await
        .unwrap();
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["ok"], true);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "bot123456:secret");
    assert_eq!(seen[0].1, "unbanChatMember");
    assert_eq!(seen[0].2, json!({ "chat_id": "-1001", "user_id": "42" }));
}

#[tokio::test]
async fn test_error_status_body_is_returned() {
    let (base_url, _seen) = start_stub().await;
    let client = TelegramClient::new(base_url, Duration::from_secs(5));

    let message = OutgoingMessage {
        chat_id: chat("@missing"),
        text: "hello".to_string(),
        reply_to_message_id: Some(3),
    };
    let body = client
        .send_message(&BotToken::new("1:x"), &message)
        .await
        .unwrap();

    let reply: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(reply["ok"], false);
    assert_eq!(reply["description"], "Bad Request: chat not found");
}

#[tokio::test]
async fn test_send_message_payload() {
    let (base_url, seen) = start_stub().await;
    let client = TelegramClient::new(base_url, Duration::from_secs(5));

    let message = OutgoingMessage {
        chat_id: chat("@abc"),
        text: "stop".to_string(),
        reply_to_message_id: None,
    };
    client
        .send_message(&BotToken::new("1:x"), &message)
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].1, "sendMessage");
    assert_eq!(seen[0].2, json!({ "chat_id": "@abc", "text": "stop" }));
}

#[tokio::test]
async fn test_unreachable_server_hides_token() {
    // Nothing listens on the discard port
    let client = TelegramClient::new("http://127.0.0.1:9", Duration::from_secs(2));
    let token = BotToken::new("987654:very-secret");

    let err = client
        .member_action(&token, MemberMethod::Ban, &chat("-1"), &chat("2"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::RemoteUnavailable(_)));
    assert!(!err.to_string().contains("very-secret"));
}
