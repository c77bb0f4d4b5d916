//! Wire contract of the HTTP chat backend, checked against a mock server.

use mockito::{Matcher, Server};
use serde_json::json;
use todo_assistant::backend::{ChatBackend, ChatError, HttpChatBackend};
use todo_assistant::config::ClientConfig;
use todo_assistant::session::{ChatSession, run_turn};
use todo_assistant::types::{ChatMessage, ChatRequest};

fn backend_for(server: &Server, user_id: &str) -> HttpChatBackend {
    HttpChatBackend::new(ClientConfig {
        api_url: server.url(),
        user_id: user_id.to_string(),
    })
}

#[tokio::test]
async fn test_posts_json_to_user_chat_endpoint() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/alice/chat")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "message": "Show my tasks",
            "conversation_id": 12
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "conversation_id": 12,
                "response": "You have no tasks.",
                "tool_calls": [
                    {"tool": "list_tasks", "arguments": {"status": "all"}, "result": {"tasks": []}}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let backend = backend_for(&server, "alice");
    let reply = backend
        .send(&ChatRequest {
            message: "Show my tasks".to_string(),
            conversation_id: Some(12),
        })
        .await?;

    mock.assert_async().await;
    assert_eq!(reply.conversation_id, 12);
    assert_eq!(reply.response, "You have no tasks.");
    let calls = reply.tool_calls.unwrap_or_default();
    assert_eq!(
        calls[0].summary(),
        r#"list_tasks({"status":"all"}) → {"tasks":[]}"#
    );
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/test-user-123/chat")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let backend = backend_for(&server, "test-user-123");
    let err = backend
        .send(&ChatRequest {
            message: "hi".to_string(),
            conversation_id: None,
        })
        .await
        .unwrap_err();

    match err {
        ChatError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/bob/chat")
        .with_status(200)
        .with_body(r#"{"reply":"missing fields"}"#)
        .create_async()
        .await;

    let backend = backend_for(&server, "bob");
    let err = backend
        .send(&ChatRequest {
            message: "hi".to_string(),
            conversation_id: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_reported_in_transcript() {
    let config = ClientConfig {
        api_url: "http://127.0.0.1:1".to_string(),
        user_id: "alice".to_string(),
    };
    let backend = HttpChatBackend::new(config);
    let mut session = ChatSession::new();
    session.set_input("Add a task to buy groceries");

    assert!(run_turn(&mut session, &backend).await);

    let last = session.transcript().last().unwrap();
    assert_eq!(last.role, todo_assistant::types::Role::Assistant);
    assert!(last.content.contains("http://127.0.0.1:1"));
    assert!(!session.is_in_flight());
}

#[tokio::test]
async fn test_session_over_http_keeps_id_on_server_error() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("POST", "/api/alice/chat")
        .match_body(Matcher::PartialJson(json!({"conversation_id": null})))
        .with_status(200)
        .with_body(r#"{"conversation_id":1,"response":"Added!","tool_calls":[]}"#)
        .create_async()
        .await;
    let second = server
        .mock("POST", "/api/alice/chat")
        .match_body(Matcher::PartialJson(json!({"conversation_id": 1})))
        .with_status(500)
        .create_async()
        .await;

    let backend = backend_for(&server, "alice");
    let mut session = ChatSession::new();
    session.set_input("Add a task to buy groceries");
    run_turn(&mut session, &backend).await;
    session.set_input("Show my tasks");
    run_turn(&mut session, &backend).await;

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(session.conversation_id(), Some(1));
    let transcript = session.transcript();
    assert_eq!(transcript[2], ChatMessage::user("Show my tasks"));
    assert!(transcript[3].content.contains(&server.url()));
}
