//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// Register a user and return its id
async fn register_user(server: &TestServer) -> i64 {
    let response = server
        .post("/users/add", &AddUserRequest::unique())
        .await
        .unwrap();
    let body: IdResponse = assert_json(response, StatusCode::OK).await.unwrap();
    body.id
}

/// Create a chat between members and return its id
async fn create_chat(server: &TestServer, members: &[i64]) -> i64 {
    let response = server
        .post("/chats/add", &AddChatRequest::between(members))
        .await
        .unwrap();
    let body: IdResponse = assert_json(response, StatusCode::OK).await.unwrap();
    body.id
}

/// Post a message and return its id
async fn post_message(server: &TestServer, chat: i64, author: i64, text: &str) -> i64 {
    let response = server
        .post("/messages/add", &AddMessageRequest::new(chat, author, text))
        .await
        .unwrap();
    let body: IdResponse = assert_json(response, StatusCode::OK).await.unwrap();
    body.id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_add_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let id = register_user(&server).await;
    assert!(id > 0);
}

#[tokio::test]
async fn test_add_user_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = AddUserRequest::unique();

    let response = server.post("/users/add", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post("/users/add", &request).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert!(body.error.contains(&request.username));
}

// ============================================================================
// Chat Tests
// ============================================================================

#[tokio::test]
async fn test_add_chat() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await;
    let bob = register_user(&server).await;

    let id = create_chat(&server, &[alice, bob]).await;
    assert!(id > 0);
}

#[tokio::test]
async fn test_add_chat_rejects_single_member() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await;

    let response = server
        .post("/chats/add", &AddChatRequest::between(&[alice]))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_add_chat_rejects_unknown_member() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await;

    let response = server
        .post("/chats/add", &AddChatRequest::between(&[alice, i64::MAX]))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_add_chat_rejects_non_numeric_member_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = serde_json::json!({ "name": "g", "users": ["one", "two"] });
    let response = server.post("/chats/add", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_chats_unknown_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = GetChatsRequest {
        user: i64::MAX.to_string(),
    };
    let response = server.post("/chats/get", &request).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_chats_orders_by_activity() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await;
    let bob = register_user(&server).await;

    let first_chat = create_chat(&server, &[alice, bob]).await;
    let second_chat = create_chat(&server, &[alice, bob]).await;

    // Messages land in creation order, so the first chat becomes the most
    // recently active one
    post_message(&server, second_chat, bob, "early").await;
    post_message(&server, first_chat, alice, "late").await;

    let request = GetChatsRequest {
        user: alice.to_string(),
    };
    let response = server.post("/chats/get", &request).await.unwrap();
    let chats: Vec<ChatResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<i64> = chats.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first_chat, second_chat]);
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_add_message_unknown_author() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await;
    let bob = register_user(&server).await;
    let chat = create_chat(&server, &[alice, bob]).await;

    let response = server
        .post("/messages/add", &AddMessageRequest::new(chat, i64::MAX, "hi"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_add_message_unknown_chat() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await;

    let response = server
        .post("/messages/add", &AddMessageRequest::new(i64::MAX, alice, "hi"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_messages_unknown_chat() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = GetMessagesRequest {
        chat: i64::MAX.to_string(),
    };
    let response = server.post("/messages/get", &request).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_messages_orders_chronologically() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await;
    let bob = register_user(&server).await;
    let chat = create_chat(&server, &[alice, bob]).await;

    post_message(&server, chat, alice, "first").await;
    post_message(&server, chat, bob, "second").await;
    post_message(&server, chat, alice, "third").await;

    let request = GetMessagesRequest {
        chat: chat.to_string(),
    };
    let response = server.post("/messages/get", &request).await.unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

// ============================================================================
// End-to-end flow
// ============================================================================

#[tokio::test]
async fn test_full_messaging_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Two users and a chat between them
    let alice = register_user(&server).await;
    let bob = register_user(&server).await;
    let chat = create_chat(&server, &[alice, bob]).await;

    // Alice posts a message
    post_message(&server, chat, alice, "hi").await;

    // Alice's chat list contains the chat, hydrated with both members
    let request = GetChatsRequest {
        user: alice.to_string(),
    };
    let response = server.post("/chats/get", &request).await.unwrap();
    let chats: Vec<ChatResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let listed = chats.iter().find(|c| c.id == chat).expect("chat not listed");
    assert!(listed.users.contains(&alice.to_string()));
    assert!(listed.users.contains(&bob.to_string()));

    // The chat history holds exactly the one message
    let request = GetMessagesRequest {
        chat: chat.to_string(),
    };
    let response = server.post("/messages/get", &request).await.unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "hi");
    assert_eq!(messages[0].author, alice.to_string());
    assert_eq!(messages[0].chat, chat.to_string());
}
