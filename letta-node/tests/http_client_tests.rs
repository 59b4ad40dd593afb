//! Tests for the HTTP dispatcher against a mock Letta server

use letta_node::{
    build_message_request, HttpClient, HttpError, LettaCredentials, MessageDispatcher,
    MessageRole, SendMessageOptions,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials(server: &MockServer) -> LettaCredentials {
    LettaCredentials::new(server.uri(), "test-key")
}

#[tokio::test]
async fn test_post_hits_messages_endpoint_with_bearer_auth() {
    let mock_server = MockServer::start().await;

    let response = json!({
        "messages": [
            { "id": "msg_123", "role": "assistant", "content": "Hello! How can I help you?" }
        ],
        "usage": { "step_count": 1 }
    });

    Mock::given(method("POST"))
        .and(path("/v1/agents/agent_abc123/messages"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_json(json!({
            "messages": [{ "role": "user", "content": "Hello!" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let body = build_message_request(MessageRole::User, "Hello!", &SendMessageOptions::default());

    let result = client
        .send_message(&credentials(&mock_server), "agent_abc123", &body)
        .await
        .unwrap();

    assert_eq!(result, response);
}

#[tokio::test]
async fn test_optional_fields_reach_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/agents/agent_xyz789/messages"))
        .and(body_json(json!({
            "messages": [{ "role": "user", "content": "Test with options" }],
            "max_steps": 20,
            "use_assistant_message": false,
            "enable_thinking": true,
            "include_return_message_types": ["reasoning_message", "reasoning_message"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = SendMessageOptions::default()
        .with_max_steps(20)
        .with_enable_thinking(true)
        .with_use_assistant_message(false)
        .with_return_message_types(["internal_monologue", "reasoning"]);
    let body = build_message_request(MessageRole::User, "Test with options", &options);

    let client = HttpClient::new().unwrap();
    client
        .send_message(&credentials(&mock_server), "agent_xyz789", &body)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "bad token"})))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let body = build_message_request(MessageRole::User, "hi", &SendMessageOptions::default());

    let err = client
        .send_message(&credentials(&mock_server), "agent_a", &body)
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::AuthenticationFailed));
}

#[tokio::test]
async fn test_not_found_carries_agent_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "agent missing"})))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let body = build_message_request(MessageRole::User, "hi", &SendMessageOptions::default());

    let err = client
        .send_message(&credentials(&mock_server), "agent_gone", &body)
        .await
        .unwrap_err();
    match err {
        HttpError::AgentNotFound { agent_id } => assert_eq!(agent_id, "agent_gone"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_extracts_detail_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "agent run crashed"})),
        )
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let body = build_message_request(MessageRole::User, "hi", &SendMessageOptions::default());

    let err = client
        .send_message(&credentials(&mock_server), "agent_a", &body)
        .await
        .unwrap_err();
    match err {
        HttpError::ServerError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 500);
            assert_eq!(message, "agent run crashed");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure_is_a_network_error() {
    // Nothing listens on this port.
    let creds = LettaCredentials::new("http://127.0.0.1:9", "test-key");
    let client = HttpClient::new().unwrap();
    let body = build_message_request(MessageRole::User, "hi", &SendMessageOptions::default());

    let err = client.send_message(&creds, "agent_a", &body).await.unwrap_err();
    assert!(matches!(err, HttpError::NetworkError { .. }));
}

#[tokio::test]
async fn test_verify_credentials_probes_agent_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/agents"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    client
        .verify_credentials(&credentials(&mock_server))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_verify_credentials_rejects_bad_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/agents"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .verify_credentials(&credentials(&mock_server))
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::AuthenticationFailed));
}
