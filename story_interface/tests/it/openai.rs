use super::*;
use story_interface::llms::ClientError;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, ResponseTemplate,
};

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-abc",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 2, "total_tokens": 14}
    })
}

#[tokio::test]
async fn posts_chat_completion_and_reads_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_json(serde_json::json!({
            "model": "gpt-4o",
            "messages": [
                {"role": "system", "content": "You are terse."},
                {"role": "user", "content": "Hello, world!"}
            ],
            "temperature": 0.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hi.")))
        .expect(1)
        .mount(&server)
        .await;

    let res = backend(&server)
        .completion_request(&request())
        .await
        .unwrap();
    assert_eq!(res.id, "chatcmpl-abc");
    assert_eq!(res.content, "Hi.");
    assert_eq!(res.finish_reason, CompletionFinishReason::Eos);
    assert_eq!(res.token_usage.total_tokens, 14);
}

#[tokio::test]
async fn unauthorized_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;

    let err = backend(&server)
        .completion_request(&request())
        .await
        .unwrap_err();
    match err {
        CompletionError::ClientError(ClientError::ApiError { status, error }) => {
            assert_eq!(status, 401);
            assert_eq!(error.code.as_deref(), Some("invalid_api_key"));
            assert_eq!(error.message, "Incorrect API key provided");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": {"message": "Rate limit reached", "type": "requests", "param": null, "code": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = backend(&server)
        .completion_request(&request())
        .await
        .unwrap_err();
    match err {
        CompletionError::ClientError(e) => assert_eq!(e.status(), Some(429)),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = backend(&server)
        .completion_request(&request())
        .await
        .unwrap_err();
    match err {
        CompletionError::ClientError(ClientError::ApiError { status, error }) => {
            assert_eq!(status, 502);
            assert_eq!(error.message, "Bad Gateway");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"unexpected": true})))
        .mount(&server)
        .await;

    let err = backend(&server)
        .completion_request(&request())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CompletionError::ClientError(ClientError::JSONDeserialize(_))
    ));
}

#[tokio::test]
async fn empty_choices_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-empty",
            "choices": []
        })))
        .mount(&server)
        .await;

    let err = backend(&server)
        .completion_request(&request())
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::ResponseChoicesEmpty));
}

#[tokio::test]
async fn slow_service_hits_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("late"))
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let backend = LlmInterface::openai()
        .with_api_host(server.uri())
        .with_api_key("sk-test")
        .with_request_timeout(std::time::Duration::from_millis(100))
        .logging_enabled(false)
        .init()
        .unwrap();
    let err = backend.completion_request(&request()).await.unwrap_err();
    match err {
        CompletionError::ClientError(ClientError::Reqwest(e)) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {other}"),
    }
}
