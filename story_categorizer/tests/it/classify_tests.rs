use super::*;
use serial_test::serial;
use wiremock::matchers::{body_partial_json, header, header_exists};

#[tokio::test]
async fn grief_story_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o",
            "temperature": 0.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Grief & Loss")))
        .expect(1)
        .mount(&server)
        .await;

    let result = categorizer(&server).classify(SAMPLE_STORY).await.unwrap();
    assert_eq!(result, ClassificationResult::Category("Grief & Loss".to_string()));

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(
        messages[0]["content"],
        "You are a helpful assistant that classifies stories into predefined categories."
    );
    assert_eq!(messages[1]["role"], "user");
    let prompt = messages[1]["content"].as_str().unwrap();
    assert!(prompt.contains(&format!("Story: \"{SAMPLE_STORY}\"")));
    assert!(prompt.contains(&CategorySet::default().joined()));
}

#[tokio::test]
async fn padded_reply_is_trimmed() {
    let server = MockServer::start().await;
    mount_reply(&server, "  Grief & Loss  \n").await;

    let result = categorizer(&server).classify("story").await.unwrap();
    assert_eq!(result, "Grief & Loss");
}

#[tokio::test]
async fn explanation_is_uncategorized() {
    let server = MockServer::start().await;
    mount_reply(
        &server,
        "The story is best described as Grief & Loss because the narrator lost a friend.",
    )
    .await;

    let result = categorizer(&server).classify("story").await.unwrap();
    assert_eq!(result, ClassificationResult::Uncategorized);
}

#[tokio::test]
async fn wrong_case_is_uncategorized() {
    let server = MockServer::start().await;
    mount_reply(&server, "grief & loss").await;

    let result = categorizer(&server).classify("story").await.unwrap();
    assert_eq!(result.to_string(), UNCATEGORIZED);
}

#[tokio::test]
async fn empty_story_is_sent_unchanged() {
    let server = MockServer::start().await;
    mount_reply(&server, "Not Sure").await;

    let result = categorizer(&server).classify("").await.unwrap();
    assert!(result.is_uncategorized());

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert!(body["messages"][1]["content"]
        .as_str()
        .unwrap()
        .contains("Story: \"\""));
}

#[tokio::test]
async fn auth_failure_is_a_service_error() {
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
        .expect(1)
        .mount(&server)
        .await;

    let err = categorizer(&server).classify("story").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn rate_limit_is_a_service_error_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": {"message": "Rate limit reached", "type": "requests", "param": null, "code": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = categorizer(&server).classify("story").await.unwrap_err();
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn unreachable_service_is_a_service_error() {
    // Bind and release a port so nothing is listening on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let categorizer = Categorizer::openai()
        .with_api_host(format!("http://127.0.0.1:{port}"))
        .with_api_key("sk-test")
        .logging_enabled(false)
        .init()
        .unwrap();

    let err = categorizer.classify("story").await.unwrap_err();
    assert_eq!(err.status(), None);
    assert!(matches!(
        err.source,
        story_interface::requests::CompletionError::ClientError(_)
    ));
}

#[tokio::test]
async fn model_override_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({"model": "gpt-4o-mini"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Academic Pressure")))
        .expect(1)
        .mount(&server)
        .await;

    let categorizer = Categorizer::openai()
        .model_id("gpt-4o-mini")
        .with_api_host(server.uri())
        .with_api_key("sk-test")
        .logging_enabled(false)
        .init()
        .unwrap();
    let result = categorizer.classify("Finals are next week.").await.unwrap();
    assert_eq!(result, "Academic Pressure");
}

#[tokio::test]
#[serial]
async fn api_key_read_from_env_var() {
    std::env::set_var("STORY_CATEGORIZER_TEST_KEY", "sk-from-env");
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-from-env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Trauma & PTSD")))
        .expect(1)
        .mount(&server)
        .await;

    let categorizer = Categorizer::openai()
        .with_api_host(server.uri())
        .with_api_key_env_var("STORY_CATEGORIZER_TEST_KEY")
        .logging_enabled(false)
        .init()
        .unwrap();
    std::env::remove_var("STORY_CATEGORIZER_TEST_KEY");

    // The key was read once at construction.
    let result = categorizer.classify("story").await.unwrap();
    assert_eq!(result, "Trauma & PTSD");
}

#[tokio::test]
#[serial]
async fn missing_api_key_surfaces_at_call_time() {
    std::env::remove_var("STORY_CATEGORIZER_MISSING_KEY");
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Grief & Loss")))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"message": "You didn't provide an API key.", "type": "invalid_request_error", "param": null, "code": null}
        })))
        .mount(&server)
        .await;

    let categorizer = Categorizer::openai()
        .with_api_host(server.uri())
        .with_api_key_env_var("STORY_CATEGORIZER_MISSING_KEY")
        .logging_enabled(false)
        .init()
        .unwrap();

    let err = categorizer.classify("story").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}
