use super::*;
use serde_json::json;

fn provider() -> OpenAIProvider {
    OpenAIProvider::new(Some("test-key".to_string())).unwrap()
}

#[test]
fn test_provider_id() {
    assert_eq!(provider().id(), "openai");
}

#[test]
fn test_provider_defaults() {
    let provider = provider();
    assert_eq!(provider.model(), "gpt-4o-mini");
    assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn test_custom_url_and_model() {
    let provider = OpenAIProvider::with_url(Some("key".to_string()), "https://custom.api/v1/")
        .unwrap()
        .with_model("gpt-4o");
    assert_eq!(provider.base_url(), "https://custom.api/v1");
    assert_eq!(provider.model(), "gpt-4o");
}

#[test]
fn test_missing_api_key_is_configuration_error() {
    // SAFETY: OPENAI_API_KEY is only written by this test
    unsafe {
        std::env::remove_var(API_KEY_ENV);
    }
    let err = OpenAIProvider::new(None).unwrap_err();
    assert!(matches!(err, ProviderError::Configuration(_)));
    assert!(err.to_string().contains(API_KEY_ENV));

    let err = OpenAIProvider::new(Some(String::new())).unwrap_err();
    assert!(matches!(err, ProviderError::Configuration(_)));
}

#[test]
fn test_build_request_basic() {
    let request = provider().build_request("Hello", &GenerateOptions::default().with_max_tokens(256));
    assert_eq!(request.model, "gpt-4o-mini");
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, "user");
    assert_eq!(request.messages[0].content, "Hello");
    assert_eq!(request.max_tokens, 256);
    assert!(request.functions.is_none());
    assert!((request.temperature - 0.2).abs() < f32::EPSILON);
}

#[test]
fn test_build_request_with_functions() {
    let options = GenerateOptions::default().with_functions(vec![json!({"name": "lookup"})]);
    let request = provider().build_request("Hi", &options);
    assert_eq!(request.functions.unwrap().len(), 1);
}

#[test]
fn test_build_request_empty_functions_omitted() {
    let options = GenerateOptions::default().with_functions(Vec::new());
    let request = provider().build_request("Hi", &options);
    assert!(request.functions.is_none());
}

// Wiremock-based tests for actual HTTP calls
mod http_tests {
    use super::*;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> OpenAIProvider {
        OpenAIProvider::with_url(Some("test-key".to_string()), server.uri()).unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_generate_success() {
        let mock_server = MockServer::start().await;

        let response_body = json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello back!"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        });

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/chat/completions"))
            .and(matchers::header("authorization", "Bearer test-key"))
            .and(matchers::body_partial_json(json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "Hello"}],
                "max_tokens": 64,
                "temperature": 0.2
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = provider_for(&mock_server)
            .generate("Hello", GenerateOptions::default().with_max_tokens(64))
            .await
            .unwrap();

        assert_eq!(result.text, "Hello back!");
        assert_eq!(result.usage["prompt_tokens"], 10);
        assert_eq!(result.usage["total_tokens"], 15);
        assert!(result.function_call.is_none());
        assert_eq!(result.raw, response_body);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_generate_function_call() {
        let mock_server = MockServer::start().await;

        let response_body = json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "function_call": {
                        "name": "read_file",
                        "arguments": "{\"path\": \"test.txt\"}"
                    }
                },
                "finish_reason": "function_call"
            }],
            "usage": {"prompt_tokens": 20, "completion_tokens": 15, "total_tokens": 35}
        });

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/chat/completions"))
            .and(matchers::body_partial_json(json!({
                "functions": [{"name": "read_file"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = GenerateOptions::default().with_functions(vec![json!({"name": "read_file"})]);
        let result = provider_for(&mock_server)
            .generate("Read test.txt", options)
            .await
            .unwrap();

        assert_eq!(result.text, "");
        let call = result.function_call.unwrap();
        assert_eq!(call.name, "read_file");
        assert_eq!(call.arguments["path"], "test.txt");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_generate_unexpected_shape_is_tolerated() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&mock_server)
            .await;

        let result = provider_for(&mock_server)
            .generate("Hello", GenerateOptions::default())
            .await
            .unwrap();
        assert_eq!(result.text, "");
        assert!(result.usage.is_empty());
        assert!(result.function_call.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_generate_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = provider_for(&mock_server)
            .generate("Hello", GenerateOptions::default())
            .await;
        match result.unwrap_err() {
            ProviderError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("Internal Server Error"));
            }
            other => panic!("Expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_generate_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"error": {"message": "Incorrect API key provided"}})),
            )
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server)
            .generate("Hello", GenerateOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("Incorrect API key"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_generate_malformed_body_propagates() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server)
            .generate("Hello", GenerateOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_generate_network_error() {
        // Nothing listens on the discard port.
        let provider =
            OpenAIProvider::with_url(Some("test-key".to_string()), "http://127.0.0.1:9").unwrap();
        let err = provider
            .generate("Hello", GenerateOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Network(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_generates_share_one_provider() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "ok"}}]
            })))
            .expect(4)
            .mount(&mock_server)
            .await;

        let provider = Arc::new(provider_for(&mock_server));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let provider = Arc::clone(&provider);
                tokio::spawn(async move {
                    provider
                        .generate(&format!("prompt {i}"), GenerateOptions::default())
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap().text, "ok");
        }
    }
}
