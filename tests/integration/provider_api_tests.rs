/*!
 * Provider API integration tests against a simulated chat-completions server
 */

use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gutentrans::errors::ProviderError;
use gutentrans::providers::openai::OpenAI;
use gutentrans::providers::{CompletionRequest, Provider};
use crate::common;

const MODEL: &str = "aisingapore/Gemma-SEA-LION-v4-27B-IT";

fn client(server: &MockServer) -> OpenAI {
    OpenAI::new("sk-test", server.uri(), MODEL, Duration::from_secs(5))
}

fn request(text: &str) -> CompletionRequest {
    CompletionRequest {
        system: "You are a professional translator".to_string(),
        user: text.to_string(),
        max_tokens: 4000,
        temperature: 0.3,
    }
}

async fn respond_with(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

/// The request carries auth, model, both messages and sampling settings
#[tokio::test]
async fn test_complete_withValidResponse_shouldReturnTextAndUsage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(serde_json::json!({
            "model": MODEL,
            "max_tokens": 4000,
            "messages": [
                {"role": "system", "content": "You are a professional translator"},
                {"role": "user", "content": "Good evening"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::completion_body("สวัสดีตอนเย็น")))
        .expect(1)
        .mount(&server)
        .await;

    let completion = client(&server).complete(request("Good evening")).await.unwrap();

    assert_eq!(completion.text, "สวัสดีตอนเย็น");
    assert_eq!(completion.prompt_tokens, Some(12));
    assert_eq!(completion.completion_tokens, Some(7));
}

/// A trailing slash on the endpoint does not double up in the URL
#[tokio::test]
async fn test_complete_withTrailingSlashEndpoint_shouldHitSamePath() {
    let server = respond_with(ResponseTemplate::new(200).set_body_json(common::completion_body("ok"))).await;
    let client = OpenAI::new("sk-test", format!("{}/", server.uri()), MODEL, Duration::from_secs(5));

    assert_eq!(client.complete(request("x")).await.unwrap().text, "ok");
}

/// A response without usage still yields text
#[tokio::test]
async fn test_complete_withoutUsage_shouldLeaveTokensEmpty() {
    let body = serde_json::json!({"choices": [{"message": {"role": "assistant", "content": "Xin chào"}}]});
    let server = respond_with(ResponseTemplate::new(200).set_body_json(body)).await;

    let completion = client(&server).complete(request("Hello")).await.unwrap();

    assert_eq!(completion.text, "Xin chào");
    assert_eq!(completion.prompt_tokens, None);
}

/// Partial or null usage counts never fail an otherwise good response
#[tokio::test]
async fn test_complete_withPartialUsage_shouldReturnText() {
    let bodies = [
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Xin chào"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": null}
        }),
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Xin chào"}}],
            "usage": {"total_tokens": 10}
        }),
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Xin chào"}}],
            "usage": "unavailable"
        }),
    ];
    let expected_prompt_tokens = [Some(10), None, None];

    for (body, prompt_tokens) in bodies.into_iter().zip(expected_prompt_tokens) {
        let server = respond_with(ResponseTemplate::new(200).set_body_json(body)).await;

        let completion = client(&server).complete(request("Hello")).await.unwrap();

        assert_eq!(completion.text, "Xin chào");
        assert_eq!(completion.prompt_tokens, prompt_tokens);
        assert_eq!(completion.completion_tokens, None);
    }
}

/// Server errors surface as API errors with the status
#[tokio::test]
async fn test_complete_withServerError_shouldReturnApiError() {
    let server = respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded")).await;

    let error = client(&server).complete(request("Hello")).await.unwrap_err();

    match error {
        ProviderError::ApiError { status_code, message } => {
            assert_eq!(status_code, 500);
            assert!(message.contains("upstream exploded"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// 401 and 429 get their own variants
#[tokio::test]
async fn test_complete_withAuthAndRateLimitStatus_shouldClassify() {
    let server = respond_with(ResponseTemplate::new(401)).await;
    assert!(matches!(
        client(&server).complete(request("a")).await,
        Err(ProviderError::AuthenticationError(_))
    ));

    let server = respond_with(ResponseTemplate::new(429)).await;
    assert!(matches!(
        client(&server).complete(request("a")).await,
        Err(ProviderError::RateLimitExceeded(_))
    ));
}

/// A body that is not JSON is a parse error
#[tokio::test]
async fn test_complete_withMalformedJson_shouldReturnParseError() {
    let server = respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    assert!(matches!(
        client(&server).complete(request("a")).await,
        Err(ProviderError::ParseError(_))
    ));
}

/// Null content, no choices and blank content all count as empty
#[tokio::test]
async fn test_complete_withMissingContent_shouldReturnEmptyResponse() {
    let bodies = [
        serde_json::json!({"choices": [{"message": {"role": "assistant", "content": null}}]}),
        serde_json::json!({"choices": []}),
        common::completion_body("   "),
    ];

    for body in bodies {
        let server = respond_with(ResponseTemplate::new(200).set_body_json(body)).await;
        assert!(matches!(
            client(&server).complete(request("a")).await,
            Err(ProviderError::EmptyResponse)
        ));
    }
}

/// Nothing listening is a connection error
#[tokio::test]
async fn test_complete_withClosedPort_shouldReturnConnectionError() {
    let client = OpenAI::new("sk-test", "http://127.0.0.1:9/v1", MODEL, Duration::from_secs(2));

    assert!(matches!(
        client.complete(request("a")).await,
        Err(ProviderError::ConnectionError(_))
    ));
}
