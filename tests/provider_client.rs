use std::time::Duration;

use serde_json::json;
use videogen::infrastructure::provider::{GeminiVideoProvider, Operation, ProviderError, VideoProvider};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer) -> GeminiVideoProvider {
    GeminiVideoProvider::new(&server.uri(), "veo-test", "secret", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn submit_posts_prompt_with_credential_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/veo-test:predictLongRunning"))
        .and(header("x-goog-api-key", "secret"))
        .and(body_json(json!({
            "instances": [{ "prompt": "Explain gravity" }],
            "parameters": { "sampleCount": 1 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-test/operations/op1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let operation = provider(&server).submit("Explain gravity").await.unwrap();

    assert_eq!(operation.name, "models/veo-test/operations/op1");
    assert!(!operation.done);
}

#[tokio::test]
async fn refresh_reads_completed_operation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models/veo-test/operations/op1"))
        .and(header("x-goog-api-key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-test/operations/op1",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [
                        { "video": { "uri": "https://files.example/abc:download?alt=media" } }
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let pending = Operation::pending("models/veo-test/operations/op1");
    let operation = provider(&server).refresh(&pending).await.unwrap();

    assert!(operation.done);
    assert_eq!(
        operation.download_link(),
        Some("https://files.example/abc:download?alt=media")
    );
}

#[tokio::test]
async fn non_success_status_carries_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let err = provider(&server).submit("Explain gravity").await.unwrap_err();

    match err {
        ProviderError::UnexpectedStatus { status, text } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(text, "API key not valid");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn garbage_body_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .refresh(&Operation::pending("operations/x"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Request(_)));
}
