//! HTTP tests for [`gemini_client::GeminiClient::generate_content`] against a mockito server.

use gemini_client::{extract_text, GeminiClient};
use mockito::Matcher;
use serde_json::json;

const TEST_API_KEY: &str = "test-gemini-key-123456";
const GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";

fn expected_body(text: &str) -> serde_json::Value {
    json!({ "contents": [ { "role": "user", "parts": [ { "text": text } ] } ] })
}

/// **Test: Request carries key header and user text; JSON response is returned.**
#[tokio::test]
async fn generate_content_returns_json_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", TEST_API_KEY)
        .match_body(Matcher::Json(expected_body("What is 2+2?")))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"4"}],"role":"model"}}]}"#)
        .create_async()
        .await;

    let client = GeminiClient::with_base_url(TEST_API_KEY.to_string(), server.url());
    let response = client
        .generate_content("gemini-1.5-flash", "What is 2+2?")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(extract_text(response.as_ref()), "4");
}

/// **Test: `models/` prefix on the model name and a trailing slash on the base URL are tolerated.**
#[tokio::test]
async fn generate_content_normalizes_model_and_base_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(r#"{"text":"ok"}"#)
        .create_async()
        .await;

    let client = GeminiClient::with_base_url(TEST_API_KEY.to_string(), format!("{}/", server.url()));
    let response = client
        .generate_content("models/gemini-1.5-flash", "hi")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(extract_text(response.as_ref()), "ok");
}

/// **Test: Empty and `null` bodies are reported as an absent response.**
#[tokio::test]
async fn generate_content_empty_body_is_none() {
    let mut server = mockito::Server::new_async().await;
    let _empty = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = GeminiClient::with_base_url(TEST_API_KEY.to_string(), server.url());
    let response = client.generate_content("gemini-1.5-flash", "hi").await.unwrap();
    assert!(response.is_none());

    let mut server = mockito::Server::new_async().await;
    let _null = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let client = GeminiClient::with_base_url(TEST_API_KEY.to_string(), server.url());
    let response = client.generate_content("gemini-1.5-flash", "hi").await.unwrap();
    assert!(response.is_none());
}

/// **Test: A non-success status is an error carrying the status and body.**
#[tokio::test]
async fn generate_content_error_status_is_err() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(403)
        .with_body(r#"{"error":{"code":403,"message":"API key not valid"}}"#)
        .create_async()
        .await;

    let client = GeminiClient::with_base_url(TEST_API_KEY.to_string(), server.url());
    let err = client
        .generate_content("gemini-1.5-flash", "hi")
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("403"), "unexpected error: {msg}");
    assert!(msg.contains("API key not valid"), "unexpected error: {msg}");
}

/// **Test: Connection failure is an error, not a panic.**
#[tokio::test]
async fn generate_content_unreachable_server_is_err() {
    let client =
        GeminiClient::with_base_url(TEST_API_KEY.to_string(), "http://127.0.0.1:9".to_string());
    assert!(client.generate_content("gemini-1.5-flash", "hi").await.is_err());
}

/// **Test: A response carrying `usageMetadata` (including a non-numeric count) is returned intact.**
#[tokio::test]
async fn generate_content_with_usage_metadata() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(
            r#"{"text":"4","usageMetadata":{"promptTokenCount":6,"candidatesTokenCount":"n/a","totalTokenCount":7}}"#,
        )
        .create_async()
        .await;

    let client = GeminiClient::with_base_url(TEST_API_KEY.to_string(), server.url());
    let response = client
        .generate_content("gemini-1.5-flash", "What is 2+2?")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(response["usageMetadata"]["totalTokenCount"], 7);
    assert_eq!(extract_text(Some(&response)), "4");
}
