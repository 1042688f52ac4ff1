use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use nano_banana::error::GENERATION_FAILED;
use nano_banana::{
    Config, GeminiPromptGenerator, ImageInput, PromptError, PromptGenerator, Style, UploadedFile,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct FakeGemini {
    status: StatusCode,
    reply: Value,
    received: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
}

async fn generate_content(
    State(fake): State<FakeGemini>,
    Path(model_call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    fake.received.lock().unwrap().push((model_call, key, body));
    (fake.status, Json(fake.reply.clone()))
}

/// Starts a fake Gemini API and returns its base URL.
async fn start(fake: FakeGemini) -> String {
    let app = Router::new()
        .route("/v1beta/models/:model_call", post(generate_content))
        .with_state(fake);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1beta")
}

fn fake(status: StatusCode, reply: Value) -> FakeGemini {
    FakeGemini {
        status,
        reply,
        received: Arc::default(),
    }
}

fn cat() -> ImageInput {
    ImageInput::accept(UploadedFile::new("cat.png", "image/png", b"meow".to_vec())).unwrap()
}

fn generator(base: String) -> GeminiPromptGenerator {
    GeminiPromptGenerator::new(
        Config::default()
            .with_api_key("test-key")
            .with_api_base(base),
    )
}

#[tokio::test]
async fn test_returns_text_verbatim() {
    let fake = fake(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": {"parts": [{"text": "Cinematic, a fluffy cat on a windowsill, golden hour"}]},
                "finishReason": "STOP"
            }]
        }),
    );
    let received = fake.received.clone();
    let base = start(fake).await;

    let prompt = generator(base)
        .generate(&cat(), Style::Cinematic)
        .await
        .unwrap();
    assert_eq!(prompt.text, "Cinematic, a fluffy cat on a windowsill, golden hour");
    assert_eq!(prompt.model, "gemini-2.5-flash");

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (model_call, key, body) = &received[0];
    assert_eq!(model_call, "gemini-2.5-flash:generateContent");
    assert_eq!(key.as_deref(), Some("test-key"));

    let parts = body["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
    assert_eq!(parts[0]["inlineData"]["data"], "bWVvdw==");
    assert!(parts[1]["text"]
        .as_str()
        .unwrap()
        .contains("the style or keyword: 'Cinematic'"));
}

#[tokio::test]
async fn test_empty_text_is_generic_failure() {
    let base = start(fake(
        StatusCode::OK,
        json!({"candidates": [{"content": {"parts": [{"text": ""}]}}]}),
    ))
    .await;

    let err = generator(base)
        .generate(&cat(), Style::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PromptError::Generation(_)));
    assert_eq!(err.to_string(), GENERATION_FAILED);
}

#[tokio::test]
async fn test_api_error_is_generic_failure() {
    let base = start(fake(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({"error": {"code": 503, "message": "The model is overloaded."}}),
    ))
    .await;

    let err = generator(base)
        .generate(&cat(), Style::Realistic)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), GENERATION_FAILED);
    assert!(!err.to_string().contains("overloaded"));
}

#[tokio::test]
async fn test_blocked_prompt_is_generic_failure() {
    let base = start(fake(
        StatusCode::OK,
        json!({"promptFeedback": {"blockReason": "SAFETY"}}),
    ))
    .await;

    let err = generator(base)
        .generate(&cat(), Style::SmoothFace)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), GENERATION_FAILED);
}

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let fake = fake(StatusCode::OK, json!({}));
    let received = fake.received.clone();
    let base = start(fake).await;

    let generator = GeminiPromptGenerator::new(Config::default().with_api_base(base));
    let err = generator
        .generate(&cat(), Style::default())
        .await
        .unwrap_err();

    assert!(matches!(err, PromptError::NotConfigured("GEMINI_API_KEY")));
    assert!(received.lock().unwrap().is_empty());
}
