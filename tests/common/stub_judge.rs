//! Local stand-in for an OpenAI-compatible chat-completions endpoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::Value;
use tokio::net::TcpListener;

pub const STUB_API_KEY: &str = "sk-stub-judge";

/// What the stub replies to every request.
#[derive(Debug, Clone)]
pub enum StubJudgeReply {
    /// 200 with a chat completion whose message content is this string.
    Content(String),
    /// Bare status code, empty body.
    Status(StatusCode),
    /// Sleep, then reply with a valid verdict.
    Delay(Duration),
}

impl StubJudgeReply {
    pub fn verdict(
        factual_accuracy: f64,
        consistency: f64,
        reasoning: f64,
        alignment: f64,
        fake_news: f64,
    ) -> Self {
        StubJudgeReply::Content(
            serde_json::json!({
                "factual_accuracy": factual_accuracy,
                "consistency": consistency,
                "reasoning": reasoning,
                "alignment": alignment,
                "fake_news": fake_news,
            })
            .to_string(),
        )
    }
}

#[derive(Clone)]
struct StubState {
    reply: StubJudgeReply,
    hits: Arc<AtomicUsize>,
}

pub struct StubJudge {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl StubJudge {
    pub fn endpoint(&self) -> String {
        format!("http://{}/v1/chat/completions", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn completion_with_content(content: &str) -> Value {
    serde_json::json!({
        "id": "chatcmpl-stub",
        "object": "chat.completion",
        "created": 1702512000_u32,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 8, "total_tokens": 18}
    })
}

async fn stub_handler(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(_body): Json<Value>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {STUB_API_KEY}"));
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match state.reply {
        StubJudgeReply::Content(content) => Json(completion_with_content(&content)).into_response(),
        StubJudgeReply::Status(status) => status.into_response(),
        StubJudgeReply::Delay(delay) => {
            tokio::time::sleep(delay).await;
            let verdict = r#"{"factual_accuracy":1,"consistency":1,"reasoning":1,"alignment":1,"fake_news":0}"#;
            Json(completion_with_content(verdict)).into_response()
        }
    }
}

pub async fn spawn_stub_judge(reply: StubJudgeReply) -> std::io::Result<StubJudge> {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/v1/chat/completions", post(stub_handler))
        .with_state(StubState {
            reply,
            hits: hits.clone(),
        });

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(StubJudge { addr, hits })
}

/// An endpoint on a port nothing listens on.
pub async fn unreachable_endpoint() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/v1/chat/completions"))
}
