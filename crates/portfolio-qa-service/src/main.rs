//! Local HTTP service for the portfolio Q&A assistant.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use portfolio_qa_api::AnswerResolver;
use portfolio_qa_core::ConversationTurn;
use portfolio_qa_model::ChatModelClient;
use portfolio_qa_store::JsonFileStore;
use serde::{Deserialize, Serialize};

const MISSING_QUESTION_ERROR: &str = "Question is required";
const INTERNAL_ERROR: &str = "Failed to generate answer";

#[derive(Debug, Clone)]
struct ServiceState {
    resolver: AnswerResolver<JsonFileStore, ChatModelClient>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AskRequest {
    question: Option<String>,
    context: Option<String>,
    #[serde(default)]
    conversation_history: Vec<ConversationTurn>,
}

#[derive(Debug, Clone, Serialize)]
struct AskResponse {
    answer: String,
    source: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Parser)]
#[command(name = "portfolio-qa-service")]
#[command(about = "Local HTTP service for the portfolio Q&A assistant")]
struct Args {
    #[arg(long, default_value = "127.0.0.1:4020")]
    bind: SocketAddr,
    #[arg(long, default_value = "./data/knowledge_base.json")]
    kb: PathBuf,
    #[arg(long, default_value = "./data/documents.json")]
    documents: PathBuf,
}

fn app(state: ServiceState) -> Router {
    Router::new()
        .route("/v1/health", get(health))
        .route("/api/qa-assistant", post(qa_assistant))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let store = JsonFileStore::new(&args.kb, &args.documents);
    let resolver = AnswerResolver::from_env(store);
    if resolver.has_model() {
        tracing::info!("model tier configured, remote answering enabled");
    } else {
        tracing::info!("no model credential, answering from local rules only");
    }

    let state = ServiceState { resolver };
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!(bind = %args.bind, "listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// The single answering endpoint.
///
/// The body is parsed by hand so a malformed payload maps onto the 500
/// contract instead of the framework's extractor rejection. A missing, null,
/// or blank `question` is the one validation error clients can observe;
/// everything past validation is guaranteed to produce a 200 with an answer.
async fn qa_assistant(State(state): State<ServiceState>, body: String) -> Response {
    let Ok(request) = serde_json::from_str::<AskRequest>(&body) else {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: INTERNAL_ERROR }))
            .into_response();
    };

    let question = request.question.as_deref().map(str::trim).unwrap_or_default();
    if question.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(ErrorBody { error: MISSING_QUESTION_ERROR }))
            .into_response();
    }

    let resolved = state
        .resolver
        .resolve(question, request.context.as_deref(), &request.conversation_history)
        .await;

    (
        StatusCode::OK,
        Json(AskResponse { answer: resolved.answer, source: resolved.source.as_str() }),
    )
        .into_response()
}
