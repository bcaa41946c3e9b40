use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fuzzmatch_engine::{
    dataset::{load_snapshot, FileDatasetProvider, HttpDatasetProvider},
    distance::kernel_by_name,
    DatasetSnapshot, MatchEngineError, RankingPipeline, RankingResult, DEFAULT_TOP_K,
};

#[derive(Clone)]
struct AppState {
    pipeline: Arc<RankingPipeline>,
    dataset: Arc<DatasetSnapshot>,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    query: String,
    #[serde(default = "default_top_k")]
    top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct DatasetResponse {
    source: String,
    candidates: usize,
    fetched_at: chrono::DateTime<chrono::Utc>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fuzzmatch_server=debug,fuzzmatch_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);
    let kernel_name = std::env::var("KERNEL").unwrap_or_else(|_| "rolling".to_string());

    tracing::info!("🚀 Starting FuzzMatch Engine Server");
    tracing::info!("🔌 Port: {}", port);
    tracing::info!("🧮 Kernel: {}", kernel_name);

    let kernel = kernel_by_name(&kernel_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown kernel: {}", kernel_name))?;

    // Fetch the dataset once at startup; failures leave an empty snapshot
    let dataset = load_startup_dataset().await;
    tracing::info!("📦 Dataset: {} candidates from {}", dataset.len(), dataset.source);

    let state = AppState {
        pipeline: Arc::new(RankingPipeline::new(kernel)),
        dataset,
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/search", post(search_handler))
        .route("/v1/dataset", get(dataset_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🎯 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn load_startup_dataset() -> Arc<DatasetSnapshot> {
    if let Ok(path) = std::env::var("DATASET_PATH") {
        return load_snapshot(&FileDatasetProvider::new(path)).await;
    }

    if let Ok(url) = std::env::var("DATASET_URL") {
        match HttpDatasetProvider::new(url) {
            Ok(provider) => return load_snapshot(&provider).await,
            Err(e) => tracing::warn!("HTTP provider setup failed: {}", e),
        }
    }

    Arc::new(DatasetSnapshot::empty("none"))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: fuzzmatch_engine::VERSION.to_string(),
    })
}

async fn search_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<RankingResult>, AppError> {
    tracing::debug!("Search request: {:?}", req);

    let pipeline = Arc::clone(&state.pipeline);
    let dataset = Arc::clone(&state.dataset);
    let query = req.query.clone();

    let result = tokio::task::spawn_blocking(move || {
        pipeline.rank(&query, &dataset.candidates, req.top_k)
    })
    .await
    .map_err(|e| MatchEngineError::ComputationFailed(e.to_string()))??;

    tracing::info!(
        "✅ {} → {} matches ({:.2}ms)",
        req.query,
        result.len(),
        result.elapsed_ms
    );

    Ok(Json(result))
}

async fn dataset_handler(State(state): State<AppState>) -> Json<DatasetResponse> {
    Json(DatasetResponse {
        source: state.dataset.source.clone(),
        candidates: state.dataset.len(),
        fetched_at: state.dataset.fetched_at,
    })
}

// Error handling
struct AppError(MatchEngineError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            MatchEngineError::InputTooLarge { len, max } => (
                StatusCode::BAD_REQUEST,
                format!("Input too large: {} characters exceeds limit of {}", len, max),
            ),
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<MatchEngineError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
