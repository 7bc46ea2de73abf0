use crate::core::processor::ReceiptProcessor;
use crate::core::{ConfigProvider, Receipt, ScoreStore};
use crate::domain::model::{ErrorResponse, PointsResponse, ProcessResponse};
use crate::utils::error::{ErrorCategory, ReceiptError, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router<S: ScoreStore + 'static>(processor: Arc<ReceiptProcessor<S>>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt::<S>))
        .route("/receipts/{id}/points", get(get_points::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(processor)
}

async fn process_receipt<S: ScoreStore + 'static>(
    State(processor): State<Arc<ReceiptProcessor<S>>>,
    payload: std::result::Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>> {
    let Json(receipt) = payload.map_err(|rejection| ReceiptError::MalformedRequest {
        message: rejection.body_text(),
    })?;

    let record = processor.process(receipt)?;
    Ok(Json(ProcessResponse { id: record.id }))
}

async fn get_points<S: ScoreStore + 'static>(
    State(processor): State<Arc<ReceiptProcessor<S>>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let points = processor.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let message = match self.category() {
            ErrorCategory::Client | ErrorCategory::NotFound => self.to_string(),
            ErrorCategory::Configuration | ErrorCategory::System => {
                tracing::error!("Request failed: {}", self);
                self.user_friendly_message()
            }
        };
        (self.status_code(), Json(ErrorResponse { error: message })).into_response()
    }
}

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
pub async fn serve<C, S>(config: &C, processor: Arc<ReceiptProcessor<S>>) -> Result<()>
where
    C: ConfigProvider,
    S: ScoreStore + 'static,
{
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(processor))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
