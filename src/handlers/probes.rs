use axum::{extract::State, http::StatusCode};

use crate::{SeekrError, router::SeekrState};

/// GET /healthz -> 200 once the store answers.
pub async fn healthz(State(state): State<SeekrState>) -> Result<StatusCode, SeekrError> {
    state.store.ping().await?;
    tracing::debug!("service is healthy");
    Ok(StatusCode::OK)
}
