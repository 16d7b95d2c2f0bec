use axum::{Json, extract::State};

use crate::middleware::extract::{JsonBody, QueryParams};
use crate::service::swipes;
use crate::types::MessageResponse;
use crate::types::swipe::{LikedJobs, SwipeRequest};
use crate::types::user::EmailQuery;
use crate::{SeekrError, router::SeekrState};

/// POST /swipe_job
pub async fn swipe_job_handler(
    State(state): State<SeekrState>,
    JsonBody(req): JsonBody<SwipeRequest>,
) -> Result<Json<MessageResponse>, SeekrError> {
    let action = swipes::swipe(state.store.as_ref(), &req.email, req.job_id, &req.action).await?;
    Ok(Json(MessageResponse::new(format!(
        "Job {} successfully.",
        action.past_tense()
    ))))
}

/// GET /liked_jobs?email=...
pub async fn liked_jobs_handler(
    State(state): State<SeekrState>,
    QueryParams(query): QueryParams<EmailQuery>,
) -> Result<Json<LikedJobs>, SeekrError> {
    let jobs = swipes::liked_jobs(state.store.as_ref(), &query.email).await?;
    Ok(Json(LikedJobs::from_jobs(jobs)))
}
