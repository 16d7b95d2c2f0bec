use axum::{Json, extract::State};

use crate::middleware::extract::JsonBody;
use crate::service::jobs;
use crate::types::job::{JobList, JobPosting, PostJobResponse};
use crate::{SeekrError, router::SeekrState};

/// POST /post_job
pub async fn post_job_handler(
    State(state): State<SeekrState>,
    JsonBody(posting): JsonBody<JobPosting>,
) -> Result<Json<PostJobResponse>, SeekrError> {
    let job_id = jobs::post_job(state.store.as_ref(), posting).await?;
    Ok(Json(PostJobResponse {
        message: "Job posted!".to_string(),
        job_id,
    }))
}

/// GET /list_jobs
pub async fn list_jobs_handler(
    State(state): State<SeekrState>,
) -> Result<Json<JobList>, SeekrError> {
    let jobs = jobs::list_jobs(state.store.as_ref()).await?;
    Ok(Json(JobList { jobs }))
}
