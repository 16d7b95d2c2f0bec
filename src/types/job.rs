use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type JobId = i64;

/// Body of `POST /post_job`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    pub posted_by: String,
}

/// A stored posting. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub skills_required: Vec<String>,
    pub salary_range: Option<String>,
    pub posted_by: String,
    pub posted_at: DateTime<Utc>,
}

impl Job {
    pub fn from_posting(id: JobId, posting: JobPosting, posted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: posting.title,
            description: posting.description,
            location: posting.location,
            skills_required: posting.skills_required,
            salary_range: posting.salary_range,
            posted_by: posting.posted_by,
            posted_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostJobResponse {
    pub message: String,
    pub job_id: JobId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobList {
    pub jobs: Vec<Job>,
}
