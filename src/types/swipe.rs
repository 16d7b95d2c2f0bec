use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SeekrError;
use crate::types::job::{Job, JobId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Skip,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeAction::Like => "like",
            SwipeAction::Skip => "skip",
        }
    }

    /// Past tense used in the acknowledgement message.
    pub fn past_tense(&self) -> &'static str {
        match self {
            SwipeAction::Like => "liked",
            SwipeAction::Skip => "skipped",
        }
    }
}

impl fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwipeAction {
    type Err = SeekrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(SwipeAction::Like),
            "skip" => Ok(SwipeAction::Skip),
            other => Err(SeekrError::InvalidSwipeAction(other.to_string())),
        }
    }
}

/// Body of `POST /swipe_job`. `action` stays a raw string so a bad value
/// surfaces as a 400 from the service rather than an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct SwipeRequest {
    pub email: String,
    pub job_id: JobId,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LikedJobs {
    Found { liked_jobs: Vec<Job> },
    NoneFound { message: String },
}

impl LikedJobs {
    pub fn from_jobs(jobs: Vec<Job>) -> Self {
        if jobs.is_empty() {
            LikedJobs::NoneFound {
                message: "No liked jobs found".to_string(),
            }
        } else {
            LikedJobs::Found { liked_jobs: jobs }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_like_and_skip_parse() {
        assert_eq!("like".parse::<SwipeAction>().unwrap(), SwipeAction::Like);
        assert_eq!("skip".parse::<SwipeAction>().unwrap(), SwipeAction::Skip);
        for bad in ["Like", "superlike", ""] {
            assert!(matches!(
                bad.parse::<SwipeAction>(),
                Err(SeekrError::InvalidSwipeAction(_))
            ));
        }
    }

    #[test]
    fn empty_likes_render_as_message() {
        let body = serde_json::to_value(LikedJobs::from_jobs(Vec::new())).unwrap();
        assert_eq!(body, serde_json::json!({"message": "No liked jobs found"}));
    }
}
