use tracing::{info, warn};

use crate::db::SeekrStore;
use crate::error::SeekrError;
use crate::types::job::{Job, JobId, JobPosting};
use crate::types::user::Role;

pub async fn post_job(store: &dyn SeekrStore, posting: JobPosting) -> Result<JobId, SeekrError> {
    let Some(poster) = store.find_user(&posting.posted_by).await? else {
        warn!(posted_by = %posting.posted_by, "job rejected: unknown poster");
        return Err(SeekrError::RecruiterNotRegistered);
    };
    if poster.role != Role::Recruiter {
        warn!(posted_by = %posting.posted_by, role = %poster.role, "job rejected: not a recruiter");
        return Err(SeekrError::Forbidden("Only recruiters can post jobs"));
    }

    let posted_by = posting.posted_by.clone();
    let job_id = store.insert_job(posting).await?;
    info!(job_id, %posted_by, "job posted");
    Ok(job_id)
}

pub async fn list_jobs(store: &dyn SeekrStore) -> Result<Vec<Job>, SeekrError> {
    store.list_jobs().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::service::accounts::signup;

    fn posting(by: &str) -> JobPosting {
        JobPosting {
            title: "Eng".into(),
            description: "d".into(),
            location: "NY".into(),
            skills_required: Vec::new(),
            salary_range: None,
            posted_by: by.into(),
        }
    }

    #[tokio::test]
    async fn only_registered_recruiters_can_post() {
        let store = MemoryStore::new();
        signup(&store, "s@x.com", "pw", Role::JobSeeker).await.unwrap();

        assert!(matches!(
            post_job(&store, posting("ghost@x.com")).await,
            Err(SeekrError::RecruiterNotRegistered)
        ));
        assert!(matches!(
            post_job(&store, posting("s@x.com")).await,
            Err(SeekrError::Forbidden(_))
        ));
        assert!(list_jobs(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn recruiter_gets_strictly_increasing_ids() {
        let store = MemoryStore::new();
        signup(&store, "r@x.com", "pw", Role::Recruiter).await.unwrap();

        let mut last = 0;
        for _ in 0..5 {
            let id = post_job(&store, posting("r@x.com")).await.unwrap();
            assert!(id > last);
            last = id;
        }
        assert_eq!(list_jobs(&store).await.unwrap().len(), 5);
    }
}
