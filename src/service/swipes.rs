use tracing::{debug, info};

use crate::db::SeekrStore;
use crate::error::SeekrError;
use crate::types::job::{Job, JobId};
use crate::types::swipe::SwipeAction;
use crate::types::user::Role;

/// Record a like/skip. The action value is checked before anything is
/// looked up, so an invalid action is always a 400.
pub async fn swipe(
    store: &dyn SeekrStore,
    email: &str,
    job_id: JobId,
    action: &str,
) -> Result<SwipeAction, SeekrError> {
    let action: SwipeAction = action.parse()?;

    let user = store
        .find_user(email)
        .await?
        .ok_or(SeekrError::UserNotFound)?;
    if user.role != Role::JobSeeker {
        return Err(SeekrError::Forbidden("Only job seekers can swipe."));
    }
    if store.find_job(job_id).await?.is_none() {
        debug!(%email, job_id, "swipe on unknown job");
        return Err(SeekrError::JobNotFound(job_id));
    }

    store.record_swipe(email, job_id, action).await?;
    info!(%email, job_id, %action, "swipe recorded");
    Ok(action)
}

pub async fn liked_jobs(store: &dyn SeekrStore, email: &str) -> Result<Vec<Job>, SeekrError> {
    let user = store
        .find_user(email)
        .await?
        .ok_or(SeekrError::UserNotFound)?;
    if user.role != Role::JobSeeker {
        return Err(SeekrError::Forbidden("Only job seekers can like."));
    }
    store.liked_jobs(email).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::service::accounts::signup;
    use crate::service::jobs::post_job;
    use crate::types::job::JobPosting;

    async fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        signup(&store, "r@x.com", "pw", Role::Recruiter).await.unwrap();
        signup(&store, "s@x.com", "pw", Role::JobSeeker).await.unwrap();
        for title in ["Eng", "Ops"] {
            post_job(
                &store,
                JobPosting {
                    title: title.into(),
                    description: "d".into(),
                    location: "NY".into(),
                    skills_required: vec!["rust".into()],
                    salary_range: None,
                    posted_by: "r@x.com".into(),
                },
            )
            .await
            .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn invalid_action_wins_over_every_other_failure() {
        let store = seeded().await;
        for (email, job_id) in [("s@x.com", 1), ("ghost@x.com", 1), ("r@x.com", 1), ("s@x.com", 42)] {
            assert!(matches!(
                swipe(&store, email, job_id, "superlike").await,
                Err(SeekrError::InvalidSwipeAction(_))
            ));
        }
    }

    #[tokio::test]
    async fn swipe_checks_user_role_and_job() {
        let store = seeded().await;
        assert!(matches!(
            swipe(&store, "ghost@x.com", 1, "like").await,
            Err(SeekrError::UserNotFound)
        ));
        assert!(matches!(
            swipe(&store, "r@x.com", 1, "like").await,
            Err(SeekrError::Forbidden(_))
        ));
        assert!(matches!(
            swipe(&store, "s@x.com", 42, "like").await,
            Err(SeekrError::JobNotFound(42))
        ));
        assert_eq!(swipe(&store, "s@x.com", 2, "skip").await.unwrap(), SwipeAction::Skip);
    }

    #[tokio::test]
    async fn liked_jobs_returns_likes_in_order() {
        let store = seeded().await;
        assert!(liked_jobs(&store, "s@x.com").await.unwrap().is_empty());

        swipe(&store, "s@x.com", 2, "like").await.unwrap();
        swipe(&store, "s@x.com", 1, "skip").await.unwrap();
        swipe(&store, "s@x.com", 1, "like").await.unwrap();

        let titles: Vec<String> = liked_jobs(&store, "s@x.com")
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.title)
            .collect();
        assert_eq!(titles, vec!["Ops", "Eng"]);
    }

    #[tokio::test]
    async fn liked_jobs_rejects_unknown_and_recruiters() {
        let store = seeded().await;
        assert!(matches!(
            liked_jobs(&store, "ghost@x.com").await,
            Err(SeekrError::UserNotFound)
        ));
        assert!(matches!(
            liked_jobs(&store, "r@x.com").await,
            Err(SeekrError::Forbidden(_))
        ));
    }
}
