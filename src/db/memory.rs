use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::db::SeekrStore;
use crate::error::SeekrError;
use crate::types::job::{Job, JobId, JobPosting};
use crate::types::swipe::SwipeAction;
use crate::types::user::{Profile, User};

#[derive(Default)]
struct Tables {
    users: HashMap<String, User>,
    // BTreeMap keeps list_jobs in id order
    jobs: BTreeMap<JobId, Job>,
    last_job_id: JobId,
    swipes: HashMap<String, Vec<(JobId, SwipeAction)>>,
}

/// Process-local store. Each call takes the lock once, so a check-and-insert
/// inside a single method is atomic, but nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeekrStore for MemoryStore {
    async fn find_user(&self, email: &str) -> Result<Option<User>, SeekrError> {
        Ok(self.tables.read().await.users.get(email).cloned())
    }

    async fn insert_user(&self, user: User) -> Result<(), SeekrError> {
        let mut tables = self.tables.write().await;
        if tables.users.contains_key(&user.email) {
            return Err(SeekrError::EmailTaken);
        }
        tables.users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn save_profile(&self, email: &str, profile: Profile) -> Result<bool, SeekrError> {
        let mut tables = self.tables.write().await;
        match tables.users.get_mut(email) {
            Some(user) => {
                user.profile = Some(profile);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_job(&self, posting: JobPosting) -> Result<JobId, SeekrError> {
        let mut tables = self.tables.write().await;
        tables.last_job_id += 1;
        let id = tables.last_job_id;
        tables
            .jobs
            .insert(id, Job::from_posting(id, posting, Utc::now()));
        Ok(id)
    }

    async fn find_job(&self, id: JobId) -> Result<Option<Job>, SeekrError> {
        Ok(self.tables.read().await.jobs.get(&id).cloned())
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, SeekrError> {
        Ok(self.tables.read().await.jobs.values().cloned().collect())
    }

    async fn record_swipe(
        &self,
        email: &str,
        job_id: JobId,
        action: SwipeAction,
    ) -> Result<(), SeekrError> {
        self.tables
            .write()
            .await
            .swipes
            .entry(email.to_string())
            .or_default()
            .push((job_id, action));
        Ok(())
    }

    async fn liked_jobs(&self, email: &str) -> Result<Vec<Job>, SeekrError> {
        let tables = self.tables.read().await;
        let Some(log) = tables.swipes.get(email) else {
            return Ok(Vec::new());
        };
        Ok(log
            .iter()
            .filter(|(_, action)| *action == SwipeAction::Like)
            .filter_map(|(job_id, _)| tables.jobs.get(job_id).cloned())
            .collect())
    }

    async fn ping(&self) -> Result<(), SeekrError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::user::Role;

    fn posting(title: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            description: "d".to_string(),
            location: "NY".to_string(),
            skills_required: Vec::new(),
            salary_range: None,
            posted_by: "r@x.com".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_user_rejects_duplicates() {
        let store = MemoryStore::new();
        store
            .insert_user(User::new("a@x.com", "pw", Role::JobSeeker))
            .await
            .unwrap();
        assert!(matches!(
            store
                .insert_user(User::new("a@x.com", "pw", Role::Recruiter))
                .await,
            Err(SeekrError::EmailTaken)
        ));
    }

    #[tokio::test]
    async fn job_ids_start_at_one() {
        let store = MemoryStore::new();
        assert_eq!(store.insert_job(posting("A")).await.unwrap(), 1);
        assert_eq!(store.insert_job(posting("B")).await.unwrap(), 2);
        let titles: Vec<String> = store
            .list_jobs()
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.title)
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn liked_jobs_follow_recording_order_and_ignore_skips() {
        let store = MemoryStore::new();
        for t in ["A", "B", "C"] {
            store.insert_job(posting(t)).await.unwrap();
        }
        store.record_swipe("s@x.com", 3, SwipeAction::Like).await.unwrap();
        store.record_swipe("s@x.com", 2, SwipeAction::Skip).await.unwrap();
        store.record_swipe("s@x.com", 1, SwipeAction::Like).await.unwrap();
        store.record_swipe("o@x.com", 2, SwipeAction::Like).await.unwrap();

        let ids: Vec<JobId> = store
            .liked_jobs("s@x.com")
            .await
            .unwrap()
            .iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(store.liked_jobs("nobody@x.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeated_like_is_listed_each_time() {
        let store = MemoryStore::new();
        store.insert_job(posting("A")).await.unwrap();
        store.record_swipe("s@x.com", 1, SwipeAction::Like).await.unwrap();
        store.record_swipe("s@x.com", 1, SwipeAction::Like).await.unwrap();

        let ids: Vec<JobId> = store
            .liked_jobs("s@x.com")
            .await
            .unwrap()
            .iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec![1, 1]);
    }
}
