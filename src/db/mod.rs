//! Storage layer: the `SeekrStore` seam plus its two backends.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for the SQLite backend
//! - `sqlite.rs`: durable single-file store on sqlx
//! - `memory.rs`: process-memory maps, lost on restart

pub mod memory;
pub mod schema;
pub mod sqlite;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::SeekrError;
use crate::types::job::{Job, JobId, JobPosting};
use crate::types::swipe::SwipeAction;
use crate::types::user::{Profile, User};

pub use memory::MemoryStore;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, SqliteStore};

/// Everything the handlers need from persistence. Implementations hold no
/// business rules beyond email uniqueness; role and existence checks live in
/// `service`.
#[async_trait]
pub trait SeekrStore: Send + Sync {
    async fn find_user(&self, email: &str) -> Result<Option<User>, SeekrError>;

    /// Fails with `SeekrError::EmailTaken` when the email already exists.
    async fn insert_user(&self, user: User) -> Result<(), SeekrError>;

    /// Overwrites the profile. Returns `false` when no such user exists.
    async fn save_profile(&self, email: &str, profile: Profile) -> Result<bool, SeekrError>;

    async fn insert_job(&self, posting: JobPosting) -> Result<JobId, SeekrError>;

    async fn find_job(&self, id: JobId) -> Result<Option<Job>, SeekrError>;

    /// All jobs in id order.
    async fn list_jobs(&self) -> Result<Vec<Job>, SeekrError>;

    async fn record_swipe(
        &self,
        email: &str,
        job_id: JobId,
        action: SwipeAction,
    ) -> Result<(), SeekrError>;

    /// Jobs liked by `email`, one entry per recorded like, oldest first.
    async fn liked_jobs(&self, email: &str) -> Result<Vec<Job>, SeekrError>;

    async fn ping(&self) -> Result<(), SeekrError>;
}

pub type DynStore = Arc<dyn SeekrStore>;

/// Open the backend selected in config.
pub async fn open(cfg: &StorageConfig) -> Result<DynStore, SeekrError> {
    match cfg.backend {
        StorageBackend::Memory => {
            info!("using in-memory store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::Sqlite => {
            let store = SqliteStore::connect(&cfg.database_url, cfg.max_connections).await?;
            info!(database_url = %cfg.database_url, "sqlite store ready");
            Ok(Arc::new(store))
        }
    }
}
