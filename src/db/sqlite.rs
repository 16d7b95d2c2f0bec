use crate::db::SeekrStore;
use crate::db::schema::SQLITE_INIT;
use crate::error::SeekrError;
use crate::types::job::{Job, JobId, JobPosting};
use crate::types::swipe::SwipeAction;
use crate::types::user::{Profile, Role, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

const JOB_COLUMNS: &str = "id, title, description, location, skills_required, salary_range, posted_by, posted_at";

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database file and apply the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, SeekrError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(connect_opts)
            .await?;
        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), SeekrError> {
        // sqlx::query runs a single statement, so feed them one by one
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    fn row_to_user(row: SqliteRow) -> Result<User, SeekrError> {
        let email: String = row.try_get("email")?;
        let password: String = row.try_get("password")?;
        let role_str: String = row.try_get("role")?;
        let profile_json: Option<String> = row.try_get("profile")?;

        let role = Role::from_str(&role_str).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let profile: Option<Profile> = match profile_json {
            Some(s) => Some(serde_json::from_str(&s)?),
            None => None,
        };

        Ok(User {
            email,
            password,
            role,
            profile,
        })
    }

    fn row_to_job(row: SqliteRow) -> Result<Job, SeekrError> {
        let id: i64 = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let description: String = row.try_get("description")?;
        let location: String = row.try_get("location")?;
        let skills_json: String = row.try_get("skills_required")?;
        let salary_range: Option<String> = row.try_get("salary_range")?;
        let posted_by: String = row.try_get("posted_by")?;
        let posted_at_str: String = row.try_get("posted_at")?;

        let skills_required: Vec<String> = serde_json::from_str(&skills_json)?;
        let posted_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&posted_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(Job {
            id,
            title,
            description,
            location,
            skills_required,
            salary_range,
            posted_by,
            posted_at,
        })
    }
}

#[async_trait]
impl SeekrStore for SqliteStore {
    async fn find_user(&self, email: &str) -> Result<Option<User>, SeekrError> {
        let row = sqlx::query("SELECT email, password, role, profile FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_user).transpose()
    }

    async fn insert_user(&self, user: User) -> Result<(), SeekrError> {
        let profile_json = user
            .profile
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let res = sqlx::query(
            "INSERT INTO users (email, password, role, profile) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.role.as_str())
        .bind(profile_json)
        .execute(&self.pool)
        .await;

        match res {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(SeekrError::EmailTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save_profile(&self, email: &str, profile: Profile) -> Result<bool, SeekrError> {
        let profile_json = serde_json::to_string(&profile)?;
        let res = sqlx::query("UPDATE users SET profile = ? WHERE email = ?")
            .bind(profile_json)
            .bind(email)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn insert_job(&self, posting: JobPosting) -> Result<JobId, SeekrError> {
        let skills_json = serde_json::to_string(&posting.skills_required)?;
        let posted_at = Utc::now().to_rfc3339();
        let res = sqlx::query(
            r#"
            INSERT INTO jobs (
                title, description, location, skills_required,
                salary_range, posted_by, posted_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(posting.title)
        .bind(posting.description)
        .bind(posting.location)
        .bind(skills_json)
        .bind(posting.salary_range)
        .bind(posting.posted_by)
        .bind(posted_at)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    async fn find_job(&self, id: JobId) -> Result<Option<Job>, SeekrError> {
        let row = sqlx::query(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_job).transpose()
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, SeekrError> {
        let rows = sqlx::query(&format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::row_to_job).collect()
    }

    async fn record_swipe(
        &self,
        email: &str,
        job_id: JobId,
        action: SwipeAction,
    ) -> Result<(), SeekrError> {
        sqlx::query("INSERT INTO swipes (email, job_id, action, swiped_at) VALUES (?, ?, ?, ?)")
            .bind(email)
            .bind(job_id)
            .bind(action.as_str())
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn liked_jobs(&self, email: &str) -> Result<Vec<Job>, SeekrError> {
        let rows = sqlx::query(
            r#"SELECT j.id, j.title, j.description, j.location, j.skills_required,
               j.salary_range, j.posted_by, j.posted_at
               FROM swipes s JOIN jobs j ON j.id = s.job_id
               WHERE s.email = ? AND s.action = 'like'
               ORDER BY s.id"#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_job).collect()
    }

    async fn ping(&self) -> Result<(), SeekrError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
