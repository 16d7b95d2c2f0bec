//! SQL DDL for initializing the Seekr tables.

/// SQLite schema with:
/// - `users.email` as the natural primary key
/// - `profile` and `skills_required` stored as JSON text
/// - `jobs.id` / `swipes.id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids start
///   at 1 and are never reused
/// - `swipes` as an append-only log; duplicates allowed, `id` is the
///   recording order
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    email TEXT PRIMARY KEY NOT NULL,
    password TEXT NOT NULL,
    role TEXT NOT NULL CHECK (role IN ('recruiter', 'job_seeker')),
    profile TEXT NULL -- JSON object
);

CREATE TABLE IF NOT EXISTS jobs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    location TEXT NOT NULL,
    skills_required TEXT NOT NULL, -- JSON array
    salary_range TEXT NULL,
    posted_by TEXT NOT NULL REFERENCES users(email),
    posted_at TEXT NOT NULL -- RFC3339
);

CREATE TABLE IF NOT EXISTS swipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL REFERENCES users(email),
    job_id INTEGER NOT NULL REFERENCES jobs(id),
    action TEXT NOT NULL CHECK (action IN ('like', 'skip')),
    swiped_at TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_swipes_email_action ON swipes(email, action);
"#;
