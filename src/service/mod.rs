//! Precondition checks for every endpoint. Each operation is a single
//! check-then-mutate against the injected store.

pub mod accounts;
pub mod jobs;
pub mod swipes;
