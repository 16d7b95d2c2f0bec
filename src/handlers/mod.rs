pub mod accounts;
pub mod jobs;
pub mod probes;
pub mod swipes;
pub mod welcome;
