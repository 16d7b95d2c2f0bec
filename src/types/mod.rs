//! Domain types shared by the store, services and HTTP handlers.

pub mod job;
pub mod swipe;
pub mod user;

/// Plain `{"message": ...}` acknowledgement body.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
