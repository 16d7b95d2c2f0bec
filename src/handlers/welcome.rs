use axum::Json;

use crate::types::MessageResponse;

/// GET /Welcome
pub async fn welcome_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to Seekr! How are you today?"))
}
