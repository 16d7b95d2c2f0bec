use axum::{Json, extract::State};

use crate::middleware::extract::{JsonBody, QueryParams};
use crate::service::accounts;
use crate::types::MessageResponse;
use crate::types::user::{EmailQuery, LoginRequest, LoginResponse, Profile, SignupRequest};
use crate::{SeekrError, router::SeekrState};

/// POST /signup
pub async fn signup_handler(
    State(state): State<SeekrState>,
    JsonBody(req): JsonBody<SignupRequest>,
) -> Result<Json<MessageResponse>, SeekrError> {
    accounts::signup(state.store.as_ref(), &req.email, &req.password, req.role).await?;
    Ok(Json(MessageResponse::new("User created successfully!")))
}

/// POST /login
pub async fn login_handler(
    State(state): State<SeekrState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, SeekrError> {
    let role = accounts::login(state.store.as_ref(), &req.email, &req.password).await?;
    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        role,
    }))
}

/// POST /update_profile?email=...
pub async fn update_profile_handler(
    State(state): State<SeekrState>,
    QueryParams(query): QueryParams<EmailQuery>,
    JsonBody(profile): JsonBody<Profile>,
) -> Result<Json<MessageResponse>, SeekrError> {
    accounts::update_profile(state.store.as_ref(), &query.email, profile).await?;
    Ok(Json(MessageResponse::new("Profile updated!")))
}
