use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::DynStore;
use crate::handlers::{
    accounts::{login_handler, signup_handler, update_profile_handler},
    jobs::{list_jobs_handler, post_job_handler},
    probes::healthz,
    swipes::{liked_jobs_handler, swipe_job_handler},
    welcome::welcome_handler,
};

#[derive(Clone)]
pub struct SeekrState {
    pub store: DynStore,
    pub allow_any_origin: bool,
}

impl SeekrState {
    pub fn new(store: DynStore) -> Self {
        Self {
            store,
            allow_any_origin: true,
        }
    }

    pub fn with_allow_any_origin(mut self, allow: bool) -> Self {
        self.allow_any_origin = allow;
        self
    }
}

pub fn seekr_router(state: SeekrState) -> Router {
    let allow_any_origin = state.allow_any_origin;
    let router = Router::new()
        .route("/Welcome", get(welcome_handler))
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/update_profile", post(update_profile_handler))
        .route("/post_job", post(post_job_handler))
        .route("/list_jobs", get(list_jobs_handler))
        .route("/swipe_job", post(swipe_job_handler))
        .route("/liked_jobs", get(liked_jobs_handler))
        .route("/healthz", get(healthz))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if allow_any_origin {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}
