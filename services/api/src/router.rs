use axum::{
    Router,
    routing::{get, post, put},
};

use nikufam_core::health::healthz;
use nikufam_core::middleware::{
    cors_layer, propagate_request_id_layer, request_id_layer, trace_layer,
};

use crate::handlers::{
    access_code::{store_access_code, verify_access_code},
    credential::verify_password,
    health::{database_time, readyz},
    post::{create_post, delete_post, list_posts, update_post},
    user::check_username,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/api/test", get(database_time))
        // Posts
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", put(update_post).delete(delete_post))
        // Users
        .route("/api/check-username", post(check_username))
        .route("/api/verify-password", post(verify_password))
        // Access codes
        .route("/store-access-code", post(store_access_code))
        .route("/verify-access-code", post(verify_access_code))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(cors_layer())
        .layer(request_id_layer())
}
