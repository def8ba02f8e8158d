use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Post;
use crate::error::ApiError;
use crate::handlers::JsonBody;
use crate::state::AppState;
use crate::usecase::post::{
    CreatePostUseCase, DeletePostUseCase, ListPostsUseCase, PostInput, UpdatePostUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
}

impl From<PostRequest> for PostInput {
    fn from(body: PostRequest) -> Self {
        Self {
            title: body.title,
            content: body.content,
            status: body.status,
        }
    }
}

#[derive(Serialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub status: String,
    pub slug: String,
    #[serde(serialize_with = "nikufam_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            status: post.status,
            slug: post.slug,
            created_at: post.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct DeletePostResponse {
    pub message: &'static str,
}

// ── GET /api/posts ───────────────────────────────────────────────────────────

pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let usecase = ListPostsUseCase {
        repo: state.post_repo(),
    };
    let posts = usecase.execute().await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

// ── POST /api/posts ──────────────────────────────────────────────────────────

pub async fn create_post(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<PostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let usecase = CreatePostUseCase {
        repo: state.post_repo(),
    };
    let post = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(post.into())))
}

// ── PUT /api/posts/{id} ──────────────────────────────────────────────────────

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(body): JsonBody<PostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let usecase = UpdatePostUseCase {
        repo: state.post_repo(),
    };
    let post = usecase.execute(id, body.into()).await?;
    Ok(Json(post.into()))
}

// ── DELETE /api/posts/{id} ───────────────────────────────────────────────────

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletePostResponse>, ApiError> {
    let usecase = DeletePostUseCase {
        repo: state.post_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(DeletePostResponse {
        message: "Post deleted successfully",
    }))
}
