use crate::domain::repository::PostRepository;
use crate::domain::types::{DEFAULT_POST_STATUS, Post, PostDraft, present, slugify};
use crate::error::ApiError;

/// Body of a post create or update.
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
}

impl PostInput {
    fn into_draft(self) -> Result<PostDraft, ApiError> {
        let (Some(title), Some(content)) = (present(self.title), present(self.content)) else {
            return Err(ApiError::Validation("Title and content are required"));
        };
        Ok(PostDraft {
            slug: slugify(&title),
            status: present(self.status).unwrap_or_else(|| DEFAULT_POST_STATUS.to_owned()),
            title,
            content,
        })
    }
}

// ── ListPosts ────────────────────────────────────────────────────────────────

pub struct ListPostsUseCase<R: PostRepository> {
    pub repo: R,
}

impl<R: PostRepository> ListPostsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Post>, ApiError> {
        self.repo.list_newest_first().await
    }
}

// ── CreatePost ───────────────────────────────────────────────────────────────

pub struct CreatePostUseCase<R: PostRepository> {
    pub repo: R,
}

impl<R: PostRepository> CreatePostUseCase<R> {
    pub async fn execute(&self, input: PostInput) -> Result<Post, ApiError> {
        let draft = input.into_draft()?;
        self.repo.create(&draft).await
    }
}

// ── UpdatePost ───────────────────────────────────────────────────────────────

pub struct UpdatePostUseCase<R: PostRepository> {
    pub repo: R,
}

impl<R: PostRepository> UpdatePostUseCase<R> {
    /// Replaces title, content and status, and re-derives the slug from the new title.
    pub async fn execute(&self, id: i32, input: PostInput) -> Result<Post, ApiError> {
        let draft = input.into_draft()?;
        self.repo
            .update(id, &draft)
            .await?
            .ok_or(ApiError::PostNotFound)
    }
}

// ── DeletePost ───────────────────────────────────────────────────────────────

pub struct DeletePostUseCase<R: PostRepository> {
    pub repo: R,
}

impl<R: PostRepository> DeletePostUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiError> {
        if !self.repo.delete(id).await? {
            return Err(ApiError::PostNotFound);
        }
        Ok(())
    }
}
