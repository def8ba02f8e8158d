use std::time::Duration;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, ConnectOptions,
    ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr, Statement,
};

use nikufam_api_schema::{posts, users};

use crate::config::ApiConfig;
use crate::domain::repository::{PostRepository, UserRepository};
use crate::domain::types::{Post, PostDraft, UserCredentials};
use crate::error::ApiError;
use crate::infra::within;

/// Open the Postgres pool. Connection and pool-acquire waits share the store timeout.
pub async fn connect(config: &ApiConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .connect_timeout(config.store_timeout())
        .acquire_timeout(config.store_timeout());
    Database::connect(options)
        .await
        .context("connect to database")
}

/// Current time according to the database (`SELECT NOW()`).
pub async fn database_time(
    db: &DatabaseConnection,
    timeout: Duration,
) -> Result<DateTime<Utc>, ApiError> {
    within(timeout, "read database time", async {
        let row = db
            .query_one(Statement::from_string(
                DbBackend::Postgres,
                "SELECT NOW() AS now",
            ))
            .await
            .context("select now")?
            .context("select now returned no row")?;
        let now: DateTime<Utc> = row.try_get("", "now").context("decode now")?;
        Ok::<_, ApiError>(now)
    })
    .await
}

pub async fn ping(db: &DatabaseConnection, timeout: Duration) -> Result<(), ApiError> {
    within(timeout, "database ping", async {
        db.ping().await.context("ping database")?;
        Ok::<_, ApiError>(())
    })
    .await
}

// ── User repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
    pub timeout: Duration,
}

impl UserRepository for DbUserRepository {
    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, ApiError> {
        within(self.timeout, "find user credentials", async {
            let model = users::Entity::find()
                .filter(users::Column::Username.eq(username))
                .one(&self.db)
                .await
                .context("find user by username")?;
            Ok::<_, ApiError>(model.map(credentials_from_model))
        })
        .await
    }

    async fn exists(&self, username: &str) -> Result<bool, ApiError> {
        within(self.timeout, "check username", async {
            let count = users::Entity::find()
                .filter(users::Column::Username.eq(username))
                .count(&self.db)
                .await
                .context("count users by username")?;
            Ok::<_, ApiError>(count > 0)
        })
        .await
    }
}

fn credentials_from_model(model: users::Model) -> UserCredentials {
    UserCredentials {
        username: model.username,
        password: model.password,
        device_id: model.device_id,
    }
}

// ── Post repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPostRepository {
    pub db: DatabaseConnection,
    pub timeout: Duration,
}

impl PostRepository for DbPostRepository {
    async fn list_newest_first(&self) -> Result<Vec<Post>, ApiError> {
        within(self.timeout, "list posts", async {
            let models = posts::Entity::find()
                .order_by_desc(posts::Column::CreatedAt)
                .all(&self.db)
                .await
                .context("list posts")?;
            Ok::<_, ApiError>(models.into_iter().map(post_from_model).collect())
        })
        .await
    }

    async fn create(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        within(self.timeout, "create post", async {
            // created_at is filled in by the column default.
            let model = posts::ActiveModel {
                id: NotSet,
                title: Set(draft.title.clone()),
                content: Set(draft.content.clone()),
                status: Set(draft.status.clone()),
                slug: Set(draft.slug.clone()),
                created_at: NotSet,
            }
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "create post"))?;
            Ok::<_, ApiError>(post_from_model(model))
        })
        .await
    }

    async fn update(&self, id: i32, draft: &PostDraft) -> Result<Option<Post>, ApiError> {
        within(self.timeout, "update post", async {
            let result = posts::ActiveModel {
                id: Set(id),
                title: Set(draft.title.clone()),
                content: Set(draft.content.clone()),
                status: Set(draft.status.clone()),
                slug: Set(draft.slug.clone()),
                created_at: NotSet,
            }
            .update(&self.db)
            .await;
            match result {
                Ok(model) => Ok(Some(post_from_model(model))),
                Err(DbErr::RecordNotUpdated) => Ok(None),
                Err(e) => Err(write_error(e, "update post")),
            }
        })
        .await
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        within(self.timeout, "delete post", async {
            let result = posts::Entity::delete_by_id(id)
                .exec(&self.db)
                .await
                .context("delete post")?;
            Ok::<_, ApiError>(result.rows_affected > 0)
        })
        .await
    }
}

/// The only unique column a post write can collide on is `slug`.
fn write_error(err: DbErr, op: &'static str) -> ApiError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::SlugConflict,
        _ => ApiError::StoreUnavailable(anyhow::Error::new(err).context(op)),
    }
}

fn post_from_model(model: posts::Model) -> Post {
    Post {
        id: model.id,
        title: model.title,
        content: model.content,
        status: model.status,
        slug: model.slug,
        created_at: model.created_at,
    }
}
