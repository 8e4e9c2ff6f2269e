use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostPatch};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

/// Store adapter over the posts collection. Every call persists
/// immediately; there is no batching and no cross-post transaction.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in the store's natural return order.
    async fn find_all(&self) -> Result<Vec<Post>, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;
    async fn create(&self, post: Post) -> Result<Post, DomainError>;
    /// Applies only the fields present in `patch`; `None` when the id is
    /// unknown.
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: PostPatch,
    ) -> Result<Option<Post>, DomainError>;
    /// Delete-if-exists; a missing id is not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), DomainError>;
}

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, author, publish_date
            FROM posts
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching posts: {}", e);
            DomainError::Internal(e.to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, author, publish_date
            FROM posts WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("db error find_by_id {}: {}", id, e);
            DomainError::Internal(e.to_string())
        })
    }

    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, title, content, author, publish_date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .bind(post.publish_date)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create post: {}", e);
            DomainError::Internal(e.to_string())
        })?;

        info!(post_id = %post.id, author = %post.author, "post created");
        Ok(post)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: PostPatch,
    ) -> Result<Option<Post>, DomainError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET
                title = COALESCE($1, title),
                content = COALESCE($2, content),
                author = COALESCE($3, author),
                publish_date = COALESCE($4, publish_date)
            WHERE id = $5
            RETURNING id, title, content, author, publish_date
            "#,
        )
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.author)
        .bind(patch.publish_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to update post {}: {}", id, e);
            DomainError::MutationFailed(e.to_string())
        })?;

        if post.is_some() {
            info!(post_id = %id, "post updated");
        }

        Ok(post)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to delete post {}: {}", id, e);
                DomainError::MutationFailed(e.to_string())
            })?;

        info!(post_id = %id, "post deleted");
        Ok(())
    }
}
