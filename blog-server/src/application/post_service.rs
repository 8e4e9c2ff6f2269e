use std::sync::Arc;

use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, Post, PostPatch};
use tracing::instrument;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn create_post(&self, fields: NewPost) -> Result<Post, DomainError> {
        self.repo.create(Post::new(fields)).await
    }

    #[instrument(skip(self))]
    pub async fn update_post(&self, id: Uuid, patch: PostPatch) -> Result<Post, DomainError> {
        match self.repo.update_by_id(id, patch).await? {
            Some(post) => Ok(post),
            None => Err(DomainError::PostNotFound(id)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete_by_id(id).await
    }
}
