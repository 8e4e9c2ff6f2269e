//! In-memory post store, used by tests that do not need Postgres.

use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostPatch};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Keeps posts in insertion order, which becomes the "natural return
/// order" of `find_all`. Data is lost on drop.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: PostPatch,
    ) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.apply(patch);
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DomainError> {
        self.posts.write().await.retain(|p| p.id != id);
        Ok(())
    }
}
