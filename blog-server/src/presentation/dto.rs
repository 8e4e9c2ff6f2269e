use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, Post, PostPatch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create payload. Required fields are `Option` so that a missing one can
/// be reported by name instead of through a serde parse failure.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "publishDate")]
    pub publish_date: Option<DateTime<Utc>>,
}

impl CreatePostRequest {
    pub fn validate(self) -> Result<NewPost, DomainError> {
        let title = required(self.title, "title")?;
        let author = required(self.author, "author")?;
        let content = required(self.content, "content")?;
        Ok(NewPost {
            title,
            content,
            author,
            publish_date: self.publish_date,
        })
    }
}

fn required(field: Option<String>, name: &str) -> Result<String, DomainError> {
    field.ok_or_else(|| DomainError::Validation(format!("Missing `{}` in request body", name)))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "publishDate")]
    pub publish_date: Option<DateTime<Utc>>,
}

impl UpdatePostRequest {
    /// The body id must be present and equal to the path id.
    pub fn into_patch(self, path_id: Uuid) -> Result<PostPatch, DomainError> {
        if self.id != Some(path_id) {
            return Err(DomainError::Validation(
                "Request path id and request body id values must match".to_string(),
            ));
        }
        Ok(PostPatch {
            title: self.title,
            content: self.content,
            author: self.author,
            publish_date: self.publish_date,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}
