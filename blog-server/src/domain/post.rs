use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "publishDate")]
    pub publish_date: DateTime<Utc>,
}

/// A validated create payload. `publish_date` falls back to "now" when the
/// caller leaves it out.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: Option<DateTime<Utc>>,
}

/// Field-level update; only the fields that are `Some` change.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
}

impl Post {
    pub fn new(fields: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            content: fields.content,
            author: fields.author,
            publish_date: fields.publish_date.unwrap_or_else(Utc::now),
        }
    }

    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(publish_date) = patch.publish_date {
            self.publish_date = publish_date;
        }
    }
}
