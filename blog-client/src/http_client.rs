use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::BlogClientError;
use crate::{NewPost, Post, PostUpdate};

#[derive(Clone)]
pub struct BlogClient {
    client: Arc<Client>,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PostsResponse {
    posts: Vec<Post>,
}

impl BlogClient {
    pub fn new(endpoint: &str) -> Result<Self, BlogClientError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            base_url,
        })
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let resp = self
            .client
            .get(format!("{}/posts", self.base_url))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(BlogClientError::from_http_response(resp).await);
        }

        let body: PostsResponse = resp.json().await?;
        Ok(body.posts)
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post, BlogClientError> {
        let resp = self
            .client
            .get(format!("{}/posts/{}", self.base_url, id))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(BlogClientError::from_http_response(resp).await);
        }

        Ok(resp.json().await?)
    }

    pub async fn create_post(&self, post: NewPost) -> Result<Post, BlogClientError> {
        let resp = self
            .client
            .post(format!("{}/posts", self.base_url))
            .json(&post)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(BlogClientError::from_http_response(resp).await);
        }

        Ok(resp.json().await?)
    }

    pub async fn update_post(
        &self,
        id: Uuid,
        update: PostUpdate,
    ) -> Result<Post, BlogClientError> {
        // the server requires the body id to match the path id
        let mut body = serde_json::to_value(&update)
            .map_err(|e| BlogClientError::InvalidRequest(e.to_string()))?;
        body["id"] = json!(id);

        let resp = self
            .client
            .put(format!("{}/posts/{}", self.base_url, id))
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(BlogClientError::from_http_response(resp).await);
        }

        Ok(resp.json().await?)
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<(), BlogClientError> {
        let resp = self
            .client
            .delete(format!("{}/posts/{}", self.base_url, id))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(BlogClientError::from_http_response(resp).await);
        }

        Ok(())
    }
}
