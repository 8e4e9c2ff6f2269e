use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogClientError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Not found")]
    NotFound,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Server error: {0}")]
    ServerError(String),
}

impl BlogClientError {
    pub(crate) async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        let message = message_from_body(resp).await;
        match status {
            StatusCode::NOT_FOUND => BlogClientError::NotFound,
            s if s.is_client_error() => BlogClientError::InvalidRequest(message),
            _ => BlogClientError::ServerError(message),
        }
    }
}

// Error bodies carry either an `error` or a `message` field.
async fn message_from_body(resp: reqwest::Response) -> String {
    let Ok(body) = resp.json::<serde_json::Value>().await else {
        return "no error details".to_string();
    };
    body.get("error")
        .or_else(|| body.get("message"))
        .and_then(|v| v.as_str())
        .unwrap_or("no error details")
        .to_string()
}
