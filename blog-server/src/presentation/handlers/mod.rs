pub mod post;

use actix_web::{HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(json!({ "message": "Not Found" }))
}
