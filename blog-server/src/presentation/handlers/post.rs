use crate::application::post_service::PostService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreatePostRequest, PostsResponse, UpdatePostRequest};
use crate::presentation::middleware::RequestId;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, post, put, web};
use tracing::info;
use uuid::Uuid;

#[get("")]
pub async fn list_posts(
    req: HttpRequest,
    service: web::Data<PostService>,
) -> Result<HttpResponse, DomainError> {
    let posts = service.get_posts().await?;

    info!(
        request_id = %request_id(&req),
        count = posts.len(),
        "posts retrieved"
    );

    Ok(HttpResponse::Ok().json(PostsResponse { posts }))
}

#[get("/{id}")]
pub async fn get_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let post = service.get_post(path.into_inner()).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        "post retrieved"
    );

    Ok(HttpResponse::Ok().json(post))
}

#[post("")]
pub async fn create_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    let fields = payload.into_inner().validate()?;
    let post = service.create_post(fields).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        author = %post.author,
        "post created"
    );

    Ok(HttpResponse::Created().json(post))
}

#[put("/{id}")]
pub async fn update_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    payload: web::Json<UpdatePostRequest>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    let patch = payload.into_inner().into_patch(post_id)?;
    let post = service.update_post(post_id, patch).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        "post updated"
    );

    Ok(HttpResponse::Ok().json(post))
}

#[delete("/{id}")]
pub async fn delete_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    service.delete_post(post_id).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post_id,
        "post deleted"
    );

    Ok(HttpResponse::NoContent().finish())
}

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
