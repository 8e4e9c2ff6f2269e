pub mod dto;
pub mod handlers;
pub mod middleware;

use actix_web::web;

/// Registers the posts resource, the health probe and the JSON 404
/// fallback. Static assets are wired separately by the lifecycle so that
/// tests can mount the API alone.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .service(handlers::post::list_posts)
            .service(handlers::post::get_post)
            .service(handlers::post::create_post)
            .service(handlers::post::update_post)
            .service(handlers::post::delete_post),
    )
    .route("/health", web::get().to(handlers::health));
}
