use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use blog_server::application::post_service::PostService;
use blog_server::data::memory::InMemoryPostRepository;
use blog_server::domain::post::Post;
use blog_server::presentation::dto::PostsResponse;
use blog_server::presentation::{api_routes, handlers};
use serde_json::json;
use uuid::Uuid;

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(PostService::new(Arc::new(
                    InMemoryPostRepository::new(),
                ))))
                .configure(api_routes)
                .default_service(web::route().to(handlers::not_found)),
        )
        .await
    };
}

#[actix_web::test]
async fn list_starts_empty_with_posts_envelope() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: PostsResponse = test::read_body_json(resp).await;
    assert!(body.posts.is_empty());
}

#[actix_web::test]
async fn created_post_comes_back_identical_on_get() {
    let app = test_app!();

    let payload = json!({
        "title": "test A",
        "content": "this is a test post",
        "author": "Leo_Tester",
        "publishDate": "2018-03-03T00:00:00Z"
    });
    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Post = test::read_body_json(resp).await;
    assert_eq!(created.title, "test A");
    assert_eq!(created.content, "this is a test post");
    assert_eq!(created.author, "Leo_Tester");

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", created.id))
        .to_request();
    let fetched: Post = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.content, created.content);
    assert_eq!(fetched.author, created.author);
    assert_eq!(fetched.publish_date, created.publish_date);
}

#[actix_web::test]
async fn list_grows_and_shrinks_by_one() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": "one",
            "content": "first",
            "author": "writer"
        }))
        .to_request();
    let created: Post = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get().uri("/posts").to_request();
    let body: PostsResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.posts.len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/posts").to_request();
    let body: PostsResponse = test::call_and_read_body_json(&app, req).await;
    assert!(body.posts.is_empty());
}

#[actix_web::test]
async fn create_without_author_is_rejected_and_creates_nothing() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": "incomplete",
            "content": "no author here"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing `author` in request body");

    let req = test::TestRequest::get().uri("/posts").to_request();
    let body: PostsResponse = test::call_and_read_body_json(&app, req).await;
    assert!(body.posts.is_empty());
}

#[actix_web::test]
async fn update_replaces_all_provided_fields() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": "test A",
            "content": "this is a test post",
            "author": "Leo_Tester",
            "publishDate": "2018-03-03T00:00:00Z"
        }))
        .to_request();
    let created: Post = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", created.id))
        .set_json(json!({
            "id": created.id,
            "title": "test B",
            "content": "this is an updated post",
            "author": "Leo_Tester_2",
            "publishDate": "2018-03-04T00:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Post = test::read_body_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "test B");
    assert_eq!(updated.content, "this is an updated post");
    assert_eq!(updated.author, "Leo_Tester_2");
    assert_ne!(updated.publish_date, created.publish_date);
}

#[actix_web::test]
async fn partial_update_keeps_untouched_fields() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": "before",
            "content": "unchanged content",
            "author": "same author"
        }))
        .to_request();
    let created: Post = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", created.id))
        .set_json(json!({ "id": created.id, "title": "X" }))
        .to_request();
    let updated: Post = test::call_and_read_body_json(&app, req).await;

    assert_eq!(updated.title, "X");
    assert_eq!(updated.content, created.content);
    assert_eq!(updated.author, created.author);
    assert_eq!(updated.publish_date, created.publish_date);
}

#[actix_web::test]
async fn update_with_mismatched_body_id_is_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": "keep me",
            "content": "original",
            "author": "writer"
        }))
        .to_request();
    let created: Post = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", created.id))
        .set_json(json!({ "id": Uuid::new_v4(), "title": "hijack" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Request path id and request body id values must match"
    );

    // the mismatch must not have gone through to the store
    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", created.id))
        .to_request();
    let fetched: Post = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.title, "keep me");
}

#[actix_web::test]
async fn delete_of_unknown_id_still_returns_no_content() {
    let app = test_app!();

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn get_of_unknown_id_returns_not_found() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_id_is_a_client_error() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/posts/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn unmatched_route_returns_json_not_found() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Not Found");
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
