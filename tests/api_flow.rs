//! 인메모리 리포지토리 위에서 전체 HTTP 흐름을 검증하는 통합 테스트

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App, Error};
use actix_http::Request;
use serde_json::{json, Value};

use contact_book_backend::core::AppState;
use contact_book_backend::repositories::{InMemoryContactRepository, InMemoryUserRepository};
use contact_book_backend::routes::configure_all_routes;
use contact_book_backend::services::auth::{PasswordHasher, TokenService};

async fn build_app() -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    let state = AppState::from_repositories(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryContactRepository::new()),
        Arc::new(TokenService::new("test-secret", 1)),
        PasswordHasher::new(4),
    );

    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_all_routes),
    )
    .await
}

async fn call(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    req: Request,
) -> (StatusCode, Value) {
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

async fn signup(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    name: &str,
    email: &str,
) -> (StatusCode, Value) {
    let req = test::TestRequest::post()
        .uri("/user/signup")
        .set_json(json!({ "name": name, "email": email, "password": "Secret@123" }))
        .to_request();
    call(app, req).await
}

async fn token_for(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    name: &str,
    email: &str,
) -> String {
    let (status, body) = signup(app, name, email).await;
    assert_eq!(status, StatusCode::OK, "signup failed: {body}");
    body["data"]["access_token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn test_health_check() {
    let app = build_app().await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_signup_login_and_current_user_flow() {
    let app = build_app().await;

    let (status, body) = signup(&app, "Ann", "ann@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User signup complete");
    assert_eq!(body["data"]["user"]["email"], "ann@example.com");
    assert!(body["data"]["user"].get("password_hash").is_none());

    // 중복 가입
    let (status, body) = signup(&app, "Ann", "ann@example.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already registered");

    // 로그인
    let req = test::TestRequest::post()
        .uri("/user/login")
        .set_json(json!({ "email": "ann@example.com", "password": "Secret@123" }))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    let token = body["data"]["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/user")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User detail");
    assert_eq!(body["data"]["name"], "Ann");
}

#[actix_web::test]
async fn test_login_failures() {
    let app = build_app().await;
    signup(&app, "Ann", "ann@example.com").await;

    let req = test::TestRequest::post()
        .uri("/user/login")
        .set_json(json!({ "email": "nobody@example.com", "password": "Secret@123" }))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email not registered");

    let req = test::TestRequest::post()
        .uri("/user/login")
        .set_json(json!({ "email": "ann@example.com", "password": "Wrong@1234" }))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[actix_web::test]
async fn test_protected_routes_require_token() {
    let app = build_app().await;

    let req = test::TestRequest::get().uri("/user").to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing or invalid authorization token");
    assert_eq!(body["data"], json!({}));

    let req = test::TestRequest::get()
        .uri("/contact")
        .insert_header(bearer("not-a-jwt"))
        .to_request();
    let (status, _) = call(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_signup_validation_messages() {
    let app = build_app().await;

    let req = test::TestRequest::post()
        .uri("/user/signup")
        .set_json(json!({ "name": "", "email": "bad", "password": "weak" }))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name cannot be left blank");

    let (status, body) = signup(&app, "Ann", "not-an-email").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email is not valid");
}

#[actix_web::test]
async fn test_contacts_are_scoped_to_owner() {
    let app = build_app().await;
    let token_a = token_for(&app, "Ann", "ann@example.com").await;
    let token_b = token_for(&app, "Ben", "ben@example.com").await;

    let req = test::TestRequest::post()
        .uri("/contact")
        .insert_header(bearer(&token_a))
        .set_json(json!({ "name": "Bob", "phone": "555-0101", "email": "bob@example.com" }))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Contact added");
    assert_eq!(body["data"]["name"], "Bob");

    let req = test::TestRequest::get()
        .uri("/contact")
        .insert_header(bearer(&token_b))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["list"], json!([]));

    let req = test::TestRequest::get()
        .uri("/contact?name=bo")
        .insert_header(bearer(&token_a))
        .to_request();
    let (_, body) = call(&app, req).await;
    assert_eq!(body["data"]["total"], 1);
}

#[actix_web::test]
async fn test_contact_pagination() {
    let app = build_app().await;
    let token = token_for(&app, "Ann", "ann@example.com").await;

    for i in 0..15 {
        let req = test::TestRequest::post()
            .uri("/contact")
            .insert_header(bearer(&token))
            .set_json(json!({ "name": format!("Friend {i:02}"), "phone": format!("555-01{i:02}") }))
            .to_request();
        let (status, _) = call(&app, req).await;
        assert_eq!(status, StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/contact?limit=10&page=2")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["list"].as_array().unwrap().len(), 5);
    assert_eq!(data["has_next"], false);
    assert_eq!(data["has_prev"], true);
    assert_eq!(data["page"], 2);
    assert_eq!(data["pages"], 2);
    assert_eq!(data["per_page"], 10);
    assert_eq!(data["total"], 15);
}

#[actix_web::test]
async fn test_bad_requests() {
    let app = build_app().await;
    let token = token_for(&app, "Ann", "ann@example.com").await;

    let req = test::TestRequest::post()
        .uri("/contact")
        .insert_header(bearer(&token))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");

    let req = test::TestRequest::post()
        .uri("/contact")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Bob" }))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Phone is required");

    let req = test::TestRequest::get()
        .uri("/contact?page=abc")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Page must be a positive integer");
}

#[actix_web::test]
async fn test_large_limit_and_page_values() {
    let app = build_app().await;
    let token = token_for(&app, "Ann", "ann@example.com").await;

    for i in 0..3 {
        let req = test::TestRequest::post()
            .uri("/contact")
            .insert_header(bearer(&token))
            .set_json(json!({ "name": format!("Friend {i}"), "phone": "555" }))
            .to_request();
        call(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/contact?limit=200")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["per_page"], 200);
    assert_eq!(body["data"]["list"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/contact?page=18446744073709551615")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["list"], json!([]));
    assert_eq!(body["data"]["page"], u64::MAX);
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["has_prev"], true);
    assert_eq!(body["data"]["has_next"], false);
}
