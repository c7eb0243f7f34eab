//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle user signup, login, and the token-protected profile
//! endpoint. They are designed to be nested under `/api` in the main router.

use crate::auth::handlers::*;
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/profile", get(profile).layer(middleware::from_fn(jwt_auth)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::JwtUtils;
    use axum::{
        Extension,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        response::Response,
    };
    use serde_json::{Value, json};
    use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
    use tower::ServiceExt;
    use uuid::Uuid;

    const TEST_SECRET: &str = "test-secret";

    async fn test_app() -> Router {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();

        auth_router()
            .layer(Extension(pool))
            .layer(Extension(JwtUtils::new(TEST_SECRET, 86400)))
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn profile_request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/profile");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn response_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn do_signup(app: &Router, email: &str) -> Response {
        app.clone()
            .oneshot(json_request(
                "/signup",
                json!({"name": "A", "email": email, "password": "pw1"}),
            ))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn signup_login_profile_flow() {
        let app = test_app().await;

        let response = do_signup(&app, "a@x.com").await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        assert_eq!(body["user"]["name"], "A");
        assert_eq!(body["user"]["email"], "a@x.com");
        assert!(body["user"]["id"].as_str().is_some());
        assert!(body["user"]["created_at"].as_str().is_some());
        assert!(body["user"].get("password_hash").is_none());
        assert!(!body["token"].as_str().unwrap().is_empty());

        let response = app
            .clone()
            .oneshot(json_request(
                "/login",
                json!({"email": "a@x.com", "password": "pw1"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        let token = body["token"].as_str().unwrap().to_string();
        let user_id = body["user"]["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(profile_request(Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["user"]["id"], user_id.as_str());
        assert_eq!(body["user"]["email"], "a@x.com");
        assert!(body["user"].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn duplicate_signup_is_a_bad_request() {
        let app = test_app().await;

        assert_eq!(do_signup(&app, "a@x.com").await.status(), StatusCode::CREATED);

        let response = do_signup(&app, "a@x.com").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["message"], "User already exists");
    }

    #[tokio::test]
    async fn login_failures_do_not_reveal_registered_emails() {
        let app = test_app().await;
        do_signup(&app, "a@x.com").await;

        let wrong_password = app
            .clone()
            .oneshot(json_request(
                "/login",
                json!({"email": "a@x.com", "password": "nope"}),
            ))
            .await
            .unwrap();
        let unknown_email = app
            .clone()
            .oneshot(json_request(
                "/login",
                json!({"email": "ghost@x.com", "password": "pw1"}),
            ))
            .await
            .unwrap();

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

        let first = response_json(wrong_password).await;
        let second = response_json(unknown_email).await;
        assert_eq!(first, second);
        assert_eq!(first["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn profile_without_token_is_unauthorized() {
        let app = test_app().await;

        let response = app.clone().oneshot(profile_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn profile_with_non_bearer_header_is_unauthorized() {
        let app = test_app().await;

        let request = Request::builder()
            .method("GET")
            .uri("/profile")
            .header(header::AUTHORIZATION, "Token abc123")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn profile_with_garbage_token_is_forbidden() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(profile_request(Some("garbage.token.here")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn profile_with_foreign_signature_is_forbidden() {
        let app = test_app().await;

        let token = JwtUtils::new("other-secret", 86400)
            .issue_token("user-123")
            .unwrap();
        let response = app
            .clone()
            .oneshot(profile_request(Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn valid_token_for_vanished_user_is_not_found() {
        let app = test_app().await;

        let token = JwtUtils::new(TEST_SECRET, 86400)
            .issue_token(&Uuid::now_v7().to_string())
            .unwrap();
        let response = app
            .clone()
            .oneshot(profile_request(Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert_eq!(body["message"], "User not found");
    }

    #[tokio::test]
    async fn signup_with_invalid_email_is_a_bad_request() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "/signup",
                json!({"name": "A", "email": "not-an-email", "password": "pw1"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
