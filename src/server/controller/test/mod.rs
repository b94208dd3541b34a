use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use jsonwebtoken::Algorithm;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    model::user::User, router, service::token::TokenService, state::AppState,
    util::password::hash_password,
};


/// Full application over an in-memory database.
struct TestApp {
    app: Router,
    db: DatabaseConnection,
    tokens: TokenService,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_access_ttl(Duration::minutes(30)).await
    }

    /// Builds the app with a custom access token lifetime; negative values issue tokens
    /// that are already expired.
    async fn with_access_ttl(access_ttl: Duration) -> Self {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let tokens = TokenService::new(
            b"router-test-secret",
            Algorithm::HS256,
            access_ttl,
            Duration::days(7),
        );
        let app = router::app(AppState::new(db.clone(), tokens.clone()));

        Self { app, db, tokens }
    }

    /// Sends a request and returns the status with the JSON body, or `Null` when the
    /// body is not JSON.
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    /// Inserts a user with a real password hash.
    async fn user(&self, email: &str, password: &str, role: &str) -> User {
        let entity = factory::user::UserFactory::new(&self.db)
            .email(email)
            .name(email.split('@').next().unwrap())
            .role(role)
            .password_hash(hash_password(password).unwrap())
            .build()
            .await
            .unwrap();

        User::from_entity(entity).unwrap()
    }

    /// Inserts a user and returns an access token for it without going through login.
    async fn access_token(&self, role: &str) -> (User, String) {
        let entity = factory::user::UserFactory::new(&self.db)
            .role(role)
            .build()
            .await
            .unwrap();
        let user = User::from_entity(entity).unwrap();
        let token = self.tokens.issue_access_token(&user).unwrap();

        (user, token)
    }

    /// Logs in through the API and returns (access token, refresh token).
    async fn login(&self, email: &str, password: &str) -> (String, String) {
        let (status, body) = self
            .send(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);

        (
            body["access_token"].as_str().unwrap().to_string(),
            body["refresh_token"].as_str().unwrap().to_string(),
        )
    }
}

fn pikachu() -> Value {
    json!({
        "name": "Pikachu",
        "type": "Electric",
        "level": 25,
        "attack": 55,
        "defense": 40,
        "hp": 100,
        "description": "Stores electricity in its cheeks"
    })
}
