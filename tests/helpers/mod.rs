use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use frontier::{
    AppState,
    config::{
        Config, ContactConfig, DatabaseConfig, DeliveryConfig, ObservabilityConfig, ServerConfig,
    },
};
use frontier_bot::OwnerConfig;
use frontier_contact::{
    ContactSessions, ContactWorkflow, DeliveryClient, DeliveryError, DeliveryRequest, Inbox,
};
use frontier_notification::EmailConfig;
use http_body_util::BodyExt;
use temp_dir::TempDir;
use tokio::sync::{Notify, Semaphore};
use tower::ServiceExt;

pub const DESTINATION: &str = "sirfrontier3@gmail.com";

/// Delivery client that records requests and can hold them in flight.
pub struct GatedClient {
    pub calls: Mutex<Vec<DeliveryRequest>>,
    pub started: Notify,
    release: Semaphore,
    gated: AtomicBool,
    fail: AtomicBool,
}

impl Default for GatedClient {
    fn default() -> Self {
        Self {
            calls: Mutex::default(),
            started: Notify::new(),
            release: Semaphore::new(0),
            gated: AtomicBool::new(false),
            fail: AtomicBool::new(false),
        }
    }
}

#[allow(dead_code)]
impl GatedClient {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        let client = Self::default();
        client.fail.store(true, Ordering::SeqCst);
        Arc::new(client)
    }

    pub fn gated() -> Arc<Self> {
        let client = Self::default();
        client.gated.store(true, Ordering::SeqCst);
        Arc::new(client)
    }

    /// Lets one held delivery resolve.
    pub fn release_one(&self) {
        self.release.add_permits(1);
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<DeliveryRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryClient for GatedClient {
    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        self.calls.lock().unwrap().push(request.clone());

        if self.gated.load(Ordering::SeqCst) {
            self.started.notify_one();
            if let Ok(permit) = self.release.acquire().await {
                permit.forget();
            }
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(DeliveryError::Rejected {
                status: 400,
                body: "The Public Key is invalid".to_owned(),
            });
        }

        Ok(())
    }
}

pub fn test_config(database_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: database_url.to_owned(),
            max_connections: 5,
        },
        contact: ContactConfig::default(),
        delivery: DeliveryConfig::default(),
        email: EmailConfig::default(),
        owner: OwnerConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub sessions: ContactSessions,
    pub client: Arc<GatedClient>,
    _dir: TempDir,
}

pub async fn create_test_app(client: Arc<GatedClient>) -> TestApp {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
    let pool = frontier::create_pool(&url, 5).await.unwrap();
    frontier_contact::MIGRATOR.run(&pool).await.unwrap();

    let config = test_config(&url);
    let sessions = ContactSessions::new();

    let state = AppState {
        workflow: ContactWorkflow::new(client.clone(), &config.contact.address),
        sessions: sessions.clone(),
        inbox: Inbox::new(pool.clone(), pool.clone()),
        pool,
        config,
    };

    TestApp {
        router: frontier::router(state),
        sessions,
        client,
        _dir: dir,
    }
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

#[allow(dead_code)]
pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(
        router,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub async fn post_form(router: &Router, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
    send(
        router,
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
            .unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub async fn send_json(
    router: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> TestResponse {
    send(
        router,
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub fn jane(visit: &'static str) -> [(&'static str, &'static str); 4] {
    [
        ("visit", visit),
        ("name", "Jane"),
        ("email", "jane@x.com"),
        ("message", "Need a site"),
    ]
}
