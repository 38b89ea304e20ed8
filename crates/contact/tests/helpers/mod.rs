use std::{
    path::PathBuf,
    str::FromStr,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;
use frontier_contact::{DeliveryClient, DeliveryError, DeliveryRequest, Inbox, SubmissionPayload};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use tokio::sync::Notify;

pub const DESTINATION: &str = "owner@frontier.localhost";

#[allow(dead_code)]
pub async fn setup_test_inbox(path: PathBuf) -> anyhow::Result<Inbox> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    frontier_contact::MIGRATOR.run(&pool).await?;

    Ok(Inbox::new(pool.clone(), pool))
}

#[allow(dead_code)]
pub fn jane() -> SubmissionPayload {
    SubmissionPayload::new("Jane", "jane@x.com", "Need a site")
}

/// Records every request and resolves when released.
///
/// `started` fires once a call is in flight; the call then waits for
/// `release` so tests can observe the session mid-delivery.
#[derive(Default)]
pub struct GatedClient {
    pub calls: Mutex<Vec<DeliveryRequest>>,
    pub started: Notify,
    pub release: Notify,
    gated: AtomicBool,
    fail: AtomicBool,
}

#[allow(dead_code)]
impl GatedClient {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let client = Self::default();
        client.fail.store(true, Ordering::SeqCst);
        client
    }

    pub fn gated(self) -> Self {
        self.gated.store(true, Ordering::SeqCst);
        self
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
            self.release.notified().await;
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(DeliveryError::Network("connection reset by peer".to_owned()));
        }

        Ok(())
    }
}
