#![allow(dead_code)]

use async_trait::async_trait;
use folio_server::api::{self, MgmtState};
use folio_server::config::HealthConfig;
use folio_server::domain::contact::ContactMessage;
use folio_server::services::health_service::HealthService;
use folio_server::services::submission_service::SubmissionService;
use folio_server::storage::{ContactStore, StoreError};
use std::sync::{Arc, Mutex, Once};
use tokio::sync::Notify;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("folio_server=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// Store that accepts every write and keeps the appended messages for
/// inspection.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub appended: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl ContactStore for RecordingStore {
    async fn append(&self, message: &ContactMessage) -> Result<(), StoreError> {
        self.appended.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Store that rejects every write, counting the attempts.
#[derive(Debug, Default)]
pub struct RejectingStore {
    pub attempts: Mutex<u32>,
}

#[async_trait]
impl ContactStore for RejectingStore {
    async fn append(&self, _message: &ContactMessage) -> Result<(), StoreError> {
        *self.attempts.lock().unwrap() += 1;
        Err(StoreError::Other(anyhow::anyhow!("store rejected the write")))
    }

    async fn check(&self) -> Result<(), StoreError> {
        Err(StoreError::Other(anyhow::anyhow!("store unreachable")))
    }
}

/// Store whose `append` blocks until released, to hold the submission busy
/// window open from a test.
#[derive(Debug, Default)]
pub struct GateStore {
    pub entered: Notify,
    pub release: Notify,
    pub appended: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl ContactStore for GateStore {
    async fn append(&self, message: &ContactMessage) -> Result<(), StoreError> {
        self.appended.lock().unwrap().push(message.clone());
        self.entered.notify_one();
        self.release.notified().await;
        Ok(())
    }

    async fn check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub struct TestApp {
    pub api_url: String,
    pub mgmt_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawns the API and management servers on ephemeral ports with the
    /// given store injected.
    pub async fn spawn(store: Arc<dyn ContactStore>) -> Self {
        setup_tracing();

        let submission_service = SubmissionService::new(Arc::clone(&store));
        let health_service = HealthService::new(store, HealthConfig { db_timeout_ms: 500 });

        let app_router = api::app_router(submission_service);
        let mgmt_router = api::mgmt_router(MgmtState { health_service });

        let api_listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind api listener");
        let mgmt_listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mgmt listener");
        let api_addr = api_listener.local_addr().expect("api addr");
        let mgmt_addr = mgmt_listener.local_addr().expect("mgmt addr");

        tokio::spawn(async move {
            axum::serve(api_listener, app_router).await.expect("api server");
        });
        tokio::spawn(async move {
            axum::serve(mgmt_listener, mgmt_router).await.expect("mgmt server");
        });

        Self {
            api_url: format!("http://{api_addr}"),
            mgmt_url: format!("http://{mgmt_addr}"),
            client: reqwest::Client::new(),
        }
    }
}
