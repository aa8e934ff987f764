use crate::config::HealthConfig;
use crate::storage::ContactStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

#[derive(Clone, Debug)]
pub struct HealthService {
    store: Arc<dyn ContactStore>,
    config: HealthConfig,
}

impl HealthService {
    #[must_use]
    pub fn new(store: Arc<dyn ContactStore>, config: HealthConfig) -> Self {
        Self { store, config }
    }

    /// Checks contact store connectivity.
    ///
    /// # Errors
    /// Returns a string describing the failure if the store is unreachable.
    pub async fn check_store(&self) -> Result<(), String> {
        let db_timeout = Duration::from_millis(self.config.db_timeout_ms);

        match timeout(db_timeout, self.store.check()).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(format!("Store connection failed: {e:?}")),
            Err(_) => Err("Store connection timed out".to_string()),
        }
    }
}
