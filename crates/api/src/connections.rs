//! Registry of open chat connections.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Open connections keyed by a per-connection id.
///
/// Connections share nothing through the registry; it only tracks who is
/// connected for health reporting and logs.
#[derive(Debug, Clone, Default)]
pub struct ConnectionRegistry {
    open: Arc<RwLock<HashMap<Uuid, DateTime<Utc>>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new connection and return its id.
    pub async fn register(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.open.write().await.insert(id, Utc::now());
        id
    }

    /// Forget a connection. Returns how long it was open.
    pub async fn unregister(&self, id: Uuid) -> Option<chrono::Duration> {
        self.open
            .write()
            .await
            .remove(&id)
            .map(|opened| Utc::now() - opened)
    }

    pub async fn count(&self) -> usize {
        self.open.read().await.len()
    }
}
