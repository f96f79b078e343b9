//! In-memory session registry
//!
//! Sessions expire after a period without access. Expired sessions are
//! dropped lazily on lookup and in bulk by `purge_expired`; dropping a
//! session's flow cancels any code request it still has pending.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use amb_core::services::verification::{CodeDeliveryTrait, VerificationFlow, VerificationFlowConfig};
use amb_shared::config::verification::VerificationConfig;

/// Shortest idle lifetime a session can be given
pub const MIN_SESSION_TTL: Duration = Duration::from_secs(1);

struct SessionEntry<D: CodeDeliveryTrait> {
    flow: Arc<VerificationFlow<D>>,
    last_seen: Instant,
}

impl<D: CodeDeliveryTrait> SessionEntry<D> {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.last_seen) >= ttl
    }
}

/// Registry of open form sessions
pub struct SessionRegistry<D: CodeDeliveryTrait> {
    delivery: Arc<D>,
    flow_config: VerificationFlowConfig,
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, SessionEntry<D>>>,
}

impl<D: CodeDeliveryTrait + 'static> SessionRegistry<D> {
    /// Create an empty registry
    ///
    /// Every flow created by the registry shares `delivery` and `flow_config`.
    /// `ttl` is raised to at least [`MIN_SESSION_TTL`].
    pub fn new(delivery: Arc<D>, flow_config: VerificationFlowConfig, ttl: Duration) -> Self {
        Self {
            delivery,
            flow_config,
            ttl: ttl.max(MIN_SESSION_TTL),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry from the verification settings
    pub fn from_config(delivery: Arc<D>, config: &VerificationConfig) -> Self {
        Self::new(
            delivery,
            VerificationFlowConfig::from(config),
            Duration::from_secs(config.session_ttl_seconds),
        )
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn flow_config(&self) -> &VerificationFlowConfig {
        &self.flow_config
    }

    /// Open a new session with an idle flow
    pub async fn create(&self) -> (Uuid, Arc<VerificationFlow<D>>) {
        let id = Uuid::new_v4();
        let flow = Arc::new(VerificationFlow::new(
            Arc::clone(&self.delivery),
            self.flow_config.clone(),
        ));

        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id,
            SessionEntry {
                flow: Arc::clone(&flow),
                last_seen: Instant::now(),
            },
        );
        debug!(session_id = %id, open_sessions = sessions.len(), "Session created");

        (id, flow)
    }

    /// Look up a session and refresh its idle timer
    ///
    /// Returns `None` for unknown ids and for sessions that have expired.
    pub async fn get(&self, id: &Uuid) -> Option<Arc<VerificationFlow<D>>> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let expired = match sessions.get_mut(id) {
            None => return None,
            Some(entry) if entry.is_expired(now, self.ttl) => true,
            Some(entry) => {
                entry.last_seen = now;
                return Some(Arc::clone(&entry.flow));
            }
        };

        if expired {
            sessions.remove(id);
            debug!(session_id = %id, "Session expired on lookup");
        }
        None
    }

    /// Close a session, returning whether it existed
    pub async fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            debug!(session_id = %id, "Session removed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop every session idle for at least the ttl
    ///
    /// Returns the number of sessions removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now, self.ttl));
        let purged = before - sessions.len();

        if purged > 0 {
            info!(purged, remaining = sessions.len(), "Purged expired sessions");
        }
        purged
    }

    /// Purge expired sessions every `interval` in the background
    ///
    /// The task ends once the registry itself has been dropped.
    pub fn spawn_purge_task(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let registry: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match registry.upgrade() {
                    Some(registry) => {
                        registry.purge_expired().await;
                    }
                    None => break,
                }
            }
        })
    }
}
