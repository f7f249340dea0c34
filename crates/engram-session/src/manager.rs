//! SessionManager: concurrent per-identity session registry via DashMap.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use engram_core::errors::{EngramResult, ShapeError};
use engram_core::traits::IModelStore;
use engram_core::{EngramConfig, SessionIdentity};
use engram_storage::FileModelStore;

use crate::session::Session;

/// Thread-safe registry handing out one shared [`Session`] per identity.
///
/// Funneling every in-process caller of an identity through the same
/// session gives feedback its required per-identity mutual exclusion:
/// the matrix read-modify-write happens under that session's single write
/// lock. Distinct identities never share state.
pub struct SessionManager {
    sessions: DashMap<String, Arc<Session>>,
    store: Arc<dyn IModelStore>,
    default_learning_rate: f64,
}

impl SessionManager {
    /// Create a manager over an existing store.
    pub fn new(store: Arc<dyn IModelStore>) -> Self {
        Self {
            sessions: DashMap::new(),
            store,
            default_learning_rate: engram_core::config::defaults::DEFAULT_LEARNING_RATE,
        }
    }

    /// Create a manager from configuration: file store at the configured
    /// model directory, configured default learning rate.
    pub fn with_config(config: &EngramConfig) -> EngramResult<Self> {
        let store = Arc::new(FileModelStore::open(&config.storage.model_dir)?);
        Ok(Self {
            sessions: DashMap::new(),
            store,
            default_learning_rate: config.learning.default_learning_rate,
        })
    }

    /// Get the shared session for an identity, opening it on first use.
    ///
    /// A supplied `dimension` must agree with an already-open session for
    /// the same identity, just as it must agree with a persisted model.
    pub fn open_or_get(
        &self,
        user_id: &str,
        credential: &str,
        session_id: &str,
        dimension: Option<usize>,
    ) -> EngramResult<Arc<Session>> {
        let identity = SessionIdentity::derive(user_id, credential, session_id)?;
        match self.sessions.entry(identity.key().to_string()) {
            Entry::Occupied(entry) => {
                let session = entry.get().clone();
                if let Some(requested) = dimension {
                    if requested != session.dimension() {
                        return Err(ShapeError::StoredDimensionMismatch {
                            requested,
                            stored: session.dimension(),
                        }
                        .into());
                    }
                }
                Ok(session)
            }
            Entry::Vacant(entry) => {
                let session = Arc::new(
                    Session::open(
                        user_id,
                        credential,
                        session_id,
                        self.store.clone(),
                        dimension,
                    )?
                    .with_default_learning_rate(self.default_learning_rate),
                );
                entry.insert(session.clone());
                Ok(session)
            }
        }
    }

    /// Drop the registry entry for an identity. In-flight holders of the
    /// `Arc` keep working; unsaved learning is lost when the last one goes.
    pub fn close(&self, identity: &SessionIdentity) -> Option<Arc<Session>> {
        self.sessions.remove(identity.key()).map(|(_, v)| v)
    }

    /// Number of open sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
