//! Session: one identity, one matrix, consistent use of store/ranker/learner.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use engram_core::config::defaults::DEFAULT_LEARNING_RATE;
use engram_core::errors::{EngramError, EngramResult, ShapeError};
use engram_core::models::FeedbackOutcome;
use engram_core::traits::IModelStore;
use engram_core::{SessionIdentity, WeightMatrix};
use engram_storage::FileModelStore;

use crate::analytics::SessionAnalytics;

/// A live ranking session for one (user, session) identity.
///
/// The weight matrix lives behind a `RwLock`: ranks take the read side and
/// may run concurrently, feedback takes the write side, so a rank never
/// observes a matrix mid-update. Saving snapshots under the read lock, so
/// a save cannot interleave with an in-flight feedback either.
///
/// Persistence is explicit: nothing is written until [`Session::save`].
pub struct Session {
    identity: SessionIdentity,
    dimension: usize,
    store: Arc<dyn IModelStore>,
    matrix: RwLock<WeightMatrix>,
    analytics: Mutex<SessionAnalytics>,
    default_learning_rate: f64,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("identity", &self.identity)
            .field("dimension", &self.dimension)
            .field("matrix", &self.matrix)
            .field("analytics", &self.analytics)
            .field("default_learning_rate", &self.default_learning_rate)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Open a session against an existing store.
    ///
    /// `dimension` is required only when no model is persisted yet for the
    /// derived identity. When a model exists, a supplied dimension must
    /// match the stored one; the stored model is never reshaped or
    /// replaced to satisfy the caller.
    pub fn open(
        user_id: &str,
        credential: &str,
        session_id: &str,
        store: Arc<dyn IModelStore>,
        dimension: Option<usize>,
    ) -> EngramResult<Self> {
        let identity = SessionIdentity::derive(user_id, credential, session_id)?;
        let stored = store.stored_dimension(&identity)?;
        let dimension = match (stored, dimension) {
            (Some(stored), Some(requested)) if requested != stored => {
                return Err(ShapeError::StoredDimensionMismatch { requested, stored }.into());
            }
            (Some(stored), _) => stored,
            (None, Some(requested)) => requested,
            (None, None) => return Err(ShapeError::DimensionUnspecified.into()),
        };
        let matrix = store.load(&identity, dimension)?;

        info!(
            identity = %identity,
            dimension,
            fresh = stored.is_none(),
            "session opened"
        );
        Ok(Self {
            identity,
            dimension,
            store,
            matrix: RwLock::new(matrix),
            analytics: Mutex::new(SessionAnalytics::default()),
            default_learning_rate: DEFAULT_LEARNING_RATE,
        })
    }

    /// Open a session with a file store rooted at `model_dir`.
    pub fn open_dir(
        user_id: &str,
        credential: &str,
        session_id: &str,
        model_dir: impl AsRef<Path>,
        dimension: Option<usize>,
    ) -> EngramResult<Self> {
        let store = Arc::new(FileModelStore::open(model_dir)?);
        Self::open(user_id, credential, session_id, store, dimension)
    }

    /// Override the rate used when a feedback call does not supply one.
    pub fn with_default_learning_rate(mut self, rate: f64) -> Self {
        self.default_learning_rate = rate;
        self
    }

    /// Rank candidates against a query with the current matrix.
    pub fn rank(&self, candidates: &[Vec<f64>], query: &[f64]) -> EngramResult<Vec<usize>> {
        let ordering = engram_ranking::rank(&*self.read_matrix()?, candidates, query)?;
        self.lock_analytics()?.record_rank(candidates.len());
        Ok(ordering)
    }

    /// Apply a batch of binary relevance feedback to the in-memory matrix.
    ///
    /// `ordering`, when supplied, pairs each record with the rank position
    /// it received in the round being judged and feeds session analytics;
    /// it does not influence the update. `learning_rate` of `None` uses
    /// the session default. Records apply sequentially in input order, so
    /// batch order affects the final matrix; reversing a batch may
    /// legitimately produce a different model.
    ///
    /// The durable model is untouched until [`Session::save`].
    pub fn feedback(
        &self,
        candidates: &[Vec<f64>],
        queries: &[Vec<f64>],
        labels: &[f64],
        ordering: Option<&[usize]>,
        learning_rate: Option<f64>,
    ) -> EngramResult<FeedbackOutcome> {
        if let Some(ordering) = ordering {
            if ordering.len() != candidates.len() {
                return Err(ShapeError::OrderingLengthMismatch {
                    expected: candidates.len(),
                    actual: ordering.len(),
                }
                .into());
            }
        }
        let rate = learning_rate.unwrap_or(self.default_learning_rate);

        let outcome = {
            let mut matrix = self.write_matrix()?;
            engram_learning::apply_feedback(&mut matrix, candidates, queries, labels, rate)?
        };
        self.lock_analytics()?
            .record_feedback(&outcome, labels, ordering);
        Ok(outcome)
    }

    /// Reload the matrix from durable storage, discarding any unsaved
    /// learning, and return a snapshot of what was loaded.
    ///
    /// The requested dimension must be the one this session was opened at;
    /// a session never changes shape mid-life.
    pub fn load(&self, dimension: usize) -> EngramResult<WeightMatrix> {
        if dimension != self.dimension {
            return Err(ShapeError::StoredDimensionMismatch {
                requested: dimension,
                stored: self.dimension,
            }
            .into());
        }
        let fresh = self.store.load(&self.identity, dimension)?;
        *self.write_matrix()? = fresh.clone();
        Ok(fresh)
    }

    /// Persist the current matrix under this session's key.
    pub fn save(&self) -> EngramResult<()> {
        let matrix = self.read_matrix()?;
        self.store.save(&self.identity, &matrix)
    }

    /// The derived identity for this session.
    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    /// The model dimension this session operates at.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Snapshot of the current weight matrix.
    pub fn weights(&self) -> EngramResult<WeightMatrix> {
        Ok(self.read_matrix()?.clone())
    }

    /// Snapshot of this session's process-local analytics.
    pub fn analytics(&self) -> EngramResult<SessionAnalytics> {
        Ok(self.lock_analytics()?.clone())
    }

    fn read_matrix(&self) -> EngramResult<RwLockReadGuard<'_, WeightMatrix>> {
        self.matrix
            .read()
            .map_err(|_| EngramError::LockPoisoned { context: "weight matrix" })
    }

    fn write_matrix(&self) -> EngramResult<RwLockWriteGuard<'_, WeightMatrix>> {
        self.matrix
            .write()
            .map_err(|_| EngramError::LockPoisoned { context: "weight matrix" })
    }

    fn lock_analytics(&self) -> EngramResult<MutexGuard<'_, SessionAnalytics>> {
        self.analytics
            .lock()
            .map_err(|_| EngramError::LockPoisoned { context: "session analytics" })
    }
}
