use crate::errors::EngramResult;
use crate::identity::SessionIdentity;
use crate::matrix::WeightMatrix;

/// Persistence interface for per-identity weight matrices.
///
/// One durable model per [`SessionIdentity`]. `load` of an absent model
/// returns a fresh identity matrix of the requested dimension; `load` of a
/// present model whose stored dimension differs fails and leaves the stored
/// model untouched. `save` overwrites atomically with respect to crashes.
pub trait IModelStore: Send + Sync {
    fn load(&self, identity: &SessionIdentity, dimension: usize) -> EngramResult<WeightMatrix>;
    fn save(&self, identity: &SessionIdentity, matrix: &WeightMatrix) -> EngramResult<()>;

    /// Dimension of the persisted model, if one exists.
    fn stored_dimension(&self, identity: &SessionIdentity) -> EngramResult<Option<usize>>;

    fn exists(&self, identity: &SessionIdentity) -> EngramResult<bool> {
        Ok(self.stored_dimension(identity)?.is_some())
    }
}
