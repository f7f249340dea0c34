//! FileModelStore: one `<key>.model.json` per session identity.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use engram_core::constants::{MODEL_FILE_EXTENSION, MODEL_FORMAT_VERSION};
use engram_core::errors::{EngramResult, ShapeError, StorageError};
use engram_core::models::PersistedModel;
use engram_core::traits::IModelStore;
use engram_core::{SessionIdentity, WeightMatrix};

/// Flat-file model store rooted at a single directory.
///
/// Layout: `<root>/<identity key>.model.json`, holding a [`PersistedModel`].
/// Saves overwrite; the durable model only changes through an explicit
/// `save` call. Writes are published with a temp-file-then-rename so a
/// crash mid-write leaves either the old model or the new one, never a
/// torn file.
pub struct FileModelStore {
    root: PathBuf,
}

impl FileModelStore {
    /// Open a store rooted at `model_dir`, creating the directory if needed.
    pub fn open(model_dir: impl AsRef<Path>) -> EngramResult<Self> {
        let root = model_dir.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| StorageError::Io {
            path: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Final path of the model file for an identity.
    pub fn model_path(&self, identity: &SessionIdentity) -> PathBuf {
        self.root
            .join(format!("{}.{}", identity.key(), MODEL_FILE_EXTENSION))
    }

    fn read_persisted(&self, path: &Path) -> EngramResult<PersistedModel> {
        let content = fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let model: PersistedModel =
            serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        if model.format_version != MODEL_FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: model.format_version,
                supported: MODEL_FORMAT_VERSION,
            }
            .into());
        }
        if model.dimension == 0 || model.weights.len() != model.dimension * model.dimension {
            return Err(StorageError::Corrupt {
                path: path.display().to_string(),
                reason: format!(
                    "dimension {} with {} weights",
                    model.dimension,
                    model.weights.len()
                ),
            }
            .into());
        }
        Ok(model)
    }
}

impl IModelStore for FileModelStore {
    fn load(&self, identity: &SessionIdentity, dimension: usize) -> EngramResult<WeightMatrix> {
        if dimension == 0 {
            return Err(ShapeError::ZeroDimension.into());
        }
        let path = self.model_path(identity);
        if !path.exists() {
            debug!(identity = %identity, dimension, "no persisted model, starting fresh");
            return Ok(WeightMatrix::identity(dimension)?);
        }

        let model = self.read_persisted(&path)?;
        if model.dimension != dimension {
            return Err(ShapeError::StoredDimensionMismatch {
                requested: dimension,
                stored: model.dimension,
            }
            .into());
        }
        debug!(identity = %identity, dimension, "loaded persisted model");
        Ok(model.into_matrix()?)
    }

    fn save(&self, identity: &SessionIdentity, matrix: &WeightMatrix) -> EngramResult<()> {
        let path = self.model_path(identity);
        let model = PersistedModel::from_matrix(matrix);
        let serialized =
            serde_json::to_string(&model).map_err(|e| StorageError::Corrupt {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        // Stage the full content next to the target, then publish with a
        // rename. The uuid suffix keeps concurrent writers from clobbering
        // each other's staging files.
        let tmp_path = self
            .root
            .join(format!("{}.{}.tmp", identity.key(), uuid::Uuid::new_v4()));
        let write_result = (|| {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(serialized.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp_path, &path)
        })();
        if let Err(source) = write_result {
            // Best-effort cleanup of the staging file; the original error wins.
            let _ = fs::remove_file(&tmp_path);
            return Err(StorageError::Io {
                path: path.display().to_string(),
                source,
            }
            .into());
        }

        info!(
            identity = %identity,
            dimension = matrix.dimension(),
            path = %path.display(),
            "model saved"
        );
        Ok(())
    }

    fn stored_dimension(&self, identity: &SessionIdentity) -> EngramResult<Option<usize>> {
        let path = self.model_path(identity);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.read_persisted(&path)?.dimension))
    }
}
