//! Cross-crate interfaces.

pub mod model_store;

pub use model_store::IModelStore;
