/// Errors from session identity derivation.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity input `{field}` must not be empty")]
    EmptyField { field: &'static str },
}
