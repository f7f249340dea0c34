//! Session identity: a one-way storage key derived from user credentials.

use std::fmt;

use crate::errors::IdentityError;

/// Opaque per-(user, session) key used to namespace persisted models.
///
/// The key is a BLAKE3 digest over `(user_id, credential, session_id)` with
/// length-prefix framing, so `("ab", "c")` and `("a", "bc")` never collide.
/// Identical inputs always derive the identical key; distinct session labels
/// for the same user derive distinct keys. The digest is not reversible: the
/// raw credential cannot be recovered from the key or from any file named by
/// it, and it must never be logged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionIdentity {
    key: String,
}

impl SessionIdentity {
    /// Derive the identity for a (user, credential, session) triple.
    /// All three inputs must be non-empty.
    pub fn derive(
        user_id: &str,
        credential: &str,
        session_id: &str,
    ) -> Result<Self, IdentityError> {
        require_non_empty("user_id", user_id)?;
        require_non_empty("credential", credential)?;
        require_non_empty("session_id", session_id)?;

        let mut hasher = blake3::Hasher::new();
        for part in [user_id, credential, session_id] {
            hasher.update(&(part.len() as u64).to_le_bytes());
            hasher.update(part.as_bytes());
        }
        Ok(Self {
            key: hasher.finalize().to_hex().to_string(),
        })
    }

    /// The hex key, used verbatim as the storage namespace.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for SessionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), IdentityError> {
    if value.is_empty() {
        Err(IdentityError::EmptyField { field })
    } else {
        Ok(())
    }
}
