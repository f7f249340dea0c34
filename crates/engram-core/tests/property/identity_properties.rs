//! Property tests: identity derivation is total, deterministic, and injective
//! across session labels for non-empty inputs.

use proptest::prelude::*;

use engram_core::SessionIdentity;

proptest! {
    #[test]
    fn prop_derivation_deterministic(
        user in "[a-zA-Z0-9_.@-]{1,32}",
        cred in "[ -~]{1,64}",
        session in "[a-zA-Z0-9_-]{1,16}",
    ) {
        let a = SessionIdentity::derive(&user, &cred, &session).unwrap();
        let b = SessionIdentity::derive(&user, &cred, &session).unwrap();
        prop_assert_eq!(a.key(), b.key());
        prop_assert_eq!(a.key().len(), 64);
    }

    #[test]
    fn prop_distinct_sessions_distinct_keys(
        user in "[a-zA-Z0-9_.@-]{1,32}",
        cred in "[ -~]{1,64}",
        session_a in "[a-zA-Z0-9_-]{1,16}",
        session_b in "[a-zA-Z0-9_-]{1,16}",
    ) {
        prop_assume!(session_a != session_b);
        let a = SessionIdentity::derive(&user, &cred, &session_a).unwrap();
        let b = SessionIdentity::derive(&user, &cred, &session_b).unwrap();
        prop_assert_ne!(a.key(), b.key());
    }
}
