//! Credential storage and verification
//!
//! Holds the account table and the verifier seam behind the session gate.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Static credential store - in production this would be a proper database
static ACCOUNTS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut accounts = HashMap::new();
    accounts.insert("testuser", "Testpass1!");
    accounts
});

/// Comparison interface behind the session gate.
///
/// The session asks exactly one question: does this username/password pair
/// name a known account. Swapping the implementation swaps the
/// authentication backend without touching the state machine.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Verifier over the static in-memory account table.
///
/// Matching is case-sensitive and exact: no trimming, no normalization,
/// no lockout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCredentials;

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        ACCOUNTS
            .get(username)
            .is_some_and(|stored| *stored == password)
    }
}
