use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::persist::Persistence;

/// Storage key for the persisted authentication flag.
pub const AUTH_KEY: &str = "admin_authenticated";

// Shared admin password. This gates UI state only; it is not a security
// boundary and must not be treated as one.
const ADMIN_PASSWORD: &str = "Demitrie23@";

/// Gate in front of the admin surface: one authenticated/unauthenticated
/// flag mirrored into persistent storage so a restart keeps the session.
pub struct SessionGate {
    authenticated: AtomicBool,
    persist: Arc<dyn Persistence>,
}

impl SessionGate {
    /// Build the gate and restore the persisted flag, if any.
    pub fn restore(persist: Arc<dyn Persistence>) -> Self {
        let saved = matches!(persist.get(AUTH_KEY), Some(Value::Bool(true)));
        Self {
            authenticated: AtomicBool::new(saved),
            persist,
        }
    }

    /// Compare against the shared password; on match, authenticate and
    /// persist the flag. Returns whether it matched.
    pub fn login(&self, password: &str) -> bool {
        if password != ADMIN_PASSWORD {
            return false;
        }
        self.authenticated.store(true, Ordering::SeqCst);
        self.persist.set(AUTH_KEY, Value::Bool(true));
        true
    }

    /// Clear both the in-memory flag and the persisted mirror.
    pub fn logout(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
        self.persist.remove(AUTH_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::Ephemeral;
    use serde_json::json;

    #[test]
    fn wrong_password_is_rejected() {
        let gate = SessionGate::restore(Arc::new(Ephemeral::new()));
        assert!(!gate.login("letmein"));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn login_persists_and_logout_clears() {
        let persist: Arc<dyn Persistence> = Arc::new(Ephemeral::new());
        let gate = SessionGate::restore(persist.clone());

        assert!(gate.login(ADMIN_PASSWORD));
        assert!(gate.is_authenticated());
        assert_eq!(persist.get(AUTH_KEY), Some(json!(true)));

        gate.logout();
        assert!(!gate.is_authenticated());
        assert_eq!(persist.get(AUTH_KEY), None);
    }

    #[test]
    fn restore_picks_up_a_saved_session() {
        let persist: Arc<dyn Persistence> = Arc::new(Ephemeral::new());
        persist.set(AUTH_KEY, json!(true));
        let gate = SessionGate::restore(persist.clone());
        assert!(gate.is_authenticated());

        // anything other than a true boolean reads as signed out
        persist.set(AUTH_KEY, json!("yes"));
        let gate = SessionGate::restore(persist);
        assert!(!gate.is_authenticated());
    }
}
