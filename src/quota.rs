//! Persistent free-rewrite quota and membership flag.
//!
//! [`QuotaStore`] is a plain ledger: it reads its state once from the injected
//! [`KeyValueStore`], writes through on every mutation, and never gates
//! anything itself. The free-limit check lives in the rewrite session.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::traits::KeyValueStore;

/// Rewrites a non-member may perform.
pub const FREE_REWRITE_LIMIT: u32 = 10;

/// Storage key for the stringified rewrite count.
pub const REWRITE_COUNT_KEY: &str = "rewriteCount";

/// Storage key for the membership flag (`"true"` / `"false"`).
pub const IS_MEMBER_KEY: &str = "isMember";

/// Snapshot of the quota ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QuotaState {
    pub rewrite_count: u32,
    pub is_member: bool,
}

impl QuotaState {
    /// The free limit shown next to the count.
    pub fn limit(&self) -> u32 {
        FREE_REWRITE_LIMIT
    }

    /// True when a non-member has used every free rewrite.
    pub fn is_exhausted(&self) -> bool {
        !self.is_member && self.rewrite_count >= FREE_REWRITE_LIMIT
    }

    /// Free rewrites left, or `None` for members.
    pub fn remaining(&self) -> Option<u32> {
        if self.is_member {
            None
        } else {
            Some(FREE_REWRITE_LIMIT.saturating_sub(self.rewrite_count))
        }
    }
}

/// Ledger of rewrite usage backed by key-value persistence.
pub struct QuotaStore {
    store: Arc<dyn KeyValueStore>,
    state: QuotaState,
}

impl QuotaStore {
    /// Load the ledger from `store`.
    ///
    /// Missing values default to zero / not a member. Unreadable or corrupt
    /// values are normalized to the same defaults without surfacing an error.
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let rewrite_count = match store.get(REWRITE_COUNT_KEY) {
            Ok(raw) => parse_count(raw.as_deref()),
            Err(e) => {
                tracing::warn!("Quota count unreadable, starting from 0: {}", e);
                0
            }
        };
        let is_member = match store.get(IS_MEMBER_KEY) {
            Ok(raw) => raw.as_deref().map(str::trim) == Some("true"),
            Err(e) => {
                tracing::warn!("Membership flag unreadable, assuming non-member: {}", e);
                false
            }
        };

        let state = QuotaState {
            rewrite_count,
            is_member,
        };
        tracing::debug!(?state, "Quota loaded");
        Self { store, state }
    }

    /// Current quota state.
    pub fn state(&self) -> QuotaState {
        self.state
    }

    /// Record one rewrite that reached the backend and persist it.
    pub fn increment_count(&mut self) -> QuotaState {
        self.state.rewrite_count = self.state.rewrite_count.saturating_add(1);
        self.persist(REWRITE_COUNT_KEY, &self.state.rewrite_count.to_string());
        tracing::info!(
            rewrite_count = self.state.rewrite_count,
            is_member = self.state.is_member,
            "Rewrite counted"
        );
        self.state
    }

    /// Grant membership. Membership is never revoked.
    pub fn grant_membership(&mut self) -> QuotaState {
        self.state.is_member = true;
        self.persist(IS_MEMBER_KEY, "true");
        tracing::info!(rewrite_count = self.state.rewrite_count, "Membership granted");
        self.state
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, "Failed to persist quota state: {}", e);
        }
    }
}

impl fmt::Debug for QuotaStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuotaStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Parse a stored count; anything but a non-negative integer is 0.
fn parse_count(raw: Option<&str>) -> u32 {
    match raw {
        None => 0,
        Some(value) => match value.trim().parse::<u32>() {
            Ok(count) => count,
            Err(_) => {
                tracing::warn!(value, "Corrupt rewrite count, resetting to 0");
                0
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;

    #[test]
    fn test_defaults_when_empty() {
        let quota = QuotaStore::open(Arc::new(InMemoryStore::new()));
        assert_eq!(quota.state(), QuotaState::default());
        assert_eq!(quota.state().remaining(), Some(10));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some("7")), 7);
        assert_eq!(parse_count(Some(" 12 ")), 12);
        assert_eq!(parse_count(Some("-3")), 0);
        assert_eq!(parse_count(Some("abc")), 0);
        assert_eq!(parse_count(Some("4.5")), 0);
        assert_eq!(parse_count(Some("")), 0);
    }

    #[test]
    fn test_increment_persists() {
        let store = Arc::new(InMemoryStore::new());
        let mut quota = QuotaStore::open(store.clone());
        for _ in 0..3 {
            quota.increment_count();
        }
        assert_eq!(quota.state().rewrite_count, 3);
        assert_eq!(store.value(REWRITE_COUNT_KEY), Some("3".to_string()));

        let reopened = QuotaStore::open(store);
        assert_eq!(reopened.state().rewrite_count, 3);
    }

    #[test]
    fn test_membership_survives_increments() {
        let store = Arc::new(InMemoryStore::new());
        let mut quota = QuotaStore::open(store.clone());
        let granted = quota.grant_membership();
        assert!(granted.is_member);
        for _ in 0..15 {
            assert!(quota.increment_count().is_member);
        }
        assert_eq!(store.value(IS_MEMBER_KEY), Some("true".to_string()));
        assert!(!quota.state().is_exhausted());
        assert_eq!(quota.state().remaining(), None);
    }

    #[test]
    fn test_exhaustion_boundary() {
        let below = QuotaState {
            rewrite_count: 9,
            is_member: false,
        };
        let at = QuotaState {
            rewrite_count: 10,
            is_member: false,
        };
        let member = QuotaState {
            rewrite_count: 25,
            is_member: true,
        };
        assert!(!below.is_exhausted());
        assert!(at.is_exhausted());
        assert!(!member.is_exhausted());
        assert_eq!(at.remaining(), Some(0));
    }

    #[test]
    fn test_corrupt_values_self_heal() {
        let store = Arc::new(InMemoryStore::new());
        store.insert(REWRITE_COUNT_KEY, "NaN");
        store.insert(IS_MEMBER_KEY, "yes");
        let quota = QuotaStore::open(store);
        assert_eq!(quota.state(), QuotaState::default());
    }

    #[test]
    fn test_unreadable_store_defaults() {
        let store = Arc::new(InMemoryStore::new());
        store.insert(REWRITE_COUNT_KEY, "8");
        store.set_read_should_fail(true);
        let quota = QuotaStore::open(store);
        assert_eq!(quota.state().rewrite_count, 0);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let store = Arc::new(InMemoryStore::new());
        store.set_write_should_fail(true);
        let mut quota = QuotaStore::open(store.clone());
        assert_eq!(quota.increment_count().rewrite_count, 1);
        assert_eq!(store.value(REWRITE_COUNT_KEY), None);
    }
}
