//! Built-in placeholder users.
//!
//! Serves the ten demo users bundled with the crate. An optional latency
//! keeps the source in the loading state for a while after creation and
//! after every refresh, so the loading skeletons can be seen.

use std::time::{Duration, Instant};

use crate::users::source::{ListSnapshot, RecordSource};
use crate::users::types::UserRecord;

const PLACEHOLDER_USERS_JSON: &str = include_str!("placeholder_users.json");

/// Parse the bundled placeholder records.
pub fn placeholder_users() -> Result<Vec<UserRecord>, serde_json::Error> {
    serde_json::from_str(PLACEHOLDER_USERS_JSON)
}

pub struct PlaceholderSource {
    records: Vec<UserRecord>,
    load_error: Option<String>,
    latency: Duration,
    ready_at: Instant,
}

impl PlaceholderSource {
    pub fn new(latency: Duration) -> Self {
        let (records, load_error) = match placeholder_users() {
            Ok(records) => {
                crate::events::log_records_loaded("placeholder", records.len());
                (records, None)
            }
            Err(e) => {
                crate::events::log_records_unavailable("placeholder", &e);
                (Vec::new(), Some(format!("Bundled user data is invalid: {}", e)))
            }
        };

        Self {
            records,
            load_error,
            latency,
            ready_at: Instant::now() + latency,
        }
    }

    /// Snapshot as observed at `now`.
    pub fn snapshot_at(&self, now: Instant) -> ListSnapshot {
        if now < self.ready_at {
            return ListSnapshot::loading();
        }
        match &self.load_error {
            Some(error) => ListSnapshot::failed(error.clone()),
            None => ListSnapshot::ready(self.records.clone()),
        }
    }

    /// Instant at which the current load completes.
    pub fn ready_at(&self) -> Instant {
        self.ready_at
    }
}

impl Default for PlaceholderSource {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl RecordSource for PlaceholderSource {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn list_users(&self) -> ListSnapshot {
        self.snapshot_at(Instant::now())
    }

    fn refresh(&mut self) {
        self.ready_at = Instant::now() + self.latency;
        tracing::debug!(
            event = "core.source.refresh_requested",
            source = self.name(),
            latency_ms = self.latency.as_millis() as u64
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::types::UserId;

    #[test]
    fn test_bundled_users_parse() {
        let users = placeholder_users().unwrap();
        assert_eq!(users.len(), 10);
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[0].username, "Bret");
        assert_eq!(users[9].id, UserId(10));
    }

    #[test]
    fn test_bundled_ids_and_usernames_unique() {
        let users = placeholder_users().unwrap();
        let mut ids: Vec<_> = users.iter().map(|u| u.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), users.len());

        let mut usernames: Vec<_> = users.iter().map(|u| u.username.clone()).collect();
        usernames.sort();
        usernames.dedup();
        assert_eq!(usernames.len(), users.len());
    }

    #[test]
    fn test_zero_latency_is_ready_immediately() {
        let source = PlaceholderSource::default();
        let snapshot = source.list_users();
        assert!(snapshot.is_ready());
        assert_eq!(snapshot.data.len(), 10);
    }

    #[test]
    fn test_latency_reports_loading_until_ready() {
        let source = PlaceholderSource::new(Duration::from_secs(3600));
        let snapshot = source.list_users();
        assert!(snapshot.is_loading);
        assert!(snapshot.data.is_empty());

        let later = source.ready_at() + Duration::from_millis(1);
        assert!(source.snapshot_at(later).is_ready());
    }

    #[test]
    fn test_refresh_reenters_loading() {
        let mut source = PlaceholderSource::new(Duration::from_secs(3600));
        let first_ready = source.ready_at();
        source.refresh();
        assert!(source.ready_at() >= first_ready);
        assert!(source.list_users().is_loading);
    }

    #[test]
    fn test_get_user_via_default_impl() {
        let source = PlaceholderSource::default();
        let snapshot = source.get_user(UserId(3));
        assert_eq!(
            snapshot.data.map(|u| u.username),
            Some("Samantha".to_string())
        );
    }
}
