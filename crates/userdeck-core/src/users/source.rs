//! Record source boundary.
//!
//! A [`RecordSource`] is the read-only supplier of user records. It may
//! report loading at any time, including after it has been ready, so
//! consumers branch on the snapshot flags every time they read it.

use crate::users::lookup;
use crate::users::types::{UserId, UserRecord};

/// Result of `list_users`: the records known so far and whether a load is
/// still in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSnapshot {
    pub data: Vec<UserRecord>,
    pub is_loading: bool,
    /// Set when the source failed to produce records.
    pub error: Option<String>,
}

/// Result of `get_user`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSnapshot {
    pub data: Option<UserRecord>,
    pub is_loading: bool,
    pub error: bool,
}

impl ListSnapshot {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }

    pub fn ready(data: Vec<UserRecord>) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.is_loading && self.error.is_none()
    }
}

/// Read-only supplier of user records.
pub trait RecordSource: Send {
    /// Short identifier used in log events.
    fn name(&self) -> &'static str;

    fn list_users(&self) -> ListSnapshot;

    /// Look up a single record.
    ///
    /// The default implementation reads the full list, reports loading
    /// without a lookup while the list is loading, and never reports a
    /// missing record as an error.
    fn get_user(&self, id: UserId) -> UserSnapshot {
        let list = self.list_users();
        if list.is_loading {
            return UserSnapshot {
                data: None,
                is_loading: true,
                error: false,
            };
        }
        if list.error.is_some() {
            return UserSnapshot {
                data: None,
                is_loading: false,
                error: true,
            };
        }
        UserSnapshot {
            data: lookup::find(&list.data, id).ok().cloned(),
            is_loading: false,
            error: false,
        }
    }

    /// Ask the source to revalidate. The next snapshot may report loading.
    fn refresh(&mut self);
}

/// In-memory source with an externally controlled loading flag.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<UserRecord>,
    loading: bool,
    error: Option<String>,
}

impl StaticSource {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self {
            records,
            loading: false,
            error: None,
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

impl RecordSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    fn list_users(&self) -> ListSnapshot {
        if self.loading {
            return ListSnapshot::loading();
        }
        if let Some(error) = &self.error {
            return ListSnapshot::failed(error.clone());
        }
        ListSnapshot::ready(self.records.clone())
    }

    fn refresh(&mut self) {
        tracing::debug!(event = "core.source.refresh_requested", source = self.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::types::test_helpers::make_user;

    #[test]
    fn test_static_source_ready() {
        let source = StaticSource::new(vec![make_user(1, "Ada"), make_user(2, "Grace")]);
        let snapshot = source.list_users();
        assert!(snapshot.is_ready());
        assert_eq!(snapshot.data.len(), 2);
    }

    #[test]
    fn test_get_user_found_and_missing() {
        let source = StaticSource::new(vec![make_user(1, "Ada"), make_user(2, "Grace")]);

        let found = source.get_user(UserId(2));
        assert_eq!(found.data.map(|u| u.name), Some("Grace".to_string()));
        assert!(!found.error);

        let missing = source.get_user(UserId(99));
        assert!(missing.data.is_none());
        assert!(!missing.is_loading);
        assert!(!missing.error);
    }

    #[test]
    fn test_get_user_while_loading_skips_lookup() {
        let mut source = StaticSource::new(vec![make_user(1, "Ada")]);
        source.set_loading(true);

        let snapshot = source.get_user(UserId(1));
        assert!(snapshot.is_loading);
        assert!(snapshot.data.is_none());
    }

    #[test]
    fn test_loading_can_recur() {
        let mut source = StaticSource::new(vec![make_user(1, "Ada")]);
        for _ in 0..3 {
            source.set_loading(true);
            assert!(source.list_users().is_loading);
            source.set_loading(false);
            assert!(source.list_users().is_ready());
        }
    }

    #[test]
    fn test_error_reported() {
        let mut source = StaticSource::new(vec![make_user(1, "Ada")]);
        source.set_error(Some("backend down".to_string()));

        let list = source.list_users();
        assert_eq!(list.error.as_deref(), Some("backend down"));
        assert!(list.data.is_empty());
        assert!(source.get_user(UserId(1)).error);
    }
}
