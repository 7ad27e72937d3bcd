use crate::users::errors::UserError;
use crate::users::source::{ListSnapshot, UserSnapshot};
use crate::users::types::{UserId, UserRecord};

/// Find a record by identifier.
///
/// Linear scan returning the first match; identifiers are unique so it is
/// also the only one.
pub fn find(records: &[UserRecord], id: UserId) -> Result<&UserRecord, UserError> {
    records
        .iter()
        .find(|record| record.id == id)
        .ok_or(UserError::NotFound { id })
}

/// What the detail view should render for a requested identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<'a> {
    /// The source has not produced a complete record set yet.
    Loading,
    Ready(&'a UserRecord),
    NotFound(UserId),
    /// The source reported an error.
    Unavailable(String),
}

impl DetailState<'_> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }

    /// The error to surface for the fallback view, if any.
    pub fn error(&self) -> Option<UserError> {
        match self {
            DetailState::NotFound(id) => Some(UserError::NotFound { id: *id }),
            DetailState::Unavailable(message) => Some(UserError::SourceUnavailable {
                message: message.clone(),
            }),
            DetailState::Loading | DetailState::Ready(_) => None,
        }
    }
}

/// Resolve a detail request against a list snapshot.
///
/// Never performs a lookup while the snapshot is loading.
pub fn resolve_detail(snapshot: &ListSnapshot, id: UserId) -> DetailState<'_> {
    if snapshot.is_loading {
        return DetailState::Loading;
    }
    if let Some(error) = &snapshot.error {
        return DetailState::Unavailable(error.clone());
    }
    match find(&snapshot.data, id) {
        Ok(record) => DetailState::Ready(record),
        Err(_) => DetailState::NotFound(id),
    }
}

/// Resolve a detail request against a single-record snapshot.
pub fn resolve_user_snapshot(snapshot: &UserSnapshot, id: UserId) -> DetailState<'_> {
    if snapshot.is_loading {
        return DetailState::Loading;
    }
    if snapshot.error {
        return DetailState::Unavailable("record source reported an error".to_string());
    }
    match &snapshot.data {
        Some(record) => DetailState::Ready(record),
        None => DetailState::NotFound(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::types::test_helpers::make_user;

    #[test]
    fn test_find_existing() {
        let users = vec![make_user(1, "Ada"), make_user(2, "Grace")];
        assert_eq!(find(&users, UserId(2)).unwrap().name, "Grace");
    }

    #[test]
    fn test_find_missing_is_not_found() {
        let users = vec![make_user(1, "Ada")];
        assert_eq!(
            find(&users, UserId(404)),
            Err(UserError::NotFound { id: UserId(404) })
        );
        assert!(find(&[], UserId(1)).is_err());
    }

    #[test]
    fn test_resolve_detail_states() {
        let loading = ListSnapshot::loading();
        assert!(resolve_detail(&loading, UserId(1)).is_loading());

        let failed = ListSnapshot::failed("offline");
        let state = resolve_detail(&failed, UserId(1));
        assert_eq!(state, DetailState::Unavailable("offline".to_string()));
        assert_eq!(
            state.error().map(|e| e.to_string()).as_deref(),
            Some("User source unavailable: offline")
        );

        let ready = ListSnapshot::ready(vec![make_user(1, "Ada")]);
        assert!(matches!(
            resolve_detail(&ready, UserId(1)),
            DetailState::Ready(u) if u.name == "Ada"
        ));
        assert_eq!(
            resolve_detail(&ready, UserId(2)),
            DetailState::NotFound(UserId(2))
        );
    }

    #[test]
    fn test_resolve_user_snapshot_states() {
        let record = make_user(5, "Chelsey Dietrich");
        let ready = UserSnapshot {
            data: Some(record),
            is_loading: false,
            error: false,
        };
        assert!(matches!(
            resolve_user_snapshot(&ready, UserId(5)),
            DetailState::Ready(_)
        ));

        let missing = UserSnapshot::default();
        assert_eq!(
            resolve_user_snapshot(&missing, UserId(5)),
            DetailState::NotFound(UserId(5))
        );

        let loading = UserSnapshot {
            is_loading: true,
            ..Default::default()
        };
        assert!(resolve_user_snapshot(&loading, UserId(5)).is_loading());

        let failed = UserSnapshot {
            error: true,
            ..Default::default()
        };
        assert!(matches!(
            resolve_user_snapshot(&failed, UserId(5)),
            DetailState::Unavailable(_)
        ));
    }
}
