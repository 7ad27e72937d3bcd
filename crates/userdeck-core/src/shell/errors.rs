use crate::errors::UserdeckError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    #[error("No page at '{path}'")]
    UnknownPath { path: String },

    #[error("Invalid user id '{value}' in '{path}'")]
    InvalidUserId { path: String, value: String },
}

impl UserdeckError for RouteError {
    fn error_code(&self) -> &'static str {
        match self {
            RouteError::UnknownPath { .. } => "UNKNOWN_PATH",
            RouteError::InvalidUserId { .. } => "INVALID_USER_ID",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_error_codes() {
        let unknown = RouteError::UnknownPath {
            path: "/nowhere".to_string(),
        };
        assert_eq!(unknown.error_code(), "UNKNOWN_PATH");
        assert_eq!(unknown.to_string(), "No page at '/nowhere'");
        assert!(unknown.is_user_error());

        let invalid = RouteError::InvalidUserId {
            path: "/dashboard/users/abc".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(invalid.error_code(), "INVALID_USER_ID");
        assert!(invalid.to_string().contains("'abc'"));
    }
}
