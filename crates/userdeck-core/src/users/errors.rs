use crate::errors::UserdeckError;
use crate::users::types::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserError {
    #[error("User '{id}' not found")]
    NotFound { id: UserId },

    #[error("User source unavailable: {message}")]
    SourceUnavailable { message: String },
}

impl UserdeckError for UserError {
    fn error_code(&self) -> &'static str {
        match self {
            UserError::NotFound { .. } => "USER_NOT_FOUND",
            UserError::SourceUnavailable { .. } => "SOURCE_UNAVAILABLE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, UserError::NotFound { .. })
    }
}

/// Failure to load records from a file-backed source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read user records from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse user records from '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate user id {id} in '{path}'")]
    DuplicateId { path: String, id: UserId },

    #[error("Duplicate username '{username}' in '{path}'")]
    DuplicateUsername { path: String, username: String },
}

impl UserdeckError for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            SourceError::Io { .. } => "SOURCE_IO_ERROR",
            SourceError::Parse { .. } => "SOURCE_PARSE_ERROR",
            SourceError::DuplicateId { .. } => "SOURCE_DUPLICATE_ID",
            SourceError::DuplicateUsername { .. } => "SOURCE_DUPLICATE_USERNAME",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SourceError::Parse { .. }
                | SourceError::DuplicateId { .. }
                | SourceError::DuplicateUsername { .. }
        )
    }
}

impl From<SourceError> for UserError {
    fn from(error: SourceError) -> Self {
        UserError::SourceUnavailable {
            message: error.to_string(),
        }
    }
}
