use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::users::errors::SourceError;
use crate::users::source::{ListSnapshot, RecordSource};
use crate::users::types::UserRecord;

/// Read and validate a JSON array of user records.
///
/// Identifiers and usernames must be unique within the file.
pub fn load_records(path: &Path) -> Result<Vec<UserRecord>, SourceError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: display.clone(),
        source,
    })?;
    let records: Vec<UserRecord> =
        serde_json::from_str(&content).map_err(|source| SourceError::Parse {
            path: display.clone(),
            source,
        })?;

    let mut seen_ids = HashSet::new();
    let mut seen_usernames = HashSet::new();
    for record in &records {
        if !seen_ids.insert(record.id) {
            return Err(SourceError::DuplicateId {
                path: display,
                id: record.id,
            });
        }
        if !seen_usernames.insert(record.username.as_str()) {
            return Err(SourceError::DuplicateUsername {
                path: display,
                username: record.username.clone(),
            });
        }
    }

    Ok(records)
}

/// Source backed by a JSON file, read on creation and on every refresh.
pub struct JsonFileSource {
    path: PathBuf,
    records: Vec<UserRecord>,
    load_error: Option<String>,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mut source = Self {
            path: path.into(),
            records: Vec::new(),
            load_error: None,
        };
        source.reload();
        source
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn reload(&mut self) {
        match load_records(&self.path) {
            Ok(records) => {
                crate::events::log_records_loaded(self.name(), records.len());
                self.records = records;
                self.load_error = None;
            }
            Err(e) => {
                crate::events::log_records_unavailable(self.name(), &e);
                self.records.clear();
                self.load_error = Some(e.to_string());
            }
        }
    }
}

impl RecordSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "json_file"
    }

    fn list_users(&self) -> ListSnapshot {
        match &self.load_error {
            Some(error) => ListSnapshot::failed(error.clone()),
            None => ListSnapshot::ready(self.records.clone()),
        }
    }

    fn refresh(&mut self) {
        self.reload();
    }
}
