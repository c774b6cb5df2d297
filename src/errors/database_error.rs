use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use rusqlite::ffi;
use rusqlite::Error as WrappedError;
use rusqlite::ErrorCode as SQLiteError;

/// An error raised and described by SQLite.
#[derive(PartialEq, Eq)]
pub struct DatabaseError {
    error: SQLiteError,
    code: i32,
    message: Option<String>,
}

impl DatabaseError {
    /// Message returned if SQLite does not specify an error.
    pub const MISSING_MESSAGE: &'static str = "<Unknown SQLite error>";

    /// The primary SQLite error category.
    pub fn kind(&self) -> SQLiteError {
        self.error
    }

    /// The extended SQLite result code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Checks whether SQLite rejected the file as not being a database.
    pub fn is_not_a_database(&self) -> bool {
        self.error == SQLiteError::NotADatabase
    }
}

impl super::Error for DatabaseError {
    fn error_code(&self) -> i32 {
        self.code
    }
}

impl Debug for DatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.message {
            Some(message) => write!(f, "'{}' ({:?}, {})", message, self.error, self.code),
            None => write!(
                f,
                "'{}' ({:?}, {})",
                DatabaseError::MISSING_MESSAGE,
                self.error,
                self.code
            ),
        }
    }
}

impl Display for DatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str(DatabaseError::MISSING_MESSAGE),
        }
    }
}

impl From<WrappedError> for DatabaseError {
    fn from(value: WrappedError) -> Self {
        match value {
            WrappedError::SqliteFailure(error, message) => Self {
                error: error.code,
                code: error.extended_code,
                message,
            },
            // Errors detected by rusqlite itself are reported as generic SQLite errors.
            other => Self {
                error: SQLiteError::Unknown,
                code: ffi::SQLITE_ERROR,
                message: Some(other.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::{ffi, Connection, Error as WrappedError, ErrorCode};

    use super::DatabaseError;
    use crate::errors::Error;

    #[test]
    fn test_sqlite_failure() {
        let database = Connection::open_in_memory().expect("Valid SQLite database");
        let error: DatabaseError = database
            .execute("THIS IS NOT SQL", [])
            .expect_err("Invalid SQL accepted")
            .into();
        assert_eq!(error.kind(), ErrorCode::Unknown);
        assert_eq!(error.error_code(), ffi::SQLITE_ERROR);
        assert!(!error.error_message().is_empty());
    }

    #[test]
    fn test_non_sqlite_failure() {
        let error: DatabaseError = WrappedError::QueryReturnedNoRows.into();
        assert_eq!(error.code(), ffi::SQLITE_ERROR);
        assert!(!error.is_not_a_database());
    }

    #[test]
    fn test_missing_message() {
        let error: DatabaseError = WrappedError::SqliteFailure(
            ffi::Error::new(ffi::SQLITE_NOTADB),
            None,
        )
        .into();
        assert!(error.is_not_a_database());
        assert_eq!(error.code(), ffi::SQLITE_NOTADB);
        assert_eq!(format!("{}", error), DatabaseError::MISSING_MESSAGE);
    }
}
