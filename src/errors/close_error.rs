use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use rusqlite::Error as WrappedError;

use super::DatabaseError;

/// An error occurring while flushing and releasing a data file.
#[derive(Debug, PartialEq)]
pub enum CloseError {
    /// A general database error from SQLite.
    DatabaseError(DatabaseError),
}

impl super::Error for CloseError {
    fn error_code(&self) -> i32 {
        match self {
            CloseError::DatabaseError(error) => error.code(),
        }
    }
}

impl From<WrappedError> for CloseError {
    fn from(error: WrappedError) -> Self {
        CloseError::DatabaseError(error.into())
    }
}

impl Display for CloseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Error during closing of data file: ")?;
        match self {
            CloseError::DatabaseError(error) => {
                write!(f, "The underlying database failed ('{}')", error)
            }
        }
    }
}
