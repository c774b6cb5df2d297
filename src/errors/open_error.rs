use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::io::{Error as IoError, ErrorKind};

use rusqlite::Error as WrappedError;

use super::{codes, DatabaseError};

/// An error occurring while opening or creating a data file.
#[derive(Debug, PartialEq)]
pub enum OpenError {
    /// The requested existing resource does not exist.
    ResourceNotFound,
    /// A resource already exists under this path, but a new one should be created.
    ResourceConflict,
    /// The handle is already connected to a resource.
    AlreadyOpen,
    /// The resource exists but is not a data file container.
    InvalidFormat,
    /// The container has a version not supported by this version of the library.
    UnsupportedVersion(u32),
    /// The file system raised an error outside of the storage engine.
    SourceError(ErrorKind),
    /// A general database error from SQLite.
    DatabaseError(DatabaseError),
}

impl super::Error for OpenError {
    fn error_code(&self) -> i32 {
        match self {
            OpenError::ResourceNotFound => codes::RESOURCE_NOT_FOUND,
            OpenError::ResourceConflict => codes::RESOURCE_CONFLICT,
            OpenError::AlreadyOpen => codes::ALREADY_OPEN,
            OpenError::InvalidFormat | OpenError::UnsupportedVersion(_) => codes::INVALID_FORMAT,
            OpenError::SourceError(_) => codes::SOURCE_ERROR,
            OpenError::DatabaseError(error) => error.code(),
        }
    }
}

impl From<DatabaseError> for OpenError {
    fn from(error: DatabaseError) -> Self {
        match error.is_not_a_database() {
            true => OpenError::InvalidFormat,
            false => OpenError::DatabaseError(error),
        }
    }
}

impl From<WrappedError> for OpenError {
    fn from(error: WrappedError) -> Self {
        DatabaseError::from(error).into()
    }
}

impl From<IoError> for OpenError {
    fn from(error: IoError) -> Self {
        match error.kind() {
            ErrorKind::NotFound => OpenError::ResourceNotFound,
            ErrorKind::AlreadyExists => OpenError::ResourceConflict,
            kind => OpenError::SourceError(kind),
        }
    }
}

impl Display for OpenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Error during opening of data file: ")?;
        match self {
            OpenError::ResourceNotFound => write!(f, "The requested file does not exist"),
            OpenError::ResourceConflict => write!(f, "File does already exist"),
            OpenError::AlreadyOpen => write!(f, "The handle is already connected to a file"),
            OpenError::InvalidFormat => write!(f, "The file is not a valid data file"),
            OpenError::UnsupportedVersion(version) => write!(
                f,
                "The version of the data file '{}' is not compatible with the current library version",
                version
            ),
            OpenError::SourceError(error) => {
                write!(f, "The file system failed ('{:?}')", error)
            }
            OpenError::DatabaseError(error) => {
                write!(f, "The underlying database failed ('{}')", error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error as IoError, ErrorKind};

    use rusqlite::{ffi, Error as WrappedError};
    use test_case::test_case;

    use super::OpenError;
    use crate::errors::{codes, Error};

    #[test_case(ErrorKind::NotFound, OpenError::ResourceNotFound; "missing file")]
    #[test_case(ErrorKind::AlreadyExists, OpenError::ResourceConflict; "existing file")]
    #[test_case(ErrorKind::PermissionDenied, OpenError::SourceError(ErrorKind::PermissionDenied); "permission denied")]
    fn test_io_conversion(kind: ErrorKind, expected: OpenError) {
        assert_eq!(OpenError::from(IoError::from(kind)), expected);
    }

    #[test]
    fn test_not_a_database() {
        let error: OpenError =
            WrappedError::SqliteFailure(ffi::Error::new(ffi::SQLITE_NOTADB), None).into();
        assert_eq!(error, OpenError::InvalidFormat);
        assert_eq!(error.error_code(), codes::INVALID_FORMAT);
    }

    #[test]
    fn test_backend_code() {
        let error: OpenError =
            WrappedError::SqliteFailure(ffi::Error::new(ffi::SQLITE_CANTOPEN), None).into();
        assert!(matches!(error, OpenError::DatabaseError(_)));
        assert_eq!(error.error_code(), ffi::SQLITE_CANTOPEN);
    }

    #[test]
    fn test_message() {
        assert_eq!(
            OpenError::ResourceNotFound.error_message(),
            "Error during opening of data file: The requested file does not exist"
        );
        assert_eq!(
            OpenError::ResourceNotFound.error_code(),
            codes::RESOURCE_NOT_FOUND
        );
    }
}
