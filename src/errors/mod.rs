//! Various errors occurring during the lifecycle of a data file.

use std::fmt::{Debug, Display};

mod database_error;

mod close_error;
mod open_error;

pub use self::close_error::CloseError;
pub use self::database_error::DatabaseError;
pub use self::open_error::OpenError;

/// Numeric error codes reported by [`Error::error_code`] for failures not raised by SQLite.
pub mod codes {
    /// The requested resource does not exist (`ENOENT`).
    pub const RESOURCE_NOT_FOUND: i32 = 2;
    /// A resource already exists at the requested path.
    pub const RESOURCE_CONFLICT: i32 = -35;
    /// The handle is already connected to a resource.
    pub const ALREADY_OPEN: i32 = -36;
    /// The resource is not a container of the expected format.
    pub const INVALID_FORMAT: i32 = -51;
    /// The file system outside of the storage engine failed.
    pub const SOURCE_ERROR: i32 = -68;
}

/// An error occurring while opening or closing a data file.
pub trait Error: PartialEq + Debug + Display {
    /// Generate a human-readable version of the error.
    fn error_message(&self) -> String {
        format!("{}", &self)
    }

    /// The numeric code identifying the failure.
    fn error_code(&self) -> i32;
}
