//! This crate provides handles to data files stored in SQLite containers.
#![deny(missing_docs)]

mod container;
pub mod errors;
mod file;
mod util;

pub use self::file::{File, State};
pub use self::util::{Format, Mode};
