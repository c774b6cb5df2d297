use std::convert::TryFrom;
use std::fs::OpenOptions;
use std::io::ErrorKind;

use log::{debug, warn};
use rusqlite::{params, Connection as Database, OpenFlags, OptionalExtension};

use super::errors::{CloseError, OpenError};
use super::util::{Availability, Format, MetaData, Mode};

mod constants {
    use const_format::formatcp;

    pub const CURRENT_CONTAINER_VERSION: u32 = 0;
    // Must match the version above.
    pub const META_TABLE: &str = "NcFile_Meta_0";

    pub const SIDE_FILE_SUFFIXES: [&str; 3] = ["-journal", "-wal", "-shm"];

    pub const SQL_CREATE_META: &str =
        formatcp!("CREATE TABLE {} (format INTEGER NOT NULL)", META_TABLE);
    pub const SQL_INSERT_FORMAT: &str = formatcp!("INSERT INTO {} (format) VALUES (?)", META_TABLE);
    pub const SQL_GET_FORMAT: &str = formatcp!("SELECT format FROM {} LIMIT 1", META_TABLE);
}

/// A data file container stored as a SQLite database.
#[derive(Debug)]
pub struct Container {
    database: Database,
    format: Format,
}

impl Container {
    /// Create a new container at `path`. `Mode::Replace` truncates an existing file,
    /// every other mode requires the path to be unused.
    pub fn create(path: &str, mode: Mode, format: Format) -> Result<Container, OpenError> {
        debug!("Creating container '{}' ({:?}, {:?})", path, mode, format);

        let mut options = OpenOptions::new();
        options.write(true);
        match mode {
            Mode::Replace => {
                options.create(true).truncate(true);
            }
            _ => {
                options.create_new(true);
            }
        }
        options.open(path)?;

        if mode == Mode::Replace {
            Container::remove_side_files(path);
        }

        match Container::initialize(path, format) {
            Ok(container) => Ok(container),
            Err(error) => {
                // Do not leave a half-initialized container behind.
                if let Err(io_error) = std::fs::remove_file(path) {
                    warn!(
                        "Removing partially created container '{}' failed: {}",
                        path, io_error
                    );
                }
                Err(error)
            }
        }
    }

    /// Open an existing container at `path`.
    pub fn open(path: &str, mode: Mode) -> Result<Container, OpenError> {
        debug!("Opening container '{}' ({:?})", path, mode);

        // SQLite reports missing files only vaguely, so ask the file system first.
        std::fs::metadata(path)?;

        let flags = match mode.is_writable() {
            true => OpenFlags::SQLITE_OPEN_READ_WRITE,
            false => OpenFlags::SQLITE_OPEN_READ_ONLY,
        };
        let database = Database::open_with_flags(path, flags)?;

        match MetaData::from_database(&database) {
            Availability::Available(meta_data)
                if meta_data.version() == constants::CURRENT_CONTAINER_VERSION =>
            {
                Ok(())
            }
            Availability::Available(meta_data) => {
                Err(OpenError::UnsupportedVersion(meta_data.version()))
            }
            Availability::Missing => Err(OpenError::InvalidFormat),
            Availability::Error(error) => Err(error.into()),
        }?;

        let format = database
            .query_row(constants::SQL_GET_FORMAT, [], |row| row.get::<_, i64>(0))
            .optional()?
            .and_then(|raw_format| Format::try_from(raw_format).ok())
            .ok_or(OpenError::InvalidFormat)?;

        Ok(Container { database, format })
    }

    fn initialize(path: &str, format: Format) -> Result<Container, OpenError> {
        let mut database = Database::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)?;

        let transaction = database.transaction()?;
        transaction.execute(constants::SQL_CREATE_META, [])?;
        transaction.execute(constants::SQL_INSERT_FORMAT, params![i64::from(format)])?;
        transaction.commit()?;

        Ok(Container { database, format })
    }

    fn remove_side_files(path: &str) {
        for suffix in &constants::SIDE_FILE_SUFFIXES {
            let side_file = format!("{}{}", path, suffix);
            match std::fs::remove_file(&side_file) {
                Ok(()) => debug!("Removed stale '{}'", side_file),
                Err(error) if error.kind() == ErrorKind::NotFound => {}
                Err(error) => warn!("Removing stale '{}' failed: {}", side_file, error),
            }
        }
    }

    /// The format recorded in the container.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Flush and release the container. On failure, the still connected container is returned.
    pub fn close(self) -> Result<(), (Container, CloseError)> {
        let format = self.format;
        self.database
            .close()
            .map_err(|(database, error)| (Container { database, format }, error.into()))
    }
}
