use log::{debug, info, warn};

use super::container::Container;
use super::errors::{CloseError, OpenError};
use super::util::{Format, Mode};

/// The lifecycle state of a [`File`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// The handle was never connected to a file.
    Unopened,
    /// The handle is connected to a file.
    Open,
    /// The handle was connected to a file which is now released.
    Closed,
}

#[derive(Debug)]
enum Connection {
    Unopened,
    Open {
        path: String,
        mode: Mode,
        container: Container,
    },
    Closed,
}

/// A handle to a data file.
///
/// The handle owns at most one connection to a container. Opening an already open handle
/// fails with [`OpenError::AlreadyOpen`]; closing a handle which is not open does nothing.
/// A closed handle may be opened again. Dropping an open handle closes it.
#[derive(Debug)]
pub struct File {
    connection: Connection,
}

impl Default for File {
    fn default() -> Self {
        File::new()
    }
}

impl File {
    /// Create a handle which is not connected to any file yet.
    pub fn new() -> Self {
        File {
            connection: Connection::Unopened,
        }
    }

    /// Create a handle and open the file at `path`.
    pub fn with_path<T: AsRef<str>>(path: T, mode: Mode) -> Result<File, OpenError> {
        let mut file = File::new();
        file.open(path, mode)?;
        Ok(file)
    }

    /// Open the file at `path`. New files are created with the default format.
    pub fn open<T: AsRef<str>>(&mut self, path: T, mode: Mode) -> Result<(), OpenError> {
        self.open_with_format(path, mode, Format::default())
    }

    /// Open the file at `path`. The format is only used if the mode creates a new file.
    ///
    /// On failure, the handle keeps its previous state.
    pub fn open_with_format<T: AsRef<str>>(
        &mut self,
        path: T,
        mode: Mode,
        format: Format,
    ) -> Result<(), OpenError> {
        if let Connection::Open { path, .. } = &self.connection {
            debug!("Handle is still connected to '{}'", path);
            return Err(OpenError::AlreadyOpen);
        }

        let path = path.as_ref();
        let container = match mode.creates() {
            true => Container::create(path, mode, format),
            false => Container::open(path, mode),
        }?;

        info!("Opened '{}' ({:?})", path, mode);
        self.connection = Connection::Open {
            path: path.to_string(),
            mode,
            container,
        };
        Ok(())
    }

    /// Flush and release the file. Closing a handle which is not open is a no-op.
    ///
    /// On failure, the handle stays open so closing may be retried.
    pub fn close(&mut self) -> Result<(), CloseError> {
        match std::mem::replace(&mut self.connection, Connection::Closed) {
            Connection::Open {
                path,
                mode,
                container,
            } => match container.close() {
                Ok(()) => {
                    info!("Closed '{}'", path);
                    Ok(())
                }
                Err((container, error)) => {
                    self.connection = Connection::Open {
                        path,
                        mode,
                        container,
                    };
                    Err(error)
                }
            },
            previous => {
                self.connection = previous;
                Ok(())
            }
        }
    }

    /// The path exactly as passed to the last successful open, if the handle is open.
    pub fn path(&self) -> Option<&str> {
        match &self.connection {
            Connection::Open { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }

    /// The mode the file was opened with, if the handle is open.
    pub fn mode(&self) -> Option<Mode> {
        match &self.connection {
            Connection::Open { mode, .. } => Some(*mode),
            _ => None,
        }
    }

    /// The format recorded in the file, if the handle is open.
    pub fn format(&self) -> Option<Format> {
        match &self.connection {
            Connection::Open { container, .. } => Some(container.format()),
            _ => None,
        }
    }

    /// The lifecycle state of the handle.
    pub fn state(&self) -> State {
        match self.connection {
            Connection::Unopened => State::Unopened,
            Connection::Open { .. } => State::Open,
            Connection::Closed => State::Closed,
        }
    }

    /// Checks whether the handle is connected to a file.
    pub fn is_open(&self) -> bool {
        self.state() == State::Open
    }
}

impl Drop for File {
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            warn!("Closing file on drop failed: {}", error);
        }
    }
}
