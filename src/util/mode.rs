use std::convert::TryFrom;

/// The way a data file is opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Open an existing file read-only.
    Read,
    /// Open an existing file for reading and writing.
    Write,
    /// Create a new file, destroying any prior file under the same path.
    Replace,
    /// Create a new file, failing if a file already exists under the path.
    NewFile,
}

impl Mode {
    /// Checks whether the mode creates a new container instead of opening one.
    pub fn creates(&self) -> bool {
        matches!(self, Mode::Replace | Mode::NewFile)
    }

    /// Checks whether the connection may modify the container.
    pub fn is_writable(&self) -> bool {
        !matches!(self, Mode::Read)
    }
}

/// The data format recorded in a container at creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Classic format.
    Classic,
    /// Classic format with 64-bit offsets.
    Classic64,
    /// Extended format.
    Nc4,
    /// Extended format restricted to the classic data model.
    Nc4Classic,
}

impl Default for Format {
    fn default() -> Self {
        Format::Nc4
    }
}

impl From<Format> for i64 {
    fn from(format: Format) -> Self {
        match format {
            Format::Classic => 1,
            Format::Classic64 => 2,
            Format::Nc4 => 3,
            Format::Nc4Classic => 4,
        }
    }
}

impl TryFrom<i64> for Format {
    type Error = ();

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Format::Classic),
            2 => Ok(Format::Classic64),
            3 => Ok(Format::Nc4),
            4 => Ok(Format::Nc4Classic),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use test_case::test_case;

    use super::{Format, Mode};

    #[test_case(Mode::Read, false, false; "read")]
    #[test_case(Mode::Write, false, true; "write")]
    #[test_case(Mode::Replace, true, true; "replace")]
    #[test_case(Mode::NewFile, true, true; "new file")]
    fn test_mode(mode: Mode, creates: bool, is_writable: bool) {
        assert_eq!(mode.creates(), creates);
        assert_eq!(mode.is_writable(), is_writable);
    }

    #[test]
    fn test_unknown_format() {
        assert_eq!(Format::try_from(0), Err(()));
        assert_eq!(Format::try_from(5), Err(()));
        assert_eq!(Format::try_from(i64::from(Format::Classic64)), Ok(Format::Classic64));
    }
}
