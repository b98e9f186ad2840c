//! Builder lifecycle shared by the module and package builders.

use std::path::{Path, PathBuf};

use crate::{
    error::{EmitError, Result},
    writer::JavaWriter,
};

/// `Created -> FileOpened -> Emitting -> Closed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Created,
    FileOpened,
    Emitting,
    Closed,
}

/// A [`JavaWriter`] guarded by a [`BuildState`].
///
/// Each instance builds at most one file.
#[derive(Debug)]
pub(crate) struct BridgeFile {
    writer: JavaWriter,
    state: BuildState,
}

impl BridgeFile {
    pub(crate) fn new() -> Self {
        Self {
            writer: JavaWriter::new(PathBuf::new()),
            state: BuildState::Created,
        }
    }

    pub(crate) fn state(&self) -> BuildState {
        self.state
    }

    /// Target of the build, once one has started.
    pub(crate) fn path(&self) -> Option<&Path> {
        match self.state {
            BuildState::Created => None,
            _ => Some(self.writer.path()),
        }
    }

    /// Create the file at `path`.
    pub(crate) fn begin(&mut self, path: PathBuf) -> Result<()> {
        match self.state {
            BuildState::Created => {}
            BuildState::Closed => return Err(EmitError::Closed),
            BuildState::FileOpened | BuildState::Emitting => {
                return Err(EmitError::AlreadyBuilt {
                    path: self.writer.path().to_path_buf(),
                });
            }
        }
        self.writer.set_path(path)?;
        self.writer.open()?;
        self.state = BuildState::FileOpened;
        Ok(())
    }

    /// The writer of an opened file.
    pub(crate) fn writer(&mut self) -> Result<&mut JavaWriter> {
        match self.state {
            BuildState::FileOpened | BuildState::Emitting => {
                self.state = BuildState::Emitting;
                Ok(&mut self.writer)
            }
            BuildState::Closed => Err(EmitError::Closed),
            BuildState::Created => Err(EmitError::NotOpen {
                path: self.writer.path().to_path_buf(),
            }),
        }
    }

    /// Release the file. Closing a builder that never built is allowed.
    pub(crate) fn close(&mut self) -> Result<()> {
        let previous = std::mem::replace(&mut self.state, BuildState::Closed);
        match previous {
            BuildState::Closed => Err(EmitError::Closed),
            BuildState::Created => Ok(()),
            BuildState::FileOpened | BuildState::Emitting => self.writer.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_lifecycle() {
        let temp = TempDir::new().unwrap();
        let mut file = BridgeFile::new();
        assert_eq!(file.state(), BuildState::Created);
        assert!(file.path().is_none());

        file.begin(temp.path().join("A.java")).unwrap();
        assert_eq!(file.state(), BuildState::FileOpened);
        assert_eq!(file.path(), Some(temp.path().join("A.java").as_path()));

        file.writer().unwrap().write_package("a").unwrap();
        assert_eq!(file.state(), BuildState::Emitting);

        file.close().unwrap();
        assert_eq!(file.state(), BuildState::Closed);
    }

    #[test]
    fn test_begin_twice_fails() {
        let temp = TempDir::new().unwrap();
        let mut file = BridgeFile::new();
        file.begin(temp.path().join("A.java")).unwrap();

        let err = file.begin(temp.path().join("B.java")).unwrap_err();

        assert!(matches!(err, EmitError::AlreadyBuilt { .. }));
    }

    #[test]
    fn test_writer_requires_begin() {
        let mut file = BridgeFile::new();

        assert!(matches!(
            file.writer().unwrap_err(),
            EmitError::NotOpen { .. }
        ));
    }

    #[test]
    fn test_nothing_valid_after_close() {
        let temp = TempDir::new().unwrap();
        let mut file = BridgeFile::new();
        file.close().unwrap();

        assert!(matches!(
            file.begin(temp.path().join("A.java")).unwrap_err(),
            EmitError::Closed
        ));
        assert!(matches!(file.writer().unwrap_err(), EmitError::Closed));
        assert!(matches!(file.close().unwrap_err(), EmitError::Closed));
    }

    #[test]
    fn test_failed_open_stays_created() {
        let temp = TempDir::new().unwrap();
        let mut file = BridgeFile::new();

        assert!(file.begin(temp.path().to_path_buf()).is_err());
        assert_eq!(file.state(), BuildState::Created);
        assert!(file.close().is_ok());
    }
}
