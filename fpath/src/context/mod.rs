//! Collaborators that connect the engine to its environment.
//!
//! Context-dependent operations never reach for process state directly.
//! They ask one of the traits below, so the same engine code runs against
//! the real system ([`system`]) or against fixed, in-memory state
//! ([`memory`]).
//!
//! Every trait works in raw bytes. Collaborators report failures as
//! [`std::io::Error`]; the engine turns them into
//! [`Error::FilesystemUnavailable`](crate::Error::FilesystemUnavailable).

use std::io;

pub mod memory;
pub mod system;

/// Supplies the current working directory.
pub trait CurrentDirProvider {
    /// Get the current working directory as an absolute path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined (for example
    /// because it was removed).
    fn current_dir(&self) -> io::Result<Vec<u8>>;
}

/// Looks up environment variables.
pub trait Environment {
    /// Get the value of `name`, or `None` if it is not set.
    fn var(&self, name: &[u8]) -> Option<Vec<u8>>;
}

/// Looks up home directories.
pub trait UserDatabase {
    /// Get the home directory of the user running the process.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be consulted.
    fn current_home(&self) -> io::Result<Option<Vec<u8>>>;

    /// Get the home directory of the named user, or `None` if no such user
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be consulted.
    fn home_of(&self, name: &[u8]) -> io::Result<Option<Vec<u8>>>;
}

/// What a path names, as far as link resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Nothing exists at the path.
    Missing,
    /// A symbolic link.
    Symlink,
    /// Anything else: directory, regular file, device.
    Other,
}

/// The two filesystem queries symlink resolution needs.
pub trait FileSystem {
    /// Classify the entry at `path` without following a final symlink.
    ///
    /// A path that does not exist, including one whose parent is not a
    /// directory, is [`EntryKind::Missing`] rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error for any other failure, such as a permission problem.
    fn entry_kind(&self, path: &[u8]) -> io::Result<EntryKind>;

    /// Read the target of the symbolic link at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a link or cannot be read.
    fn read_link(&self, path: &[u8]) -> io::Result<Vec<u8>>;
}
