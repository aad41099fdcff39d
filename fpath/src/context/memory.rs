//! In-memory collaborators for deterministic behaviour.
//!
//! These hold fixed state and never touch the running system, which makes
//! them suitable for tests and for embedding the engine where the process
//! state is not the right context.

use std::collections::HashMap;
use std::io;

use super::{CurrentDirProvider, EntryKind, Environment, FileSystem, UserDatabase};
use crate::path::SEP;

/// A working directory that never changes.
#[derive(Debug, Clone)]
pub struct FixedCurrentDir {
    dir: Result<Vec<u8>, io::ErrorKind>,
}

impl FixedCurrentDir {
    /// Always report `dir`.
    pub fn new(dir: impl Into<Vec<u8>>) -> Self {
        Self {
            dir: Ok(dir.into()),
        }
    }

    /// Always fail with `kind`, as when the directory has been removed.
    #[must_use]
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self { dir: Err(kind) }
    }
}

impl CurrentDirProvider for FixedCurrentDir {
    fn current_dir(&self) -> io::Result<Vec<u8>> {
        self.dir.clone().map_err(io::Error::from)
    }
}

/// An environment backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<Vec<u8>, Vec<u8>>,
}

impl MapEnvironment {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl Environment for MapEnvironment {
    fn var(&self, name: &[u8]) -> Option<Vec<u8>> {
        self.vars.get(name).cloned()
    }
}

/// A user database backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MapUserDatabase {
    current: Option<Vec<u8>>,
    users: HashMap<Vec<u8>, Vec<u8>>,
    failure: Option<io::ErrorKind>,
}

impl MapUserDatabase {
    /// Create a database with no users.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current user's home directory.
    #[must_use]
    pub fn with_current_home(mut self, home: impl Into<Vec<u8>>) -> Self {
        self.current = Some(home.into());
        self
    }

    /// Add a named user.
    #[must_use]
    pub fn with_user(mut self, name: impl Into<Vec<u8>>, home: impl Into<Vec<u8>>) -> Self {
        self.users.insert(name.into(), home.into());
        self
    }

    /// Make every lookup fail with `kind`.
    #[must_use]
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            failure: Some(kind),
            ..Self::default()
        }
    }

    fn check(&self) -> io::Result<()> {
        match self.failure {
            Some(kind) => Err(io::Error::from(kind)),
            None => Ok(()),
        }
    }
}

impl UserDatabase for MapUserDatabase {
    fn current_home(&self) -> io::Result<Option<Vec<u8>>> {
        self.check()?;
        Ok(self.current.clone())
    }

    fn home_of(&self, name: &[u8]) -> io::Result<Option<Vec<u8>>> {
        self.check()?;
        Ok(self.users.get(name).cloned())
    }
}

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File,
    Symlink(Vec<u8>),
    Failure(io::ErrorKind),
}

/// A filesystem tree held in a map from absolute path to entry.
///
/// Paths are given in their canonical form (`/a/b`, no trailing separator).
/// Adding an entry also adds any missing ancestors as directories. The root
/// always exists.
///
/// # Examples
///
/// ```
/// use fpath::context::memory::MemoryFileSystem;
/// use fpath::context::{EntryKind, FileSystem};
///
/// let fs = MemoryFileSystem::new()
///     .with_file("/etc/hosts")
///     .with_symlink("/etc/localtime", "/usr/share/zoneinfo/UTC");
///
/// assert_eq!(fs.entry_kind(b"/etc").unwrap(), EntryKind::Other);
/// assert_eq!(fs.entry_kind(b"/etc/localtime").unwrap(), EntryKind::Symlink);
/// assert_eq!(fs.entry_kind(b"/var").unwrap(), EntryKind::Missing);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    entries: HashMap<Vec<u8>, Node>,
}

impl MemoryFileSystem {
    /// Create a filesystem containing only the root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory.
    #[must_use]
    pub fn with_dir(self, path: impl AsRef<[u8]>) -> Self {
        self.with_node(path.as_ref(), Node::Dir)
    }

    /// Add a regular file.
    #[must_use]
    pub fn with_file(self, path: impl AsRef<[u8]>) -> Self {
        self.with_node(path.as_ref(), Node::File)
    }

    /// Add a symbolic link pointing at `target`.
    #[must_use]
    pub fn with_symlink(self, path: impl AsRef<[u8]>, target: impl Into<Vec<u8>>) -> Self {
        self.with_node(path.as_ref(), Node::Symlink(target.into()))
    }

    /// Make every query about `path` fail with `kind`.
    #[must_use]
    pub fn with_failure(self, path: impl AsRef<[u8]>, kind: io::ErrorKind) -> Self {
        self.with_node(path.as_ref(), Node::Failure(kind))
    }

    fn with_node(mut self, path: &[u8], node: Node) -> Self {
        let key = trim_trailing(path);
        for (i, &b) in key.iter().enumerate().skip(1) {
            if b == SEP {
                self.entries.entry(key[..i].to_vec()).or_insert(Node::Dir);
            }
        }
        self.entries.insert(key.to_vec(), node);
        self
    }
}

fn trim_trailing(path: &[u8]) -> &[u8] {
    let end = path
        .iter()
        .rposition(|&b| b != SEP)
        .map_or(path.len().min(1), |last| last + 1);
    &path[..end]
}

impl FileSystem for MemoryFileSystem {
    fn entry_kind(&self, path: &[u8]) -> io::Result<EntryKind> {
        if path == [SEP] {
            return Ok(EntryKind::Other);
        }
        match self.entries.get(path) {
            None => Ok(EntryKind::Missing),
            Some(Node::Dir | Node::File) => Ok(EntryKind::Other),
            Some(Node::Symlink(_)) => Ok(EntryKind::Symlink),
            Some(Node::Failure(kind)) => Err(io::Error::from(*kind)),
        }
    }

    fn read_link(&self, path: &[u8]) -> io::Result<Vec<u8>> {
        match self.entries.get(path) {
            Some(Node::Symlink(target)) => Ok(target.clone()),
            Some(Node::Failure(kind)) => Err(io::Error::from(*kind)),
            Some(_) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a symbolic link",
            )),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_current_dir() {
        assert_eq!(FixedCurrentDir::new("/w").current_dir().unwrap(), b"/w");
        let err = FixedCurrentDir::failing(io::ErrorKind::NotFound)
            .current_dir()
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_map_environment() {
        let env = MapEnvironment::new().with_var("HOME", "/home/me");
        assert_eq!(env.var(b"HOME"), Some(b"/home/me".to_vec()));
        assert_eq!(env.var(b"PATH"), None);
    }

    #[test]
    fn test_map_user_database() {
        let db = MapUserDatabase::new()
            .with_current_home("/home/me")
            .with_user("bob", "/srv/bob");
        assert_eq!(db.current_home().unwrap(), Some(b"/home/me".to_vec()));
        assert_eq!(db.home_of(b"bob").unwrap(), Some(b"/srv/bob".to_vec()));
        assert_eq!(db.home_of(b"eve").unwrap(), None);
        assert!(MapUserDatabase::failing(io::ErrorKind::Other)
            .home_of(b"bob")
            .is_err());
    }

    #[test]
    fn test_ancestors_are_registered() {
        let fs = MemoryFileSystem::new().with_file("/a/b/c");
        assert_eq!(fs.entry_kind(b"/a").unwrap(), EntryKind::Other);
        assert_eq!(fs.entry_kind(b"/a/b").unwrap(), EntryKind::Other);
        assert_eq!(fs.entry_kind(b"/a/b/c/d").unwrap(), EntryKind::Missing);
    }

    #[test]
    fn test_trailing_separator_in_key_is_ignored() {
        let fs = MemoryFileSystem::new().with_dir("/data/");
        assert_eq!(fs.entry_kind(b"/data").unwrap(), EntryKind::Other);
        assert_eq!(trim_trailing(b"/"), b"/");
    }

    #[test]
    fn test_read_link() {
        let fs = MemoryFileSystem::new()
            .with_symlink("/l", "../x")
            .with_dir("/d");
        assert_eq!(fs.read_link(b"/l").unwrap(), b"../x");
        assert_eq!(
            fs.read_link(b"/d").unwrap_err().kind(),
            io::ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_injected_failure() {
        let fs = MemoryFileSystem::new().with_failure("/secret", io::ErrorKind::PermissionDenied);
        let err = fs.entry_kind(b"/secret").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
