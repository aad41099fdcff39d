//! Context-dependent path operations.
//!
//! This module provides the `PathEngine` type, which owns the collaborators
//! that supply the working directory, environment, user database and
//! filesystem, and the operations that need them.

use std::fmt;

use crate::config::{Config, DEFAULT_MAX_SYMLINK_DEPTH};
use crate::context::system::{OsFileSystem, PasswdDatabase, SystemCurrentDir, SystemEnvironment};
use crate::context::{CurrentDirProvider, Environment, FileSystem, UserDatabase};
use crate::error::{Error, Result};
use crate::path::absolute::abspath_bytes;
use crate::path::canonicalize::resolve_bytes;
use crate::path::expand::{expanduser_bytes, expandvars_bytes};
use crate::path::join::join_bytes;
use crate::path::normalize::normpath_bytes;
use crate::path::relative::relpath_bytes;
use crate::path::segment::is_absolute;
use crate::path::types::check_arguments;
use crate::path::{PathValue, ResolvedPath, CURDIR};

/// Runs the operations that depend on process context.
///
/// Each collaborator can be swapped independently, so an engine can mix the
/// real filesystem with a fixed working directory, or run entirely in
/// memory. Nothing is cached between calls.
///
/// # Examples
///
/// ```
/// use fpath::context::memory::{FixedCurrentDir, MemoryFileSystem};
/// use fpath::PathEngine;
///
/// let engine = PathEngine::new()
///     .with_current_dir(FixedCurrentDir::new("/srv/app"))
///     .with_filesystem(MemoryFileSystem::new().with_symlink("/srv/app/log", "/var/log/app"))
///     .with_max_symlink_depth(8);
///
/// assert_eq!(engine.abspath("log/current").unwrap(), "/srv/app/log/current");
/// assert_eq!(engine.realpath("log/current").unwrap(), "/var/log/app/current");
/// assert_eq!(engine.relpath("/srv/www").unwrap(), "../www");
/// ```
pub struct PathEngine {
    current_dir: Box<dyn CurrentDirProvider + Send + Sync>,
    environment: Box<dyn Environment + Send + Sync>,
    users: Box<dyn UserDatabase + Send + Sync>,
    filesystem: Box<dyn FileSystem + Send + Sync>,
    max_symlink_depth: usize,
}

impl Default for PathEngine {
    fn default() -> Self {
        Self {
            current_dir: Box::new(SystemCurrentDir),
            environment: Box::new(SystemEnvironment),
            users: Box::new(PasswdDatabase::new()),
            filesystem: Box::new(OsFileSystem),
            max_symlink_depth: DEFAULT_MAX_SYMLINK_DEPTH,
        }
    }
}

impl fmt::Debug for PathEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathEngine")
            .field("max_symlink_depth", &self.max_symlink_depth)
            .finish_non_exhaustive()
    }
}

impl PathEngine {
    /// Create an engine backed by the running system.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpath::PathEngine;
    ///
    /// let engine = PathEngine::new();
    /// assert_eq!(engine.max_symlink_depth(), 40);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a system-backed engine with settings from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        log::debug!(
            "engine: max_symlink_depth={}, passwd_file={}",
            config.symlink_depth(),
            config.passwd_path().display()
        );
        Self::new()
            .with_user_database(PasswdDatabase::with_path(config.passwd_path()))
            .with_max_symlink_depth(config.symlink_depth())
    }

    /// Use a different working-directory provider.
    #[must_use]
    pub fn with_current_dir(
        mut self,
        current_dir: impl CurrentDirProvider + Send + Sync + 'static,
    ) -> Self {
        self.current_dir = Box::new(current_dir);
        self
    }

    /// Use a different environment.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Environment + Send + Sync + 'static) -> Self {
        self.environment = Box::new(environment);
        self
    }

    /// Use a different user database.
    #[must_use]
    pub fn with_user_database(mut self, users: impl UserDatabase + Send + Sync + 'static) -> Self {
        self.users = Box::new(users);
        self
    }

    /// Use a different filesystem.
    #[must_use]
    pub fn with_filesystem(mut self, filesystem: impl FileSystem + Send + Sync + 'static) -> Self {
        self.filesystem = Box::new(filesystem);
        self
    }

    /// Configure the maximum number of symlink substitutions per resolution.
    #[must_use]
    pub fn with_max_symlink_depth(mut self, depth: usize) -> Self {
        self.max_symlink_depth = depth;
        self
    }

    /// Get the symlink depth ceiling.
    #[must_use]
    pub fn max_symlink_depth(&self) -> usize {
        self.max_symlink_depth
    }

    /// Make a path absolute and normalize it lexically.
    ///
    /// The working directory is only consulted for relative paths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingViolation`] for an embedded NUL or a text
    /// path whose working directory is not valid UTF-8, and
    /// [`Error::FilesystemUnavailable`] if the working directory cannot be
    /// determined.
    pub fn abspath(&self, path: impl Into<PathValue>) -> Result<PathValue> {
        let path = path.into();
        check_arguments(&path, [])?;

        if is_absolute(path.as_bytes()) {
            return path.rewrap(normpath_bytes(path.as_bytes()));
        }
        let cwd = self.cwd()?;
        path.rewrap(abspath_bytes(path.as_bytes(), &cwd))
    }

    /// Resolve a path to its physical location, following symbolic links.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SymlinkCycle`], [`Error::ResolutionDepthExceeded`],
    /// [`Error::FilesystemUnavailable`], or [`Error::EncodingViolation`].
    pub fn realpath(&self, path: impl Into<PathValue>) -> Result<PathValue> {
        self.resolve(path).map(ResolvedPath::into_path_value)
    }

    /// Resolve a path like [`realpath`](Self::realpath), keeping the original
    /// input and the number of hops taken.
    ///
    /// # Errors
    ///
    /// Same as [`realpath`](Self::realpath).
    pub fn resolve(&self, path: impl Into<PathValue>) -> Result<ResolvedPath> {
        let path = path.into();
        check_arguments(&path, [])?;

        let absolute = if is_absolute(path.as_bytes()) {
            path.as_bytes().to_vec()
        } else {
            join_bytes(&self.cwd()?, [path.as_bytes()])
        };
        let resolution = resolve_bytes(&*self.filesystem, &absolute, self.max_symlink_depth)?;
        log::debug!("resolved {path} in {} hop(s)", resolution.hops);

        let resolved = path.rewrap(resolution.path)?;
        Ok(ResolvedPath::new(resolved, path, resolution.hops))
    }

    /// Compute `path` relative to the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`relpath_from`](Self::relpath_from).
    pub fn relpath(&self, path: impl Into<PathValue>) -> Result<PathValue> {
        let path = path.into();
        let start = PathValue::from_encoded(path.encoding(), Vec::new())?;
        self.relpath_from(path, start)
    }

    /// Compute `path` relative to `start`.
    ///
    /// An empty `start` means the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `path` is empty or the two
    /// arguments have different encodings, [`Error::EncodingViolation`] for
    /// an embedded NUL, and [`Error::FilesystemUnavailable`] if a relative
    /// argument needs a working directory that cannot be determined.
    pub fn relpath_from(
        &self,
        path: impl Into<PathValue>,
        start: impl Into<PathValue>,
    ) -> Result<PathValue> {
        let path = path.into();
        let start = start.into();
        check_arguments(&path, [&start])?;
        if path.is_empty() {
            return Err(Error::InvalidArgument {
                reason: "no path specified".into(),
            });
        }

        let cwd = if is_absolute(path.as_bytes()) && is_absolute(start.as_bytes()) {
            Vec::new()
        } else {
            self.cwd()?
        };
        path.rewrap(relpath_bytes(path.as_bytes(), start.as_bytes(), &cwd))
    }

    /// Expand a leading `~` or `~user`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FilesystemUnavailable`] if the user database fails,
    /// and [`Error::EncodingViolation`] for an embedded NUL or a text path
    /// whose home directory is not valid UTF-8.
    pub fn expanduser(&self, path: impl Into<PathValue>) -> Result<PathValue> {
        let path = path.into();
        check_arguments(&path, [])?;
        let expanded = expanduser_bytes(path.as_bytes(), &*self.environment, &*self.users)?;
        path.rewrap(expanded)
    }

    /// Substitute `$NAME` and `${NAME}` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingViolation`] for an embedded NUL or a text
    /// path that picked up a value which is not valid UTF-8.
    pub fn expandvars(&self, path: impl Into<PathValue>) -> Result<PathValue> {
        let path = path.into();
        check_arguments(&path, [])?;
        path.rewrap(expandvars_bytes(path.as_bytes(), &*self.environment))
    }

    fn cwd(&self) -> Result<Vec<u8>> {
        self.current_dir
            .current_dir()
            .map_err(|e| Error::unavailable(CURDIR, e))
    }
}

/// Make a path absolute against the process working directory.
///
/// # Errors
///
/// See [`PathEngine::abspath`].
pub fn abspath(path: impl Into<PathValue>) -> Result<PathValue> {
    PathEngine::new().abspath(path)
}

/// Resolve a path against the real filesystem.
///
/// # Errors
///
/// See [`PathEngine::realpath`].
pub fn realpath(path: impl Into<PathValue>) -> Result<PathValue> {
    PathEngine::new().realpath(path)
}

/// Compute a path relative to the process working directory.
///
/// # Errors
///
/// See [`PathEngine::relpath`].
pub fn relpath(path: impl Into<PathValue>) -> Result<PathValue> {
    PathEngine::new().relpath(path)
}

/// Compute a path relative to `start`.
///
/// # Errors
///
/// See [`PathEngine::relpath_from`].
///
/// # Examples
///
/// ```
/// use fpath::relpath_from;
///
/// assert_eq!(relpath_from("/a/b/c", "/a/x/y").unwrap(), "../../b/c");
/// assert!(relpath_from("", "/a").is_err());
/// ```
pub fn relpath_from(path: impl Into<PathValue>, start: impl Into<PathValue>) -> Result<PathValue> {
    PathEngine::new().relpath_from(path, start)
}

/// Expand `~` and `~user` using the process environment and `/etc/passwd`.
///
/// # Errors
///
/// See [`PathEngine::expanduser`].
pub fn expanduser(path: impl Into<PathValue>) -> Result<PathValue> {
    PathEngine::new().expanduser(path)
}

/// Substitute variables from the process environment.
///
/// # Errors
///
/// See [`PathEngine::expandvars`].
pub fn expandvars(path: impl Into<PathValue>) -> Result<PathValue> {
    PathEngine::new().expandvars(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::memory::{
        FixedCurrentDir, MapEnvironment, MapUserDatabase, MemoryFileSystem,
    };
    use crate::error::ErrorKind;
    use crate::path::Encoding;
    use std::io;

    fn engine() -> PathEngine {
        PathEngine::new()
            .with_current_dir(FixedCurrentDir::new("/home/me/work"))
            .with_environment(
                MapEnvironment::new()
                    .with_var("HOME", "/home/me")
                    .with_var("RAW", &b"\xff"[..]),
            )
            .with_user_database(MapUserDatabase::new().with_user("bob", "/srv/bob"))
            .with_filesystem(MemoryFileSystem::new().with_dir("/home/me/work"))
    }

    #[test]
    fn test_abspath_uses_cwd_for_relative_only() {
        let engine = engine();
        assert_eq!(engine.abspath("src/./lib.rs").unwrap(), "/home/me/work/src/lib.rs");
        assert_eq!(engine.abspath("../..").unwrap(), "/home");
        assert_eq!(engine.abspath("").unwrap(), "/home/me/work");

        let broken =
            PathEngine::new().with_current_dir(FixedCurrentDir::failing(io::ErrorKind::NotFound));
        assert_eq!(broken.abspath("/etc/../tmp").unwrap(), "/tmp");
        assert_eq!(
            broken.abspath("tmp").unwrap_err().kind(),
            ErrorKind::FilesystemUnavailable
        );
    }

    #[test]
    fn test_abspath_text_with_undecodable_cwd() {
        let engine = PathEngine::new().with_current_dir(FixedCurrentDir::new(&b"/d\xff"[..]));
        assert_eq!(
            engine.abspath("x").unwrap_err().kind(),
            ErrorKind::EncodingViolation
        );
        assert_eq!(engine.abspath(&b"x"[..]).unwrap(), &b"/d\xff/x"[..]);
    }

    #[test]
    fn test_resolve_reports_provenance() {
        let engine = engine().with_filesystem(
            MemoryFileSystem::new()
                .with_dir("/data/v2")
                .with_symlink("/home/me/work/data", "/data/v2"),
        );
        let resolved = engine.resolve("data/file").unwrap();
        assert_eq!(resolved.path(), &"/data/v2/file");
        assert_eq!(resolved.original(), &"data/file");
        assert_eq!(resolved.hops(), 1);
        assert_eq!(engine.realpath("").unwrap(), "/home/me/work");
    }

    #[test]
    fn test_realpath_respects_depth_ceiling() {
        let fs = MemoryFileSystem::new()
            .with_symlink("/a", "/b")
            .with_symlink("/b", "/c")
            .with_dir("/c");
        let engine = engine().with_filesystem(fs);
        assert_eq!(engine.realpath("/a").unwrap(), "/c");

        let tight = engine.with_max_symlink_depth(1);
        assert_eq!(
            tight.realpath("/a").unwrap_err().kind(),
            ErrorKind::ResolutionDepthExceeded
        );
    }

    #[test]
    fn test_realpath_bytes_stay_bytes() {
        let resolved = engine().realpath(&b"/home/me/work/\xfe"[..]).unwrap();
        assert_eq!(resolved.encoding(), Encoding::Bytes);
        assert_eq!(resolved, &b"/home/me/work/\xfe"[..]);
    }

    #[test]
    fn test_relpath_defaults_to_cwd() {
        let engine = engine();
        assert_eq!(engine.relpath("/home/me/other").unwrap(), "../other");
        assert_eq!(engine.relpath(&b"/home/me/work/x"[..]).unwrap(), &b"x"[..]);
        assert_eq!(engine.relpath_from("a/b", "").unwrap(), "a/b");
    }

    #[test]
    fn test_relpath_argument_errors() {
        let engine = engine();
        assert_eq!(
            engine.relpath_from("", "/a").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            engine.relpath_from("/a", &b"/b"[..]).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            engine.relpath_from("/a", "/b\0").unwrap_err().kind(),
            ErrorKind::EncodingViolation
        );
    }

    #[test]
    fn test_relpath_absolute_arguments_skip_cwd() {
        let engine =
            PathEngine::new().with_current_dir(FixedCurrentDir::failing(io::ErrorKind::NotFound));
        assert_eq!(engine.relpath_from("/a/b", "/a").unwrap(), "b");
        assert!(engine.relpath_from("b", "/a").is_err());
    }

    #[test]
    fn test_expanduser_and_expandvars() {
        let engine = engine();
        assert_eq!(engine.expanduser("~/notes").unwrap(), "/home/me/notes");
        assert_eq!(engine.expanduser("~bob/x").unwrap(), "/srv/bob/x");
        assert_eq!(engine.expanduser("~nobody").unwrap(), "~nobody");
        assert_eq!(engine.expandvars("$HOME/$NOPE").unwrap(), "/home/me/$NOPE");
    }

    #[test]
    fn test_expandvars_undecodable_value() {
        let engine = engine();
        assert_eq!(
            engine.expandvars("$RAW").unwrap_err().kind(),
            ErrorKind::EncodingViolation
        );
        assert_eq!(engine.expandvars(&b"$RAW"[..]).unwrap(), &b"\xff"[..]);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            max_symlink_depth: Some(12),
            ..Config::default()
        };
        assert_eq!(PathEngine::from_config(&config).max_symlink_depth(), 12);
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PathEngine>();
    }
}
