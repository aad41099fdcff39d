//! Collaborators backed by the running system.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{CurrentDirProvider, EntryKind, Environment, FileSystem, UserDatabase};
use crate::config::DEFAULT_PASSWD_FILE;

/// The process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCurrentDir;

impl CurrentDirProvider for SystemCurrentDir {
    fn current_dir(&self) -> io::Result<Vec<u8>> {
        os_to_bytes(std::env::current_dir()?.into_os_string())
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &[u8]) -> Option<Vec<u8>> {
        // `var_os` panics on these.
        if name.is_empty() || name.contains(&b'=') || name.contains(&0) {
            return None;
        }
        let value = std::env::var_os(bytes_to_os(name).ok()?)?;
        os_to_bytes(value).ok()
    }
}

/// Home directories from the `home` crate and a `passwd(5)` file.
///
/// The current user's home comes from [`home::home_dir`]. Named users are
/// looked up by scanning the passwd file for a matching login name; users
/// known only to NSS modules such as LDAP are not found.
#[derive(Debug, Clone)]
pub struct PasswdDatabase {
    path: PathBuf,
}

impl PasswdDatabase {
    /// Read named users from `/etc/passwd`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_path(DEFAULT_PASSWD_FILE)
    }

    /// Read named users from a different passwd-format file.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the passwd file this database reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for PasswdDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDatabase for PasswdDatabase {
    fn current_home(&self) -> io::Result<Option<Vec<u8>>> {
        home::home_dir()
            .map(|dir| os_to_bytes(dir.into_os_string()))
            .transpose()
    }

    fn home_of(&self, name: &[u8]) -> io::Result<Option<Vec<u8>>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("passwd file {} not found", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        Ok(find_home(&contents, name))
    }
}

/// Find the home directory field of `name` in passwd-format `contents`.
fn find_home(contents: &[u8], name: &[u8]) -> Option<Vec<u8>> {
    contents
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty() && !line.starts_with(b"#"))
        .find_map(|line| {
            let mut fields = line.split(|&b| b == b':');
            if fields.next()? != name {
                return None;
            }
            fields.nth(4).map(<[u8]>::to_vec)
        })
}

/// The real filesystem, queried with `lstat` and `readlink`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn entry_kind(&self, path: &[u8]) -> io::Result<EntryKind> {
        match fs::symlink_metadata(bytes_to_os(path)?) {
            Ok(meta) if meta.file_type().is_symlink() => Ok(EntryKind::Symlink),
            Ok(_) => Ok(EntryKind::Other),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                Ok(EntryKind::Missing)
            }
            Err(e) => Err(e),
        }
    }

    fn read_link(&self, path: &[u8]) -> io::Result<Vec<u8>> {
        os_to_bytes(fs::read_link(bytes_to_os(path)?)?.into_os_string())
    }
}

#[cfg(unix)]
fn os_to_bytes(value: OsString) -> io::Result<Vec<u8>> {
    use std::os::unix::ffi::OsStringExt;

    Ok(value.into_vec())
}

#[cfg(not(unix))]
fn os_to_bytes(value: OsString) -> io::Result<Vec<u8>> {
    value
        .into_string()
        .map(String::into_bytes)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "path is not valid UTF-8"))
}

#[cfg(unix)]
fn bytes_to_os(value: &[u8]) -> io::Result<&OsStr> {
    use std::os::unix::ffi::OsStrExt;

    Ok(OsStr::from_bytes(value))
}

#[cfg(not(unix))]
fn bytes_to_os(value: &[u8]) -> io::Result<&OsStr> {
    std::str::from_utf8(value)
        .map(OsStr::new)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "path is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    const PASSWD: &[u8] = b"# comment line\n\
root:x:0:0:root:/root:/bin/bash\n\
\n\
alice:x:1000:1000:Alice,,,:/home/alice:/bin/zsh\n\
nohome:x:1001:1001\n";

    #[test]
    fn test_find_home_matches_login_name() {
        assert_eq!(find_home(PASSWD, b"alice"), Some(b"/home/alice".to_vec()));
        assert_eq!(find_home(PASSWD, b"root"), Some(b"/root".to_vec()));
    }

    #[test]
    fn test_find_home_unknown_or_short_entry() {
        assert_eq!(find_home(PASSWD, b"bob"), None);
        assert_eq!(find_home(PASSWD, b"nohome"), None);
        assert_eq!(find_home(PASSWD, b"ali"), None);
    }

    #[test]
    fn test_passwd_database_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(PASSWD).unwrap();

        let db = PasswdDatabase::with_path(file.path());
        assert_eq!(db.home_of(b"alice").unwrap(), Some(b"/home/alice".to_vec()));
        assert_eq!(db.home_of(b"nobody-here").unwrap(), None);
    }

    #[test]
    fn test_passwd_database_missing_file_is_a_miss() {
        let dir = tempdir().unwrap();
        let db = PasswdDatabase::with_path(dir.path().join("absent"));
        assert_eq!(db.home_of(b"root").unwrap(), None);
    }

    #[test]
    fn test_system_environment_rejects_unusable_names() {
        let env = SystemEnvironment;
        assert_eq!(env.var(b""), None);
        assert_eq!(env.var(b"A=B"), None);
        assert_eq!(env.var(b"A\0"), None);
    }

    #[test]
    fn test_os_filesystem_classifies_entries() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, b"x").unwrap();
        let fs_ = OsFileSystem;

        let bytes = |p: &Path| os_to_bytes(p.as_os_str().to_os_string()).unwrap();
        assert_eq!(fs_.entry_kind(&bytes(dir.path())).unwrap(), EntryKind::Other);
        assert_eq!(fs_.entry_kind(&bytes(&file)).unwrap(), EntryKind::Other);
        assert_eq!(
            fs_.entry_kind(&bytes(&dir.path().join("missing"))).unwrap(),
            EntryKind::Missing
        );
        // A regular file used as a directory.
        assert_eq!(
            fs_.entry_kind(&bytes(&file.join("below"))).unwrap(),
            EntryKind::Missing
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_os_filesystem_reads_links() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let link = dir.path().join("link");
        symlink("target/inner", &link).unwrap();
        let fs_ = OsFileSystem;

        let link_bytes = os_to_bytes(link.into_os_string()).unwrap();
        assert_eq!(fs_.entry_kind(&link_bytes).unwrap(), EntryKind::Symlink);
        assert_eq!(fs_.read_link(&link_bytes).unwrap(), b"target/inner");
    }

    #[test]
    fn test_system_current_dir_is_absolute() {
        let cwd = SystemCurrentDir.current_dir().unwrap();
        assert_eq!(cwd.first(), Some(&b'/'));
    }
}
