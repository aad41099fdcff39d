//! Physical path resolution.
//!
//! This module resolves an absolute path by following symbolic links one
//! component at a time, with support for:
//! - Relative and absolute link targets
//! - Symlink cycle detection that tells a cycle apart from a revisit
//! - A ceiling on the number of link substitutions
//! - Paths whose tail does not exist

use std::collections::HashMap;

use crate::context::{EntryKind, FileSystem};
use crate::error::{Error, Result};
use crate::path::segment::is_absolute;
use crate::path::{CURDIR, PARDIR, SEP};

/// The outcome of [`resolve_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The physical path: absolute, single-rooted, without `.`, `..` or a
    /// trailing separator.
    pub path: Vec<u8>,
    /// How many link targets were substituted.
    pub hops: usize,
}

/// Resolve `path` against the filesystem, following every symbolic link.
///
/// `path` should already be absolute; a relative one is taken from `/`. It
/// is walked as written, without lexical normalization first, so `link/..`
/// names the parent of the link's target rather than the link's own parent.
/// `..` at the root stays at the root.
///
/// Once a component turns out not to exist, no further links are followed
/// for the rest of the walk. The remaining components are applied
/// lexically, `..` included.
///
/// # Errors
///
/// Returns:
/// - [`Error::SymlinkCycle`] if a link leads back to itself
/// - [`Error::ResolutionDepthExceeded`] if more than `limit` substitutions
///   are needed
/// - [`Error::FilesystemUnavailable`] if the filesystem reports anything
///   other than a missing entry
///
/// # Examples
///
/// ```
/// use fpath::context::memory::MemoryFileSystem;
/// use fpath::path::canonicalize::resolve_bytes;
///
/// let fs = MemoryFileSystem::new()
///     .with_dir("/opt/app-1.2")
///     .with_symlink("/opt/app", "app-1.2");
///
/// let resolution = resolve_bytes(&fs, b"/opt/app/bin/../lib", 40).unwrap();
/// assert_eq!(resolution.path, b"/opt/app-1.2/lib");
/// assert_eq!(resolution.hops, 1);
/// ```
pub fn resolve_bytes(fs: &dyn FileSystem, path: &[u8], limit: usize) -> Result<Resolution> {
    let mut walker = SymlinkWalker {
        fs,
        limit,
        hops: 0,
        visited: HashMap::new(),
    };
    let mut state = WalkState::default();
    walker.walk(&mut state, path)?;

    Ok(Resolution {
        path: render(&state.components),
        hops: walker.hops,
    })
}

/// How far a link has been resolved within one call.
#[derive(Debug, Clone)]
enum LinkState {
    /// Its target is being walked right now; meeting it again is a cycle.
    InProgress,
    /// Its target has been walked; later visits reuse the result.
    Resolved {
        components: Vec<Vec<u8>>,
        missing: bool,
    },
}

/// Per-call record of every link met, keyed by the link's absolute path.
type VisitedSet = HashMap<Vec<u8>, LinkState>;

#[derive(Debug, Default)]
struct WalkState {
    /// Components of the resolved prefix, root excluded.
    components: Vec<Vec<u8>>,
    /// Set once a component turned out not to exist. Never cleared, so
    /// no link is followed past it.
    missing: bool,
}

struct SymlinkWalker<'a> {
    fs: &'a dyn FileSystem,
    limit: usize,
    hops: usize,
    visited: VisitedSet,
}

impl SymlinkWalker<'_> {
    fn walk(&mut self, state: &mut WalkState, path: &[u8]) -> Result<()> {
        if is_absolute(path) {
            state.components.clear();
        }

        for component in path.split(|&b| b == SEP) {
            if component.is_empty() || component == CURDIR {
                continue;
            }
            if component == PARDIR {
                state.components.pop();
                continue;
            }

            state.components.push(component.to_vec());
            if state.missing {
                continue;
            }

            let candidate = render(&state.components);
            let kind = self
                .fs
                .entry_kind(&candidate)
                .map_err(|e| Error::unavailable(&candidate, e))?;
            match kind {
                EntryKind::Other => {}
                EntryKind::Missing => {
                    log::trace!(
                        "{} does not exist, no longer following links",
                        String::from_utf8_lossy(&candidate)
                    );
                    state.missing = true;
                }
                EntryKind::Symlink => self.follow(state, candidate)?,
            }
        }
        Ok(())
    }

    /// Replace the link at the end of `state` with its resolved target.
    fn follow(&mut self, state: &mut WalkState, link: Vec<u8>) -> Result<()> {
        match self.visited.get(&link) {
            Some(LinkState::InProgress) => {
                log::debug!(
                    "symlink cycle detected at {}",
                    String::from_utf8_lossy(&link)
                );
                return Err(Error::SymlinkCycle { path: link.into() });
            }
            Some(LinkState::Resolved {
                components,
                missing,
            }) => {
                state.components.clone_from(components);
                state.missing = *missing;
                return Ok(());
            }
            None => {}
        }

        if self.hops == self.limit {
            return Err(Error::ResolutionDepthExceeded {
                path: link.into(),
                limit: self.limit,
            });
        }
        self.hops += 1;
        self.visited.insert(link.clone(), LinkState::InProgress);

        let target = self
            .fs
            .read_link(&link)
            .map_err(|e| Error::unavailable(&link, e))?;
        log::trace!(
            "hop {}: {} -> {}",
            self.hops,
            String::from_utf8_lossy(&link),
            String::from_utf8_lossy(&target)
        );

        state.components.pop();
        self.walk(state, &target)?;

        self.visited.insert(
            link,
            LinkState::Resolved {
                components: state.components.clone(),
                missing: state.missing,
            },
        );
        Ok(())
    }
}

fn render(components: &[Vec<u8>]) -> Vec<u8> {
    let mut out = vec![SEP];
    out.extend_from_slice(&components.join(&SEP));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::memory::MemoryFileSystem;
    use std::io;

    fn resolve(fs: &MemoryFileSystem, path: &str) -> Result<(String, usize)> {
        resolve_bytes(fs, path.as_bytes(), 40)
            .map(|r| (String::from_utf8(r.path).unwrap(), r.hops))
    }

    fn chain(len: usize) -> MemoryFileSystem {
        (0..len)
            .fold(MemoryFileSystem::new().with_dir("/end"), |fs, i| {
                let target = if i + 1 == len {
                    "/end".to_string()
                } else {
                    format!("/l{}", i + 1)
                };
                fs.with_symlink(format!("/l{i}"), target)
            })
    }

    #[test]
    fn test_plain_path_is_unchanged() {
        let fs = MemoryFileSystem::new().with_dir("/a/b");
        assert_eq!(resolve(&fs, "/a/b").unwrap(), ("/a/b".to_string(), 0));
        assert_eq!(resolve(&fs, "/a/./b/").unwrap().0, "/a/b");
    }

    #[test]
    fn test_relative_link_resolves_against_parent() {
        let fs = MemoryFileSystem::new()
            .with_dir("/a/c")
            .with_symlink("/a/b/l", "../c");
        assert_eq!(resolve(&fs, "/a/b/l/f").unwrap(), ("/a/c/f".to_string(), 1));
    }

    #[test]
    fn test_absolute_link_restarts_at_root() {
        let fs = MemoryFileSystem::new()
            .with_dir("/x/y")
            .with_symlink("/a/l", "/x/y");
        assert_eq!(resolve(&fs, "/a/l/z").unwrap().0, "/x/y/z");
    }

    #[test]
    fn test_parent_of_link_is_physical() {
        let fs = MemoryFileSystem::new()
            .with_dir("/x/deep")
            .with_symlink("/a/link", "/x/deep");
        assert_eq!(resolve(&fs, "/a/link/..").unwrap().0, "/x");
    }

    #[test]
    fn test_two_link_cycle() {
        let fs = MemoryFileSystem::new()
            .with_symlink("/a", "b")
            .with_symlink("/b", "a");
        let err = resolve(&fs, "/a").unwrap_err();
        assert!(matches!(err, Error::SymlinkCycle { .. }));
    }

    #[test]
    fn test_self_link_cycle() {
        let fs = MemoryFileSystem::new().with_symlink("/loop", "/loop");
        let err = resolve(&fs, "/loop/x").unwrap_err();
        match err {
            Error::SymlinkCycle { path } => assert_eq!(path, &b"/loop"[..]),
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_revisit_is_not_a_cycle() {
        let fs = MemoryFileSystem::new()
            .with_dir("/d")
            .with_symlink("/l", "d");
        assert_eq!(resolve(&fs, "/l/../l").unwrap(), ("/d".to_string(), 1));
    }

    #[test]
    fn test_chain_at_ceiling_resolves() {
        let fs = chain(40);
        assert_eq!(resolve(&fs, "/l0").unwrap(), ("/end".to_string(), 40));
    }

    #[test]
    fn test_chain_beyond_ceiling_fails() {
        let fs = chain(41);
        let err = resolve(&fs, "/l0").unwrap_err();
        match err {
            Error::ResolutionDepthExceeded { path, limit } => {
                assert_eq!(limit, 40);
                assert_eq!(path, &b"/l40"[..]);
            }
            other => panic!("expected depth error, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_ceiling() {
        let fs = chain(3);
        assert!(resolve_bytes(&fs, b"/l0", 3).is_ok());
        assert!(matches!(
            resolve_bytes(&fs, b"/l0", 2),
            Err(Error::ResolutionDepthExceeded { limit: 2, .. })
        ));
    }

    #[test]
    fn test_missing_component_stops_following() {
        let fs = MemoryFileSystem::new()
            .with_dir("/d")
            .with_symlink("/l", "/d");
        assert_eq!(resolve(&fs, "/gone/l/x").unwrap().0, "/gone/l/x");
    }

    #[test]
    fn test_missing_component_stays_missing_after_parent_dir() {
        let fs = MemoryFileSystem::new()
            .with_dir("/d")
            .with_symlink("/l", "/d");
        assert_eq!(resolve(&fs, "/gone/more/../../l").unwrap(), ("/l".to_string(), 0));
    }

    #[test]
    fn test_link_through_missing_component_back_to_itself() {
        // The walk reaches `/a/l` again while it is still in progress, but
        // only after `gone` was found missing.
        let fs = MemoryFileSystem::new()
            .with_dir("/a")
            .with_symlink("/a/l", "gone/../l");
        assert_eq!(resolve(&fs, "/a/l").unwrap(), ("/a/l".to_string(), 1));
        assert_eq!(resolve(&fs, "/a/l/x/../y").unwrap(), ("/a/l/y".to_string(), 1));
    }

    #[test]
    fn test_nested_link_through_missing_component() {
        let fs = MemoryFileSystem::new()
            .with_dir("/t/a/a")
            .with_symlink("/t/a/a/a", "c/../a");
        assert_eq!(
            resolve(&fs, "/t/a/a/a/x").unwrap(),
            ("/t/a/a/a/x".to_string(), 1)
        );
    }

    #[test]
    fn test_dangling_link_keeps_target() {
        let fs = MemoryFileSystem::new().with_symlink("/l", "/nowhere/file");
        assert_eq!(resolve(&fs, "/l").unwrap(), ("/nowhere/file".to_string(), 1));
    }

    #[test]
    fn test_parent_dirs_clamp_at_root() {
        let fs = MemoryFileSystem::new().with_dir("/etc");
        assert_eq!(resolve(&fs, "/../../etc").unwrap().0, "/etc");
        assert_eq!(resolve(&fs, "/..").unwrap().0, "/");
    }

    #[test]
    fn test_filesystem_failure_is_reported() {
        let fs = MemoryFileSystem::new().with_failure("/secret", io::ErrorKind::PermissionDenied);
        let err = resolve(&fs, "/secret/key").unwrap_err();
        match err {
            Error::FilesystemUnavailable { path, source } => {
                assert_eq!(path, &b"/secret"[..]);
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected filesystem error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_link_target() {
        let fs = MemoryFileSystem::new()
            .with_dir(&b"/\xff"[..])
            .with_symlink("/l", &b"/\xff"[..]);
        let resolution = resolve_bytes(&fs, b"/l/\xfe", 40).unwrap();
        assert_eq!(resolution.path, b"/\xff/\xfe");
    }

    #[test]
    fn test_double_root_resolves_to_single_root() {
        let fs = MemoryFileSystem::new().with_dir("/srv");
        assert_eq!(resolve(&fs, "//srv").unwrap().0, "/srv");
    }
}
