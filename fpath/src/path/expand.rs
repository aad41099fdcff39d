//! Home-directory and environment-variable expansion.

use crate::context::{Environment, UserDatabase};
use crate::error::{Error, Result};
use crate::path::SEP;

const TILDE: u8 = b'~';
const DOLLAR: u8 = b'$';

/// Replace a leading `~` or `~name` with the matching home directory.
///
/// The token runs up to the first `/`. A bare `~` uses `HOME`, falling back
/// to the user database when it is unset; `~name` asks the user database.
/// If no home is found the path comes back unchanged. Trailing separators
/// of the home are dropped before the rest of the path is appended.
///
/// # Errors
///
/// Returns [`Error::FilesystemUnavailable`] if the user database fails.
///
/// # Examples
///
/// ```
/// use fpath::context::memory::{MapEnvironment, MapUserDatabase};
/// use fpath::path::expand::expanduser_bytes;
///
/// let env = MapEnvironment::new().with_var("HOME", "/home/me/");
/// let users = MapUserDatabase::new().with_user("bob", "/srv/bob");
///
/// assert_eq!(expanduser_bytes(b"~/notes", &env, &users).unwrap(), b"/home/me/notes");
/// assert_eq!(expanduser_bytes(b"~bob", &env, &users).unwrap(), b"/srv/bob");
/// assert_eq!(expanduser_bytes(b"~eve/x", &env, &users).unwrap(), b"~eve/x");
/// ```
pub fn expanduser_bytes(
    raw: &[u8],
    env: &dyn Environment,
    users: &dyn UserDatabase,
) -> Result<Vec<u8>> {
    if raw.first() != Some(&TILDE) {
        return Ok(raw.to_vec());
    }
    let token_end = raw
        .iter()
        .position(|&b| b == SEP)
        .unwrap_or(raw.len());
    let name = &raw[1..token_end];

    let home = if name.is_empty() {
        match env.var(b"HOME") {
            Some(home) => Some(home),
            None => users
                .current_home()
                .map_err(|e| Error::unavailable(raw, e))?,
        }
    } else {
        users.home_of(name).map_err(|e| Error::unavailable(raw, e))?
    };

    let Some(mut home) = home else {
        log::debug!(
            "no home directory for '{}', leaving path unchanged",
            String::from_utf8_lossy(&raw[..token_end])
        );
        return Ok(raw.to_vec());
    };

    while home.last() == Some(&SEP) {
        home.pop();
    }
    home.extend_from_slice(&raw[token_end..]);
    if home.is_empty() {
        home.push(SEP);
    }
    Ok(home)
}

/// Substitute `$NAME` and `${NAME}` references from the environment.
///
/// `NAME` in the unbraced form is a run of ASCII letters, digits and `_`;
/// the braced form takes anything up to the closing brace. References to
/// unset variables are kept as written, as is a `$` that starts neither
/// form. Substituted values are not scanned again.
///
/// # Examples
///
/// ```
/// use fpath::context::memory::MapEnvironment;
/// use fpath::path::expand::expandvars_bytes;
///
/// let env = MapEnvironment::new().with_var("APP", "fpath").with_var("V", "$APP");
///
/// assert_eq!(expandvars_bytes(b"/opt/$APP/${V}", &env), b"/opt/fpath/$APP");
/// assert_eq!(expandvars_bytes(b"$MISSING/$", &env), b"$MISSING/$");
/// ```
#[must_use]
pub fn expandvars_bytes(raw: &[u8], env: &dyn Environment) -> Vec<u8> {
    if !raw.contains(&DOLLAR) {
        return raw.to_vec();
    }

    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] != DOLLAR {
            out.push(raw[i]);
            i += 1;
            continue;
        }
        let Some((name, end)) = reference_at(raw, i) else {
            out.push(DOLLAR);
            i += 1;
            continue;
        };
        match env.var(name) {
            Some(value) => out.extend_from_slice(&value),
            None => out.extend_from_slice(&raw[i..end]),
        }
        i = end;
    }
    out
}

/// Parse a variable reference starting at the `$` at `start`.
///
/// Returns the variable name and the index just past the reference.
fn reference_at(raw: &[u8], start: usize) -> Option<(&[u8], usize)> {
    let rest = &raw[start + 1..];
    if rest.first() == Some(&b'{') {
        let close = rest.iter().position(|&b| b == b'}')?;
        return Some((&rest[1..close], start + 1 + close + 1));
    }
    let len = rest
        .iter()
        .take_while(|&&b| b.is_ascii_alphanumeric() || b == b'_')
        .count();
    (len > 0).then(|| (&rest[..len], start + 1 + len))
}
