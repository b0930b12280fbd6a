//! Path normalization shared by every filesystem tool

use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resolve a user-supplied path to an absolute, lexically clean form
///
/// `~` and `~/...` expand to the home directory and `~name/...` to that
/// account's home (left as-is when there is no such account). Relative paths
/// are joined to the current working directory, `.` segments vanish and `..`
/// pops a segment.
/// Nothing is checked against the filesystem and symlinks are left alone.
pub fn normalize_path(raw: &str) -> PathBuf {
    let expanded = expand_home(raw);

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from(std::path::MAIN_SEPARATOR_STR))
            .join(expanded)
    };

    lexical_clean(&absolute)
}

fn expand_home(raw: &str) -> PathBuf {
    let Some(after) = raw.strip_prefix('~') else {
        return PathBuf::from(raw);
    };
    let (user, rest) = after.split_once('/').unwrap_or((after, ""));

    let home = if user.is_empty() { dirs::home_dir() } else { user_home(user) };

    match home {
        Some(home) => {
            let rest = rest.trim_start_matches('/');
            if rest.is_empty() { home } else { home.join(rest) }
        }
        None => PathBuf::from(raw),
    }
}

/// Home directory of a named account (`~name`)
#[cfg(unix)]
fn user_home(name: &str) -> Option<PathBuf> {
    if name.contains('\0') {
        return None;
    }
    match nix::unistd::User::from_name(name) {
        Ok(user) => user.map(|u| u.dir),
        Err(e) => {
            debug!(%name, error = %e, "user_home: account lookup failed");
            None
        }
    }
}

#[cfg(not(unix))]
fn user_home(_name: &str) -> Option<PathBuf> {
    None
}

fn lexical_clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(p) => out.push(p.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(std::path::MAIN_SEPARATOR_STR);
    }
    out
}

/// Characters a listing path may end with
fn is_allowed_tail(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/' | '~' | ' ')
}

/// Drop trailing characters a model sometimes leaks into path arguments
///
/// Quotes, brackets and punctuation left over from a truncated generation are
/// removed from the end only; the interior of the path is untouched.
pub fn strip_trailing_junk(raw: &str) -> &str {
    raw.trim_end_matches(|c: char| !is_allowed_tail(c))
}
