//! Failure classification
//!
//! A risky operation hands back `Result<T, Failure>` instead of unwinding. The
//! failure is classified once, at the point where it is caught, into one of a
//! closed set of kinds that the report builders know how to explain.

use std::io;
use std::path::{Path, PathBuf};

/// "No such file or directory"
pub const ENOENT: i32 = 2;
/// "Operation not permitted"
pub const EPERM: i32 = 1;
/// "Permission denied"
pub const EACCES: i32 = 13;

/// Symbolic name for the error codes this crate knows how to explain
#[cfg(unix)]
pub fn errno_name(code: i32) -> Option<&'static str> {
    match code {
        ENOENT => Some("ENOENT"),
        EPERM => Some("EPERM"),
        EACCES => Some("EACCES"),
        _ => None,
    }
}

/// Symbolic name for the error codes this crate knows how to explain
#[cfg(windows)]
pub fn errno_name(code: i32) -> Option<&'static str> {
    match code {
        2 => Some("ERROR_FILE_NOT_FOUND"),
        3 => Some("ERROR_PATH_NOT_FOUND"),
        5 => Some("ERROR_ACCESS_DENIED"),
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
pub fn errno_name(_code: i32) -> Option<&'static str> {
    None
}

/// Raw OS code and its symbolic name, falling back to `default` when the
/// error carries no code.
fn os_code(err: &io::Error, default: i32, default_name: &str) -> (i32, String) {
    match err.raw_os_error() {
        Some(code) => {
            let name = errno_name(code).map_or_else(|| format!("os error {}", code), str::to_string);
            (code, name)
        }
        None => (default, default_name.to_string()),
    }
}

/// A caught failure, classified by kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The target path does not exist
    NotFound {
        path: PathBuf,
        errno: i32,
        errno_name: String,
        action: String,
    },
    /// The target path exists but the caller may not access it
    PermissionDenied {
        path: PathBuf,
        errno: i32,
        errno_name: String,
        action: String,
    },
    /// Anything the classifier has no dedicated explanation for
    Unclassified {
        kind: String,
        message: String,
        action: String,
    },
}

impl Failure {
    /// Classify an io error raised while performing `action` on `path`.
    ///
    /// Relative paths are joined onto the current working directory so the
    /// report always names an absolute location.
    pub fn from_io(err: &io::Error, path: impl AsRef<Path>, action: impl Into<String>) -> Self {
        let action = action.into();
        let path = absolute(path.as_ref());

        // The kind is decoded per platform, so it is the reliable signal; the
        // raw code is only carried along for display.
        let failure = match err.kind() {
            io::ErrorKind::NotFound => {
                let (errno, errno_name) = os_code(err, ENOENT, "ENOENT");
                Failure::NotFound {
                    path,
                    errno,
                    errno_name,
                    action,
                }
            }
            io::ErrorKind::PermissionDenied => {
                let (errno, errno_name) = os_code(err, EACCES, "EACCES");
                Failure::PermissionDenied {
                    path,
                    errno,
                    errno_name,
                    action,
                }
            }
            kind => Failure::Unclassified {
                kind: format!("{:?}", kind),
                message: err.to_string(),
                action,
            },
        };

        tracing::debug!(kind = failure.kind_name(), action = failure.action(), "classified failure");
        failure
    }

    /// A failure that did not come from the filesystem at all
    pub fn unclassified(kind: impl Into<String>, message: impl Into<String>, action: impl Into<String>) -> Self {
        Failure::Unclassified {
            kind: kind.into(),
            message: message.into(),
            action: action.into(),
        }
    }

    /// Exception type name reported under the JSON `exception` key
    pub fn kind_name(&self) -> &str {
        match self {
            Failure::NotFound { .. } => "FileNotFoundError",
            Failure::PermissionDenied { .. } => "PermissionError",
            Failure::Unclassified { kind, .. } => kind,
        }
    }

    /// The action that was attempted when the failure happened
    pub fn action(&self) -> &str {
        match self {
            Failure::NotFound { action, .. }
            | Failure::PermissionDenied { action, .. }
            | Failure::Unclassified { action, .. } => action,
        }
    }

    /// Absolute path involved, if the failure concerns one
    pub fn path(&self) -> Option<&Path> {
        match self {
            Failure::NotFound { path, .. } | Failure::PermissionDenied { path, .. } => Some(path),
            Failure::Unclassified { .. } => None,
        }
    }
}

/// Run `op` against `path` and classify its error, if any, as a [`Failure`].
///
/// ```no_run
/// use alleviate::attempt;
///
/// let contents = attempt("read", "missing.txt", |p| std::fs::read_to_string(p));
/// assert!(contents.is_err());
/// ```
pub fn attempt<T, P, F>(action: &str, path: P, op: F) -> Result<T, Failure>
where
    P: AsRef<Path>,
    F: FnOnce(&Path) -> io::Result<T>,
{
    let path = path.as_ref();
    op(path).map_err(|err| Failure::from_io(&err, path, action))
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
