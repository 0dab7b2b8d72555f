//! Report construction for each failure kind

use crate::error::Result;
use crate::failure::Failure;
use crate::report::{Report, Solution};
use crate::settings::Settings;
use crate::suggest;
use std::fs;
use std::path::Path;

const SIMILAR_FILES: &str = "Check out files with similar name";
const CHECK_PERMISSIONS: &str = "Check the permissions of the path";

/// Build the report explaining `failure`.
///
/// Listing the parent directory of a missing file may fail; that error is
/// returned rather than folded into the report.
pub fn alleviate(failure: &Failure, settings: &Settings) -> Result<Report> {
    match failure {
        Failure::NotFound {
            path,
            errno,
            errno_name,
            action,
        } => not_found(failure.kind_name(), path, *errno, errno_name, action, settings),
        Failure::PermissionDenied {
            path,
            errno,
            errno_name,
            action,
        } => Ok(permission_denied(failure.kind_name(), path, *errno, errno_name, action)),
        Failure::Unclassified {
            kind,
            message,
            action,
        } => Ok(unclassified(kind, message, action)),
    }
}

fn not_found(
    exception: &str,
    path: &Path,
    errno: i32,
    errno_name: &str,
    action: &str,
    settings: &Settings,
) -> Result<Report> {
    let suggestions = suggest::similar_files(path, settings.cutoff)?;
    let solutions = suggestions
        .iter()
        .take(settings.max_suggestions)
        .map(|s| Solution::new(SIMILAR_FILES, s.describe()));

    Ok(Report::builder(exception)
        .description(format!(
            "File {} could not be found\n\n{}",
            path.display(),
            errno_footer(errno, errno_name, action)
        ))
        .symptom("File does not exist", path.display().to_string())
        .symptom("Errno", errno)
        .solutions(solutions)
        .build())
}

fn permission_denied(exception: &str, path: &Path, errno: i32, errno_name: &str, action: &str) -> Report {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "unable to stat denied path");
            return Report::builder(exception)
                .description(format!("Unable to stat {}", path.display()))
                .symptom("Permission denied", path.display().to_string())
                .symptom("Errno", errno)
                .build();
        }
    };

    let mut builder = Report::builder(exception)
        .description(format!(
            "Access to {} was denied\n\n{}",
            path.display(),
            errno_footer(errno, errno_name, action)
        ))
        .symptom("Permission denied", path.display().to_string())
        .symptom("Errno", errno);

    if let Some(parent) = path.parent() {
        builder = builder.symptom("Parent directory", parent.display().to_string());
    }

    let kind = if metadata.is_dir() { "directory" } else { "file" };
    let hint = match mode::describe(&metadata) {
        Some(ownership) => {
            builder = builder
                .symptom("Mode", format!("{:04o}", ownership.mode))
                .symptom("Owner uid", ownership.uid)
                .symptom("Owner gid", ownership.gid);
            format!(
                "The {} is {}; make sure the current user is allowed to {} it",
                kind,
                ownership.summary(),
                action
            )
        }
        None => format!("Make sure the current user is allowed to {} the {}", action, kind),
    };

    builder.solution(Solution::new(CHECK_PERMISSIONS, hint)).build()
}

fn unclassified(kind: &str, message: &str, action: &str) -> Report {
    Report::builder(kind)
        .description(format!("Operation {} failed: {}", action, message))
        .symptom("Error kind", kind)
        .build()
}

fn errno_footer(errno: i32, errno_name: &str, action: &str) -> String {
    format!("Errno:  {} ({})\nAction: {}", errno, errno_name, action)
}

mod mode {
    use std::fs::Metadata;

    /// Permission bits and ownership of a path
    pub struct Ownership {
        pub mode: u32,
        pub uid: u32,
        pub gid: u32,
    }

    impl Ownership {
        /// "readable and writable by its owner, readable by everyone else"
        pub fn summary(&self) -> String {
            let owner = bits(self.mode >> 6);
            let group = bits(self.mode >> 3);
            let other = bits(self.mode);

            if owner == group && group == other {
                return match owner {
                    Some(access) => format!("{} by everyone", access),
                    None => "inaccessible to everyone".to_string(),
                };
            }

            let mut parts = Vec::new();
            for (who, access) in [("its owner", owner), ("its group", group), ("others", other)] {
                if let Some(access) = access {
                    parts.push(format!("{} by {}", access, who));
                }
            }
            if parts.is_empty() {
                "inaccessible to everyone".to_string()
            } else {
                parts.join(", ")
            }
        }
    }

    fn bits(triplet: u32) -> Option<&'static str> {
        match triplet & 0o7 {
            0o7 => Some("readable, writable and executable"),
            0o6 => Some("readable and writable"),
            0o5 => Some("readable and executable"),
            0o4 => Some("readable"),
            0o3 => Some("writable and executable"),
            0o2 => Some("writable"),
            0o1 => Some("executable"),
            _ => None,
        }
    }

    #[cfg(unix)]
    pub fn describe(metadata: &Metadata) -> Option<Ownership> {
        use std::os::unix::fs::MetadataExt;

        Some(Ownership {
            mode: metadata.mode() & 0o777,
            uid: metadata.uid(),
            gid: metadata.gid(),
        })
    }

    #[cfg(not(unix))]
    pub fn describe(_metadata: &Metadata) -> Option<Ownership> {
        None
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn ownership(mode: u32) -> Ownership {
            Ownership { mode, uid: 0, gid: 0 }
        }

        #[test]
        fn test_summaries() {
            assert_eq!(ownership(0o644).summary(), "readable and writable by its owner, readable by its group, readable by others");
            assert_eq!(ownership(0o600).summary(), "readable and writable by its owner");
            assert_eq!(ownership(0o555).summary(), "readable and executable by everyone");
            assert_eq!(ownership(0o000).summary(), "inaccessible to everyone");
        }
    }
}
