//! Similar-file suggestions for a missing path

use crate::error::{Result, ResultExt};
use crate::similarity;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// A directory entry whose name resembles the missing file
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub candidate_path: PathBuf,
    /// Similarity in `0.0..=1.0`
    pub similarity: f64,
}

impl Suggestion {
    /// Similarity as a whole percentage, truncated
    pub fn percent(&self) -> u32 {
        (self.similarity * 100.0) as u32
    }

    /// One-line form used in report solutions
    pub fn describe(&self) -> String {
        format!(
            "{} similarity: {}%",
            self.candidate_path.display(),
            self.percent()
        )
    }
}

/// Entries of `missing`'s parent directory whose names score strictly above
/// `cutoff`, best match first.
///
/// Scores are compared as whole percentages, the same way they are displayed,
/// so nothing shown as "75%" passes a 0.75 cutoff. The directory is read
/// exactly once. Failing to read it is an error.
pub fn similar_files(missing: &Path, cutoff: f64) -> Result<Vec<Suggestion>> {
    let cutoff_percent = (cutoff * 100.0).round() as u32;
    let Some(file_name) = missing.file_name() else {
        return Ok(Vec::new());
    };
    let file_name = file_name.to_string_lossy();
    let dir = match missing.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory {}", dir.display()))?;

    let mut suggestions = Vec::new();
    let mut scanned = 0usize;
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        scanned += 1;

        let name = entry.file_name();
        let score = similarity::ratio(&name.to_string_lossy(), &file_name);
        tracing::trace!(candidate = %name.to_string_lossy(), score, "scored candidate");

        let suggestion = Suggestion {
            candidate_path: dir.join(&name),
            similarity: score,
        };
        if suggestion.percent() > cutoff_percent {
            suggestions.push(suggestion);
        }
    }

    sort_by_similarity(&mut suggestions);
    tracing::debug!(
        dir = %dir.display(),
        scanned,
        matched = suggestions.len(),
        "scanned directory for similar files"
    );

    Ok(suggestions)
}

/// Best score first; ties broken by path so the order never depends on the
/// directory iteration order.
fn sort_by_similarity(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.candidate_path.cmp(&b.candidate_path))
    });
}
