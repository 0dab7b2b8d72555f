//! Shared fixtures for the integration tests

use std::fs::File;
use std::path::Path;
use tempfile::TempDir;

/// Temporary directory holding empty files with the given names
pub fn dir_with_files(names: &[&str]) -> std::io::Result<TempDir> {
    let dir = TempDir::new()?;
    touch_all(dir.path(), names)?;
    Ok(dir)
}

pub fn touch_all(dir: &Path, names: &[&str]) -> std::io::Result<()> {
    for name in names {
        File::create(dir.join(name))?;
    }
    Ok(())
}
