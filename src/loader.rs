//! Discovery of application definition files

use crate::{
    constants::{APPLICATION_GLOBS, MIN_DEFINITION_SIZE},
    error::{Error, Result},
};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Builds the set of file name patterns a definition must match.
pub fn definition_globset() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in APPLICATION_GLOBS {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Lists the definition files directly inside `dir`, sorted by file name.
///
/// Files whose name does not match [`APPLICATION_GLOBS`] or that are smaller
/// than [`MIN_DEFINITION_SIZE`] bytes are skipped.
pub fn discover_definitions<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::FileNotFound { path: dir.display().to_string() });
    }

    let globset = definition_globset()?;
    let mut definitions = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            log::debug!("Skipping {} (not a regular file)", path.display());
            continue;
        }
        if !globset.is_match(entry.file_name()) {
            log::debug!("Skipping {} (not a definition file)", path.display());
            continue;
        }
        let size = entry.metadata()?.len();
        if size < MIN_DEFINITION_SIZE {
            log::debug!("Skipping {} (only {size} bytes)", path.display());
            continue;
        }

        definitions.push(path.to_path_buf());
    }

    log::info!("Found {} application definition(s) in {}", definitions.len(), dir.display());
    Ok(definitions)
}
