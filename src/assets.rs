//! Static asset staging: copy the photo and PDFs next to the rendered page.
//!
//! Assets are opaque. They are copied byte-for-byte and never inspected.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Expand asset arguments into real file paths.
///
/// Each argument may be a file, a directory (its files, non-recursive) or a
/// glob pattern. Output is sorted and deduplicated.
pub fn expand(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Copy `files` flat into `output_dir`, keeping their file names.
pub fn copy_into(files: &[PathBuf], output_dir: &Path) -> Result<usize> {
    let mut copied = 0;
    for src in files {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dest = output_dir.join(name);
        fs::copy(src, &dest).with_context(|| {
            format!("failed to copy {} to {}", src.display(), dest.display())
        })?;
        tracing::debug!("copied {} -> {}", src.display(), dest.display());
        copied += 1;
    }
    Ok(copied)
}

/// Map a served path such as `/bala-profile.jpg` onto `output_dir`.
pub fn served_path(output_dir: &Path, href: &str) -> PathBuf {
    output_dir.join(href.trim_start_matches('/'))
}

/// Referenced paths with no file behind them in `output_dir`.
pub fn missing<'a>(output_dir: &Path, referenced: &[&'a str]) -> Vec<&'a str> {
    referenced
        .iter()
        .copied()
        .filter(|href| !served_path(output_dir, href).is_file())
        .collect()
}
