//! Writing rendered files to the project directory

use super::{File, IfExists};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Write rendered files under `root`, honoring each file's `IfExists` policy.
///
/// Conflicts are detected for every file before anything is written, so a refused
/// scaffold leaves the project untouched. Returns the paths that were written.
pub fn write_files(root: &Path, files: &[File]) -> Result<Vec<PathBuf>> {
    let conflicts: Vec<_> = files
        .iter()
        .filter(|f| f.if_exists == IfExists::Error && root.join(&f.path).exists())
        .map(|f| f.path.display().to_string())
        .collect();
    if !conflicts.is_empty() {
        anyhow::bail!(
            "Files already exist (use --force to overwrite):\n{}",
            conflicts
                .iter()
                .map(|c| format!("  - {}", c))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    let mut written = Vec::new();

    for file in files {
        let target_path = root.join(&file.path);

        if file.if_exists == IfExists::Skip && target_path.exists() {
            println!("  {} {}", "skip".dimmed(), file.path.display());
            continue;
        }

        // Ensure parent directories exist
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target_path, &file.contents)
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
        println!("  {} {}", "->".blue(), file.path.display());

        written.push(file.path.clone());
    }

    Ok(written)
}
