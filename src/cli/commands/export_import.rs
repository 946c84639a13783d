//! Export and import command implementations.

use crate::core::{ImportMode, MovieStore};
use crate::models::Movie;
use crate::storage::Slot;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Write the whole collection to a JSON file.
pub fn execute_export<S: Slot>(store: &MovieStore<S>, output: &Path) -> Result<()> {
    println!("{}", "[EXPORT] Writing collection...".bold().cyan());

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(store.movies())?;
    fs::write(output, &content)
        .with_context(|| format!("Failed to write export: {}", output.display()))?;

    tracing::info!("Exported {} movies to {}", store.len(), output.display());

    println!("{}", "[OK] Export successful!".bold().green());
    println!("  File: {}", output.display());
    println!("  Entries: {}", store.len());
    println!("  Size: {:.2} KB", content.len() as f64 / 1024.0);

    Ok(())
}

/// Read movies from an exported JSON file.
pub fn read_backup(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read backup: {}", path.display()))?;
    let movies: Vec<Movie> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse backup: {}", path.display()))?;
    Ok(movies)
}

/// Load movies from an exported JSON file into the collection.
pub fn execute_import<S: Slot>(
    store: &mut MovieStore<S>,
    backup_file: &Path,
    merge: bool,
    dry_run: bool,
) -> Result<()> {
    println!("{}", "[IMPORT] Reading backup...".bold().cyan());

    let movies = read_backup(backup_file)?;
    let mode = if merge {
        ImportMode::Merge
    } else {
        ImportMode::Replace
    };

    println!("  File: {}", backup_file.display());
    println!("  Entries in backup: {}", movies.len());
    println!("  Entries in log: {}", store.len());
    println!(
        "  Mode: {}",
        if merge { "merge" } else { "replace" }
    );
    println!();

    if dry_run {
        let new = movies
            .iter()
            .filter(|m| m.id.is_empty() || store.get_movie(&m.id).is_none())
            .count();
        println!("{}", "[DRY RUN] No changes made.".yellow());
        if merge {
            println!("  Would add {} entries", new);
        } else {
            println!("  Would replace {} entries with {}", store.len(), movies.len());
        }
        return Ok(());
    }

    let summary = store.import(movies, mode);

    println!("{}", "[OK] Import successful!".bold().green());
    println!("  Added: {}", summary.added);
    if summary.skipped > 0 {
        println!("  Skipped (already present): {}", summary.skipped);
    }
    println!("  Entries in log: {}", summary.total);

    Ok(())
}
