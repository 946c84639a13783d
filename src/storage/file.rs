//! File-backed slots: one JSON file per key.

use super::Slot;
use crate::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// Slot storing each key in `<dir>/<key>.json`.
///
/// Before a value is overwritten the previous file is copied to
/// `<key>.json.backup`. Content that failed to load is kept in
/// `<key>.json.corrupt`, which later saves leave alone.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Create a slot rooted at `dir`. The directory is created on first write.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file for a key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }

    /// Path of the backup file for a key.
    pub fn backup_path_for(&self, key: &str) -> Result<PathBuf> {
        Ok(self.path_for(key)?.with_extension("json.backup"))
    }

    /// Path of the file keeping unreadable content for a key.
    pub fn corrupt_path_for(&self, key: &str) -> Result<PathBuf> {
        Ok(self.path_for(key)?.with_extension("json.corrupt"))
    }
}

impl Slot for FileSlot {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        tracing::debug!("Loaded slot '{}' from {}", key, path.display());
        Ok(Some(content))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Backup existing file
        if path.exists() {
            fs::copy(&path, self.backup_path_for(key)?)?;
        }

        fs::write(&path, value)?;
        tracing::debug!("Saved slot '{}' to {}", key, path.display());
        Ok(())
    }

    fn quarantine(&self, key: &str, value: &str) -> Result<()> {
        let path = self.corrupt_path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, value)?;
        tracing::warn!("Kept unreadable slot '{}' in {}", key, path.display());
        Ok(())
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(Error::StorageUnavailable(format!("invalid slot key '{}'", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("cinelog_movies").is_ok());
        assert!(validate_key("movies-v2.1").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("a/b").is_err());
    }

    #[test]
    fn test_path_for() {
        let slot = FileSlot::new("/data");
        assert_eq!(
            slot.path_for("cinelog_movies").unwrap(),
            PathBuf::from("/data/cinelog_movies.json")
        );
        assert_eq!(
            slot.backup_path_for("cinelog_movies").unwrap(),
            PathBuf::from("/data/cinelog_movies.json.backup")
        );
        assert_eq!(
            slot.corrupt_path_for("cinelog_movies").unwrap(),
            PathBuf::from("/data/cinelog_movies.json.corrupt")
        );
    }
}
