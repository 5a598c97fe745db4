//! # Configuration Store
//!
//! Flat-file persistence of configuration documents in a single directory.
//!
//! Every `*.json` regular file in the directory is a stored configuration; its
//! content is only checked when it is read. Client-supplied filenames are never
//! joined onto the directory directly:
//! - reads and overwrites look the name up in a listing taken on the spot,
//! - new files must have the exact shape produced by `build_new_filename`.
//!
//! Writes go to a temporary file in the same directory which is then renamed
//! over the target, so a document is either fully written or untouched. An
//! overwritten document keeps its permissions; a new one gets `0o644` less
//! the process umask, like any other file the server creates.

use crate::error::BadgeError;
use log::{debug, error, info, warn};
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::Builder;

/// Shape of a filename produced for a first save.
const NEW_FILENAME_PATTERN: &str = r"^[A-Za-z0-9_]+_\d{8}_\d{6}\.json$";

/// Mode requested for new documents, before the umask applies.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the store directory if it does not exist yet.
    pub fn ensure_directory(&self) -> Result<(), BadgeError> {
        if self.dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.dir).map_err(|source| {
            error!(
                "Could not create store directory {}: {}",
                self.dir.display(),
                source
            );
            BadgeError::StorageUnavailable {
                dir: self.dir.display().to_string(),
                source,
            }
        })?;
        info!("Created store directory {}", self.dir.display());
        Ok(())
    }

    /// Stored filenames, most recently modified first.
    ///
    /// An unreadable directory lists as empty. Hidden files are skipped, which
    /// also keeps in-flight temporary files out of the listing.
    pub fn list_files(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Store directory {} not readable: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut files: Vec<(SystemTime, String)> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                if name.starts_with('.') || !name.ends_with(".json") {
                    return None;
                }
                let metadata = fs::metadata(entry.path()).ok()?;
                if !metadata.is_file() {
                    return None;
                }
                let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                Some((modified, name))
            })
            .collect();

        // Newest first; equal times fall back to name order so listings are stable.
        files.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        debug!("Listed {} stored configurations", files.len());
        files.into_iter().map(|(_, name)| name).collect()
    }

    /// Reads a stored document. `filename` must appear in the current listing.
    pub fn read_file(&self, filename: &str) -> Result<String, BadgeError> {
        let listed = self.find_listed(filename).ok_or_else(|| {
            warn!("Refusing to read unlisted file {:?}", filename);
            BadgeError::FileNotFound(filename.to_string())
        })?;

        fs::read_to_string(self.dir.join(&listed)).map_err(|e| {
            error!("Failed to read {}: {}", listed, e);
            BadgeError::ReadFailure {
                filename: listed,
                reason: e.to_string(),
            }
        })
    }

    /// Writes a first save. The name must look like `{name}_{YYYYMMDD_HHMMSS}.json`.
    pub fn create_file(&self, filename: &str, content: &str) -> Result<(), BadgeError> {
        let new_filename_re = Regex::new(NEW_FILENAME_PATTERN)
            .map_err(|e| BadgeError::InvalidTarget(format!("Regex error: {}", e)))?;
        if !new_filename_re.is_match(filename) {
            warn!("Refusing to create file with name {:?}", filename);
            return Err(BadgeError::InvalidTarget(filename.to_string()));
        }
        self.write_file(filename, content)
    }

    /// Replaces a stored document. `filename` must appear in the current listing.
    ///
    /// Returns the listed name that was written.
    pub fn overwrite_file(&self, filename: &str, content: &str) -> Result<String, BadgeError> {
        let listed = self.find_listed(filename).ok_or_else(|| {
            warn!("Refusing to overwrite unlisted file {:?}", filename);
            BadgeError::InvalidTarget(filename.to_string())
        })?;
        self.write_file(&listed, content)?;
        Ok(listed)
    }

    fn find_listed(&self, filename: &str) -> Option<String> {
        self.list_files().into_iter().find(|f| f == filename)
    }

    fn write_file(&self, filename: &str, content: &str) -> Result<(), BadgeError> {
        let write_failure = |reason: String| {
            error!("Failed to write {}: {}", filename, reason);
            BadgeError::WriteFailure {
                filename: filename.to_string(),
                dir: self.dir.display().to_string(),
                reason,
            }
        };

        let target = self.dir.join(filename);
        let existing = fs::metadata(&target)
            .ok()
            .filter(|m| m.is_file())
            .map(|m| m.permissions());

        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
        }
        let mut tmp = builder
            .tempfile_in(&self.dir)
            .map_err(|e| write_failure(e.to_string()))?;
        if let Some(permissions) = existing {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| write_failure(e.to_string()))?;
        }
        tmp.write_all(content.as_bytes())
            .map_err(|e| write_failure(e.to_string()))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| write_failure(e.to_string()))?;
        tmp.persist(&target)
            .map_err(|e| write_failure(e.error.to_string()))?;

        info!(
            "Wrote {} ({} bytes) to {}",
            filename,
            content.len(),
            self.dir.display()
        );
        Ok(())
    }
}
