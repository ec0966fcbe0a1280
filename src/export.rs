//! File saving for exported signatures.

use crate::config::ExportConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while saving an exported signature.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to save signature: {0}")]
    Save(#[from] std::io::Error),
}

/// Resolved save destination for an export.
#[derive(Debug, Clone)]
pub struct SaveTarget {
    /// Directory to save the signature to.
    pub directory: PathBuf,
    /// File name including extension.
    pub filename: String,
}

impl SaveTarget {
    /// Builds a target from the export config, expanding a leading tilde.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            directory: expand_tilde(&config.save_directory),
            filename: config.filename.clone(),
        }
    }
}

impl Default for SaveTarget {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save PNG-encoded signature data to the target file.
///
/// Overwrites an existing file of the same name; the export always reflects
/// the current surface contents.
///
/// # Returns
/// Path to the saved file.
pub fn save_signature(image_data: &[u8], target: &SaveTarget) -> Result<PathBuf, ExportError> {
    // Ensure directory exists
    let directory = ensure_directory_exists(&target.directory)?;

    let file_path = directory.join(&target.filename);

    log::info!(
        "Saving signature to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    // Write file
    fs::write(&file_path, image_data)?;

    // Verify the write
    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    // Set permissions to user read/write only (security)
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    log::info!("Signature saved successfully: {}", file_path.display());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_default_target() {
        let target = SaveTarget::default();
        assert_eq!(target.filename, "signature.png");
        assert!(target.directory.to_string_lossy().contains("sigpad"));
    }

    #[test]
    fn save_creates_directory_and_writes_bytes() {
        let tmp = TempDir::new().unwrap();
        let target = SaveTarget {
            directory: tmp.path().join("exports"),
            filename: "signature.png".to_string(),
        };

        let saved = save_signature(&[1, 2, 3, 4], &target).unwrap();
        assert!(saved.ends_with("signature.png"));
        assert_eq!(fs::read(&saved).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn save_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let target = SaveTarget {
            directory: tmp.path().to_path_buf(),
            filename: "signature.png".to_string(),
        };

        save_signature(&[1], &target).unwrap();
        let saved = save_signature(&[2, 3], &target).unwrap();
        assert_eq!(fs::read(&saved).unwrap(), vec![2, 3]);
    }
}
