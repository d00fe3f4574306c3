//! Storage of uploaded media files.
//!
//! Uploads land under the media directory, grouped by a per-feature
//! subdirectory ("listings/42", "vendors/7"). Stored filenames are prefixed
//! with a random short uid so that repeated uploads of the same file never
//! collide.

use std::path::Path;

use crate::server::{error::AppError, util::uid::short_uid};

pub struct FileService<'a> {
    media_dir: &'a Path,
}

impl<'a> FileService<'a> {
    pub fn new(media_dir: &'a Path) -> Self {
        Self { media_dir }
    }

    /// Writes an uploaded file to disk.
    ///
    /// # Arguments
    /// - `subdir` - Directory under the media root to store the file in
    /// - `original_name` - Client-supplied filename, sanitized before use
    /// - `bytes` - The file contents
    ///
    /// # Returns
    /// - `Ok((path, name))` - The stored location as the `(path, name)` pair
    ///   persisted alongside the owning row
    /// - `Err(AppError::IoErr)` - Directory creation or write failed
    pub async fn save(
        &self,
        subdir: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<(String, String), AppError> {
        let name = format!("{}_{}", short_uid(), sanitize_filename(original_name));

        let dir = self.media_dir.join(subdir);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&name), bytes).await?;

        Ok((subdir.to_string(), name))
    }
}

/// Strips path separators and shell-unfriendly characters from a
/// client-supplied filename.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => c,
            _ => '_',
        })
        .collect();

    if cleaned.trim_matches('_').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::sanitize_filename;

    #[test]
    fn strips_path_separators() {
        // Dots are legal in filenames; only the separators are replaced.
        assert_eq!(sanitize_filename("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_filename("front view.jpg"), "front_view.jpg");
    }

    #[test]
    fn empty_names_fall_back() {
        assert_eq!(sanitize_filename("///"), "upload");
    }
}
