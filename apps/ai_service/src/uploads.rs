use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Creates the upload folder (and parents) if it does not exist yet.
pub async fn prepare_upload_folder(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .with_context(|| format!("Failed to create upload folder '{}'", path.display()))?;

    info!("Upload folder ready at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_nested_folder() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("data").join("uploads");

        prepare_upload_folder(&target).await.unwrap();

        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_existing_folder_is_fine() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("uploads");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("resume.pdf"), b"%PDF").unwrap();

        prepare_upload_folder(&target).await.unwrap();
        prepare_upload_folder(&target).await.unwrap();

        assert!(target.join("resume.pdf").exists());
    }

    #[tokio::test]
    async fn test_path_occupied_by_file_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("uploads");
        std::fs::write(&target, b"not a directory").unwrap();

        let err = prepare_upload_folder(&target).await.unwrap_err();

        assert!(err.to_string().contains("Failed to create upload folder"));
    }
}
