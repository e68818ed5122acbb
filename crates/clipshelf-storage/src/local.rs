use crate::error::{StorageError, StorageResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Flat local filesystem store rooted at a single configured directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Resolve the configured root to an absolute, normalized directory,
    /// creating it (and parents) if absent. A root that cannot be created is
    /// fatal at startup.
    pub async fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()
                .map_err(|e| StorageError::Config(format!("Cannot resolve working directory: {}", e)))?
                .join(root)
        };

        fs::create_dir_all(&root).await.map_err(|e| {
            StorageError::Config(format!(
                "Failed to create storage directory {}: {}",
                root.display(),
                e
            ))
        })?;

        // canonicalize strips `.`/`..` segments and resolves symlinks
        let root = fs::canonicalize(&root).await.map_err(|e| {
            StorageError::Config(format!(
                "Failed to normalize storage directory {}: {}",
                root.display(),
                e
            ))
        })?;

        Ok(LocalStorage { root })
    }

    /// The resolved storage root. Used by callers to compose the stored
    /// `file_path` string.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write uploaded bytes under a generated unique filename and return it.
    ///
    /// The extension is carried over from the original name when it has one
    /// (everything from the last `.` onward); the rest of the name is
    /// discarded in favor of `{owner}_{uuid}`.
    pub async fn store(
        &self,
        data: &[u8],
        original_name: Option<&str>,
        owner: &str,
    ) -> StorageResult<String> {
        if data.is_empty() {
            return Err(StorageError::EmptyFile);
        }

        let extension = original_name
            .and_then(|name| name.rfind('.').map(|idx| &name[idx..]))
            .unwrap_or("");
        let filename = format!("{}_{}{}", owner, Uuid::new_v4(), extension);
        let path = self.root.join(&filename);

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;
        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            size_bytes = data.len(),
            "Stored uploaded file"
        );

        Ok(filename)
    }

    /// Resolve a stored filename to its path under the root. Does not verify
    /// existence. Filenames are server-generated; names carrying separators
    /// or parent-directory segments are rejected outright.
    pub fn resolve(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }
        Ok(self.root.join(filename))
    }

    /// Check whether a stored file is present on disk.
    pub async fn exists(&self, filename: &str) -> StorageResult<bool> {
        let path = self.resolve(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    /// Remove a stored file. Missing files are a no-op; any other I/O
    /// failure surfaces as `DeleteFailed`.
    pub async fn delete(&self, filename: &str) -> StorageResult<()> {
        let path = self.resolve(filename)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Deleted stored file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::DeleteFailed(format!(
                "Failed to delete file {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_store_and_read_back() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        let filename = storage
            .store(b"test data", Some("clip.mp4"), "alice")
            .await
            .unwrap();

        assert!(filename.starts_with("alice_"));
        assert!(filename.ends_with(".mp4"));

        let path = storage.resolve(&filename).unwrap();
        let bytes = fs::read(&path).await.unwrap();
        assert_eq!(bytes, b"test data");
    }

    #[tokio::test]
    async fn test_store_empty_rejected() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        let result = storage.store(b"", Some("clip.mp4"), "alice").await;
        assert!(matches!(result, Err(StorageError::EmptyFile)));
    }

    #[tokio::test]
    async fn test_extension_handling() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        // Extension is everything from the last dot
        let name = storage
            .store(b"x", Some("holiday.video.mkv"), "bob")
            .await
            .unwrap();
        assert!(name.ends_with(".mkv"));

        // No dot means no extension
        let name = storage.store(b"x", Some("rawclip"), "bob").await.unwrap();
        assert!(!name.contains('.'));

        // Absent original name means no extension
        let name = storage.store(b"x", None, "bob").await.unwrap();
        assert!(!name.contains('.'));
    }

    #[tokio::test]
    async fn test_generated_filenames_are_distinct() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        let mut seen = HashSet::new();
        for _ in 0..50 {
            let name = storage.store(b"x", Some("a.mp4"), "alice").await.unwrap();
            assert!(seen.insert(name), "duplicate generated filename");
        }
    }

    #[tokio::test]
    async fn test_resolve_rejects_traversal() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        assert!(matches!(
            storage.resolve("../../etc/passwd"),
            Err(StorageError::InvalidFilename(_))
        ));
        assert!(matches!(
            storage.resolve("nested/file.mp4"),
            Err(StorageError::InvalidFilename(_))
        ));
        assert!(matches!(
            storage.resolve(""),
            Err(StorageError::InvalidFilename(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        assert!(storage.delete("alice_nonexistent.mp4").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        let filename = storage.store(b"bytes", Some("a.mp4"), "alice").await.unwrap();
        assert!(storage.exists(&filename).await.unwrap());

        storage.delete(&filename).await.unwrap();
        assert!(!storage.exists(&filename).await.unwrap());
    }

    #[tokio::test]
    async fn test_root_is_normalized() {
        let dir = tempdir().unwrap();

        // Dot segments resolve away; the stored root is absolute and clean
        let storage = LocalStorage::new(dir.path().join("nested/../store"))
            .await
            .unwrap();
        assert!(storage.root().is_absolute());
        assert!(!storage
            .root()
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir)));
        assert!(storage.root().ends_with("store"));
    }
}
