//! Filesystem media store
//!
//! Uploaded files live under a configured media root and are served
//! statically under a configured URL prefix. Keys are relative paths
//! within the root, e.g. `products/{product_id}/{uuid}.jpg`.

use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::config::MediaConfig;
use crate::core::error::AppError;

/// Filesystem-backed media store
pub struct MediaStore {
    root: PathBuf,
    url_prefix: String,
    public_base_url: String,
}

impl MediaStore {
    /// Create a media store from configuration, creating the root directory if needed
    pub async fn new(config: MediaConfig) -> Result<Self, AppError> {
        fs::create_dir_all(&config.root).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to create media root '{}': {}",
                config.root.display(),
                e
            ))
        })?;

        info!("Media store initialized at {}", config.root.display());

        Ok(Self {
            root: config.root,
            url_prefix: config.url_prefix,
            public_base_url: config.public_base_url,
        })
    }

    /// Generate a unique key for a product image
    ///
    /// The extension is derived from the content type, falling back to the
    /// original filename's extension when the type is unknown.
    pub fn generate_product_image_key(
        &self,
        product_id: Uuid,
        content_type: &str,
        original_filename: &str,
    ) -> String {
        let extension = extension_from_content_type(content_type)
            .unwrap_or_else(|| original_filename.rsplit('.').next().unwrap_or("bin"));

        format!("products/{}/{}.{}", product_id, Uuid::new_v4(), extension)
    }

    /// Write file content under the given key
    pub async fn save(&self, key: &str, data: &[u8]) -> Result<(), AppError> {
        let path = self.root.join(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::Internal(format!(
                    "Failed to create media directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(&path, data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write file '{}': {}", key, e)))?;

        debug!("Stored media file '{}'", key);
        Ok(())
    }

    /// Delete the file for the given key
    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        let path = self.root.join(key);

        fs::remove_file(&path)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to delete file '{}': {}", key, e)))?;

        debug!("Deleted media file '{}'", key);
        Ok(())
    }

    /// Check whether a file exists for the given key
    pub async fn exists(&self, key: &str) -> bool {
        fs::try_exists(self.root.join(key)).await.unwrap_or(false)
    }

    /// Absolute public URL for a stored key
    pub fn file_url(&self, key: &str) -> String {
        format!("{}{}/{}", self.public_base_url, self.url_prefix, key)
    }

    /// Media root directory, for wiring the static file service
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// URL prefix the media root is served under
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }
}

/// Map common image content types to file extensions
fn extension_from_content_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MediaConfig {
        MediaConfig {
            root: std::env::temp_dir().join(format!("media-test-{}", Uuid::new_v4())),
            url_prefix: "/media".to_string(),
            public_base_url: "http://localhost:3000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_exists_delete_roundtrip() {
        let store = MediaStore::new(test_config()).await.unwrap();
        let key = store.generate_product_image_key(Uuid::new_v4(), "image/png", "photo.png");

        assert!(!store.exists(&key).await);
        store.save(&key, b"fake-png-bytes").await.unwrap();
        assert!(store.exists(&key).await);

        store.delete(&key).await.unwrap();
        assert!(!store.exists(&key).await);
    }

    #[tokio::test]
    async fn test_file_url_builds_absolute_url() {
        let store = MediaStore::new(test_config()).await.unwrap();
        let url = store.file_url("products/abc/img.jpg");
        assert_eq!(url, "http://localhost:3000/media/products/abc/img.jpg");
    }

    #[test]
    fn test_extension_from_content_type() {
        assert_eq!(extension_from_content_type("image/jpeg"), Some("jpg"));
        assert_eq!(extension_from_content_type("image/webp"), Some("webp"));
        assert_eq!(extension_from_content_type("application/pdf"), None);
    }

    #[test]
    fn test_generate_key_shape() {
        let config = test_config();
        let store = MediaStore {
            root: config.root,
            url_prefix: config.url_prefix,
            public_base_url: config.public_base_url,
        };

        let product_id = Uuid::new_v4();
        let key = store.generate_product_image_key(product_id, "image/jpeg", "photo.jpeg");
        assert!(key.starts_with(&format!("products/{}/", product_id)));
        assert!(key.ends_with(".jpg"));

        // Unknown content type falls back to the filename extension
        let key = store.generate_product_image_key(product_id, "application/octet-stream", "a.tiff");
        assert!(key.ends_with(".tiff"));
    }
}
