//! Image upload collaborator - Talks to the external object store.
//!
//! Product images and the company logo are pushed to an HTTP object store and
//! referenced by public URL afterwards. Calls are synchronous fire-and-observe:
//! the caller awaits the outcome and reports it; nothing is retried.

use crate::errors::{Error, Result};
use std::io::Read;
use std::path::Path;
use uuid::Uuid;

/// Product images above this size are rejected before any network call.
pub const MAX_PRODUCT_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const BUCKET_SEGMENT: &str = "product-images";

/// Client for the image object store.
pub struct ImageUploader {
    endpoint: String,
}

impl ImageUploader {
    /// Creates a client for the object store at `endpoint`
    /// (e.g. `https://storage.example.com`).
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { endpoint }
    }

    /// Uploads a product image and returns its public URL.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The content type is not `image/*`
    /// - The payload exceeds [`MAX_PRODUCT_IMAGE_BYTES`]
    /// - The object store rejects the upload or is unreachable
    pub fn upload_product_image(
        &self,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String> {
        if bytes.len() > MAX_PRODUCT_IMAGE_BYTES {
            return Err(Error::Upload {
                message: format!(
                    "Image is too large ({} bytes, limit {MAX_PRODUCT_IMAGE_BYTES})",
                    bytes.len()
                ),
            });
        }
        self.upload(filename, content_type, bytes)
    }

    /// Uploads a company logo and returns its public URL. Logos are not size
    /// capped.
    ///
    /// # Errors
    /// Returns an error if the content type is not `image/*` or the upload
    /// fails.
    pub fn upload_logo(&self, filename: &str, content_type: &str, bytes: &[u8]) -> Result<String> {
        self.upload(filename, content_type, bytes)
    }

    fn upload(&self, filename: &str, content_type: &str, bytes: &[u8]) -> Result<String> {
        if !content_type.starts_with("image/") {
            return Err(Error::Upload {
                message: format!("Not an image content type: {content_type}"),
            });
        }

        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");
        let url = format!("{}/{BUCKET_SEGMENT}/products/{}.{ext}", self.endpoint, Uuid::new_v4());

        ureq::put(&url)
            .set("Content-Type", content_type)
            .send_bytes(bytes)
            .map_err(|e| Error::Upload { message: e.to_string() })?;

        tracing::info!(%url, size = bytes.len(), "image uploaded");
        Ok(url)
    }

    /// Removes a previously uploaded image, keyed by its public URL.
    /// Best-effort: returns `false` on any failure, never an error.
    #[must_use]
    pub fn delete_product_image(&self, image_url: &str) -> bool {
        let Some((_, object_path)) = image_url.split_once(&format!("/{BUCKET_SEGMENT}/")) else {
            return false;
        };

        match ureq::delete(&format!("{}/{BUCKET_SEGMENT}/{object_path}", self.endpoint)).call() {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(image_url, error = %e, "image delete failed");
                false
            }
        }
    }
}

/// Fetches an image over HTTP for embedding, e.g. the company logo during PDF
/// export. Any failure is logged and reported as `None`; rendering proceeds
/// without the image.
#[must_use]
pub fn fetch_image(url: &str) -> Option<Vec<u8>> {
    let response = match ureq::get(url).call() {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(url, error = %e, "image fetch failed");
            return None;
        }
    };

    let mut bytes = Vec::new();
    match response.into_reader().read_to_end(&mut bytes) {
        Ok(_) => Some(bytes),
        Err(e) => {
            tracing::warn!(url, error = %e, "image fetch failed while reading body");
            None
        }
    }
}
