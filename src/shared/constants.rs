/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Maximum upload size for product images (5 MB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// MIME types accepted for product image uploads
pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Check whether a content type is an accepted image type
pub fn is_image_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_IMAGE_MIME_TYPES
        .iter()
        .any(|allowed| content_type.eq_ignore_ascii_case(allowed))
}
