use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a product gallery image
///
/// Rows exist only while their product exists (ON DELETE CASCADE).
#[derive(Debug, Clone, FromRow)]
pub struct ProductImage {
    pub id: Uuid,
    pub product_id: Uuid,
    /// Relative media path
    pub image: String,
    pub created_at: DateTime<Utc>,
}
