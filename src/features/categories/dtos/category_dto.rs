use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::categories::models::Category;

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    /// Category name (required, non-blank)
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = validate_not_blank)
    )]
    pub name: String,

    /// Optional description
    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: Option<String>,
}

/// Request DTO for updating a category (partial)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = validate_not_blank)
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response DTO for a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            created_at: c.created_at,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("Name must not be blank".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_category_passes() {
        let dto = CreateCategoryDto {
            name: "Electronics".to_string(),
            description: Some("Electronic devices and gadgets".to_string()),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let dto = CreateCategoryDto {
            name: "".to_string(),
            description: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_blank_name_fails() {
        let dto = CreateCategoryDto {
            name: "   ".to_string(),
            description: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_with_blank_name_fails() {
        let dto = UpdateCategoryDto {
            name: Some("  ".to_string()),
            description: None,
        };
        assert!(dto.validate().is_err());
    }
}
