//! Static operator console registry.
//!
//! One entry per managed entity: the columns shown in list views, the
//! filterable columns, and the columns covered by free-text search.

/// Console configuration for one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminResource {
    pub entity: &'static str,
    pub list_display: &'static [&'static str],
    pub list_filter: &'static [&'static str],
    pub search_fields: &'static [&'static str],
}

/// All entities exposed on the operator console
pub const ADMIN_RESOURCES: &[AdminResource] = &[
    AdminResource {
        entity: "categories",
        list_display: &["name", "description", "created_at"],
        list_filter: &[],
        search_fields: &["name"],
    },
    AdminResource {
        entity: "products",
        list_display: &["name", "category", "price", "stock", "is_active", "created_at"],
        list_filter: &["category", "is_active"],
        search_fields: &["name", "description"],
    },
    AdminResource {
        entity: "product-images",
        list_display: &["product", "created_at"],
        list_filter: &["product"],
        search_fields: &[],
    },
    AdminResource {
        entity: "users",
        list_display: &["username", "email", "is_staff", "created_at"],
        list_filter: &["is_staff"],
        search_fields: &["username", "email"],
    },
];

/// Look up a resource entry by entity name
pub fn find(entity: &str) -> Option<&'static AdminResource> {
    ADMIN_RESOURCES.iter().find(|r| r.entity == entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_all_entities() {
        let entities: Vec<&str> = ADMIN_RESOURCES.iter().map(|r| r.entity).collect();
        assert_eq!(
            entities,
            vec!["categories", "products", "product-images", "users"]
        );
    }

    #[test]
    fn test_products_entry_matches_console_queries() {
        let products = find("products").unwrap();
        assert_eq!(products.search_fields, &["name", "description"]);
        assert_eq!(products.list_filter, &["category", "is_active"]);
    }

    #[test]
    fn test_unknown_entity_is_none() {
        assert!(find("orders").is_none());
    }
}
