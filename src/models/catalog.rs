use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use validator::Validate;

use super::catalog_item::{CatalogItem, ItemId};

const IMAGE_BASE: &str = "https://cdn.poehali.dev/projects/5c9af21e-1e33-495f-a71b-054b082d8593/files";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog item {id}: {message}")]
    InvalidItem { id: ItemId, message: String },

    #[error("Duplicate catalog item id: {0}")]
    DuplicateId(ItemId),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, read-only list of purchasable goods for one session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());

        for item in &items {
            item.validate().map_err(|e| CatalogError::InvalidItem {
                id: item.id,
                message: e.to_string(),
            })?;

            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        Ok(Self { items })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            "Loaded {} catalog items from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// The built-in berry shop assortment.
    ///
    /// Blackberries share the blueberry photo, the shop has no picture of its own for them.
    pub fn storefront() -> Self {
        let items = vec![
            CatalogItem::new(
                1,
                "Fresh blueberries",
                890,
                "500g",
                format!("{IMAGE_BASE}/207cfe2d-9195-4a16-94d1-6e8db3821fc5.jpg"),
                "Fresh fragrant blueberries of the highest quality",
                "Premium",
            ),
            CatalogItem::new(
                2,
                "Garden raspberries",
                690,
                "500g",
                format!("{IMAGE_BASE}/c6fc518f-73c9-46d6-b858-37415f17b128.jpg"),
                "Juicy raspberries from our own plantations",
                "Bestseller",
            ),
            CatalogItem::new(
                3,
                "Select strawberries",
                590,
                "500g",
                format!("{IMAGE_BASE}/a4ecef21-cd77-485e-846c-3316ae7a004c.jpg"),
                "Large sweet premium strawberries",
                "New",
            ),
            CatalogItem::new(
                4,
                "Wild blackberries",
                790,
                "500g",
                format!("{IMAGE_BASE}/207cfe2d-9195-4a16-94d1-6e8db3821fc5.jpg"),
                "Fragrant blackberries with a rich taste",
                "Premium",
            ),
        ];

        Self { items }
    }

    pub fn list_items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn find(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_is_valid() {
        let storefront = Catalog::storefront();
        let rebuilt = Catalog::new(storefront.list_items().to_vec());

        assert!(rebuilt.is_ok());
        assert_eq!(storefront.len(), 4);
    }

    #[test]
    fn test_list_items_is_stable() {
        let catalog = Catalog::storefront();
        let first: Vec<ItemId> = catalog.list_items().iter().map(|i| i.id).collect();
        let second: Vec<ItemId> = catalog.list_items().iter().map(|i| i.id).collect();

        assert_eq!(first, vec![1, 2, 3, 4]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut items = Catalog::storefront().list_items().to_vec();
        items[1].id = 1;

        let result = Catalog::new(items);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_invalid_item_is_rejected() {
        let mut items = Catalog::storefront().list_items().to_vec();
        items[2].unit_price = 0;

        let result = Catalog::new(items);
        assert!(matches!(result, Err(CatalogError::InvalidItem { id: 3, .. })));
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::storefront();

        assert_eq!(catalog.find(2).map(|i| i.unit_price), Some(690));
        assert!(catalog.find(42).is_none());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {
                "id": 7,
                "name": "Cloudberries",
                "unit_price": 1290,
                "unit_label": "250g",
                "image_ref": "https://cdn.example.com/cloudberry.jpg",
                "category": "Rare"
            }
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        let item = catalog.find(7).unwrap();
        assert_eq!(item.name, "Cloudberries");
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        let result = Catalog::from_json_str("{ not json");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
