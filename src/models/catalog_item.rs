use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub type ItemId = u32;

lazy_static::lazy_static! {
    static ref UNIT_LABEL_REGEX: Regex = Regex::new(r"^\d+([.,]\d+)?\s?\p{L}+$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CatalogItem {
    #[validate(range(min = 1, message = "Item id must be positive"))]
    pub id: u32,

    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    #[validate(custom = "validate_not_blank")]
    pub name: String,

    /// Price of one unit in the smallest currency unit.
    #[validate(range(min = 1, message = "Unit price must be positive"))]
    pub unit_price: u32,

    #[validate(regex(
        path = "UNIT_LABEL_REGEX",
        message = "Unit label must look like '500g' or '1 kg'"
    ))]
    pub unit_label: String,

    #[validate(url(message = "Image reference must be a URL"))]
    pub image_ref: String,

    #[validate(length(max = 1000, message = "Description must be less than 1000 characters"))]
    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, max = 60, message = "Category must be 1-60 characters"))]
    pub category: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl CatalogItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        unit_price: u32,
        unit_label: impl Into<String>,
        image_ref: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            unit_label: unit_label.into(),
            image_ref: image_ref.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blueberries() -> CatalogItem {
        CatalogItem::new(
            1,
            "Fresh blueberries",
            890,
            "500g",
            "https://cdn.example.com/blueberry.jpg",
            "Top grade blueberries",
            "Premium",
        )
    }

    #[test]
    fn test_valid_item_passes_validation() {
        assert!(blueberries().validate().is_ok());
    }

    #[test]
    fn test_zero_price_is_rejected() {
        let mut item = blueberries();
        item.unit_price = 0;

        let errors = item.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("unit_price"));
    }

    #[test]
    fn test_zero_id_is_rejected() {
        let mut item = blueberries();
        item.id = 0;

        let errors = item.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("id"));
    }

    #[test]
    fn test_unit_label_formats() {
        for label in ["500g", "1 kg", "500г", "0,5l"] {
            let mut item = blueberries();
            item.unit_label = label.to_string();
            assert!(item.validate().is_ok(), "label {label} should be accepted");
        }

        let mut item = blueberries();
        item.unit_label = "a lot".to_string();
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut item = blueberries();
        item.name = "   ".to_string();
        assert!(item.validate().is_err());
    }
}
