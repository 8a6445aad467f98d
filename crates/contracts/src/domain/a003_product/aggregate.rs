use crate::domain::common::require_non_blank;
use serde::{Deserialize, Serialize};

/// Товар каталога вместе с остатком на складе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(rename = "categoryName", default)]
    pub category_name: Option<String>,
    /// Stock on hand
    #[serde(default)]
    pub quantity: i64,
    #[serde(rename = "isFeatured", default)]
    pub is_featured: bool,
    #[serde(rename = "isArchived", default)]
    pub is_archived: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    pub quantity: i64,
    #[serde(rename = "isFeatured")]
    pub is_featured: bool,
    #[serde(rename = "isArchived")]
    pub is_archived: bool,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        require_non_blank(&self.name, "Name")?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a non-negative number".to_string());
        }
        require_non_blank(&self.category_id, "Category")?;
        if self.quantity < 0 {
            return Err("Quantity cannot be negative".to_string());
        }
        Ok(())
    }
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: Some(p.id),
            name: p.name,
            price: p.price,
            category_id: p.category_id,
            quantity: p.quantity,
            is_featured: p.is_featured,
            is_archived: p.is_archived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProductDto {
        ProductDto {
            id: None,
            name: "Sneakers".into(),
            price: 59.9,
            category_id: "c1".into(),
            quantity: 3,
            is_featured: false,
            is_archived: false,
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut dto = valid();
        dto.price = -1.0;
        assert!(dto.validate().is_err());
        dto.price = f64::NAN;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_category_required() {
        let mut dto = valid();
        dto.category_id = " ".into();
        assert_eq!(dto.validate(), Err("Category is required".to_string()));
    }

    #[test]
    fn test_product_deserializes_with_defaults() {
        let json = r#"{"id":"p1","name":"Cap","price":12.5,"categoryId":"c1"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.quantity, 0);
        assert!(!p.is_archived);
        assert_eq!(p.category_name, None);
    }
}
