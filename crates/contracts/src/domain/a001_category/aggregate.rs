use crate::domain::common::require_non_blank;
use serde::{Deserialize, Serialize};

/// Категория товаров; каждая категория привязана к билборду витрины
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "billboardId")]
    pub billboard_id: String,
    /// Billboard label joined by the server for display
    #[serde(rename = "billboardLabel", default)]
    pub billboard_label: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Form payload for create/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "billboardId")]
    pub billboard_id: String,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        require_non_blank(&self.name, "Name")?;
        require_non_blank(&self.billboard_id, "Billboard")?;
        Ok(())
    }
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: Some(c.id),
            name: c.name,
            billboard_id: c.billboard_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_name_and_billboard() {
        let mut dto = CategoryDto::default();
        assert_eq!(dto.validate(), Err("Name is required".to_string()));
        dto.name = "Shoes".into();
        assert_eq!(dto.validate(), Err("Billboard is required".to_string()));
        dto.billboard_id = "b1".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_new_dto_omits_id() {
        let dto = CategoryDto {
            id: None,
            name: "Shoes".into(),
            billboard_id: "b1".into(),
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"name":"Shoes","billboardId":"b1"}"#);
    }
}
