use crate::domain::common::require_non_blank;
use serde::{Deserialize, Serialize};

/// Билборд: баннер витрины с подписью и изображением
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Billboard {
    pub id: String,
    pub label: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillboardDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl BillboardDto {
    pub fn validate(&self) -> Result<(), String> {
        require_non_blank(&self.label, "Label")?;
        let url = self.image_url.trim();
        if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err("Image URL must start with http:// or https://".to_string());
        }
        Ok(())
    }
}

impl From<Billboard> for BillboardDto {
    fn from(b: Billboard) -> Self {
        Self {
            id: Some(b.id),
            label: b.label,
            image_url: b.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_image_url() {
        let mut dto = BillboardDto {
            id: None,
            label: "Summer sale".into(),
            image_url: "ftp://cdn/x.png".into(),
        };
        assert!(dto.validate().is_err());
        dto.image_url = "https://cdn.example.com/x.png".into();
        assert!(dto.validate().is_ok());
        dto.image_url = String::new();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_label_required() {
        assert_eq!(
            BillboardDto::default().validate(),
            Err("Label is required".to_string())
        );
    }
}
