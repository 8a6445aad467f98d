//! Common types shared by all catalog entities

use serde::{Deserialize, Serialize};

/// Компания: область видимости данных (company scope)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
}

/// Validation helper: trimmed value must not be empty
pub fn require_non_blank(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field))
    } else {
        Ok(())
    }
}
