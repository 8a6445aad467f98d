use crate::shared::api_utils::{self, entity_path, ApiError};
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::shared::api::SavedEntity;

pub const COLLECTION: &str = "/api/categories";
/// Module id in query keys; mutations invalidate it
pub const MODULE: &str = "category";
pub const CONTEXT: &str = "category";

pub const SEARCH_FIELDS: &[(&str, &str)] = &[("name", "Name"), ("billboardLabel", "Billboard")];

pub async fn fetch_by_id(id: &str) -> Result<Category, ApiError> {
    api_utils::get_json(&entity_path(COLLECTION, id)).await
}

/// POST for a new record, PATCH for an existing one
pub async fn save(dto: &CategoryDto) -> Result<SavedEntity, ApiError> {
    match &dto.id {
        Some(id) => api_utils::patch_json(&entity_path(COLLECTION, id), dto).await,
        None => api_utils::post_json(COLLECTION, dto).await,
    }
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&entity_path(COLLECTION, id)).await
}
