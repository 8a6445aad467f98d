use crate::shared::api_utils::{self, entity_path, ApiError};
use crate::shared::query::QueryClient;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a003_product::aggregate::{Product, ProductDto};
use contracts::shared::api::{ListResponse, SavedEntity};
use contracts::shared::query::{ListQuery, PageState};

pub const COLLECTION: &str = "/api/products";
pub const MODULE: &str = "product";
pub const CONTEXT: &str = "product";

pub const SEARCH_FIELDS: &[(&str, &str)] = &[("name", "Name"), ("categoryName", "Category")];

const OPTIONS_LIMIT: u32 = 100;

pub async fn fetch_by_id(id: &str) -> Result<Product, ApiError> {
    api_utils::get_json(&entity_path(COLLECTION, id)).await
}

/// Categories for the product form picker
pub async fn fetch_category_options(client: QueryClient) -> Result<Vec<Category>, ApiError> {
    use crate::domain::a001_category::api as category_api;

    let mut query = ListQuery::new(category_api::MODULE);
    query.page = Some(PageState {
        limit: OPTIONS_LIMIT,
        ..Default::default()
    });
    let page: ListResponse<Category> = client.fetch_json(category_api::COLLECTION, &query).await?;
    Ok(page.data)
}

pub async fn save(dto: &ProductDto) -> Result<SavedEntity, ApiError> {
    match &dto.id {
        Some(id) => api_utils::patch_json(&entity_path(COLLECTION, id), dto).await,
        None => api_utils::post_json(COLLECTION, dto).await,
    }
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&entity_path(COLLECTION, id)).await
}
