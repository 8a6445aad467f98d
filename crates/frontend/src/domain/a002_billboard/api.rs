use crate::shared::api_utils::{self, entity_path, ApiError};
use crate::shared::query::QueryClient;
use contracts::domain::a002_billboard::aggregate::{Billboard, BillboardDto};
use contracts::shared::api::{ListResponse, SavedEntity};
use contracts::shared::query::{ListQuery, PageState};

pub const COLLECTION: &str = "/api/billboards";
pub const MODULE: &str = "billboard";
pub const CONTEXT: &str = "billboard";

pub const SEARCH_FIELDS: &[(&str, &str)] = &[("label", "Label")];

/// Upper bound of billboards offered in pickers
const OPTIONS_LIMIT: u32 = 100;

pub async fn fetch_by_id(id: &str) -> Result<Billboard, ApiError> {
    api_utils::get_json(&entity_path(COLLECTION, id)).await
}

/// Billboards for the category form picker, served through the shared cache
pub async fn fetch_options(client: QueryClient) -> Result<Vec<Billboard>, ApiError> {
    let mut query = ListQuery::new(MODULE);
    query.page = Some(PageState {
        limit: OPTIONS_LIMIT,
        ..Default::default()
    });
    let page: ListResponse<Billboard> = client.fetch_json(COLLECTION, &query).await?;
    Ok(page.data)
}

pub async fn save(dto: &BillboardDto) -> Result<SavedEntity, ApiError> {
    match &dto.id {
        Some(id) => api_utils::patch_json(&entity_path(COLLECTION, id), dto).await,
        None => api_utils::post_json(COLLECTION, dto).await,
    }
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&entity_path(COLLECTION, id)).await
}
