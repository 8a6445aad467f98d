use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub id: String,
    pub desc: bool,
}

impl SortSpec {
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: false,
        }
    }

    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: true,
        }
    }

    pub fn direction(&self) -> &'static str {
        if self.desc {
            "desc"
        } else {
            "asc"
        }
    }
}

/// Pagination and sorting of a list view.
/// `current_page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageState {
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    pub limit: u32,
    #[serde(default)]
    pub sorting: Vec<SortSpec>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            limit: DEFAULT_PAGE_SIZE,
            sorting: Vec::new(),
        }
    }
}

/// Partial update, merged field by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePatch {
    pub current_page: Option<u32>,
    pub limit: Option<u32>,
    pub sorting: Option<Vec<SortSpec>>,
}

impl PagePatch {
    pub fn page(page: u32) -> Self {
        Self {
            current_page: Some(page),
            ..Default::default()
        }
    }

    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }
}

impl PageState {
    pub fn apply(&mut self, patch: PagePatch) {
        if let Some(page) = patch.current_page {
            self.current_page = page.max(1);
        }
        if let Some(limit) = patch.limit {
            self.limit = limit.max(1);
        }
        if let Some(sorting) = patch.sorting {
            self.sorting = sorting;
        }
    }

    /// Primary sort column (the API only accepts one)
    pub fn primary_sort(&self) -> Option<&SortSpec> {
        self.sorting.first()
    }

    /// Click on a column header: flip direction of the current column,
    /// otherwise sort ascending by the new one
    pub fn toggle_sort(&mut self, column: &str) {
        match self.sorting.first_mut() {
            Some(spec) if spec.id == column => spec.desc = !spec.desc,
            _ => self.sorting = vec![SortSpec::asc(column)],
        }
    }

    pub fn total_pages(&self, total_records: u64) -> u32 {
        let limit = u64::from(self.limit.max(1));
        let pages = total_records.div_ceil(limit).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.current_page.max(1).to_string()),
            ("limit", self.limit.max(1).to_string()),
        ];
        if let Some(sort) = self.primary_sort() {
            if !sort.id.trim().is_empty() {
                params.push(("orderBy", sort.id.clone()));
                params.push(("orderDir", sort.direction().to_string()));
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_page_then_read() {
        let mut page = PageState::default();
        page.apply(PagePatch::page(3));
        assert_eq!(page.current_page, 3);
        assert_eq!(page.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_patch_is_shallow_merge() {
        let mut page = PageState {
            current_page: 4,
            limit: 25,
            sorting: vec![SortSpec::desc("amount")],
        };
        page.apply(PagePatch::limit(50));
        assert_eq!(page.current_page, 4);
        assert_eq!(page.limit, 50);
        assert_eq!(page.sorting, vec![SortSpec::desc("amount")]);
    }

    #[test]
    fn test_page_and_limit_are_clamped() {
        let mut page = PageState::default();
        page.apply(PagePatch {
            current_page: Some(0),
            limit: Some(0),
            sorting: None,
        });
        assert_eq!(page.current_page, 1);
        assert_eq!(page.limit, 1);
    }

    #[test]
    fn test_toggle_sort() {
        let mut page = PageState::default();
        page.toggle_sort("invoiceDate");
        assert_eq!(page.sorting, vec![SortSpec::asc("invoiceDate")]);
        page.toggle_sort("invoiceDate");
        assert_eq!(page.sorting, vec![SortSpec::desc("invoiceDate")]);
        page.toggle_sort("amount");
        assert_eq!(page.sorting, vec![SortSpec::asc("amount")]);
    }

    #[test]
    fn test_total_pages() {
        let page = PageState::default();
        assert_eq!(page.total_pages(0), 1);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(11), 2);
    }

    #[test]
    fn test_params_include_sort_only_when_set() {
        let mut page = PageState::default();
        assert_eq!(
            page.to_params(),
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
        page.sorting = vec![SortSpec::desc("amount")];
        let params = page.to_params();
        assert!(params.contains(&("orderBy", "amount".to_string())));
        assert!(params.contains(&("orderDir", "desc".to_string())));
    }
}
