use super::filters::FilterState;
use super::key::QueryKey;
use super::page::PageState;
use super::period::{NormalizedPeriod, PeriodAdvisory, PeriodState};
use super::search::SearchState;

/// Fully resolved request of a list or chart view.
///
/// Built from the independent filter/period/page/search states at the moment
/// a request is needed; everything here is already normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Module identifier, e.g. `sales_invoice`
    pub module: String,
    pub company_ids: Vec<String>,
    /// `None` for endpoints without pagination (charts, option lists)
    pub page: Option<PageState>,
    pub search: SearchState,
    pub filters: FilterState,
    pub period: NormalizedPeriod,
    /// Endpoint-specific parameters (e.g. chart grouping)
    pub extra: Vec<(String, String)>,
}

/// Builder input: raw states as stored by the containers
#[derive(Debug, Clone, Default)]
pub struct QueryInputs<'a> {
    pub module: &'a str,
    pub company_ids: &'a [String],
    pub page: Option<&'a PageState>,
    pub search: Option<&'a SearchState>,
    pub filters: Option<&'a FilterState>,
    pub period: Option<&'a PeriodState>,
}

/// Trimmed, non-blank, first occurrence wins
fn unique_company_ids(ids: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids.iter().map(|c| c.trim()).filter(|c| !c.is_empty()) {
        if !unique.iter().any(|u| u == id) {
            unique.push(id.to_string());
        }
    }
    unique
}

impl ListQuery {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Default::default()
        }
    }

    /// Combine raw states into a request. Returns the period advisory when the
    /// period had to be corrected (caller shows it and writes the fix back).
    pub fn build(inputs: QueryInputs<'_>) -> (Self, Option<PeriodAdvisory>) {
        let resolution = inputs.period.map(PeriodState::normalize);
        let query = Self {
            module: inputs.module.to_string(),
            company_ids: unique_company_ids(inputs.company_ids),
            page: inputs.page.cloned(),
            search: inputs.search.cloned().unwrap_or_default(),
            filters: inputs.filters.cloned().unwrap_or_default(),
            period: resolution.map(|r| r.period).unwrap_or_default(),
            extra: Vec::new(),
        };
        (query, resolution.and_then(|r| r.advisory))
    }

    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.extra.push((name.into(), value));
        }
        self
    }

    /// Query parameters in API order. Lists become repeated parameters.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .company_ids
            .iter()
            .map(|c| ("company_id".to_string(), c.clone()))
            .collect();

        if let Some(page) = &self.page {
            pairs.extend(page.to_params().into_iter().map(|(k, v)| (k.to_string(), v)));
        }
        pairs.extend(self.search.to_params().into_iter().map(|(k, v)| (k.to_string(), v)));
        pairs.extend(self.filters.to_params().into_iter().map(|(k, v)| (k.to_string(), v)));
        pairs.extend(self.period.to_params().into_iter().map(|(k, v)| (k.to_string(), v)));
        pairs.extend(self.extra.iter().cloned());
        pairs
    }

    /// `?a=1&b=2` or an empty string when there are no parameters
    pub fn to_query_string(&self) -> String {
        let pairs = self.to_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        let encoded: Vec<String> = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("?{}", encoded.join("&"))
    }

    pub fn key(&self) -> QueryKey {
        QueryKey::from_query(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::filters::Facet;
    use crate::shared::query::page::SortSpec;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn test_repeated_params_for_lists() {
        let companies = vec!["1".to_string(), "2".to_string()];
        let mut filters = FilterState::default();
        filters.set_facet(Facet::SalesPersonName, vec!["Alice".into(), "Bob".into()]);
        let (query, advisory) = ListQuery::build(QueryInputs {
            module: "sales_invoice",
            company_ids: &companies,
            filters: Some(&filters),
            ..Default::default()
        });
        assert!(advisory.is_none());
        assert_eq!(
            query.to_query_string(),
            "?company_id=1&company_id=2&salesPersonName=Alice&salesPersonName=Bob"
        );
    }

    #[test]
    fn test_duplicate_company_ids_are_sent_once() {
        let companies = vec!["2".to_string(), " 1 ".to_string(), "2".to_string(), "".to_string()];
        let (query, _) = ListQuery::build(QueryInputs {
            module: "sales_invoice",
            company_ids: &companies,
            ..Default::default()
        });
        assert_eq!(query.to_query_string(), "?company_id=2&company_id=1");

        let single = vec!["2".to_string(), "1".to_string()];
        let (other, _) = ListQuery::build(QueryInputs {
            module: "sales_invoice",
            company_ids: &single,
            ..Default::default()
        });
        assert_eq!(query.key(), other.key());
        assert_eq!(query.to_pairs(), other.to_pairs());
    }

    #[test]
    fn test_start_period_only_builds_both_bounds() {
        let period = PeriodState::new(Some(d(2025, 1)), None);
        let (query, _) = ListQuery::build(QueryInputs {
            module: "sales_invoice",
            period: Some(&period),
            ..Default::default()
        });
        assert_eq!(query.to_query_string(), "?startPeriod=Jan2025&endPeriod=Jan2025");
    }

    #[test]
    fn test_invalid_period_omits_end_and_reports() {
        let period = PeriodState::new(Some(d(2025, 5)), Some(d(2025, 2)));
        let (query, advisory) = ListQuery::build(QueryInputs {
            module: "sales_invoice",
            period: Some(&period),
            ..Default::default()
        });
        assert_eq!(advisory, Some(PeriodAdvisory::EndBeforeStart));
        assert_eq!(query.to_query_string(), "?startPeriod=May2025");
    }

    #[test]
    fn test_empty_filters_are_omitted() {
        let filters = FilterState {
            paid_status: vec![],
            po_type: vec![String::new()],
            sales_person_name: vec![],
        };
        let page = PageState::default();
        let (query, _) = ListQuery::build(QueryInputs {
            module: "sales_invoice",
            page: Some(&page),
            filters: Some(&filters),
            ..Default::default()
        });
        let pairs = query.to_pairs();
        assert!(!pairs.iter().any(|(k, _)| k == "paidStatus" || k == "poType"));
        assert_eq!(query.to_query_string(), "?page=1&limit=10");
    }

    #[test]
    fn test_values_are_url_encoded() {
        let search = SearchState::new("customerName", "Smith & Sons");
        let page = PageState {
            sorting: vec![SortSpec::desc("amount")],
            ..Default::default()
        };
        let (query, _) = ListQuery::build(QueryInputs {
            module: "sales_invoice",
            page: Some(&page),
            search: Some(&search),
            ..Default::default()
        });
        assert_eq!(
            query.to_query_string(),
            "?page=1&limit=10&orderBy=amount&orderDir=desc&searchBy=customerName&searchTerm=Smith%20%26%20Sons"
        );
    }

    #[test]
    fn test_extra_params_skip_blank_values() {
        let query = ListQuery::new("monthly_sales")
            .with_extra("groupBy", "year")
            .with_extra("salesType", " ");
        assert_eq!(query.to_query_string(), "?groupBy=year");
    }
}
