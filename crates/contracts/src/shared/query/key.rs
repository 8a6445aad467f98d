use super::filters::Facet;
use super::page::SortSpec;
use super::params::ListQuery;
use chrono::NaiveDate;

/// Comparable identity of a request.
///
/// Equal for requests that would produce the same API call, different as soon
/// as any constituent differs. List-valued parts are canonicalized (sorted)
/// because selection order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    pub module: String,
    pub company_ids: Vec<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search_by: String,
    pub search_term: String,
    pub sorting: Vec<(String, bool)>,
    pub filters: Vec<(Facet, Vec<String>)>,
    pub start_period: Option<NaiveDate>,
    pub end_period: Option<NaiveDate>,
    pub extra: Vec<(String, String)>,
}

impl QueryKey {
    pub fn from_query(query: &ListQuery) -> Self {
        let mut company_ids = query.company_ids.clone();
        company_ids.sort();
        company_ids.dedup();

        let (search_by, search_term) = if query.search.is_active() {
            (
                query.search.search_by.trim().to_string(),
                query.search.search_term.trim().to_string(),
            )
        } else {
            (String::new(), String::new())
        };

        Self {
            module: query.module.clone(),
            company_ids,
            page: query.page.as_ref().map(|p| p.current_page.max(1)),
            limit: query.page.as_ref().map(|p| p.limit.max(1)),
            search_by,
            search_term,
            sorting: query
                .page
                .as_ref()
                .map(|p| {
                    p.sorting
                        .iter()
                        .map(|SortSpec { id, desc }| (id.clone(), *desc))
                        .collect()
                })
                .unwrap_or_default(),
            filters: query.filters.canonical(),
            start_period: query.period.start,
            end_period: query.period.end,
            extra: query.extra.clone(),
        }
    }

    /// Short string for logs
    pub fn describe(&self) -> String {
        format!(
            "{}[p={:?} l={:?} q='{}' f={} period={:?}..{:?}]",
            self.module,
            self.page,
            self.limit,
            self.search_term,
            self.filters.len(),
            self.start_period,
            self.end_period
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::filters::FilterState;
    use crate::shared::query::page::{PagePatch, PageState};
    use crate::shared::query::params::QueryInputs;
    use crate::shared::query::period::PeriodState;
    use crate::shared::query::search::SearchState;
    use std::collections::HashSet;

    struct Inputs {
        companies: Vec<String>,
        page: PageState,
        search: SearchState,
        filters: FilterState,
        period: PeriodState,
    }

    impl Inputs {
        fn base() -> Self {
            Self {
                companies: vec!["10".into()],
                page: PageState::default(),
                search: SearchState::new("customerName", "acme"),
                filters: FilterState {
                    sales_person_name: vec!["Alice".into()],
                    ..Default::default()
                },
                period: PeriodState::new(NaiveDate::from_ymd_opt(2025, 1, 1), None),
            }
        }

        fn key(&self) -> QueryKey {
            ListQuery::build(QueryInputs {
                module: "sales_invoice",
                company_ids: &self.companies,
                page: Some(&self.page),
                search: Some(&self.search),
                filters: Some(&self.filters),
                period: Some(&self.period),
            })
            .0
            .key()
        }
    }

    #[test]
    fn test_equal_inputs_give_equal_keys() {
        assert_eq!(Inputs::base().key(), Inputs::base().key());
    }

    #[test]
    fn test_any_changed_field_changes_key() {
        let base = Inputs::base().key();

        let mut variants: Vec<Inputs> = Vec::new();

        let mut i = Inputs::base();
        i.page.apply(PagePatch::page(2));
        variants.push(i);

        let mut i = Inputs::base();
        i.page.apply(PagePatch::limit(50));
        variants.push(i);

        let mut i = Inputs::base();
        i.page.toggle_sort("amount");
        variants.push(i);

        let mut i = Inputs::base();
        i.search.search_term = "globex".into();
        variants.push(i);

        let mut i = Inputs::base();
        i.search.search_by = "invoiceNo".into();
        variants.push(i);

        let mut i = Inputs::base();
        i.filters.paid_status = vec!["PAID".into()];
        variants.push(i);

        let mut i = Inputs::base();
        i.companies.push("11".into());
        variants.push(i);

        let mut i = Inputs::base();
        i.period.start_period = NaiveDate::from_ymd_opt(2025, 2, 1);
        variants.push(i);

        let mut keys: HashSet<QueryKey> = HashSet::new();
        keys.insert(base.clone());
        for v in &variants {
            let key = v.key();
            assert_ne!(key, base, "variant produced the base key: {}", key.describe());
            keys.insert(key);
        }
        assert_eq!(keys.len(), variants.len() + 1);
    }

    #[test]
    fn test_module_is_part_of_key() {
        let a = ListQuery::new("sales_invoice").key();
        let b = ListQuery::new("sales_person_invoice").key();
        assert_ne!(a, b);
    }

    #[test]
    fn test_selection_order_does_not_change_key() {
        let mut a = Inputs::base();
        a.filters.sales_person_name = vec!["Alice".into(), "Bob".into()];
        let mut b = Inputs::base();
        b.filters.sales_person_name = vec!["Bob".into(), "Alice".into()];
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_days_within_same_month_share_key() {
        let mut a = Inputs::base();
        a.period.start_period = NaiveDate::from_ymd_opt(2025, 1, 3);
        let mut b = Inputs::base();
        b.period.start_period = NaiveDate::from_ymd_opt(2025, 1, 28);
        assert_eq!(a.key(), b.key());
    }
}
