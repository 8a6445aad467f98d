//! Per-context state containers: filters, periods, paging and search.
//!
//! Each store is a `Copy` handle over a map from context name
//! (`salesInvoice`, `salesPersonInvoice`, ...) to that context's state, so
//! views sharing a context share state and other views are not affected.
//! Stores do not validate; normalization happens when a request is built.

use contracts::shared::query::{
    Facet, FilterChange, FilterState, PagePatch, PageState, PeriodState, SearchPatch, SearchState,
};
use chrono::NaiveDate;
use leptos::prelude::*;
use std::collections::HashMap;

/// Context used by views that do not need their own paging state
pub const DEFAULT_CONTEXT: &str = "default";

pub struct ContextStore<S: Send + Sync + 'static> {
    states: RwSignal<HashMap<String, S>>,
}

impl<S: Send + Sync + 'static> Clone for ContextStore<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Send + Sync + 'static> Copy for ContextStore<S> {}

impl<S> ContextStore<S>
where
    S: Clone + Default + PartialEq + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            states: RwSignal::new(HashMap::new()),
        }
    }

    /// Tracked read; an unknown context yields the default state
    pub fn get(&self, context: &str) -> S {
        self.states
            .with(|m| m.get(context).cloned().unwrap_or_default())
    }

    pub fn get_untracked(&self, context: &str) -> S {
        self.states
            .with_untracked(|m| m.get(context).cloned().unwrap_or_default())
    }

    /// Replace the whole state; subscribers are notified only on an actual change
    pub fn set(&self, context: &str, value: S) {
        if self.get_untracked(context) != value {
            self.states.update(|m| {
                m.insert(context.to_string(), value);
            });
        }
    }

    /// Mutate a copy of the state and store it back if it changed
    pub fn modify<R>(&self, context: &str, f: impl FnOnce(&mut S) -> R) -> R {
        let current = self.get_untracked(context);
        let mut next = current.clone();
        let out = f(&mut next);
        if next != current {
            self.states.update(|m| {
                m.insert(context.to_string(), next);
            });
        }
        out
    }

    pub fn reset(&self, context: &str) {
        self.set(context, S::default());
    }
}

impl<S> Default for ContextStore<S>
where
    S: Clone + Default + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

pub type FilterStore = ContextStore<FilterState>;
pub type PeriodStore = ContextStore<PeriodState>;
pub type PageStore = ContextStore<PageState>;
pub type SearchStore = ContextStore<SearchState>;

impl ContextStore<FilterState> {
    /// Replace the values of one facet; cross-filter rules may clear others
    pub fn set_facet(&self, context: &str, facet: Facet, values: Vec<String>) -> FilterChange {
        self.modify(context, |f| f.set_facet(facet, values))
    }

    pub fn toggle(&self, context: &str, facet: Facet, value: &str) -> FilterChange {
        self.modify(context, |f| f.toggle(facet, value))
    }

    pub fn clear_facet(&self, context: &str, facet: Facet) {
        self.modify(context, |f| f.clear(facet));
    }
}

impl ContextStore<PeriodState> {
    pub fn set_start(&self, context: &str, start: Option<NaiveDate>) {
        self.modify(context, |p| p.start_period = start);
    }

    pub fn set_end(&self, context: &str, end: Option<NaiveDate>) {
        self.modify(context, |p| p.end_period = end);
    }
}

impl ContextStore<PageState> {
    pub fn apply(&self, context: &str, patch: PagePatch) {
        self.modify(context, |p| p.apply(patch));
    }

    pub fn set_page(&self, context: &str, page: u32) {
        self.apply(context, PagePatch::page(page));
    }

    /// Changing the page size starts over from the first page
    pub fn set_limit(&self, context: &str, limit: u32) {
        self.apply(
            context,
            PagePatch {
                current_page: Some(1),
                limit: Some(limit),
                sorting: None,
            },
        );
    }

    pub fn toggle_sort(&self, context: &str, column: &str) {
        self.modify(context, |p| p.toggle_sort(column));
    }
}

impl ContextStore<SearchState> {
    pub fn apply(&self, context: &str, patch: SearchPatch) {
        self.modify(context, |s| s.apply(patch));
    }
}

/// All containers together, provided once at the application root
#[derive(Clone, Copy)]
pub struct QueryStores {
    pub filters: FilterStore,
    pub periods: PeriodStore,
    pub pages: PageStore,
    pub searches: SearchStore,
}

impl QueryStores {
    pub fn new() -> Self {
        Self {
            filters: FilterStore::new(),
            periods: PeriodStore::new(),
            pages: PageStore::new(),
            searches: SearchStore::new(),
        }
    }

    fn back_to_first_page(&self, context: &str) {
        self.pages.set_page(context, 1);
    }

    /// Filter change through the single facet entry point; the list restarts at page 1
    pub fn set_facet(&self, context: &str, facet: Facet, values: Vec<String>) -> FilterChange {
        let change = self.filters.set_facet(context, facet, values);
        self.back_to_first_page(context);
        change
    }

    pub fn toggle_facet(&self, context: &str, facet: Facet, value: &str) -> FilterChange {
        let change = self.filters.toggle(context, facet, value);
        self.back_to_first_page(context);
        change
    }

    pub fn clear_facet(&self, context: &str, facet: Facet) {
        self.filters.clear_facet(context, facet);
        self.back_to_first_page(context);
    }

    pub fn reset_filters(&self, context: &str) {
        self.filters.reset(context);
        self.back_to_first_page(context);
    }

    /// Filters, search and period back to defaults
    pub fn reset_all(&self, context: &str) {
        self.filters.reset(context);
        self.searches.modify(context, |s| s.search_term.clear());
        self.periods.reset(context);
        self.back_to_first_page(context);
    }

    /// Active facets + search term + period (tracked)
    pub fn active_filter_count(&self, context: &str) -> usize {
        self.filters.get(context).active_count()
            + usize::from(self.searches.get(context).is_active())
            + usize::from(!self.periods.get(context).is_empty())
    }

    pub fn set_search(&self, context: &str, patch: SearchPatch) {
        self.searches.apply(context, patch);
        self.back_to_first_page(context);
    }

    pub fn set_period_start(&self, context: &str, start: Option<NaiveDate>) {
        self.periods.set_start(context, start);
        self.back_to_first_page(context);
    }

    pub fn set_period_end(&self, context: &str, end: Option<NaiveDate>) {
        self.periods.set_end(context, end);
        self.back_to_first_page(context);
    }
}

impl Default for QueryStores {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_query_stores() -> QueryStores {
    let stores = QueryStores::new();
    provide_context(stores);
    stores
}

pub fn use_query_stores() -> QueryStores {
    use_context::<QueryStores>().unwrap_or_else(|| {
        log::warn!("QueryStores not provided, using a detached instance");
        QueryStores::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        Owner::new().with(f)
    }

    #[test]
    fn test_page_round_trip() {
        with_owner(|| {
            let pages = PageStore::new();
            pages.set_page("salesInvoice", 3);
            assert_eq!(pages.get_untracked("salesInvoice").current_page, 3);
            // другие контексты не затронуты
            assert_eq!(pages.get_untracked("salesPersonInvoice"), PageState::default());
        });
    }

    #[test]
    fn test_set_limit_restarts_paging() {
        with_owner(|| {
            let pages = PageStore::new();
            pages.set_page("salesInvoice", 4);
            pages.set_limit("salesInvoice", 50);
            let state = pages.get_untracked("salesInvoice");
            assert_eq!(state.current_page, 1);
            assert_eq!(state.limit, 50);
        });
    }

    #[test]
    fn test_filter_reset_clears_context() {
        with_owner(|| {
            let filters = FilterStore::new();
            filters.set_facet("salesInvoice", Facet::PoType, vec!["STANDARD".into()]);
            filters.set_facet("salesPersonInvoice", Facet::PoType, vec!["BLANKET".into()]);
            filters.reset("salesInvoice");
            assert_eq!(filters.get_untracked("salesInvoice"), FilterState::default());
            assert_eq!(
                filters.get_untracked("salesPersonInvoice").po_type,
                vec!["BLANKET".to_string()]
            );
        });
    }

    #[test]
    fn test_multiple_sales_persons_clear_status() {
        with_owner(|| {
            let stores = QueryStores::new();
            let ctx = "salesPersonInvoice";
            stores.set_facet(ctx, Facet::SalesPersonName, vec!["Alice".into()]);
            stores.set_facet(ctx, Facet::PaidStatus, vec!["PAID".into()]);
            let change =
                stores.set_facet(ctx, Facet::SalesPersonName, vec!["Alice".into(), "Bob".into()]);
            assert_eq!(change.cleared, vec![Facet::PaidStatus]);
            assert!(stores.filters.get_untracked(ctx).paid_status.is_empty());
        });
    }

    #[test]
    fn test_filter_change_returns_to_first_page() {
        with_owner(|| {
            let stores = QueryStores::new();
            stores.pages.set_page("salesInvoice", 5);
            stores.toggle_facet("salesInvoice", Facet::PaidStatus, "PAID");
            assert_eq!(stores.pages.get_untracked("salesInvoice").current_page, 1);

            stores.pages.set_page("salesInvoice", 2);
            stores.set_search("salesInvoice", SearchPatch::term("acme"));
            assert_eq!(stores.pages.get_untracked("salesInvoice").current_page, 1);
            assert_eq!(stores.searches.get_untracked("salesInvoice").search_term, "acme");
        });
    }

    #[test]
    fn test_active_filter_count_and_reset_all() {
        with_owner(|| {
            let stores = QueryStores::new();
            let ctx = "salesInvoice";
            assert_eq!(stores.active_filter_count(ctx), 0);

            stores.set_facet(ctx, Facet::PoType, vec!["STANDARD".into(), "BLANKET".into()]);
            stores.set_search(ctx, SearchPatch::new("customerName", "acme"));
            stores.set_period_start(ctx, NaiveDate::from_ymd_opt(2025, 1, 1));
            assert_eq!(stores.active_filter_count(ctx), 3);

            stores.reset_all(ctx);
            assert_eq!(stores.active_filter_count(ctx), 0);
            // поле поиска сохраняется
            assert_eq!(stores.searches.get_untracked(ctx).search_by, "customerName");
        });
    }
}
