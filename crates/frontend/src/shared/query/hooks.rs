//! Data hooks: combine the stores into a request and keep its result in signals.
//!
//! `use_view_query` builds a memoized [`ListQuery`] from the stores of one
//! context; `use_api_query` watches the derived [`QueryKey`] and fetches once
//! per new key. Results of requests whose key is no longer current are dropped.

use super::client::use_query_client;
use super::stores::use_query_stores;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::toast::ToastService;
use contracts::shared::api::ListResponse;
use crate::shared::api_utils::ApiError;
use contracts::shared::query::{ListQuery, PeriodAdvisory, QueryInputs, QueryKey};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

pub struct QueryState<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    /// Fetching with nothing to show yet
    pub is_loading: RwSignal<bool>,
    /// Any request in progress, including background refreshes
    pub is_fetching: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Key the current `data` was fetched for
    data_key: RwSignal<Option<QueryKey>>,
    version: RwSignal<u64>,
}

/// What happened to a finished request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Data,
    Error,
    /// Issued for a key that is no longer current, dropped
    Stale,
}

impl<T: Send + Sync + 'static> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryState<T> {}

impl<T: Send + Sync + 'static> QueryState<T> {
    fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            is_fetching: RwSignal::new(false),
            error: RwSignal::new(None),
            data_key: RwSignal::new(None),
            version: RwSignal::new(0),
        }
    }

    /// Apply the result of a request issued for `issued` while the view is at `current`.
    ///
    /// A failed request for a new key also clears `data`: rows of the previous
    /// key must not be shown under the new filters. A failed refetch of the
    /// same key keeps the rows.
    fn apply_result(
        &self,
        label: &str,
        issued: &QueryKey,
        current: &QueryKey,
        result: Result<T, ApiError>,
    ) -> Applied {
        if issued != current {
            log::debug!("discarding stale response for {}", issued.describe());
            return Applied::Stale;
        }
        let applied = match result {
            Ok(data) => {
                self.data.set(Some(data));
                self.data_key.set(Some(issued.clone()));
                self.error.set(None);
                Applied::Data
            }
            Err(e) => {
                log::error!("Error fetching {}: {}", label, e);
                let same_key = self.data_key.with_untracked(|k| k.as_ref() == Some(issued));
                if !same_key {
                    self.data.set(None);
                    self.data_key.set(None);
                }
                self.error.set(Some(format!("Error fetching {}: {}", label, e)));
                Applied::Error
            }
        };
        self.is_fetching.set(false);
        self.is_loading.set(false);
        applied
    }

    /// Bypass the cache for the current key
    pub fn refetch(&self) {
        self.version.update(|v| *v += 1);
    }
}

impl<T: Clone + Send + Sync + 'static> QueryState<ListResponse<T>> {
    pub fn rows(&self) -> Vec<T> {
        self.data
            .with(|d| d.as_ref().map(|r| r.data.clone()).unwrap_or_default())
    }

    pub fn total(&self) -> u64 {
        self.data
            .with(|d| d.as_ref().map(|r| r.total_records).unwrap_or(0))
    }

    pub fn grand_total(&self) -> Option<f64> {
        self.data
            .with(|d| d.as_ref().and_then(|r| r.grand_total_amount))
    }
}

/// Fetch `path` for every new key of `query`.
///
/// `label` names the data in error messages ("Error fetching {label}").
pub fn use_api_query<T>(path: &'static str, label: &'static str, query: Memo<ListQuery>) -> QueryState<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let client = use_query_client();
    let toasts = use_context::<ToastService>();
    let state = QueryState::<T>::new();
    let key = Memo::new(move |_| query.with(|q| q.key()));

    Effect::new(move |prev: Option<u64>| {
        let version = state.version.get();
        let issued = key.get();
        // мутация в другом табе сбросила кэш модуля
        client.revision(&issued.module);
        let request = query.get_untracked();
        let force = prev.is_some_and(|p| p != version);

        state.is_fetching.set(true);
        state
            .is_loading
            .set(state.data.with_untracked(|d| d.is_none()));

        spawn_local(async move {
            if force {
                client.evict(path, &issued);
            }
            let result = client.fetch_json::<T>(path, &request).await;

            // владелец уже уничтожен
            let Some(current) = key.try_get_untracked() else {
                return;
            };
            let message = result.as_ref().err().map(ToString::to_string);
            if state.apply_result(label, &issued, &current, result) == Applied::Error {
                if let (Some(toasts), Some(message)) = (toasts, message) {
                    toasts.error(message);
                }
            }
        });

        version
    });

    state
}

pub fn use_list_query<T>(
    path: &'static str,
    label: &'static str,
    query: Memo<ListQuery>,
) -> QueryState<ListResponse<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    use_api_query::<ListResponse<T>>(path, label, query)
}

/// Which stores of a context take part in a view's request
#[derive(Debug, Clone, Copy)]
pub struct ViewQuerySpec {
    pub module: &'static str,
    pub context: &'static str,
    pub paged: bool,
    pub searchable: bool,
    pub filtered: bool,
    pub with_period: bool,
}

impl ViewQuerySpec {
    /// Paged list with every store attached
    pub fn list(module: &'static str, context: &'static str) -> Self {
        Self {
            module,
            context,
            paged: true,
            searchable: true,
            filtered: true,
            with_period: true,
        }
    }

    /// Paged list without filters or period (catalog pages)
    pub fn catalog(module: &'static str, context: &'static str) -> Self {
        Self {
            module,
            context,
            paged: true,
            searchable: true,
            filtered: false,
            with_period: false,
        }
    }

    /// Chart or summary: filters and period, no paging
    pub fn aggregate(module: &'static str, context: &'static str) -> Self {
        Self {
            module,
            context,
            paged: false,
            searchable: false,
            filtered: true,
            with_period: true,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ViewQuery {
    pub query: Memo<ListQuery>,
    /// Last period correction, shown until dismissed
    pub advisory: RwSignal<Option<PeriodAdvisory>>,
}

pub fn use_view_query(spec: ViewQuerySpec) -> ViewQuery {
    let stores = use_query_stores();
    let companies = use_context::<AppGlobalContext>().map(|ctx| ctx.selected_company_ids);
    let toasts = use_context::<ToastService>();
    let advisory = RwSignal::new(None::<PeriodAdvisory>);
    let context = spec.context;

    let query = Memo::new(move |_| {
        let company_ids = companies.map(|c| c.get()).unwrap_or_default();
        let page = spec.paged.then(|| stores.pages.get(context));
        let search = spec.searchable.then(|| stores.searches.get(context));
        let filters = spec.filtered.then(|| stores.filters.get(context));
        let period = spec.with_period.then(|| stores.periods.get(context));
        ListQuery::build(QueryInputs {
            module: spec.module,
            company_ids: &company_ids,
            page: page.as_ref(),
            search: search.as_ref(),
            filters: filters.as_ref(),
            period: period.as_ref(),
        })
        .0
    });

    if spec.with_period {
        // исправленный период записывается обратно в хранилище
        Effect::new(move |_| {
            let period = stores.periods.get(context);
            if let Some(found) = period.normalize().advisory {
                log::warn!("{}: {}", context, found.message());
                advisory.set(Some(found));
                if let Some(toasts) = toasts {
                    toasts.warning(found.message());
                }
                stores.periods.set(context, period.corrected());
            }
        });
    }

    ViewQuery { query, advisory }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(page: u32) -> QueryKey {
        let mut query = ListQuery::new("sales_invoice");
        query.page = Some(contracts::shared::query::PageState {
            current_page: page,
            ..Default::default()
        });
        query.key()
    }

    fn network_error() -> ApiError {
        ApiError::Network("connection reset".into())
    }

    #[test]
    fn test_response_for_outdated_key_is_dropped() {
        Owner::new().with(|| {
            let state = QueryState::<Vec<u32>>::new();
            assert_eq!(state.apply_result("rows", &key(1), &key(1), Ok(vec![1])), Applied::Data);

            // пользователь уже перешёл на страницу 2
            let applied = state.apply_result("rows", &key(1), &key(2), Ok(vec![9]));
            assert_eq!(applied, Applied::Stale);
            assert_eq!(state.data.get_untracked(), Some(vec![1]));
        });
    }

    #[test]
    fn test_failed_fetch_for_new_key_clears_old_rows() {
        Owner::new().with(|| {
            let state = QueryState::<Vec<u32>>::new();
            state.apply_result("rows", &key(1), &key(1), Ok(vec![1, 2]));

            let applied = state.apply_result("rows", &key(2), &key(2), Err(network_error()));
            assert_eq!(applied, Applied::Error);
            assert_eq!(state.data.get_untracked(), None);
            assert_eq!(
                state.error.get_untracked().as_deref(),
                Some("Error fetching rows: Network error: connection reset")
            );
            assert!(!state.is_fetching.get_untracked());
        });
    }

    #[test]
    fn test_failed_refetch_of_same_key_keeps_rows() {
        Owner::new().with(|| {
            let state = QueryState::<Vec<u32>>::new();
            state.apply_result("rows", &key(3), &key(3), Ok(vec![7]));
            state.apply_result("rows", &key(3), &key(3), Err(network_error()));
            assert_eq!(state.data.get_untracked(), Some(vec![7]));
            assert!(state.error.get_untracked().is_some());

            state.apply_result("rows", &key(3), &key(3), Ok(vec![8]));
            assert_eq!(state.data.get_untracked(), Some(vec![8]));
            assert_eq!(state.error.get_untracked(), None);
        });
    }
}
