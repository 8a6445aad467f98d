//! Mirror of page number and search into the address bar.
//!
//! Read once when a list mounts, written back with `history.replaceState`
//! while its tab is active. Parameters owned by others (`active`, anything
//! unknown) are preserved.

use super::stores::use_query_stores;
use crate::layout::global_context::AppGlobalContext;
use contracts::shared::query::{PagePatch, SearchPatch, SearchState};
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::window;

pub const PARAM_PAGE: &str = "page";
pub const PARAM_SEARCH_TERM: &str = "searchTerm";
pub const PARAM_SEARCH_BY: &str = "searchBy";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlListState {
    pub page: Option<u32>,
    pub search_term: Option<String>,
    pub search_by: Option<String>,
}

fn parse_params(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

pub fn parse_url_state(search: &str) -> UrlListState {
    let params = parse_params(search);
    let non_blank = |name: &str| {
        params
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    UrlListState {
        page: params
            .get(PARAM_PAGE)
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1),
        search_term: non_blank(PARAM_SEARCH_TERM),
        search_by: non_blank(PARAM_SEARCH_BY),
    }
}

/// Apply updates to an existing query string; `None` removes the parameter.
/// Returns `?a=..` or an empty string.
pub fn merge_params(search: &str, updates: &[(&str, Option<String>)]) -> String {
    let mut params = parse_params(search);
    for (name, value) in updates {
        match value {
            Some(v) => {
                params.insert(name.to_string(), v.clone());
            }
            None => {
                params.remove(*name);
            }
        }
    }
    if params.is_empty() {
        return String::new();
    }
    match serde_qs::to_string(&params) {
        Ok(qs) => format!("?{}", qs),
        Err(e) => {
            log::warn!("failed to serialize query string: {}", e);
            String::new()
        }
    }
}

/// Page 1 and an empty search are the defaults and stay out of the URL
pub fn merge_url_state(search: &str, page: u32, search_state: &SearchState) -> String {
    let (term, by) = if search_state.is_active() {
        let by = search_state.search_by.trim();
        (
            Some(search_state.search_term.trim().to_string()),
            (!by.is_empty()).then(|| by.to_string()),
        )
    } else {
        (None, None)
    };
    merge_params(
        search,
        &[
            (PARAM_PAGE, (page > 1).then(|| page.to_string())),
            (PARAM_SEARCH_TERM, term),
            (PARAM_SEARCH_BY, by),
        ],
    )
}

pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Replace the query part of the current URL, keeping the path
pub fn replace_query(query: &str) {
    let Some(w) = window() else {
        return;
    };
    let path = w.location().pathname().unwrap_or_default();
    if let Ok(history) = w.history() {
        let url = format!("{}{}", path, query);
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
}

/// Two-way binding between the URL and the page/search stores of `context`.
/// Only the tab `tab_key` reads or writes the URL, and only while it is active.
pub fn use_url_sync(context: &'static str, tab_key: &'static str) {
    let stores = use_query_stores();
    let Some(ctx) = use_context::<AppGlobalContext>() else {
        return;
    };

    let is_active = move || ctx.active.with(|a| a.as_deref() == Some(tab_key));

    if ctx.active.with_untracked(|a| a.as_deref() == Some(tab_key)) {
        let initial = parse_url_state(&current_search());
        if let Some(page) = initial.page {
            stores.pages.apply(context, PagePatch::page(page));
        }
        if initial.search_term.is_some() || initial.search_by.is_some() {
            stores.searches.apply(
                context,
                SearchPatch {
                    search_by: initial.search_by,
                    search_term: initial.search_term,
                },
            );
        }
    }

    Effect::new(move |_| {
        let page = stores.pages.get(context).current_page;
        let search = stores.searches.get(context);
        if !is_active() {
            return;
        }
        let current = current_search();
        let next = merge_url_state(&current, page, &search);
        if next != current {
            replace_query(&next);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_state() {
        let state =
            parse_url_state("?active=p900_sales_invoice&page=3&searchTerm=acme&searchBy=customerName");
        assert_eq!(
            state,
            UrlListState {
                page: Some(3),
                search_term: Some("acme".into()),
                search_by: Some("customerName".into()),
            }
        );
    }

    #[test]
    fn test_parse_ignores_invalid_page() {
        assert_eq!(parse_url_state("?page=0").page, None);
        assert_eq!(parse_url_state("?page=abc").page, None);
        assert_eq!(parse_url_state("").page, None);
    }

    #[test]
    fn test_merge_keeps_unrelated_params() {
        let search = SearchState::new("customerName", "acme");
        assert_eq!(
            merge_url_state("?active=p900_sales_invoice&foo=bar", 3, &search),
            "?active=p900_sales_invoice&foo=bar&page=3&searchBy=customerName&searchTerm=acme"
        );
    }

    #[test]
    fn test_defaults_are_removed() {
        assert_eq!(
            merge_url_state(
                "?active=p900_sales_invoice&page=4&searchTerm=acme",
                1,
                &SearchState::default()
            ),
            "?active=p900_sales_invoice"
        );
        assert_eq!(merge_url_state("?page=2", 1, &SearchState::default()), "");
    }

    #[test]
    fn test_merge_params_sets_active() {
        assert_eq!(
            merge_params("?page=2", &[("active", Some("d400_sales_analytics".into()))]),
            "?active=d400_sales_analytics&page=2"
        );
    }
}
