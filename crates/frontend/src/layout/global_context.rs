use crate::shared::api_utils::get_json;
use crate::shared::query::url_sync::{current_search, merge_params, replace_query};
use contracts::domain::common::Company;
use leptos::prelude::Effect;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

/// Query parameter carrying the active tab key
pub const PARAM_ACTIVE: &str = "active";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Companies available to the user (top header selector)
    pub companies: RwSignal<Vec<Company>>,
    /// Company scope of every request; empty = all companies
    pub selected_company_ids: RwSignal<Vec<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            companies: RwSignal::new(vec![]),
            selected_company_ids: RwSignal::new(vec![]),
        }
    }

    pub fn init_router_integration(&self) {
        let params: BTreeMap<String, String> =
            serde_qs::from_str(current_search().trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get(PARAM_ACTIVE).cloned() {
            let title = crate::layout::tabs::tab_label_for_key(&active_key);
            let title = if title.is_empty() { active_key.clone() } else { title.to_string() };
            self.open_tab(&active_key, &title);
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let current = current_search();
                let new_query = merge_params(&current, &[(PARAM_ACTIVE, Some(active_key))]);

                // Only update URL if it actually changed
                if current != new_query {
                    replace_query(&new_query);
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Select or deselect one company; the query key of every view changes with it
    pub fn toggle_company(&self, id: &str) {
        self.selected_company_ids.update(|ids| {
            if let Some(pos) = ids.iter().position(|c| c == id) {
                ids.remove(pos);
            } else {
                ids.push(id.to_string());
            }
        });
    }

    /// Load the company list once at startup. Failure leaves the scope empty
    /// (all companies), the error is logged.
    pub fn load_companies(&self) {
        let companies = self.companies;
        spawn_local(async move {
            match get_json::<Vec<Company>>("/api/companies").await {
                Ok(list) => {
                    log::info!("loaded {} companies", list.len());
                    let _ = companies.try_set(list);
                }
                Err(e) => log::error!("failed to load companies: {}", e),
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_active_tab_activates_last() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.open_tab("a001_category", "Categories");
            ctx.open_tab("a003_product", "Products");
            ctx.open_tab("p900_sales_invoice", "Sales Invoices");
            ctx.activate_tab("a003_product");

            ctx.close_tab("a003_product");
            assert_eq!(ctx.opened.get_untracked().len(), 2);
            assert_eq!(ctx.active.get_untracked().as_deref(), Some("p900_sales_invoice"));
        });
    }

    #[test]
    fn test_open_existing_tab_does_not_duplicate() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.open_tab("a001_category", "Categories");
            ctx.open_tab("a002_billboard", "Billboards");
            ctx.open_tab("a001_category", "Categories");
            assert_eq!(ctx.opened.get_untracked().len(), 2);
            assert_eq!(ctx.active.get_untracked().as_deref(), Some("a001_category"));
        });
    }

    #[test]
    fn test_toggle_company() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.toggle_company("1");
            ctx.toggle_company("2");
            ctx.toggle_company("1");
            assert_eq!(ctx.selected_company_ids.get_untracked(), vec!["2".to_string()]);
        });
    }
}
