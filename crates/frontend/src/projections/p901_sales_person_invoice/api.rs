use crate::layout::global_context::AppGlobalContext;
use crate::shared::query::use_api_query;
use contracts::projections::p901_sales_person_invoice::dto::SalesPersonOption;
use contracts::shared::query::{ListQuery, QueryInputs};
use leptos::prelude::*;

pub const COLLECTION: &str = "/api/sales-person-invoice";
pub const SUMMARY_PATH: &str = "/api/sales-person-invoice/summary";
pub const MODULE: &str = "sales_person_invoice";
pub const CONTEXT: &str = "salesPersonInvoice";

pub const OPTIONS_PATH: &str = "/api/sales-person/options";
const OPTIONS_MODULE: &str = "sales_person_options";

pub const SEARCH_FIELDS: &[(&str, &str)] = &[
    ("invoiceNo", "Invoice No"),
    ("customerName", "Customer"),
];

pub const STATUS_GUARD_MESSAGE: &str = "Select exactly one sales person to filter by status";

/// Имена для фасета: без пустых и повторов, порядок сервера
pub fn option_names(options: &[SalesPersonOption]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(options.len());
    for option in options {
        let name = option.name.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Sales persons available in the current company scope.
///
/// Shared by every view with a sales person facet; the query client
/// caches it, so mounting several views costs one request.
pub fn use_sales_person_options() -> Signal<Vec<String>> {
    let companies = use_context::<AppGlobalContext>().map(|ctx| ctx.selected_company_ids);
    let query = Memo::new(move |_| {
        let company_ids = companies.map(|c| c.get()).unwrap_or_default();
        ListQuery::build(QueryInputs {
            module: OPTIONS_MODULE,
            company_ids: &company_ids,
            ..Default::default()
        })
        .0
    });
    let state = use_api_query::<Vec<SalesPersonOption>>(OPTIONS_PATH, "sales persons", query);
    Signal::derive(move || {
        state
            .data
            .with(|d| d.as_deref().map(option_names).unwrap_or_default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str) -> SalesPersonOption {
        SalesPersonOption {
            name: name.to_string(),
            invoice_count: 1,
        }
    }

    #[test]
    fn test_option_names_skip_blank_and_duplicates() {
        let options = vec![option("Bob"), option(" "), option("Alice"), option("Bob ")];
        assert_eq!(option_names(&options), vec!["Bob".to_string(), "Alice".to_string()]);
    }
}
