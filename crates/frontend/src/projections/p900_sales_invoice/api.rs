pub use contracts::projections::p900_sales_invoice::dto::{
    PAID_STATUS_OPTIONS, PO_TYPE_OPTIONS, SEARCH_FIELDS,
};

pub const COLLECTION: &str = "/api/sales-invoice";
pub const MODULE: &str = "sales_invoice";
pub const CONTEXT: &str = "salesInvoice";

/// Fixed facet values as owned strings for `FacetFilter`
pub fn fixed_options(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
