/// Monthly totals; `period` is `MMMyyyy`, `yyyy-MM` or a bare year with `month`
pub const MONTHLY_SALES_PATH: &str = "/api/dashboard/monthly-sales";
/// Monthly totals split by sales person
pub const SALES_PERSON_SALES_PATH: &str = "/api/dashboard/sales-person-sales";
pub const SUMMARY_PATH: &str = "/api/dashboard/sales-summary";

/// Dashboard data comes from invoices, so invoice mutations invalidate it too
pub const MODULE: &str = "sales_invoice";
pub const CONTEXT: &str = "salesAnalytics";
