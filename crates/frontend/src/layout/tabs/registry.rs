//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Все tab keys собраны здесь в одном месте, включая detail-табы
//! (`<aggregate>_detail_<id>` и `<aggregate>_new`).

use crate::dashboards::d400_sales_analytics::ui::SalesAnalyticsDashboard;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_billboard::ui::details::BillboardDetails;
use crate::domain::a002_billboard::ui::list::BillboardList;
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::domain::a003_product::ui::list::ProductList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_sales_invoice::ui::list::SalesInvoiceList;
use crate::projections::p901_sales_person_invoice::ui::list::SalesPersonInvoiceList;
use leptos::prelude::*;

/// Detail tab of an aggregate: `Some(Some(id))` for an existing record,
/// `Some(None)` for a new one, `None` when the key belongs to another tab.
fn parse_detail_key(key: &str, aggregate: &str) -> Option<Option<String>> {
    let rest = key.strip_prefix(aggregate)?;
    if rest == "_new" {
        return Some(None);
    }
    rest.strip_prefix("_detail_")
        .filter(|id| !id.is_empty())
        .map(|id| Some(id.to_string()))
}

/// Рендерит контент таба по его ключу.
///
/// `tabs_store` нужен detail-табам, чтобы закрыть себя после сохранения.
/// Для неизвестных ключей возвращается placeholder.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards
        // ═══════════════════════════════════════════════════════════════════
        "d400_sales_analytics" => view! { <SalesAnalyticsDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Projections
        // ═══════════════════════════════════════════════════════════════════
        "p900_sales_invoice" => view! { <SalesInvoiceList /> }.into_any(),
        "p901_sales_person_invoice" => view! { <SalesPersonInvoiceList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Catalog
        // ═══════════════════════════════════════════════════════════════════
        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_billboard" => view! { <BillboardList /> }.into_any(),
        "a003_product" => view! { <ProductList /> }.into_any(),

        k => {
            if let Some(id) = parse_detail_key(k, "a001_category") {
                return view! { <CategoryDetails id=id on_close=on_close /> }.into_any();
            }
            if let Some(id) = parse_detail_key(k, "a002_billboard") {
                return view! { <BillboardDetails id=id on_close=on_close /> }.into_any();
            }
            if let Some(id) = parse_detail_key(k, "a003_product") {
                return view! { <ProductDetails id=id on_close=on_close /> }.into_any();
            }
            log::warn!("Unknown tab type: {}", k);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail_key() {
        assert_eq!(
            parse_detail_key("a003_product_detail_p-1", "a003_product"),
            Some(Some("p-1".to_string()))
        );
        assert_eq!(parse_detail_key("a003_product_new", "a003_product"), Some(None));
        assert_eq!(parse_detail_key("a003_product", "a003_product"), None);
        assert_eq!(parse_detail_key("a003_product_detail_", "a003_product"), None);
        assert_eq!(parse_detail_key("a001_category_new", "a003_product"), None);
    }
}
