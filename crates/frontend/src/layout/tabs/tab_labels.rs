//! Tab labels - единственный источник правды для заголовков табов.

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: пустая строка.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Catalog (a00x) ───────────────────────────────────────────────
        "a001_category" => "Categories",
        "a002_billboard" => "Billboards",
        "a003_product" => "Products",

        // ── Projections (p9xx) ────────────────────────────────────────────
        "p900_sales_invoice" => "Sales Invoices",
        "p901_sales_person_invoice" => "Sales Person Invoices",

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_sales_analytics" => "Sales Analytics",

        _ => "",
    }
}

/// Singular entity name used in detail tab titles
pub fn entity_element_name(aggregate_key: &str) -> &'static str {
    match aggregate_key {
        "a001_category" => "Category",
        "a002_billboard" => "Billboard",
        "a003_product" => "Product",
        _ => "",
    }
}

/// Ключ detail-таба: `<aggregate>_detail_<id>`, для новой записи `<aggregate>_new`
pub fn detail_tab_key(aggregate_key: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{}_detail_{}", aggregate_key, id),
        None => format!("{}_new", aggregate_key),
    }
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
pub fn detail_tab_label(aggregate_key: &str, identifier: Option<&str>) -> String {
    let entity = entity_element_name(aggregate_key);
    match identifier.filter(|s| !s.trim().is_empty()) {
        Some(identifier) => format!("{} · {}", entity, identifier),
        None => format!("New {}", entity.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_tab_key() {
        assert_eq!(detail_tab_key("a003_product", Some("p1")), "a003_product_detail_p1");
        assert_eq!(detail_tab_key("a003_product", None), "a003_product_new");
    }

    #[test]
    fn test_detail_tab_label() {
        assert_eq!(detail_tab_label("a001_category", Some("Shoes")), "Category · Shoes");
        assert_eq!(detail_tab_label("a002_billboard", None), "New billboard");
        assert_eq!(detail_tab_label("a002_billboard", Some(" ")), "New billboard");
    }
}
