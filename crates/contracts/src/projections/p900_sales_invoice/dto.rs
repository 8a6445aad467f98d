use serde::{Deserialize, Serialize};

/// Значения фасета статуса оплаты
pub const PAID_STATUS_OPTIONS: &[&str] = &["PAID", "UNPAID", "PARTIAL"];

/// Значения фасета типа заказа (PO)
pub const PO_TYPE_OPTIONS: &[&str] = &["STANDARD", "BLANKET", "CONTRACT"];

/// Sortable columns accepted by `orderBy`
pub const SORTABLE_COLUMNS: &[&str] = &[
    "invoiceNo",
    "invoiceDate",
    "customerName",
    "salesPersonName",
    "amount",
];

/// Searchable fields accepted by `searchBy`
pub const SEARCH_FIELDS: &[(&str, &str)] = &[
    ("invoiceNo", "Invoice No"),
    ("customerName", "Customer"),
    ("salesPersonName", "Sales Person"),
];

/// Строка реестра счетов продаж
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesInvoice {
    #[serde(rename = "invoiceNo")]
    pub invoice_no: String,
    #[serde(rename = "invoiceDate")]
    pub invoice_date: String,
    #[serde(rename = "customerName", default)]
    pub customer_name: String,
    #[serde(rename = "salesPersonName", default)]
    pub sales_person_name: String,
    #[serde(rename = "poType", default)]
    pub po_type: Option<String>,
    #[serde(rename = "paidStatus", default)]
    pub paid_status: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "companyId", default)]
    pub company_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ListResponse;

    #[test]
    fn test_deserialize_page() {
        let json = r#"{
            "data": [{
                "invoiceNo": "INV-001",
                "invoiceDate": "2025-01-15",
                "customerName": "Acme",
                "salesPersonName": "Alice",
                "poType": "STANDARD",
                "paidStatus": "PAID",
                "amount": 1200.0
            }],
            "totalRecords": 1,
            "grandTotal_amount": 1200.0
        }"#;
        let page: ListResponse<SalesInvoice> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data[0].invoice_no, "INV-001");
        assert_eq!(page.data[0].company_id, None);
        assert_eq!(page.grand_total_amount, Some(1200.0));
    }
}
