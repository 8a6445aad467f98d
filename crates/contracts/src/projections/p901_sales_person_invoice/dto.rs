use serde::{Deserialize, Serialize};

/// Счёт в разрезе торгового представителя (с остатком к оплате)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPersonInvoice {
    #[serde(rename = "salesPersonName")]
    pub sales_person_name: String,
    #[serde(rename = "invoiceNo")]
    pub invoice_no: String,
    #[serde(rename = "invoiceDate")]
    pub invoice_date: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<String>,
    #[serde(rename = "customerName", default)]
    pub customer_name: String,
    #[serde(rename = "paidStatus", default)]
    pub paid_status: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "paidAmount", default)]
    pub paid_amount: f64,
}

impl SalesPersonInvoice {
    pub fn outstanding(&self) -> f64 {
        (self.amount - self.paid_amount).max(0.0)
    }
}

/// Option of the sales person facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPersonOption {
    pub name: String,
    #[serde(rename = "invoiceCount", default)]
    pub invoice_count: u64,
}

/// Totals shown on the sales person summary card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesPersonSummary {
    #[serde(rename = "salesPersonName", default)]
    pub sales_person_name: Option<String>,
    #[serde(rename = "invoiceCount", default)]
    pub invoice_count: u64,
    #[serde(rename = "totalAmount", default)]
    pub total_amount: f64,
    #[serde(rename = "paidAmount", default)]
    pub paid_amount: f64,
    #[serde(rename = "unpaidAmount", default)]
    pub unpaid_amount: f64,
}

impl SalesPersonSummary {
    /// Share of the total already collected, 0..=100
    pub fn paid_percent(&self) -> f64 {
        if self.total_amount <= 0.0 {
            0.0
        } else {
            (self.paid_amount / self.total_amount * 100.0).clamp(0.0, 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outstanding_never_negative() {
        let inv = SalesPersonInvoice {
            sales_person_name: "Alice".into(),
            invoice_no: "INV-9".into(),
            invoice_date: "2025-02-01".into(),
            due_date: None,
            customer_name: "Acme".into(),
            paid_status: "PAID".into(),
            amount: 100.0,
            paid_amount: 120.0,
        };
        assert_eq!(inv.outstanding(), 0.0);
    }

    #[test]
    fn test_paid_percent() {
        let s = SalesPersonSummary {
            total_amount: 200.0,
            paid_amount: 50.0,
            ..Default::default()
        };
        assert_eq!(s.paid_percent(), 25.0);
        assert_eq!(SalesPersonSummary::default().paid_percent(), 0.0);
    }
}
