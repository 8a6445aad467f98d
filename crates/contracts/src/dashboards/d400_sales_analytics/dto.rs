use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::shared::query::parse_period_label;

/// Строка агрегата продаж за период, как её отдаёт API графиков.
///
/// `period` arrives in several shapes depending on the endpoint:
/// `Jan2024`, `2024-01` or a bare year `2024` (then `month` carries the month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAmountRow {
    pub period: String,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "salesPersonName", default)]
    pub sales_person_name: Option<String>,
}

impl PeriodAmountRow {
    pub fn new(period: impl Into<String>, amount: f64) -> Self {
        Self {
            period: period.into(),
            month: None,
            amount,
            sales_person_name: None,
        }
    }

    /// (year, month 1..=12) resolved from `period` and `month`
    pub fn year_month(&self) -> (Option<i32>, Option<u32>) {
        let period = self.period.trim();
        if let Ok(date) = parse_period_label(period) {
            return (Some(date.year()), Some(date.month()));
        }
        if let Some((y, m)) = period.split_once('-') {
            let year = y.parse::<i32>().ok();
            let month = m.parse::<u32>().ok().filter(|m| (1..=12).contains(m));
            return (year, month.or(self.valid_month()));
        }
        (period.parse::<i32>().ok(), self.valid_month())
    }

    fn valid_month(&self) -> Option<u32> {
        self.month.filter(|m| (1..=12).contains(m))
    }
}

/// Top-of-dashboard totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(rename = "totalSales", default)]
    pub total_sales: f64,
    #[serde(rename = "invoiceCount", default)]
    pub invoice_count: u64,
    #[serde(rename = "paidAmount", default)]
    pub paid_amount: f64,
    #[serde(rename = "unpaidAmount", default)]
    pub unpaid_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month_shapes() {
        assert_eq!(PeriodAmountRow::new("Mar2024", 1.0).year_month(), (Some(2024), Some(3)));
        assert_eq!(PeriodAmountRow::new("2024-11", 1.0).year_month(), (Some(2024), Some(11)));

        let mut bare = PeriodAmountRow::new("2024", 1.0);
        assert_eq!(bare.year_month(), (Some(2024), None));
        bare.month = Some(7);
        assert_eq!(bare.year_month(), (Some(2024), Some(7)));
        bare.month = Some(13);
        assert_eq!(bare.year_month(), (Some(2024), None));
    }
}
