//! Server rows → chart points. Pure, so it is tested without a browser.

use crate::shared::charts::ChartPoint;
use contracts::dashboards::d400_sales_analytics::dto::PeriodAmountRow;

pub const UNKNOWN_YEAR: &str = "Unknown";
pub const UNASSIGNED: &str = "Unassigned";

fn month_bucket(month: Option<u32>) -> Option<usize> {
    month.map(|m| (m - 1) as usize)
}

/// One series per year, month as the bucket
pub fn monthly_by_year(rows: &[PeriodAmountRow]) -> Vec<ChartPoint> {
    rows.iter()
        .map(|row| {
            let (year, month) = row.year_month();
            let series = year
                .map(|y| y.to_string())
                .unwrap_or_else(|| UNKNOWN_YEAR.to_string());
            ChartPoint::new(series, month_bucket(month), row.amount)
        })
        .collect()
}

/// One series per sales person, month as the bucket (years folded together)
pub fn monthly_by_sales_person(rows: &[PeriodAmountRow]) -> Vec<ChartPoint> {
    rows.iter()
        .map(|row| {
            let (_, month) = row.year_month();
            let series = row
                .sales_person_name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(UNASSIGNED);
            ChartPoint::new(series, month_bucket(month), row.amount)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::charts::{reshape, ColorMode, ReshapeOptions};

    fn person_row(period: &str, person: Option<&str>, amount: f64) -> PeriodAmountRow {
        PeriodAmountRow {
            sales_person_name: person.map(str::to_string),
            ..PeriodAmountRow::new(period, amount)
        }
    }

    #[test]
    fn test_monthly_by_year_buckets() {
        let rows = vec![
            PeriodAmountRow::new("Jan2024", 100.0),
            PeriodAmountRow::new("2024-03", 50.0),
            PeriodAmountRow::new("Feb2025", 70.0),
        ];
        let points = monthly_by_year(&rows);
        assert_eq!(points[0], ChartPoint::new("2024", Some(0), 100.0));
        assert_eq!(points[1], ChartPoint::new("2024", Some(2), 50.0));
        assert_eq!(points[2], ChartPoint::new("2025", Some(1), 70.0));

        let chart = reshape(&points, &ReshapeOptions::monthly(ColorMode::default(), false));
        assert_eq!(chart.labels.len(), 12);
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[0].label, "2024");
        assert_eq!(chart.datasets[0].data[1], 0.0);
        assert_eq!(chart.datasets[0].data[2], 50.0);
    }

    #[test]
    fn test_unparseable_period_keeps_series() {
        let points = monthly_by_year(&[PeriodAmountRow::new("garbage", 10.0)]);
        assert_eq!(points, vec![ChartPoint::new(UNKNOWN_YEAR, None, 10.0)]);
    }

    #[test]
    fn test_bare_year_row_is_not_lost() {
        let points = monthly_by_year(&[PeriodAmountRow::new("2024", 100.0)]);
        assert_eq!(points, vec![ChartPoint::new("2024", None, 100.0)]);

        let chart = reshape(&points, &ReshapeOptions::monthly(ColorMode::default(), false));
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].data.len(), 12);
        let shown: f64 = chart.datasets[0].data.iter().sum::<f64>() + chart.datasets[0].unplaced;
        assert_eq!(shown, 100.0);
    }

    #[test]
    fn test_monthly_by_sales_person() {
        let rows = vec![
            person_row("Jan2024", Some("Alice"), 10.0),
            person_row("Jan2025", Some("Alice"), 5.0),
            person_row("Dec2024", Some("  "), 3.0),
        ];
        let points = monthly_by_sales_person(&rows);
        assert_eq!(points[2].series, UNASSIGNED);
        assert_eq!(points[2].bucket, Some(11));

        let chart = reshape(&points, &ReshapeOptions::monthly(ColorMode::Mapped(Vec::new()), false));
        let alice = chart
            .datasets
            .iter()
            .find(|d| d.label == "Alice")
            .map(|d| d.data[0]);
        assert_eq!(alice, Some(15.0));
    }
}
