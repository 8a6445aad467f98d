//! Rows → chart series.
//!
//! Every series gets one value per label; buckets without a source row are 0.
//! Values of rows without a bucket are kept per series in `unplaced`.
//! Series are ordered by key so colors do not depend on row order.

use super::palette::{hash_color, palette_color};
use std::collections::BTreeMap;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const BAR_THICKNESS: u32 = 14;
pub const BAR_THICKNESS_FULL_SCREEN: u32 = 28;

pub fn month_labels() -> Vec<String> {
    MONTH_LABELS.iter().map(|m| m.to_string()).collect()
}

/// One source value: which series, which label bucket (index into labels)
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub series: String,
    /// `None` when the row could not be placed; the value goes to `Dataset::unplaced`
    pub bucket: Option<usize>,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(series: impl Into<String>, bucket: Option<usize>, value: f64) -> Self {
        Self {
            series: series.into(),
            bucket,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorMode {
    /// By series index, cycling; an empty list means the default palette
    Palette(Vec<String>),
    /// Explicit color per key, hash-based color for the rest
    Mapped(Vec<(String, String)>),
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Palette(Vec::new())
    }
}

impl ColorMode {
    fn color_for(&self, index: usize, key: &str) -> String {
        match self {
            ColorMode::Palette(colors) if colors.is_empty() => palette_color(index).to_string(),
            ColorMode::Palette(colors) => colors[index % colors.len()].clone(),
            ColorMode::Mapped(mapping) => mapping
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, c)| c.clone())
                .unwrap_or_else(|| hash_color(key)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReshapeOptions {
    pub labels: Vec<String>,
    pub colors: ColorMode,
    pub full_screen: bool,
}

impl ReshapeOptions {
    pub fn monthly(colors: ColorMode, full_screen: bool) -> Self {
        Self {
            labels: month_labels(),
            colors,
            full_screen,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    /// Sum of values that have no label bucket (e.g. a yearly total)
    pub unplaced: f64,
    pub color: String,
    pub bar_thickness: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .fold(0.0, f64::max)
    }

    pub fn unplaced_total(&self) -> f64 {
        self.datasets.iter().map(|d| d.unplaced).sum()
    }
}

pub fn reshape(points: &[ChartPoint], options: &ReshapeOptions) -> ChartData {
    let width = options.labels.len();
    let mut series: BTreeMap<&str, (Vec<f64>, f64)> = BTreeMap::new();

    for point in points {
        let (values, unplaced) = series
            .entry(point.series.as_str())
            .or_insert_with(|| (vec![0.0; width], 0.0));
        match point.bucket.and_then(|b| values.get_mut(b)) {
            Some(slot) => *slot += point.value,
            None => *unplaced += point.value,
        }
    }

    let bar_thickness = if options.full_screen {
        BAR_THICKNESS_FULL_SCREEN
    } else {
        BAR_THICKNESS
    };

    let datasets = series
        .into_iter()
        .enumerate()
        .map(|(index, (key, (data, unplaced)))| Dataset {
            label: key.to_string(),
            color: options.colors.color_for(index, key),
            data,
            unplaced,
            bar_thickness,
        })
        .collect();

    let chart = ChartData {
        labels: options.labels.clone(),
        datasets,
    };
    let unplaced = chart.unplaced_total();
    if unplaced != 0.0 {
        log::warn!("{} of chart total has no label bucket and is shown in the legend only", unplaced);
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::charts::palette::DEFAULT_PALETTE;

    #[test]
    fn test_empty_input_gives_no_datasets() {
        let data = reshape(&[], &ReshapeOptions::monthly(ColorMode::default(), false));
        assert!(data.datasets.is_empty());
        assert_eq!(data.labels.len(), 12);
    }

    #[test]
    fn test_unplaced_year_row_keeps_its_amount() {
        let palette = ColorMode::Palette(vec!["#111111".into(), "#222222".into()]);
        let points = vec![ChartPoint::new("2024", None, 100.0)];
        let data = reshape(&points, &ReshapeOptions::monthly(palette, false));

        assert_eq!(data.datasets.len(), 1);
        let ds = &data.datasets[0];
        assert_eq!(ds.label, "2024");
        assert_eq!(ds.color, "#111111");
        assert_eq!(ds.data.len(), MONTH_LABELS.len());
        // месяцев нет в источнике
        assert!(ds.data.iter().all(|v| *v == 0.0));
        assert_eq!(ds.unplaced, 100.0);
        assert_eq!(data.unplaced_total(), 100.0);
    }

    #[test]
    fn test_out_of_range_bucket_is_unplaced() {
        let points = vec![
            ChartPoint::new("2024", Some(2), 10.0),
            ChartPoint::new("2024", Some(12), 4.0),
        ];
        let data = reshape(&points, &ReshapeOptions::monthly(ColorMode::default(), false));
        let ds = &data.datasets[0];
        assert_eq!(ds.data.iter().sum::<f64>() + ds.unplaced, 14.0);
        assert_eq!(ds.unplaced, 4.0);
    }

    #[test]
    fn test_missing_buckets_are_zero() {
        let points = vec![
            ChartPoint::new("2024", Some(0), 10.0),
            ChartPoint::new("2024", Some(0), 5.0),
            ChartPoint::new("2025", Some(11), 7.0),
        ];
        let data = reshape(&points, &ReshapeOptions::monthly(ColorMode::default(), false));
        assert_eq!(data.datasets.len(), 2);
        assert_eq!(data.datasets[0].data[0], 15.0);
        assert_eq!(data.datasets[0].data[11], 0.0);
        assert_eq!(data.datasets[1].data[11], 7.0);
        assert!(data.datasets.iter().all(|d| d.data.len() == 12));
    }

    #[test]
    fn test_colors_follow_key_order_and_cycle() {
        let points: Vec<ChartPoint> = (0..DEFAULT_PALETTE.len() + 1)
            .rev()
            .map(|i| ChartPoint::new(format!("s{:02}", i), Some(0), 1.0))
            .collect();
        let data = reshape(&points, &ReshapeOptions::monthly(ColorMode::default(), false));
        assert_eq!(data.datasets[0].label, "s00");
        assert_eq!(data.datasets[0].color, DEFAULT_PALETTE[0]);
        assert_eq!(
            data.datasets[DEFAULT_PALETTE.len()].color,
            DEFAULT_PALETTE[0]
        );
    }

    #[test]
    fn test_mapped_colors_fall_back_to_hash() {
        let colors = ColorMode::Mapped(vec![("Alice".into(), "#ff0000".into())]);
        let points = vec![
            ChartPoint::new("Alice", Some(1), 1.0),
            ChartPoint::new("Bob", Some(1), 2.0),
        ];
        let data = reshape(&points, &ReshapeOptions::monthly(colors, false));
        assert_eq!(data.datasets[0].color, "#ff0000");
        assert_eq!(data.datasets[1].color, hash_color("Bob"));
    }

    #[test]
    fn test_full_screen_changes_bar_thickness() {
        let points = vec![ChartPoint::new("2024", Some(0), 1.0)];
        let normal = reshape(&points, &ReshapeOptions::monthly(ColorMode::default(), false));
        let full = reshape(&points, &ReshapeOptions::monthly(ColorMode::default(), true));
        assert_eq!(normal.datasets[0].bar_thickness, BAR_THICKNESS);
        assert_eq!(full.datasets[0].bar_thickness, BAR_THICKNESS_FULL_SCREEN);
    }
}
