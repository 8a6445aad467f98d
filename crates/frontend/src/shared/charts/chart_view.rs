//! One parameterized SVG chart for every dashboard series.
//!
//! Drawing happens in a fixed viewBox coordinate space; the SVG scales to the
//! container width.

use super::reshape::ChartData;
use super::tooltip::{tooltip_position, Size};
use crate::shared::number_format::{format_compact, format_money};
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 800.0;
const PAD_LEFT: f64 = 56.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;
const GRID_LINES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

/// Round the axis maximum up to 1, 2 or 5 × 10^n
pub fn nice_max(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let normalized = value / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// SVG coordinate as attribute text
fn n(value: f64) -> String {
    format!("{:.1}", value)
}

#[derive(Debug, Clone, PartialEq)]
struct Hover {
    label: String,
    series: String,
    value: f64,
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Copy)]
struct Plot {
    height: f64,
    max: f64,
    slot: f64,
}

impl Plot {
    fn new(data: &ChartData, height: f64) -> Self {
        let slots = data.labels.len().max(1) as f64;
        Self {
            height,
            max: nice_max(data.max_value()),
            slot: (VIEW_WIDTH - PAD_LEFT - PAD_RIGHT) / slots,
        }
    }

    fn inner_height(&self) -> f64 {
        self.height - PAD_TOP - PAD_BOTTOM
    }

    fn y(&self, value: f64) -> f64 {
        PAD_TOP + self.inner_height() * (1.0 - (value / self.max).clamp(0.0, 1.0))
    }

    fn slot_center(&self, index: usize) -> f64 {
        PAD_LEFT + self.slot * (index as f64 + 0.5)
    }
}

#[component]
pub fn ChartView(
    #[prop(into)] data: Signal<ChartData>,
    kind: ChartKind,
    #[prop(optional)] height: Option<f64>,
) -> impl IntoView {
    let height = height.unwrap_or(320.0);
    let hovered = RwSignal::new(None::<Hover>);

    let grid = move || {
        let plot = data.with(|d| Plot::new(d, height));
        (0..=GRID_LINES)
            .map(|i| {
                let value = plot.max * i as f64 / GRID_LINES as f64;
                let y = plot.y(value);
                view! {
                    <g class="chart__grid">
                        <line x1=n(PAD_LEFT) x2=n(VIEW_WIDTH - PAD_RIGHT) y1=n(y) y2=n(y) stroke="#e5e7eb" />
                        <text x=n(PAD_LEFT - 6.0) y=n(y + 4.0) text-anchor="end" font-size="11" fill="#6b7280">
                            {format_compact(value)}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    let axis_labels = move || {
        data.with(|d| {
            let plot = Plot::new(d, height);
            d.labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    view! {
                        <text
                            x=n(plot.slot_center(i))
                            y=n(height - 8.0)
                            text-anchor="middle"
                            font-size="11"
                            fill="#6b7280"
                        >
                            {label.clone()}
                        </text>
                    }
                })
                .collect_view()
        })
    };

    let series = move || {
        let chart = data.get();
        let plot = Plot::new(&chart, height);
        let count = chart.datasets.len().max(1) as f64;

        chart
            .datasets
            .iter()
            .enumerate()
            .map(|(series_index, ds)| {
                let color = ds.color.clone();
                match kind {
                    ChartKind::Bar => {
                        let thickness = (ds.bar_thickness as f64).min(plot.slot / count);
                        ds.data
                            .iter()
                            .enumerate()
                            .map(|(i, value)| {
                                let x = plot.slot_center(i) - thickness * count / 2.0
                                    + thickness * series_index as f64;
                                let y = plot.y(*value);
                                let hover = Hover {
                                    label: chart.labels.get(i).cloned().unwrap_or_default(),
                                    series: ds.label.clone(),
                                    value: *value,
                                    x: x + thickness / 2.0,
                                    y,
                                };
                                view! {
                                    <rect
                                        x=n(x)
                                        y=n(y)
                                        width=n(thickness)
                                        height=n((PAD_TOP + plot.inner_height() - y).max(0.0))
                                        fill=color.clone()
                                        on:mouseenter=move |_| hovered.set(Some(hover.clone()))
                                        on:mouseleave=move |_| hovered.set(None)
                                    />
                                }
                                .into_any()
                            })
                            .collect_view()
                            .into_any()
                    }
                    ChartKind::Line => {
                        let points = ds
                            .data
                            .iter()
                            .enumerate()
                            .map(|(i, v)| format!("{:.1},{:.1}", plot.slot_center(i), plot.y(*v)))
                            .collect::<Vec<_>>()
                            .join(" ");
                        let dots = ds
                            .data
                            .iter()
                            .enumerate()
                            .map(|(i, value)| {
                                let hover = Hover {
                                    label: chart.labels.get(i).cloned().unwrap_or_default(),
                                    series: ds.label.clone(),
                                    value: *value,
                                    x: plot.slot_center(i),
                                    y: plot.y(*value),
                                };
                                let (cx, cy) = (n(hover.x), n(hover.y));
                                view! {
                                    <circle
                                        cx=cx
                                        cy=cy
                                        r="4"
                                        fill=color.clone()
                                        on:mouseenter=move |_| hovered.set(Some(hover.clone()))
                                        on:mouseleave=move |_| hovered.set(None)
                                    />
                                }
                            })
                            .collect_view();
                        view! {
                            <g>
                                <polyline points=points fill="none" stroke=color.clone() stroke-width="2" />
                                {dots}
                            </g>
                        }
                        .into_any()
                    }
                }
            })
            .collect_view()
    };

    let tooltip = move || {
        hovered.get().map(|h| {
            let line1 = format!("{} · {}", h.series, h.label);
            let line2 = format_money(h.value);
            let width = 16.0 + 7.0 * line1.chars().count().max(line2.chars().count()) as f64;
            let size = Size::new(width, 40.0);
            let (x, y) = tooltip_position((h.x, h.y), size, Size::new(VIEW_WIDTH, height));
            view! {
                <g class="chart__tooltip" pointer-events="none">
                    <rect x=n(x) y=n(y) width=n(size.width) height=n(size.height) rx="4" fill="#111827" opacity="0.9" />
                    <text x=n(x + 8.0) y=n(y + 16.0) font-size="11" fill="#f9fafb">{line1}</text>
                    <text x=n(x + 8.0) y=n(y + 32.0) font-size="12" font-weight="600" fill="#f9fafb">{line2}</text>
                </g>
            }
        })
    };

    let legend = move || {
        data.with(|d| {
            d.datasets
                .iter()
                .map(|ds| {
                    let swatch = format!("background: {};", ds.color);
                    let unplaced = (ds.unplaced != 0.0).then(|| {
                        view! {
                            <span class="chart__legend-unplaced" title="Rows without a month">
                                {format!(" (+{} without month)", format_money(ds.unplaced))}
                            </span>
                        }
                    });
                    view! {
                        <span class="chart__legend-item">
                            <span class="chart__legend-swatch" style=swatch></span>
                            {ds.label.clone()}
                            {unplaced}
                        </span>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="chart">
            <Show
                when=move || data.with(|d| !d.is_empty())
                fallback=|| view! { <div class="chart__empty">"No data for the selected period"</div> }
            >
                <svg
                    class="chart__svg"
                    viewBox=format!("0 0 {} {}", VIEW_WIDTH, height)
                    on:mouseleave=move |_| hovered.set(None)
                >
                    {grid}
                    {series}
                    {axis_labels}
                    {tooltip}
                </svg>
                <div class="chart__legend">{legend}</div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(-5.0), 1.0);
        assert_eq!(nice_max(1.0), 1.0);
        assert_eq!(nice_max(130.0), 200.0);
        assert_eq!(nice_max(4_200.0), 5_000.0);
        assert_eq!(nice_max(7_500.0), 10_000.0);
    }
}
