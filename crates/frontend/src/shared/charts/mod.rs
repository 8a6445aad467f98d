pub mod chart_view;
pub mod palette;
pub mod reshape;
pub mod tooltip;

pub use chart_view::{ChartKind, ChartView};
pub use reshape::{reshape, ChartData, ChartPoint, ColorMode, Dataset, ReshapeOptions};
