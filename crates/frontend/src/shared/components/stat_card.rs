use crate::shared::icons::icon;
use crate::shared::number_format::{format_int, format_money, format_percent};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Money,
    Integer,
    Percent,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Money => format_money(value),
            ValueFormat::Integer => format_int(value),
            ValueFormat::Percent => format_percent(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTone {
    Good,
    Bad,
    Warning,
    #[default]
    Neutral,
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    #[prop(into, optional)]
    tone: Signal<CardTone>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match tone.get() {
        CardTone::Good => "stat-card stat-card--success",
        CardTone::Bad => "stat-card stat-card--error",
        CardTone::Warning => "stat-card stat-card--warning",
        CardTone::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format.format(v),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_format() {
        assert_eq!(ValueFormat::Money.format(1500.0), "1,500.00");
        assert_eq!(ValueFormat::Integer.format(42.0), "42");
        assert_eq!(ValueFormat::Percent.format(66.666), "66.7%");
    }
}
