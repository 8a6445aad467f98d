use crate::shared::components::stat_card::{CardTone, StatCard, ValueFormat};
use contracts::projections::p901_sales_person_invoice::dto::SalesPersonSummary;
use leptos::prelude::*;

/// Below this share of collected money the card turns red
const LOW_COLLECTION_PERCENT: f64 = 50.0;

pub fn collection_tone(summary: &SalesPersonSummary) -> CardTone {
    if summary.total_amount <= 0.0 {
        CardTone::Neutral
    } else if summary.paid_percent() >= 100.0 {
        CardTone::Good
    } else if summary.paid_percent() < LOW_COLLECTION_PERCENT {
        CardTone::Bad
    } else {
        CardTone::Warning
    }
}

/// Totals of one sales person, or of everyone when nobody is selected
#[component]
pub fn SalesPersonSummaryCard(
    #[prop(into)] summary: Signal<Option<SalesPersonSummary>>,
    #[prop(into, optional)] is_loading: Signal<bool>,
) -> impl IntoView {
    let title = move || {
        summary
            .get()
            .and_then(|s| s.sales_person_name)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "All sales persons".to_string())
    };

    let amount = move |f: fn(&SalesPersonSummary) -> f64| {
        Signal::derive(move || summary.get().map(|s| f(&s)))
    };

    view! {
        <div class="summary-card" class:summary-card--loading=move || is_loading.get()>
            <div class="summary-card__header">
                <h3 class="summary-card__title">{title}</h3>
                <span class="summary-card__count">
                    {move || summary.get().map(|s| format!("{} invoices", s.invoice_count)).unwrap_or_default()}
                </span>
            </div>
            <div class="summary-card__stats">
                <StatCard label="Total" icon_name="money" value=amount(|s| s.total_amount) format=ValueFormat::Money />
                <StatCard
                    label="Paid"
                    icon_name="check"
                    value=amount(|s| s.paid_amount)
                    format=ValueFormat::Money
                    subtitle=Signal::derive(move || {
                        summary.get().map(|s| format!("{:.1}% collected", s.paid_percent()))
                    })
                />
                <StatCard
                    label="Unpaid"
                    icon_name="alert"
                    value=amount(|s| s.unpaid_amount)
                    format=ValueFormat::Money
                    tone=Signal::derive(move || summary.get().map(|s| collection_tone(&s)).unwrap_or_default())
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total: f64, paid: f64) -> SalesPersonSummary {
        SalesPersonSummary {
            total_amount: total,
            paid_amount: paid,
            unpaid_amount: total - paid,
            ..Default::default()
        }
    }

    #[test]
    fn test_collection_tone() {
        assert_eq!(collection_tone(&summary(0.0, 0.0)), CardTone::Neutral);
        assert_eq!(collection_tone(&summary(100.0, 100.0)), CardTone::Good);
        assert_eq!(collection_tone(&summary(100.0, 60.0)), CardTone::Warning);
        assert_eq!(collection_tone(&summary(100.0, 10.0)), CardTone::Bad);
    }
}
