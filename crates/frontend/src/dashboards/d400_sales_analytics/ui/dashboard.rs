use crate::dashboards::d400_sales_analytics::adapters::{monthly_by_sales_person, monthly_by_year};
use crate::dashboards::d400_sales_analytics::api::{
    CONTEXT, MODULE, MONTHLY_SALES_PATH, SALES_PERSON_SALES_PATH, SUMMARY_PATH,
};
use crate::projections::p900_sales_invoice::api::{fixed_options, PO_TYPE_OPTIONS};
use crate::projections::p901_sales_person_invoice::api::use_sales_person_options;
use crate::shared::charts::{reshape, ChartKind, ChartPoint, ChartView, ColorMode, ReshapeOptions};
use crate::shared::components::advisory_notice::{AdvisoryNotice, ErrorBox};
use crate::shared::components::facet_filter::{FacetFilter, FacetTags};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::period_picker::PeriodPicker;
use crate::shared::components::stat_card::{CardTone, StatCard, ValueFormat};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::query::{
    use_api_query, use_list_query, use_query_stores, use_view_query, ViewQuerySpec,
};
use contracts::dashboards::d400_sales_analytics::dto::{PeriodAmountRow, SalesSummary};
use contracts::shared::query::Facet;
use leptos::prelude::*;

const CHART_HEIGHT: f64 = 320.0;
const CHART_HEIGHT_FULL_SCREEN: f64 = 560.0;

/// Card with a chart, a bar/line switch and a full-screen toggle.
///
/// The reshaped data is memoized on the points and the full-screen flag.
#[component]
fn ChartCard(
    title: &'static str,
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
    colors: ColorMode,
    initial_kind: ChartKind,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let kind = RwSignal::new(initial_kind);
    let full_screen = RwSignal::new(false);
    let colors = StoredValue::new(colors);

    let data = Memo::new(move |_| {
        let options = ReshapeOptions::monthly(colors.get_value(), full_screen.get());
        points.with(|p| reshape(p, &options))
    });

    let kind_button = move |target: ChartKind, label: &'static str| {
        view! {
            <button
                class="button button--ghost button--small"
                class:button--active=move || kind.get() == target
                on:click=move |_| kind.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="chart-card" class:chart-card--fullscreen=move || full_screen.get()>
            <div class="chart-card__header">
                <h3 class="chart-card__title">{title}</h3>
                <div class="chart-card__actions">
                    {kind_button(ChartKind::Bar, "Bar")}
                    {kind_button(ChartKind::Line, "Line")}
                    <button
                        class="button button--ghost button--small"
                        title=move || if full_screen.get() { "Exit full screen" } else { "Full screen" }
                        on:click=move |_| full_screen.update(|f| *f = !*f)
                    >
                        {move || if full_screen.get() { icon("minimize") } else { icon("maximize") }}
                    </button>
                </div>
            </div>
            <ErrorBox error=error />
            // высота задаётся при создании графика, поэтому пересоздаём его
            {move || {
                let height = if full_screen.get() { CHART_HEIGHT_FULL_SCREEN } else { CHART_HEIGHT };
                view! { <ChartView data=data kind=kind.get() height=height /> }
            }}
        </div>
    }
}

fn unpaid_tone(summary: &SalesSummary) -> CardTone {
    if summary.unpaid_amount <= 0.0 {
        CardTone::Good
    } else if summary.unpaid_amount > summary.paid_amount {
        CardTone::Bad
    } else {
        CardTone::Warning
    }
}

#[component]
pub fn SalesAnalyticsDashboard() -> impl IntoView {
    let stores = use_query_stores();
    let view_query = use_view_query(ViewQuerySpec::aggregate(MODULE, CONTEXT));

    let monthly = use_list_query::<PeriodAmountRow>(MONTHLY_SALES_PATH, "monthly sales", view_query.query);
    let by_person =
        use_list_query::<PeriodAmountRow>(SALES_PERSON_SALES_PATH, "sales by person", view_query.query);
    let summary = use_api_query::<SalesSummary>(SUMMARY_PATH, "sales summary", view_query.query);
    let sales_persons = use_sales_person_options();

    let is_filter_expanded = RwSignal::new(true);
    let active_count = Signal::derive(move || stores.active_filter_count(CONTEXT));
    let advisory_text =
        Signal::derive(move || view_query.advisory.get().map(|a| a.message().to_string()));

    let summary_value = move |f: fn(&SalesSummary) -> f64| {
        Signal::derive(move || summary.data.with(|s| s.as_ref().map(f)))
    };

    let refresh = move |_| {
        monthly.refetch();
        by_person.refetch();
        summary.refetch();
    };

    view! {
        <PageFrame page_id="d400_sales_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sales Analytics"</h1>
                </div>
                <div class="page__header-right">
                    <button class="button button--secondary" on:click=refresh>
                        {icon("refresh")}
                        " Refresh"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <AdvisoryNotice
                    message=advisory_text
                    on_dismiss=Callback::new(move |_| view_query.advisory.set(None))
                />

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_count
                    on_reset=Callback::new(move |_| stores.reset_all(CONTEXT))
                    filter_content=move || view! {
                        <div class="filter-panel__row">
                            <PeriodPicker context=CONTEXT />
                        </div>
                        <div class="filter-panel__row">
                            <FacetFilter
                                context=CONTEXT
                                facet=Facet::PoType
                                options=Signal::derive(|| fixed_options(PO_TYPE_OPTIONS))
                            />
                            <FacetFilter
                                context=CONTEXT
                                facet=Facet::SalesPersonName
                                options=sales_persons
                            />
                        </div>
                    }
                    filter_tags=move || view! { <FacetTags context=CONTEXT /> }
                />

                <ErrorBox error=summary.error />
                <div class="stat-cards">
                    <StatCard label="Total sales" icon_name="money" value=summary_value(|s| s.total_sales) format=ValueFormat::Money />
                    <StatCard
                        label="Invoices"
                        icon_name="invoices"
                        value=summary_value(|s| s.invoice_count as f64)
                        format=ValueFormat::Integer
                    />
                    <StatCard label="Paid" icon_name="check" value=summary_value(|s| s.paid_amount) format=ValueFormat::Money />
                    <StatCard
                        label="Unpaid"
                        icon_name="alert"
                        value=summary_value(|s| s.unpaid_amount)
                        format=ValueFormat::Money
                        tone=Signal::derive(move || {
                            summary.data.with(|s| s.as_ref().map(unpaid_tone).unwrap_or_default())
                        })
                    />
                </div>

                <div class="chart-grid">
                    <ChartCard
                        title="Monthly sales by year"
                        points=Signal::derive(move || monthly.data.with(|d| {
                            d.as_ref().map(|r| monthly_by_year(&r.data)).unwrap_or_default()
                        }))
                        colors=ColorMode::default()
                        initial_kind=ChartKind::Bar
                        error=monthly.error
                    />
                    <ChartCard
                        title="Monthly sales by sales person"
                        points=Signal::derive(move || by_person.data.with(|d| {
                            d.as_ref().map(|r| monthly_by_sales_person(&r.data)).unwrap_or_default()
                        }))
                        colors=ColorMode::Mapped(Vec::new())
                        initial_kind=ChartKind::Line
                        error=by_person.error
                    />
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaid_tone() {
        let mut s = SalesSummary {
            paid_amount: 100.0,
            ..Default::default()
        };
        assert_eq!(unpaid_tone(&s), CardTone::Good);
        s.unpaid_amount = 40.0;
        assert_eq!(unpaid_tone(&s), CardTone::Warning);
        s.unpaid_amount = 140.0;
        assert_eq!(unpaid_tone(&s), CardTone::Bad);
    }
}
