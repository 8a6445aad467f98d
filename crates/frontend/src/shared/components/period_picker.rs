use crate::shared::date_utils::{from_month_input, to_month_input};
use crate::shared::query::use_query_stores;
use chrono::{Datelike, Months, NaiveDate, Utc};
use contracts::shared::query::month_start;
use leptos::prelude::*;

fn current_month() -> NaiveDate {
    month_start(Utc::now().date_naive())
}

/// Start/end month-year selection with quick buttons.
///
/// Values go to the period store unchecked; an end before the start is
/// corrected when the request is built.
#[component]
pub fn PeriodPicker(context: &'static str) -> impl IntoView {
    let stores = use_query_stores();

    let set_range = move |start: Option<NaiveDate>, end: Option<NaiveDate>| {
        stores.set_period_start(context, start);
        stores.set_period_end(context, end);
    };

    let on_current_month = move |_| {
        let month = current_month();
        set_range(Some(month), Some(month));
    };

    let on_previous_month = move |_| {
        let month = current_month()
            .checked_sub_months(Months::new(1))
            .unwrap_or_else(current_month);
        set_range(Some(month), Some(month));
    };

    let on_year_to_date = move |_| {
        let now = current_month();
        set_range(NaiveDate::from_ymd_opt(now.year(), 1, 1), Some(now));
    };

    let button_class = "button button--secondary button--small";

    view! {
        <div class="period-picker">
            <label class="period-picker__field">
                <span>"From"</span>
                <input
                    type="month"
                    prop:value=move || to_month_input(stores.periods.get(context).start_period)
                    on:change=move |ev| {
                        stores.set_period_start(context, from_month_input(&event_target_value(&ev)));
                    }
                />
            </label>
            <label class="period-picker__field">
                <span>"To"</span>
                <input
                    type="month"
                    prop:value=move || to_month_input(stores.periods.get(context).end_period)
                    on:change=move |ev| {
                        stores.set_period_end(context, from_month_input(&event_target_value(&ev)));
                    }
                />
            </label>
            <div class="period-picker__quick">
                <button class=button_class on:click=on_previous_month title="Previous month">"-1M"</button>
                <button class=button_class on:click=on_current_month title="Current month">"0M"</button>
                <button class=button_class on:click=on_year_to_date title="Year to date">"YTD"</button>
                <button
                    class=button_class
                    on:click=move |_| set_range(None, None)
                    disabled=move || stores.periods.get(context).is_empty()
                    title="Any period"
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
