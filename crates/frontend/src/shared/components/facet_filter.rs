//! Faceted multi-select bound to the filter store of one context

use super::filter_panel::FilterTag;
use super::toast::ToastService;
use crate::shared::query::use_query_stores;
use contracts::shared::query::{Facet, FilterChange};
use leptos::prelude::*;

fn announce(change: &FilterChange, toasts: Option<ToastService>) {
    if !change.cleared_any() {
        return;
    }
    let names: Vec<&str> = change.cleared.iter().map(|f| f.label()).collect();
    let message = format!("{} filter cleared for the current selection", names.join(", "));
    log::warn!("{}", message);
    if let Some(toasts) = toasts {
        toasts.info(message);
    }
}

#[component]
pub fn FacetFilter(
    context: &'static str,
    facet: Facet,
    /// Selectable values (fixed enum or loaded from the API)
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// When set, the facet is disabled and the text explains why
    #[prop(into, optional)]
    disabled_reason: Signal<Option<String>>,
) -> impl IntoView {
    let stores = use_query_stores();
    let toasts = use_context::<ToastService>();

    let selected_count =
        move || stores.filters.get(context).values(facet).len();
    let is_disabled = move || disabled_reason.with(|r| r.is_some());

    view! {
        <fieldset class="facet-filter" disabled=is_disabled>
            <legend class="facet-filter__title">
                {facet.label()}
                {move || {
                    let count = selected_count();
                    (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                }}
            </legend>
            <div class="facet-filter__options">
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|value| {
                            let checked_value = value.clone();
                            let toggle_value = value.clone();
                            view! {
                                <label class="facet-filter__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            stores.filters.get(context).is_selected(facet, &checked_value)
                                        }
                                        on:change=move |_| {
                                            let change = stores.toggle_facet(context, facet, &toggle_value);
                                            announce(&change, toasts);
                                        }
                                    />
                                    <span>{value}</span>
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button
                class="button button--ghost facet-filter__clear"
                disabled=move || selected_count() == 0
                on:click=move |_| stores.clear_facet(context, facet)
            >
                "Clear"
            </button>
            {move || {
                disabled_reason
                    .get()
                    .map(|reason| view! { <div class="facet-filter__hint">{reason}</div> })
            }}
        </fieldset>
    }
}

/// Chips for every selected value of a context, each removable
#[component]
pub fn FacetTags(context: &'static str) -> impl IntoView {
    let stores = use_query_stores();

    move || {
        let filters = stores.filters.get(context);
        Facet::ALL
            .iter()
            .flat_map(|facet| {
                filters
                    .values(*facet)
                    .iter()
                    .map(|value| (*facet, value.clone()))
                    .collect::<Vec<_>>()
            })
            .map(|(facet, value)| {
                let label = format!("{}: {}", facet.label(), value);
                view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| {
                            stores.toggle_facet(context, facet, &value);
                        })
                    />
                }
            })
            .collect_view()
    }
}
