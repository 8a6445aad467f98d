use crate::shared::icons::icon;
use crate::shared::query::use_query_stores;
use contracts::shared::query::SearchPatch;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DEBOUNCE_MS: u32 = 350;

/// Search field selector plus a debounced term input
#[component]
pub fn SearchInput(
    context: &'static str,
    /// (API field, label) pairs
    fields: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let stores = use_query_stores();

    if let Some((first, _)) = fields.first() {
        if stores.searches.get_untracked(context).search_by.is_empty() {
            stores.searches.apply(context, SearchPatch::field(*first));
        }
    }

    let text = RwSignal::new(stores.searches.get_untracked(context).search_term);
    let pending = StoredValue::new_local(None::<Timeout>);

    // URL или другой виджет могли поменять поиск
    Effect::new(move |_| {
        let term = stores.searches.get(context).search_term;
        if text.get_untracked() != term {
            text.set(term);
        }
    });

    let on_input = move |value: String| {
        text.set(value.clone());
        if let Some(previous) = pending.try_update_value(|p| p.take()).flatten() {
            previous.cancel();
        }
        let timeout = Timeout::new(DEBOUNCE_MS, move || {
            stores.set_search(context, SearchPatch::term(value));
        });
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        text.set(String::new());
        stores.set_search(context, SearchPatch::term(""));
    };

    view! {
        <div class="search-input">
            <select
                class="search-input__field"
                prop:value=move || stores.searches.get(context).search_by
                on:change=move |ev| stores.set_search(context, SearchPatch::field(event_target_value(&ev)))
            >
                {fields
                    .iter()
                    .map(|(field, label)| view! { <option value=*field>{*label}</option> })
                    .collect_view()}
            </select>
            {icon("search")}
            <input
                type="search"
                class="search-input__term"
                placeholder="Search..."
                prop:value=move || text.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            <Show when=move || !text.with(|t| t.is_empty())>
                <button class="search-input__clear" on:click=clear title="Clear search">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
