//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle button for the sidebar
//! - Application title
//! - Company scope selector

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary shown on the closed company selector
pub fn company_scope_label(selected: usize, total: usize) -> String {
    match selected {
        0 => "All companies".to_string(),
        n if n == total => format!("All companies ({})", n),
        1 => "1 company".to_string(),
        n => format!("{} companies", n),
    }
}

#[component]
fn CompanySelector() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let is_open = RwSignal::new(false);

    let label = move || {
        company_scope_label(
            ctx.selected_company_ids.with(|ids| ids.len()),
            ctx.companies.with(|c| c.len()),
        )
    };

    view! {
        <div class="company-selector">
            <button
                class="top-header__icon-btn company-selector__toggle"
                on:click=move |_| is_open.update(|o| *o = !*o)
                title="Company scope"
            >
                {icon("building")}
                <span>{label}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || is_open.get()>
                <div class="company-selector__dropdown">
                    {move || {
                        let companies = ctx.companies.get();
                        if companies.is_empty() {
                            return view! {
                                <div class="company-selector__empty">"No companies loaded"</div>
                            }
                            .into_any();
                        }
                        companies
                            .into_iter()
                            .map(|company| {
                                let id_checked = company.id.clone();
                                let id_toggle = company.id.clone();
                                view! {
                                    <label class="company-selector__option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                ctx.selected_company_ids.with(|ids| ids.contains(&id_checked))
                                            }
                                            on:change=move |_| ctx.toggle_company(&id_toggle)
                                        />
                                        <span>{company.name}</span>
                                    </label>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                    <button
                        class="button button--ghost"
                        disabled=move || ctx.selected_company_ids.with(|ids| ids.is_empty())
                        on:click=move |_| ctx.selected_company_ids.set(vec![])
                    >
                        "All companies"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// TopHeader component - main application top bar.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Sales Dashboard"</span>
            </div>

            <div class="top-header__actions">
                <CompanySelector />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_scope_label() {
        assert_eq!(company_scope_label(0, 3), "All companies");
        assert_eq!(company_scope_label(1, 3), "1 company");
        assert_eq!(company_scope_label(2, 3), "2 companies");
        assert_eq!(company_scope_label(3, 3), "All companies (3)");
    }
}
