//! Компонент сортируемой ячейки заголовка таблицы
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Amount"
//!     column="amount"
//!     sorting=Signal::derive(move || stores.pages.get(CONTEXT).primary_sort().cloned())
//!     on_sort=Callback::new(move |column: String| stores.pages.toggle_sort(CONTEXT, &column))
//! />
//! ```

use contracts::shared::query::SortSpec;
use leptos::prelude::*;
use thaw::*;

pub fn sort_indicator(current: Option<&SortSpec>, column: &str) -> &'static str {
    match current {
        Some(spec) if spec.id == column => {
            if spec.desc {
                " ▼"
            } else {
                " ▲"
            }
        }
        _ => " ⇅",
    }
}

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Колонка сортировки в API (`orderBy`)
    column: &'static str,

    /// Текущая сортировка списка
    #[prop(into)]
    sorting: Signal<Option<SortSpec>>,

    on_sort: Callback<String>,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(column.to_string())
            >
                {label}
                <span class=move || {
                    let active = sorting.with(|s| s.as_ref().is_some_and(|s| s.id == column));
                    if active { "table__sort-icon table__sort-icon--active" } else { "table__sort-icon" }
                }>
                    {move || sorting.with(|s| sort_indicator(s.as_ref(), column))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let asc = SortSpec::asc("amount");
        let desc = SortSpec::desc("amount");
        assert_eq!(sort_indicator(Some(&asc), "amount"), " ▲");
        assert_eq!(sort_indicator(Some(&desc), "amount"), " ▼");
        assert_eq!(sort_indicator(Some(&asc), "invoiceNo"), " ⇅");
        assert_eq!(sort_indicator(None, "amount"), " ⇅");
    }
}
