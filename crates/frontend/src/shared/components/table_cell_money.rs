//! Компонент ячейки таблицы для денежных значений

use crate::shared::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned amount with thousands separators; `—` for missing values
#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Signal<Option<f64>>,
    /// Жирный шрифт (итоги)
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let style = if bold {
        "text-align: right; font-weight: 600; width: 100%;"
    } else {
        "text-align: right; width: 100%;"
    };

    view! {
        <TableCell>
            <TableCellLayout>
                <span style=style>
                    {move || value.get().map(format_money).unwrap_or_else(|| "—".to_string())}
                </span>
            </TableCellLayout>
        </TableCell>
    }
}
