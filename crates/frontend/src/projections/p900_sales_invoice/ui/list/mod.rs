use crate::projections::p900_sales_invoice::api::{
    fixed_options, COLLECTION, CONTEXT, MODULE, PAID_STATUS_OPTIONS, PO_TYPE_OPTIONS,
    SEARCH_FIELDS,
};
use crate::projections::p901_sales_person_invoice::api::use_sales_person_options;
use crate::shared::components::advisory_notice::{AdvisoryNotice, ErrorBox};
use crate::shared::components::facet_filter::{FacetFilter, FacetTags};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::floating_filter_button::FloatingFilterButton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::period_picker::PeriodPicker;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::sortable_header::SortableHeaderCell;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query::{
    use_list_query, use_query_stores, use_url_sync, use_view_query, ViewQuerySpec,
};
use contracts::projections::p900_sales_invoice::dto::SalesInvoice;
use contracts::shared::query::Facet;
use leptos::prelude::*;
use thaw::*;

const TAB_KEY: &str = "p900_sales_invoice";

/// CSS modifier of the status badge
pub fn paid_status_badge(status: &str) -> &'static str {
    match status.trim().to_ascii_uppercase().as_str() {
        "PAID" => "badge badge--success",
        "UNPAID" => "badge badge--error",
        "PARTIAL" => "badge badge--warning",
        _ => "badge badge--neutral",
    }
}

#[component]
pub fn SalesInvoiceList() -> impl IntoView {
    let stores = use_query_stores();

    use_url_sync(CONTEXT, TAB_KEY);
    let view_query = use_view_query(ViewQuerySpec::list(MODULE, CONTEXT));
    let list = use_list_query::<SalesInvoice>(COLLECTION, "sales invoices", view_query.query);
    let sales_persons = use_sales_person_options();

    let is_filter_expanded = RwSignal::new(false);
    let page = Signal::derive(move || stores.pages.get(CONTEXT));
    let sorting = Signal::derive(move || page.get().primary_sort().cloned());
    let on_sort = Callback::new(move |column: String| stores.pages.toggle_sort(CONTEXT, &column));
    let active_count = Signal::derive(move || stores.active_filter_count(CONTEXT));

    let advisory_text =
        Signal::derive(move || view_query.advisory.get().map(|a| a.message().to_string()));

    view! {
        <PageFrame page_id="p900_sales_invoice--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sales Invoices"</h1>
                    <span class="badge badge--primary">{move || list.total().to_string()}</span>
                    {move || list.is_fetching.get().then(|| view! { <Spinner /> })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.refetch()
                        disabled=Signal::derive(move || list.is_fetching.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
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
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || page.get().current_page)
                            total_pages=Signal::derive(move || page.get().total_pages(list.total()))
                            total_count=Signal::derive(move || list.total())
                            page_size=Signal::derive(move || page.get().limit)
                            on_page_change=Callback::new(move |p| stores.pages.set_page(CONTEXT, p))
                            on_page_size_change=Callback::new(move |l| stores.pages.set_limit(CONTEXT, l))
                        />
                    }
                    filter_content=move || view! {
                        <div class="filter-panel__row">
                            <PeriodPicker context=CONTEXT />
                            <SearchInput context=CONTEXT fields=SEARCH_FIELDS />
                        </div>
                        <div class="filter-panel__row">
                            <FacetFilter
                                context=CONTEXT
                                facet=Facet::PaidStatus
                                options=Signal::derive(|| fixed_options(PAID_STATUS_OPTIONS))
                            />
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

                <ErrorBox error=list.error />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Invoice No" column="invoiceNo" sorting=sorting on_sort=on_sort />
                                <SortableHeaderCell label="Date" column="invoiceDate" sorting=sorting on_sort=on_sort />
                                <SortableHeaderCell label="Customer" column="customerName" sorting=sorting on_sort=on_sort />
                                <SortableHeaderCell label="Sales Person" column="salesPersonName" sorting=sorting on_sort=on_sort />
                                <TableHeaderCell>"PO Type"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <SortableHeaderCell label="Amount" column="amount" sorting=sorting on_sort=on_sort align="right" />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.rows()
                                key=|row| row.invoice_no.clone()
                                children=move |row: SalesInvoice| {
                                    let amount = row.amount;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{row.invoice_no.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(&row.invoice_date)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.customer_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.sales_person_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.po_type.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=paid_status_badge(&row.paid_status)>{row.paid_status.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=Signal::derive(move || Some(amount)) />
                                        </TableRow>
                                    }
                                }
                            />
                            // итог по всей выборке, не только по странице
                            {move || list.grand_total().map(|total| view! {
                                <TableRow class:table__totals-row=true>
                                    <TableCell>
                                        <TableCellLayout>
                                            <strong>"Grand total"</strong>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>""</TableCell>
                                    <TableCell>""</TableCell>
                                    <TableCell>""</TableCell>
                                    <TableCell>""</TableCell>
                                    <TableCell>""</TableCell>
                                    <TableCellMoney value=Signal::derive(move || Some(total)) bold=true />
                                </TableRow>
                            })}
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !list.is_loading.get() && list.error.with(|e| e.is_none()) && list.total() == 0>
                    <div class="table__empty">"No invoices match the current filters"</div>
                </Show>
            </div>

            <FloatingFilterButton
                active_count=active_count
                on_click=Callback::new(move |_| is_filter_expanded.update(|e| *e = !*e))
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::paid_status_badge;

    #[test]
    fn test_paid_status_badge() {
        assert_eq!(paid_status_badge("PAID"), "badge badge--success");
        assert_eq!(paid_status_badge(" partial "), "badge badge--warning");
        assert_eq!(paid_status_badge("VOID"), "badge badge--neutral");
    }
}
