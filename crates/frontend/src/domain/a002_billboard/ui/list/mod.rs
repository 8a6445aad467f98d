use crate::domain::a001_category::api::MODULE as CATEGORY_MODULE;
use crate::domain::a002_billboard::api::{self, CONTEXT, MODULE, SEARCH_FIELDS};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, detail_tab_label};
use crate::shared::components::advisory_notice::ErrorBox;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::sortable_header::SortableHeaderCell;
use crate::shared::components::toast::use_toasts;
use crate::shared::date_utils::format_date;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query::{
    use_list_query, use_query_client, use_query_stores, use_url_sync, use_view_query,
    ViewQuerySpec,
};
use contracts::domain::a002_billboard::aggregate::Billboard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TAB_KEY: &str = "a002_billboard";

#[component]
pub fn BillboardList() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();
    let stores = use_query_stores();
    let client = use_query_client();
    let toasts = use_toasts();

    use_url_sync(CONTEXT, TAB_KEY);
    let view_query = use_view_query(ViewQuerySpec::catalog(MODULE, CONTEXT));
    let list = use_list_query::<Billboard>(api::COLLECTION, "billboards", view_query.query);

    let is_filter_expanded = RwSignal::new(false);
    let page = Signal::derive(move || stores.pages.get(CONTEXT));
    let sorting = Signal::derive(move || page.get().primary_sort().cloned());
    let on_sort = Callback::new(move |column: String| stores.pages.toggle_sort(CONTEXT, &column));

    let open_detail = move |id: Option<String>, label: Option<String>| {
        tabs_store.open_tab(
            &detail_tab_key(TAB_KEY, id.as_deref()),
            &detail_tab_label(TAB_KEY, label.as_deref()),
        );
    };

    let delete_item = move |id: String, label: String| {
        if !confirm(&format!("Delete billboard \"{}\"?", label)) {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    log::info!("billboard {} deleted", id);
                    toasts.success(format!("Billboard \"{}\" deleted", label));
                    client.invalidate(MODULE);
                    client.invalidate(CATEGORY_MODULE);
                }
                Err(e) => toasts.error(format!("Failed to delete billboard: {}", e)),
            }
        });
    };

    view! {
        <PageFrame page_id="a002_billboard--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Billboards"</h1>
                    <span class="badge badge--primary">{move || list.total().to_string()}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_detail(None, None)>
                        {icon("plus")}
                        " New billboard"
                    </Button>
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
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || usize::from(stores.searches.get(CONTEXT).is_active()))
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
                    filter_content=move || view! { <SearchInput context=CONTEXT fields=SEARCH_FIELDS /> }
                />

                <ErrorBox error=list.error />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Image"</TableHeaderCell>
                                <SortableHeaderCell label="Label" column="label" sorting=sorting on_sort=on_sort />
                                <SortableHeaderCell label="Created" column="createdAt" sorting=sorting on_sort=on_sort />
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.rows()
                                key=|item| item.id.clone()
                                children=move |item: Billboard| {
                                    let id_for_open = item.id.clone();
                                    let label_for_open = item.label.clone();
                                    let id_for_delete = item.id.clone();
                                    let label_for_delete = item.label.clone();
                                    let image = (!item.image_url.trim().is_empty()).then(|| item.image_url.clone());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {image.map(|src| view! {
                                                    <img class="table__thumbnail" src=src alt="" />
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(Some(id_for_open.clone()), Some(label_for_open.clone()));
                                                        }
                                                    >
                                                        {item.label.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {item.created_at.as_deref().map(format_date).unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Delete"
                                                    on:click=move |_| delete_item(id_for_delete.clone(), label_for_delete.clone())
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !list.is_loading.get() && list.error.with(|e| e.is_none()) && list.total() == 0>
                    <div class="table__empty">"No billboards found"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
