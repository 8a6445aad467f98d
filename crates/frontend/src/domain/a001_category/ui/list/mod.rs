use crate::domain::a001_category::api::{self, CONTEXT, MODULE, SEARCH_FIELDS};
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
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TAB_KEY: &str = "a001_category";

#[component]
pub fn CategoryList() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();
    let stores = use_query_stores();
    let client = use_query_client();
    let toasts = use_toasts();

    use_url_sync(CONTEXT, TAB_KEY);
    let view_query = use_view_query(ViewQuerySpec::catalog(MODULE, CONTEXT));
    let list = use_list_query::<Category>(api::COLLECTION, "categories", view_query.query);

    let is_filter_expanded = RwSignal::new(false);
    let page = Signal::derive(move || stores.pages.get(CONTEXT));
    let search_active = Signal::derive(move || {
        usize::from(stores.searches.get(CONTEXT).is_active())
    });

    let open_detail = move |id: Option<String>, name: Option<String>| {
        tabs_store.open_tab(
            &detail_tab_key(TAB_KEY, id.as_deref()),
            &detail_tab_label(TAB_KEY, name.as_deref()),
        );
    };

    let delete_item = move |id: String, name: String| {
        if !confirm(&format!("Delete category \"{}\"?", name)) {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    log::info!("category {} deleted", id);
                    toasts.success(format!("Category \"{}\" deleted", name));
                    client.invalidate(MODULE);
                }
                Err(e) => toasts.error(format!("Failed to delete category: {}", e)),
            }
        });
    };

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Categories"</h1>
                    <span class="badge badge--primary">{move || list.total().to_string()}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_detail(None, None)>
                        {icon("plus")}
                        " New category"
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
                    active_filters_count=search_active
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
                                <SortableHeaderCell
                                    label="Name"
                                    column="name"
                                    sorting=Signal::derive(move || page.get().primary_sort().cloned())
                                    on_sort=Callback::new(move |c: String| stores.pages.toggle_sort(CONTEXT, &c))
                                />
                                <SortableHeaderCell
                                    label="Billboard"
                                    column="billboardLabel"
                                    sorting=Signal::derive(move || page.get().primary_sort().cloned())
                                    on_sort=Callback::new(move |c: String| stores.pages.toggle_sort(CONTEXT, &c))
                                />
                                <SortableHeaderCell
                                    label="Created"
                                    column="createdAt"
                                    sorting=Signal::derive(move || page.get().primary_sort().cloned())
                                    on_sort=Callback::new(move |c: String| stores.pages.toggle_sort(CONTEXT, &c))
                                />
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.rows()
                                key=|item| item.id.clone()
                                children=move |item: Category| {
                                    let id_for_open = item.id.clone();
                                    let name_for_open = item.name.clone();
                                    let id_for_delete = item.id.clone();
                                    let name_for_delete = item.name.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(Some(id_for_open.clone()), Some(name_for_open.clone()));
                                                        }
                                                    >
                                                        {item.name.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.billboard_label.clone().unwrap_or_else(|| item.billboard_id.clone())}
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
                                                    on:click=move |_| delete_item(id_for_delete.clone(), name_for_delete.clone())
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
                    <div class="table__empty">"No categories found"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
