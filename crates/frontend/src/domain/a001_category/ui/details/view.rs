use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::query::use_query_client;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(use_query_client(), use_toasts());
    vm.load(id);

    view! {
        <PageFrame page_id="a001_category--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container category-details">
                <div class="details-header">
                    <h3>{move || if vm.is_edit_mode() { "Edit category" } else { "New category" }}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="category-name">"Name"</label>
                        <input
                            type="text"
                            id="category-name"
                            prop:value=move || vm.form.get().name
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                            placeholder="Category name"
                        />
                    </div>

                    <div class="form-group">
                        <label for="category-billboard">"Billboard"</label>
                        <select
                            id="category-billboard"
                            prop:value=move || vm.form.get().billboard_id
                            on:change=move |ev| vm.form.update(|f| f.billboard_id = event_target_value(&ev))
                        >
                            <option value="">"Select a billboard"</option>
                            {move || {
                                let selected = vm.form.with(|f| f.billboard_id.clone());
                                vm.billboards
                                    .get()
                                    .into_iter()
                                    .map(|b| {
                                        let is_selected = b.id == selected;
                                        view! { <option value=b.id selected=is_selected>{b.label}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command(on_close)
                        disabled=move || !vm.is_form_valid() || vm.is_saving.get()
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { " Save" } else { " Create" }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        {icon("cancel")}
                        " Cancel"
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
