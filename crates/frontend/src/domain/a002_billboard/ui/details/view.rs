use super::view_model::BillboardDetailsViewModel;
use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::query::use_query_client;
use leptos::prelude::*;

#[component]
pub fn BillboardDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let vm = BillboardDetailsViewModel::new(use_query_client(), use_toasts());
    vm.load_if_needed(id);

    view! {
        <PageFrame page_id="a002_billboard--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container billboard-details">
                <div class="details-header">
                    <h3>{move || if vm.is_edit_mode() { "Edit billboard" } else { "New billboard" }}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="billboard-label">"Label"</label>
                        <input
                            type="text"
                            id="billboard-label"
                            prop:value=move || vm.form.get().label
                            on:input=move |ev| vm.form.update(|f| f.label = event_target_value(&ev))
                            placeholder="Billboard label"
                        />
                    </div>

                    <div class="form-group">
                        <label for="billboard-image">"Image URL"</label>
                        <input
                            type="url"
                            id="billboard-image"
                            prop:value=move || vm.form.get().image_url
                            on:input=move |ev| vm.form.update(|f| f.image_url = event_target_value(&ev))
                            placeholder="https://..."
                        />
                    </div>

                    {move || vm.preview_url().map(|url| view! {
                        <div class="billboard-details__preview">
                            <img src=url alt="Billboard preview" />
                        </div>
                    })}
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
