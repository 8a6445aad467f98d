use super::view_model::ProductDetailsViewModel;
use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::query::use_query_client;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(use_query_client(), use_toasts());
    vm.load(id);

    view! {
        <PageFrame page_id="a003_product--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container product-details">
                <div class="details-header">
                    <h3>{move || if vm.is_edit_mode() { "Edit product" } else { "New product" }}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="product-name">"Name"</label>
                        <input
                            type="text"
                            id="product-name"
                            prop:value=move || vm.form.get().name
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                            placeholder="Product name"
                        />
                    </div>

                    <div class="form-group">
                        <label for="product-category">"Category"</label>
                        <select
                            id="product-category"
                            prop:value=move || vm.form.get().category_id
                            on:change=move |ev| vm.form.update(|f| f.category_id = event_target_value(&ev))
                        >
                            <option value="">"Select a category"</option>
                            {move || {
                                let selected = vm.form.with(|f| f.category_id.clone());
                                vm.categories
                                    .get()
                                    .into_iter()
                                    .map(|c| {
                                        let is_selected = c.id == selected;
                                        view! { <option value=c.id selected=is_selected>{c.name}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="product-price">"Price"</label>
                            <input
                                type="text"
                                inputmode="decimal"
                                id="product-price"
                                // NaN показываем пустым полем
                                prop:value=move || {
                                    let price = vm.form.get().price;
                                    if price.is_finite() { price.to_string() } else { String::new() }
                                }
                                on:change=move |ev| vm.set_price(&event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="product-quantity">"Stock"</label>
                            <input
                                type="number"
                                min="0"
                                step="1"
                                id="product-quantity"
                                prop:value=move || vm.form.get().quantity.to_string()
                                on:change=move |ev| vm.set_quantity(&event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-group form-group--inline">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || vm.form.get().is_featured
                                on:change=move |ev| vm.form.update(|f| f.is_featured = event_target_checked(&ev))
                            />
                            " Featured"
                        </label>
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || vm.form.get().is_archived
                                on:change=move |ev| vm.form.update(|f| f.is_archived = event_target_checked(&ev))
                            />
                            " Archived"
                        </label>
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
