use leptos::prelude::*;

/// Inline dismissible advisory, e.g. a corrected period or a blocked filter
#[component]
pub fn AdvisoryNotice(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="warning-box" role="note">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{text}</span>
                    {on_dismiss.map(|dismiss| view! {
                        <button class="warning-box__close" on:click=move |_| dismiss.run(())>
                            "×"
                        </button>
                    })}
                </div>
            }
        })
    }
}

/// Inline fetch error, shown instead of the content it replaces
#[component]
pub fn ErrorBox(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            }
        })
    }
}
