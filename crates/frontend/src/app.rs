use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabsArea;
use crate::layout::Shell;
use crate::shared::components::toast::{ToastService, Toaster};
use crate::shared::query::{provide_query_client, provide_query_stores};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    provide_context(ToastService::new());

    // Filter / period / page / search stores outlive individual tabs
    provide_query_stores();
    provide_query_client();

    ctx.init_router_integration();
    ctx.load_companies();

    view! {
        <Shell center=|| view! { <TabsArea /> }.into_any() />
        <Toaster />
    }
}
