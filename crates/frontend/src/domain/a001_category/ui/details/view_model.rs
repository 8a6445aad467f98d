use crate::domain::a001_category::api::{self, MODULE};
use crate::domain::a002_billboard::api as billboard_api;
use crate::shared::components::toast::ToastService;
use crate::shared::query::QueryClient;
use contracts::domain::a001_category::aggregate::CategoryDto;
use contracts::domain::a002_billboard::aggregate::Billboard;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for Category details form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    pub billboards: RwSignal<Vec<Billboard>>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    client: QueryClient,
    toasts: ToastService,
}

impl CategoryDetailsViewModel {
    pub fn new(client: QueryClient, toasts: ToastService) -> Self {
        Self {
            form: RwSignal::new(CategoryDto::default()),
            billboards: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            client,
            toasts,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    /// Load the record for an existing id, plus billboard options for the picker
    pub fn load(&self, id: Option<String>) {
        let this = *self;
        spawn_local(async move {
            match billboard_api::fetch_options(this.client).await {
                Ok(list) => {
                    let _ = this.billboards.try_set(list);
                }
                Err(e) => log::error!("failed to load billboards: {}", e),
            }
        });

        if let Some(existing_id) = id {
            spawn_local(async move {
                match api::fetch_by_id(&existing_id).await {
                    Ok(category) => {
                        let _ = this.form.try_set(category.into());
                    }
                    Err(e) => {
                        let _ = this.error.try_set(Some(format!("Failed to load: {}", e)));
                    }
                }
            });
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(message) = current.validate() {
            self.error.set(Some(message));
            return;
        }

        let this = *self;
        this.is_saving.set(true);
        spawn_local(async move {
            let result = api::save(&current).await;
            let _ = this.is_saving.try_set(false);
            match result {
                Ok(saved) => {
                    log::info!("category {} saved", saved.id);
                    this.client.invalidate(MODULE);
                    this.toasts.success(format!("Category \"{}\" saved", current.name.trim()));
                    on_saved.run(());
                }
                Err(e) => {
                    let _ = this.error.try_set(Some(e.to_string()));
                }
            }
        });
    }
}
