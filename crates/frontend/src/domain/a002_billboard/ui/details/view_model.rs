use crate::domain::a002_billboard::api::{self, MODULE};
use crate::domain::a001_category::api::MODULE as CATEGORY_MODULE;
use crate::shared::components::toast::ToastService;
use crate::shared::query::QueryClient;
use contracts::domain::a002_billboard::aggregate::BillboardDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct BillboardDetailsViewModel {
    pub form: RwSignal<BillboardDto>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    client: QueryClient,
    toasts: ToastService,
}

impl BillboardDetailsViewModel {
    pub fn new(client: QueryClient, toasts: ToastService) -> Self {
        Self {
            form: RwSignal::new(BillboardDto::default()),
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

    /// Preview only for URLs the form would accept
    pub fn preview_url(&self) -> Option<String> {
        self.form.with(|f| {
            let url = f.image_url.trim();
            (f.validate().is_ok() && !url.is_empty()).then(|| url.to_string())
        })
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match api::fetch_by_id(&existing_id).await {
                Ok(billboard) => {
                    let _ = this.form.try_set(billboard.into());
                }
                Err(e) => {
                    let _ = this.error.try_set(Some(format!("Failed to load: {}", e)));
                }
            }
        });
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
                    log::info!("billboard {} saved", saved.id);
                    this.client.invalidate(MODULE);
                    // в списке категорий показывается подпись билборда
                    this.client.invalidate(CATEGORY_MODULE);
                    this.toasts.success(format!("Billboard \"{}\" saved", current.label.trim()));
                    on_saved.run(());
                }
                Err(e) => {
                    let _ = this.error.try_set(Some(e.to_string()));
                }
            }
        });
    }
}
