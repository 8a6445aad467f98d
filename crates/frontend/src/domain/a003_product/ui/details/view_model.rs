use crate::domain::a003_product::api::{self, MODULE};
use crate::shared::components::toast::ToastService;
use crate::shared::query::QueryClient;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a003_product::aggregate::ProductDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for Product details form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub categories: RwSignal<Vec<Category>>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    client: QueryClient,
    toasts: ToastService,
}

impl ProductDetailsViewModel {
    pub fn new(client: QueryClient, toasts: ToastService) -> Self {
        Self {
            form: RwSignal::new(ProductDto::default()),
            categories: RwSignal::new(Vec::new()),
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

    /// Текст поля цены парсится здесь; мусор превращается в NaN и не проходит валидацию
    pub fn set_price(&self, raw: &str) {
        let price = parse_number(raw).unwrap_or(f64::NAN);
        self.form.update(|f| f.price = price);
    }

    pub fn set_quantity(&self, raw: &str) {
        let quantity = raw.trim().parse::<i64>().unwrap_or(-1);
        self.form.update(|f| f.quantity = quantity);
    }

    pub fn load(&self, id: Option<String>) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_category_options(this.client).await {
                Ok(list) => {
                    let _ = this.categories.try_set(list);
                }
                Err(e) => log::error!("failed to load categories: {}", e),
            }
        });

        if let Some(existing_id) = id {
            spawn_local(async move {
                match api::fetch_by_id(&existing_id).await {
                    Ok(product) => {
                        let _ = this.form.try_set(product.into());
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
                    log::info!("product {} saved", saved.id);
                    this.client.invalidate(MODULE);
                    this.toasts.success(format!("Product \"{}\" saved", current.name.trim()));
                    on_saved.run(());
                }
                Err(e) => {
                    let _ = this.error.try_set(Some(e.to_string()));
                }
            }
        });
    }
}

/// "1 299,50" и "1,299.50" читаются одинаково
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }
    let normalized = if cleaned.contains('.') {
        cleaned.replace(',', "")
    } else {
        cleaned.replace(',', ".")
    };
    normalized.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_number;

    #[test]
    fn test_parse_number_formats() {
        assert_eq!(parse_number("1299.5"), Some(1299.5));
        assert_eq!(parse_number("1,299.50"), Some(1299.5));
        assert_eq!(parse_number("1 299,50"), Some(1299.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
    }
}
