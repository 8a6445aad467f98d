use crate::config::config;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
    Success,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast--info",
            ToastKind::Warning => "toast toast--warning",
            ToastKind::Error => "toast toast--error",
            ToastKind::Success => "toast toast--success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Сервис всплывающих уведомлений (ошибки запросов, предупреждения фильтров)
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let toast = Toast {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
        };
        let id = toast.id.clone();
        self.toasts.update(|t| t.push(toast));

        let this = *self;
        Timeout::new(config().toast_timeout_ms, move || this.dismiss(&id)).forget();
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(ToastKind::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn dismiss(&self, id: &str) {
        // сервис мог быть уничтожен до срабатывания таймера
        let _ = self.toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().unwrap_or_else(|| {
        log::warn!("ToastService not provided, messages will not be shown");
        ToastService::new()
    })
}

#[component]
pub fn Toaster() -> impl IntoView {
    let Some(service) = use_context::<ToastService>() else {
        log::warn!("Toaster rendered without ToastService");
        return ().into_any();
    };

    view! {
        <div class="toaster">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(&id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
    .into_any()
}
