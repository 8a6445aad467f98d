//! Draggable floating button that opens the filter panel.
//! Its position survives reloads through localStorage.

use crate::shared::icons::icon;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::window;

pub const POSITION_STORAGE_KEY: &str = "filterButtonPosition";
const BUTTON_SIZE: f64 = 48.0;
/// Pointer travel below this is a click, not a drag
const DRAG_THRESHOLD: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ButtonPosition {
    pub x: f64,
    pub y: f64,
}

impl ButtonPosition {
    /// Keep the whole button inside the viewport
    pub fn clamped(self, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            x: self.x.clamp(0.0, (viewport_width - BUTTON_SIZE).max(0.0)),
            y: self.y.clamp(0.0, (viewport_height - BUTTON_SIZE).max(0.0)),
        }
    }
}

pub fn parse_position(raw: &str) -> Option<ButtonPosition> {
    serde_json::from_str::<ButtonPosition>(raw)
        .ok()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
}

fn viewport() -> (f64, f64) {
    let w = window();
    let width = w
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0);
    let height = w
        .as_ref()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(768.0);
    (width, height)
}

fn load_position() -> ButtonPosition {
    let (width, height) = viewport();
    let default = ButtonPosition {
        x: width - BUTTON_SIZE - 24.0,
        y: height - BUTTON_SIZE - 24.0,
    };
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(POSITION_STORAGE_KEY).ok().flatten())
        .and_then(|raw| parse_position(&raw))
        .unwrap_or(default)
        .clamped(width, height)
}

fn save_position(position: ButtonPosition) {
    let Ok(raw) = serde_json::to_string(&position) else {
        return;
    };
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(POSITION_STORAGE_KEY, &raw);
    }
}

#[derive(Debug, Clone, Copy)]
struct DragStart {
    pointer: (f64, f64),
    origin: ButtonPosition,
    moved: bool,
}

#[component]
pub fn FloatingFilterButton(
    #[prop(into)] active_count: Signal<usize>,
    on_click: Callback<()>,
) -> impl IntoView {
    let position = RwSignal::new(load_position());
    let drag = RwSignal::new(None::<DragStart>);

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let _ = target.set_pointer_capture(ev.pointer_id());
        }
        drag.set(Some(DragStart {
            pointer: (f64::from(ev.client_x()), f64::from(ev.client_y())),
            origin: position.get_untracked(),
            moved: false,
        }));
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let Some(mut start) = drag.get_untracked() else {
            return;
        };
        let dx = f64::from(ev.client_x()) - start.pointer.0;
        let dy = f64::from(ev.client_y()) - start.pointer.1;
        if !start.moved && dx.hypot(dy) < DRAG_THRESHOLD {
            return;
        }
        start.moved = true;
        drag.set(Some(start));
        let (width, height) = viewport();
        position.set(
            ButtonPosition {
                x: start.origin.x + dx,
                y: start.origin.y + dy,
            }
            .clamped(width, height),
        );
    };

    let on_pointer_up = move |_ev: web_sys::PointerEvent| {
        match drag.get_untracked() {
            Some(start) if start.moved => save_position(position.get_untracked()),
            Some(_) => on_click.run(()),
            None => {}
        }
        drag.set(None);
    };

    view! {
        <button
            class="floating-filter-button"
            style=move || {
                let p = position.get();
                format!("position: fixed; left: {:.0}px; top: {:.0}px; touch-action: none;", p.x, p.y)
            }
            title="Filters"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
        >
            {icon("filter")}
            {move || {
                let count = active_count.get();
                (count > 0).then(|| view! { <span class="floating-filter-button__badge">{count}</span> })
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(
            parse_position(r#"{"x":120.5,"y":40}"#),
            Some(ButtonPosition { x: 120.5, y: 40.0 })
        );
        assert_eq!(parse_position("not json"), None);
        assert_eq!(parse_position(r#"{"x":1}"#), None);
    }

    #[test]
    fn test_clamped_to_viewport() {
        let p = ButtonPosition { x: -10.0, y: 900.0 }.clamped(800.0, 600.0);
        assert_eq!(p, ButtonPosition { x: 0.0, y: 552.0 });
    }

    #[test]
    fn test_storage_format() {
        let raw = serde_json::to_string(&ButtonPosition { x: 10.0, y: 20.0 }).unwrap();
        assert_eq!(raw, r#"{"x":10.0,"y":20.0}"#);
    }
}
