//! Product details form
//!
//! MVVM:
//! - `api` (domain level): fetch, save
//! - view_model.rs: state and commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
