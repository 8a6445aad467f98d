//! Category details form
//!
//! MVVM:
//! - `api` (domain level): fetch, save
//! - view_model.rs: state and commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
