mod view;
mod view_model;

pub use view::BillboardDetails;
pub use view_model::BillboardDetailsViewModel;
