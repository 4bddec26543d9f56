mod view;
mod view_model;

pub use view::ItemInventarioDetails;
pub use view_model::ItemInventarioDetailsViewModel;
