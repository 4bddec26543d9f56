mod view;
mod view_model;

pub use view::LaboratorioDetails;
pub use view_model::LaboratorioDetailsViewModel;
