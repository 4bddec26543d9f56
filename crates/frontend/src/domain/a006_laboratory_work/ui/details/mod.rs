mod view;
mod view_model;

pub use view::TrabajoLaboratorioDetails;
pub use view_model::TrabajoLaboratorioDetailsViewModel;
