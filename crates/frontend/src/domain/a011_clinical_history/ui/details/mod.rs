mod view;
mod view_model;

pub use view::HistoriaClinicaDetails;
pub use view_model::HistoriaClinicaDetailsViewModel;
