//! Paciente Details UI Module
//!
//! - view_model.rs: связь формы пациента с общей моделью формы
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::PacienteDetails;
pub use view_model::PacienteDetailsViewModel;
