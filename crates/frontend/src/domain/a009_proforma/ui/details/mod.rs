//! Форма проформы: пациент, доктор, дата, строки лечения с живым итогом.

mod view;
mod view_model;

pub use view::ProformaDetails;
pub use view_model::ProformaDetailsViewModel;
