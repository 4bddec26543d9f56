//! Форма предложения: варианты A–F, у каждого свой блок строк и итог.

mod view;
mod view_model;

pub use view::PropuestaDetails;
pub use view_model::PropuestaDetailsViewModel;
