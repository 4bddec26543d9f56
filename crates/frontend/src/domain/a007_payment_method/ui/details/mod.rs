mod view;
mod view_model;

pub use view::FormaPagoDetails;
pub use view_model::FormaPagoDetailsViewModel;
