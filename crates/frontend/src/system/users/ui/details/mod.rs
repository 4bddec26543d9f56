mod view;
mod view_model;

pub use view::UsuarioDetails;
pub use view_model::UsuarioDetailsViewModel;
