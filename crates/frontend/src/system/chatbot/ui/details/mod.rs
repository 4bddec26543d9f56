mod view;
mod view_model;

pub use view::RespuestaChatbotDetails;
pub use view_model::RespuestaChatbotDetailsViewModel;
