mod view;
mod view_model;

pub use view::PersonalDetails;
pub use view_model::PersonalDetailsViewModel;
