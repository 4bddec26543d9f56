mod view;
mod view_model;

pub use view::DoctorDetails;
pub use view_model::DoctorDetailsViewModel;
