pub mod aggregate;

pub use aggregate::{Doctor, DoctorDto, DoctorForm};
