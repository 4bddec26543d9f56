pub mod aggregate;

pub use aggregate::{Personal, PersonalDto, PersonalForm};
