pub mod aggregate;

pub use aggregate::{AprobacionDto, Proforma, ProformaDto, ProformaForm};
