pub mod aggregate;

pub use aggregate::{HistoriaClinica, HistoriaClinicaDto, HistoriaClinicaForm};
