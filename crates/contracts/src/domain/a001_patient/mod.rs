pub mod aggregate;

pub use aggregate::{Paciente, PacienteDto, PacienteForm};
