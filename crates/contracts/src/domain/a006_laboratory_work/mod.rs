pub mod aggregate;

pub use aggregate::{EstadoTrabajo, TrabajoLaboratorio, TrabajoLaboratorioDto, TrabajoLaboratorioForm};
