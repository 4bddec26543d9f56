pub mod aggregate;

pub use aggregate::{Pago, PagoDto, PagoForm};
