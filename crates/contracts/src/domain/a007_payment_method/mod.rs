pub mod aggregate;

pub use aggregate::{FormaPago, FormaPagoDto, FormaPagoForm};
