pub mod aggregate;

pub use aggregate::{Propuesta, PropuestaDto, PropuestaForm, PropuestaItem, Variante};
