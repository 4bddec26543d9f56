pub mod aggregate;

pub use aggregate::{ItemInventario, ItemInventarioDto, ItemInventarioForm};
