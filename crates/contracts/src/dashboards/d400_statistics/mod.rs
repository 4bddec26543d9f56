pub mod dto;

pub use dto::{Estadisticas, EstadisticasQuery, MesIngreso, TratamientoTop};

/// Ключ вкладки дашборда
pub const STATISTICS_KEY: &str = "d400_statistics";
