mod dashboard;

pub use dashboard::EstadisticasDashboard;
