use crate::domain::common::Resource;
use crate::shared::date_format::format_datetime;
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Резервная копия базы, созданная бэкендом
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub id: i64,
    pub nombre_archivo: String,
    #[serde(default)]
    pub tamano: Option<u64>,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
    #[serde(default)]
    pub creado_por: Option<String>,
}

impl Backup {
    pub fn download_path(&self) -> String {
        format!("{}/{}/descargar", Self::PATH, self.id)
    }

    pub fn size_label(&self) -> String {
        self.tamano.map(human_size).unwrap_or_else(|| "-".to_string())
    }
}

/// Размер файла: `512 B`, `1,5 KB`, `3,2 MB`
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit]).replace('.', ",")
    }
}

impl Resource for Backup {
    const PATH: &'static str = "/backups";
    const KEY: &'static str = "sys_backups";
    const TITLE: &'static str = "Copias de seguridad";
    const SOFT_DELETE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }
}

impl ReportRow for Backup {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::new("Archivo").weighted(2.5),
            ReportColumn::right("Tamaño"),
            ReportColumn::center("Fecha"),
            ReportColumn::new("Creado por"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.nombre_archivo.clone(),
            self.size_label(),
            self.fecha_creacion
                .as_deref()
                .map(format_datetime)
                .unwrap_or_default(),
            self.creado_por.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(1536), "1,5 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5,0 MB");
    }
}
