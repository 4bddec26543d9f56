use crate::shared::api_utils::get_json;
use contracts::dashboards::d400_statistics::{Estadisticas, EstadisticasQuery};

const PATH: &str = "/estadisticas";

pub fn statistics_path(query: &EstadisticasQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) => format!("{}?{}", PATH, qs),
        Err(_) => PATH.to_string(),
    }
}

/// Сводка за период `desde..=hasta`
pub async fn get_statistics(query: &EstadisticasQuery) -> Result<Estadisticas, String> {
    let path = statistics_path(query);
    log::debug!("GET {}", path);
    get_json(&path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_path() {
        let q = EstadisticasQuery {
            desde: "2024-03-01".into(),
            hasta: "2024-03-31".into(),
        };
        assert_eq!(
            statistics_path(&q),
            "/estadisticas?desde=2024-03-01&hasta=2024-03-31"
        );
    }
}
