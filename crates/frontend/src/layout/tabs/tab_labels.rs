//! Заголовки вкладок. Для сущностей берутся из `Resource::TITLE`.

use contracts::dashboards::d400_statistics::STATISTICS_KEY;
use contracts::domain::a001_patient::Paciente;
use contracts::domain::a002_doctor::Doctor;
use contracts::domain::a003_staff::Personal;
use contracts::domain::a004_inventory::ItemInventario;
use contracts::domain::a005_laboratory::Laboratorio;
use contracts::domain::a006_laboratory_work::TrabajoLaboratorio;
use contracts::domain::a007_payment_method::FormaPago;
use contracts::domain::a008_payment::Pago;
use contracts::domain::a009_proforma::Proforma;
use contracts::domain::a010_proposal::Propuesta;
use contracts::domain::a011_clinical_history::HistoriaClinica;
use contracts::domain::common::Resource;
use contracts::system::backups::Backup;
use contracts::system::chatbot::RespuestaChatbot;
use contracts::system::users::Usuario;

fn title_of<E: Resource>(key: &str) -> Option<&'static str> {
    (key == E::KEY).then_some(E::TITLE)
}

/// Заголовок вкладки по ключу; пустая строка для неизвестного ключа
pub fn tab_label_for_key(key: &str) -> &'static str {
    if key == STATISTICS_KEY {
        return "Estadísticas";
    }
    title_of::<Paciente>(key)
        .or_else(|| title_of::<Doctor>(key))
        .or_else(|| title_of::<Personal>(key))
        .or_else(|| title_of::<ItemInventario>(key))
        .or_else(|| title_of::<Laboratorio>(key))
        .or_else(|| title_of::<TrabajoLaboratorio>(key))
        .or_else(|| title_of::<FormaPago>(key))
        .or_else(|| title_of::<Pago>(key))
        .or_else(|| title_of::<Proforma>(key))
        .or_else(|| title_of::<Propuesta>(key))
        .or_else(|| title_of::<HistoriaClinica>(key))
        .or_else(|| title_of::<Usuario>(key))
        .or_else(|| title_of::<Backup>(key))
        .or_else(|| title_of::<RespuestaChatbot>(key))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_patient"), "Pacientes");
        assert_eq!(tab_label_for_key("a009_proforma"), "Presupuestos");
        assert_eq!(tab_label_for_key("sys_backups"), "Copias de seguridad");
        assert_eq!(tab_label_for_key(STATISTICS_KEY), "Estadísticas");
        assert_eq!(tab_label_for_key("a004_nomenclature"), "");
    }
}
