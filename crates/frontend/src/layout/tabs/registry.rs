//! Ключ вкладки → экран. Все ключи собраны здесь.

use crate::dashboards::EstadisticasDashboard;
use crate::domain::a001_patient::ui::list::PacienteList;
use crate::domain::a002_doctor::ui::list::DoctorList;
use crate::domain::a003_staff::ui::list::PersonalList;
use crate::domain::a004_inventory::ui::list::InventarioList;
use crate::domain::a005_laboratory::ui::list::LaboratorioList;
use crate::domain::a006_laboratory_work::ui::list::TrabajoLaboratorioList;
use crate::domain::a007_payment_method::ui::list::FormaPagoList;
use crate::domain::a008_payment::ui::list::PagoList;
use crate::domain::a009_proforma::ui::list::ProformaList;
use crate::domain::a010_proposal::ui::list::PropuestaList;
use crate::domain::a011_clinical_history::ui::list::HistoriaClinicaList;
use crate::system::backups::ui::list::BackupList;
use crate::system::chatbot::ui::list::RespuestaChatbotList;
use crate::system::users::ui::list::UsuarioList;
use leptos::prelude::*;

/// Содержимое вкладки; для неизвестного ключа заглушка
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_statistics" => view! { <EstadisticasDashboard /> }.into_any(),

        // Clínica
        "a001_patient" => view! { <PacienteList /> }.into_any(),
        "a011_clinical_history" => view! { <HistoriaClinicaList /> }.into_any(),
        "a009_proforma" => view! { <ProformaList /> }.into_any(),
        "a010_proposal" => view! { <PropuestaList /> }.into_any(),

        // Caja
        "a008_payment" => view! { <PagoList /> }.into_any(),
        "a007_payment_method" => view! { <FormaPagoList /> }.into_any(),

        // Laboratorio
        "a005_laboratory" => view! { <LaboratorioList /> }.into_any(),
        "a006_laboratory_work" => view! { <TrabajoLaboratorioList /> }.into_any(),

        // Equipo e inventario
        "a002_doctor" => view! { <DoctorList /> }.into_any(),
        "a003_staff" => view! { <PersonalList /> }.into_any(),
        "a004_inventory" => view! { <InventarioList /> }.into_any(),

        // Sistema
        "sys_users" => view! { <UsuarioList /> }.into_any(),
        "sys_backups" => view! { <BackupList /> }.into_any(),
        "sys_chatbot" => view! { <RespuestaChatbotList /> }.into_any(),

        _ => {
            log::warn!("unknown tab: {}", key);
            view! { <div class="placeholder">"Sección no disponible"</div> }.into_any()
        }
    }
}
