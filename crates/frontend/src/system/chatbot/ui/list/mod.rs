use crate::shared::resource_list::{resource_list, ListScreen};
use crate::system::chatbot::ui::details::RespuestaChatbotDetails;
use contracts::system::chatbot::RespuestaChatbot;
use leptos::prelude::*;

fn respuesta_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <RespuestaChatbotDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn RespuestaChatbotList() -> impl IntoView {
    resource_list(
        ListScreen::<RespuestaChatbot>::new("sys_chatbot--list", |r| r.palabra_clave.clone())
            .with_form(respuesta_form)
            .with_placeholder("Buscar palabra clave...")
            .estado_in_report(),
    )
}
