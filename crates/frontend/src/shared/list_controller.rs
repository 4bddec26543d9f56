//! Состояние экрана списка: страница, поиск, строки и действия над ними.
//!
//! Каждый экран создаёт `ListController::<E>::new()` и дальше только
//! рисует его сигналы. Перезапрос идёт эффектом при смене страницы,
//! поиска или после мутации (`refetch`).

use crate::shared::api_utils;
use crate::shared::dialogs::{confirm, show_error, ConfirmOptions};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notify::{use_notify, NotificationService};
use crate::shared::request_seq::RequestSeq;
use contracts::domain::common::{EstadoPatch, ListQuery, Resource};
use contracts::shared::pagination::PageWindow;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

/// Что происходит по кнопке «Eliminar»
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStep {
    /// Запись связана с платежами или историей: только причина, без запроса
    Blocked(&'static str),
    /// Подтверждение, затем DELETE
    Confirm,
}

/// `blocked` приходит из флагов сервера (`DeleteGuard`)
pub fn delete_step(blocked: Option<&'static str>) -> DeleteStep {
    match blocked {
        Some(reason) => DeleteStep::Blocked(reason),
        None => DeleteStep::Confirm,
    }
}

pub struct ListController<E: Send + Sync + 'static> {
    /// Номер страницы, с 1
    pub page: RwSignal<usize>,
    /// Поиск после debounce
    pub search: RwSignal<String>,
    pub rows: RwSignal<Vec<E>>,
    pub total: RwSignal<usize>,
    pub total_pages: RwSignal<usize>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    reload: RwSignal<u64>,
    latest: RequestSeq,
    modal: ModalStackService,
    notify: NotificationService,
}

impl<E: Send + Sync + 'static> Clone for ListController<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static> Copy for ListController<E> {}

impl<E> ListController<E>
where
    E: Resource + DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        let ctrl = Self {
            page: RwSignal::new(1),
            search: RwSignal::new(String::new()),
            rows: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            total_pages: RwSignal::new(1),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            reload: RwSignal::new(0),
            latest: RequestSeq::new(),
            modal: use_context::<ModalStackService>()
                .expect("ModalStackService not provided in context"),
            notify: use_notify(),
        };

        Effect::new(move |_| {
            let page = ctrl.page.get();
            let search = ctrl.search.get();
            ctrl.reload.track();
            ctrl.fetch(ListQuery::new(page, E::PAGE_SIZE, &search));
        });

        ctrl
    }

    fn fetch(&self, query: ListQuery) {
        let ctrl = *self;
        let seq = ctrl.latest.next();
        ctrl.loading.set(true);

        spawn_local(async move {
            let result = api_utils::fetch_page::<E>(&query).await;
            if !ctrl.latest.is_current(seq) {
                return;
            }
            match result {
                Ok(page) => {
                    ctrl.total.set(page.total);
                    ctrl.total_pages.set(page.total_pages.max(1));
                    ctrl.rows.set(page.data);
                    ctrl.error.set(None);
                    // после удаления последней строки страница могла исчезнуть
                    if query.page > page.total_pages.max(1) {
                        ctrl.page.set(page.total_pages.max(1));
                    }
                }
                Err(e) => {
                    ctrl.rows.set(Vec::new());
                    ctrl.error.set(Some(e));
                }
            }
            ctrl.loading.set(false);
        });
    }

    pub fn refetch(&self) {
        self.reload.update(|n| *n += 1);
    }

    /// Новый поиск всегда начинается с первой страницы
    pub fn set_search(&self, text: String) {
        let text = text.trim().to_string();
        if self.search.get_untracked() == text {
            return;
        }
        self.page.set(1);
        self.search.set(text);
    }

    pub fn set_page(&self, page: usize) {
        let page = page.clamp(1, self.total_pages.get_untracked().max(1));
        self.page.set(page);
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.page.get(), E::PAGE_SIZE, self.total.get())
    }

    pub fn modal(&self) -> ModalStackService {
        self.modal
    }

    pub fn notify(&self) -> NotificationService {
        self.notify
    }

    /// `PATCH {estado: "inactivo"}`, после подтверждения
    pub fn soft_delete(&self, id: i64, label: String) {
        let ctrl = *self;
        confirm(
            self.modal,
            ConfirmOptions::new(
                "¿Desactivar registro?",
                format!("«{}» quedará inactivo. Podrá reactivarlo más tarde.", label),
            )
            .confirm_label("Desactivar")
            .danger(),
            Callback::new(move |_| ctrl.patch_estado(id, EstadoPatch::soft_delete())),
        );
    }

    /// `PATCH {estado: "activo"}`, после подтверждения
    pub fn reactivate(&self, id: i64, label: String) {
        let ctrl = *self;
        confirm(
            self.modal,
            ConfirmOptions::new("¿Reactivar registro?", format!("«{}» volverá a estar activo.", label))
                .confirm_label("Reactivar"),
            Callback::new(move |_| ctrl.patch_estado(id, EstadoPatch::reactivate())),
        );
    }

    fn patch_estado(&self, id: i64, patch: EstadoPatch) {
        let ctrl = *self;
        spawn_local(async move {
            match api_utils::set_estado::<E>(id, patch).await {
                Ok(()) => {
                    let text = if patch.estado.is_active() {
                        "Registro reactivado"
                    } else {
                        "Registro desactivado"
                    };
                    ctrl.notify.success(text);
                    ctrl.refetch();
                }
                Err(e) => show_error(ctrl.modal, e),
            }
        });
    }

    /// Настоящий DELETE, если `delete_step` его разрешает
    pub fn hard_delete(&self, id: i64, label: String, blocked: Option<&'static str>) {
        if let DeleteStep::Blocked(reason) = delete_step(blocked) {
            self.notify.error(reason);
            return;
        }
        let ctrl = *self;
        confirm(
            self.modal,
            ConfirmOptions::new(
                "¿Eliminar registro?",
                format!("«{}» se eliminará definitivamente.", label),
            )
            .confirm_label("Eliminar")
            .danger(),
            Callback::new(move |_| {
                spawn_local(async move {
                    match api_utils::delete_by_id::<E>(id).await {
                        Ok(()) => {
                            ctrl.notify.success("Registro eliminado");
                            ctrl.refetch();
                        }
                        Err(e) => show_error(ctrl.modal, e),
                    }
                });
            }),
        );
    }

    /// Все строки под текущий поиск (печать и экспорт берут не только страницу)
    pub async fn load_all_for_export(&self) -> Result<Vec<E>, String> {
        let search = self.search.get_untracked();
        api_utils::fetch_all::<E>(&search).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::linked_records_reason;

    #[test]
    fn test_blocked_delete_sends_nothing() {
        let step = delete_step(linked_records_reason(true, false));
        assert_eq!(
            step,
            DeleteStep::Blocked("No se puede eliminar: tiene pagos asociados")
        );
        assert!(matches!(
            delete_step(linked_records_reason(false, true)),
            DeleteStep::Blocked(_)
        ));
    }

    #[test]
    fn test_free_record_asks_confirmation() {
        assert_eq!(delete_step(linked_records_reason(false, false)), DeleteStep::Confirm);
        assert_eq!(delete_step(None), DeleteStep::Confirm);
    }
}
