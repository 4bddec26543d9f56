//! Общая модель формы создания/редактирования.
//!
//! Экран деталей держит `DetailsViewModel<F>`; сущностная часть
//! (какие поля, как собрать DTO) описывается реализацией `EntityForm`
//! в `ui/details/view_model.rs` каждой сущности.

use crate::shared::api_utils;
use crate::shared::dialogs::show_error;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notify::{use_notify, NotificationService};
use crate::system::auth::context::SessionContext;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

/// Сообщение, когда `to_dto` не смог собрать тело (не выбрана связь)
pub const INCOMPLETE_FORM: &str = "Complete los campos obligatorios";

pub trait EntityForm: Clone + Default + Send + Sync + 'static {
    type Entity: Resource + DeserializeOwned + Send + Sync + 'static;
    type Dto: Serialize;

    fn from_entity(entity: &Self::Entity) -> Self;

    /// `None` для новой записи
    fn id(&self) -> Option<i64>;

    fn validate(&self) -> Result<(), &'static str>;

    /// Тело запроса; `usuario_id` из сессии для сущностей с автором
    fn payload(&self, usuario_id: Option<i64>) -> Result<Self::Dto, &'static str>;
}

pub struct DetailsViewModel<F: EntityForm> {
    pub form: RwSignal<F>,
    /// Ошибка валидации или загрузки, показывается над формой
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    modal: ModalStackService,
    notify: NotificationService,
    session: SessionContext,
}

impl<F: EntityForm> Clone for DetailsViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: EntityForm> Copy for DetailsViewModel<F> {}

impl<F: EntityForm> DetailsViewModel<F> {
    pub fn new() -> Self {
        Self::with_form(F::default())
    }

    /// Новая запись с заранее заполненными полями (пациент из истории и т.п.)
    pub fn with_form(initial: F) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            modal: use_context::<ModalStackService>()
                .expect("ModalStackService not provided in context"),
            notify: use_notify(),
            session: SessionContext::use_session(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id().is_some())
    }

    /// Заголовок формы в зависимости от режима
    pub fn title(&self, create: &'static str, edit: &'static str) -> &'static str {
        if self.is_edit_mode() {
            edit
        } else {
            create
        }
    }

    /// Загружает запись, если форма открыта на редактирование
    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(id) = id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api_utils::fetch_by_id::<F::Entity>(id).await {
                Ok(entity) => vm.form.set(F::from_entity(&entity)),
                Err(e) => vm.error.set(Some(format!("Error al cargar: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    /// POST для новой записи, PATCH для существующей
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();

        if let Err(msg) = current.validate() {
            self.error.set(Some(msg.to_string()));
            return;
        }
        let body = match current.payload(self.session.current_user_id()) {
            Ok(body) => body,
            Err(msg) => {
                self.error.set(Some(msg.to_string()));
                return;
            }
        };
        self.error.set(None);

        let vm = *self;
        let id = current.id();
        vm.saving.set(true);
        spawn_local(async move {
            let result = api_utils::save::<F::Entity, _>(id, &body).await;
            vm.saving.set(false);
            match result {
                Ok(_) => {
                    vm.notify.success(if id.is_some() {
                        "Cambios guardados correctamente"
                    } else {
                        "Registro creado correctamente"
                    });
                    on_saved.run(());
                }
                Err(e) => show_error(vm.modal, e),
            }
        });
    }
}
