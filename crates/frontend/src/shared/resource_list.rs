//! Экран списка сущности: поиск, выгрузки, таблица, действия строки,
//! пагинация. Всё специфичное для сущности приходит через `ListScreen`.
//!
//! ```rust,ignore
//! #[component]
//! pub fn PacienteList() -> impl IntoView {
//!     resource_list(
//!         ListScreen::<Paciente>::new("a001_patient--list", |p| p.full_name())
//!             .with_form(paciente_form),
//!     )
//! }
//! ```

use crate::shared::components::estado_badge::EstadoBadge;
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::dialogs::show_error;
use crate::shared::export::{run_export, ExportKind, ReportSpec};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::common::{Estado, Resource};
use contracts::shared::report::{ColumnAlign, ReportColumn, ReportRow};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Форма в модалке: `(id, on_saved, on_cancel)`; `None` — новая запись
pub type FormBuilder = fn(Option<i64>, Callback<()>, Callback<()>) -> AnyView;

pub const FORM_STYLE: &str = "width: min(760px, 96vw); max-height: 92vh; overflow: auto;";
pub const WIDE_FORM_STYLE: &str = "width: min(1100px, 98vw); max-height: 94vh; overflow: auto;";

pub struct ListScreen<E: Send + Sync + 'static> {
    pub page_id: &'static str,
    pub search_placeholder: &'static str,
    /// Подпись записи в диалогах подтверждения
    pub label: fn(&E) -> String,
    pub form: Option<FormBuilder>,
    pub form_style: &'static str,
    /// Причина запрета жёсткого удаления (флаги бэкенда)
    pub delete_guard: fn(&E) -> Option<&'static str>,
    /// Дополнительные кнопки строки (PDF, WhatsApp...)
    pub row_extras: Option<fn(ListController<E>, &E) -> AnyView>,
    /// Дополнительные кнопки в шапке
    pub header_extras: Option<fn(ListController<E>) -> AnyView>,
    pub estado_column: EstadoColumn,
}

/// Где показывается бейдж активности записи
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstadoColumn {
    /// Отдельная колонка с этим заголовком
    Appended(&'static str),
    /// Вместо колонки отчёта «Estado»
    InReport,
}

impl EstadoColumn {
    /// Индекс колонки отчёта, заменяемой бейджем
    pub fn report_index(&self, columns: &[ReportColumn]) -> Option<usize> {
        match self {
            EstadoColumn::Appended(_) => None,
            EstadoColumn::InReport => columns.iter().position(|c| c.header == "Estado"),
        }
    }

    pub fn appended_header(&self, columns: &[ReportColumn]) -> Option<&'static str> {
        match self {
            EstadoColumn::Appended(header) => Some(*header),
            EstadoColumn::InReport if self.report_index(columns).is_none() => Some("Estado"),
            EstadoColumn::InReport => None,
        }
    }
}

impl<E: Send + Sync + 'static> Clone for ListScreen<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static> Copy for ListScreen<E> {}

fn not_guarded<E>(_: &E) -> Option<&'static str> {
    None
}

impl<E: Send + Sync + 'static> ListScreen<E> {
    pub fn new(page_id: &'static str, label: fn(&E) -> String) -> Self {
        Self {
            page_id,
            search_placeholder: "Buscar...",
            label,
            form: None,
            form_style: FORM_STYLE,
            delete_guard: not_guarded::<E>,
            row_extras: None,
            header_extras: None,
            estado_column: EstadoColumn::Appended("Estado"),
        }
    }

    /// Колонка «Estado» отчёта уже описывает активность записи
    pub fn estado_in_report(mut self) -> Self {
        self.estado_column = EstadoColumn::InReport;
        self
    }

    pub fn estado_header(mut self, header: &'static str) -> Self {
        self.estado_column = EstadoColumn::Appended(header);
        self
    }

    pub fn with_form(mut self, form: FormBuilder) -> Self {
        self.form = Some(form);
        self
    }

    pub fn wide_form(mut self) -> Self {
        self.form_style = WIDE_FORM_STYLE;
        self
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.search_placeholder = placeholder;
        self
    }

    pub fn with_delete_guard(mut self, guard: fn(&E) -> Option<&'static str>) -> Self {
        self.delete_guard = guard;
        self
    }

    pub fn with_row_extras(mut self, extras: fn(ListController<E>, &E) -> AnyView) -> Self {
        self.row_extras = Some(extras);
        self
    }

    pub fn with_header_extras(mut self, extras: fn(ListController<E>) -> AnyView) -> Self {
        self.header_extras = Some(extras);
        self
    }
}

fn align_class(align: ColumnAlign) -> &'static str {
    match align {
        ColumnAlign::Left => "",
        ColumnAlign::Center => "text-center",
        ColumnAlign::Right => "text-right",
    }
}

/// Открывает форму в модалке; после сохранения список перечитывается
pub fn open_form<E>(ctrl: ListController<E>, form: FormBuilder, style: &'static str, id: Option<i64>)
where
    E: Resource + DeserializeOwned + Clone + Send + Sync + 'static,
{
    ctrl.modal().push_with_frame(Some(style.to_string()), move |handle| {
        let on_saved = {
            let handle = handle.clone();
            Callback::new(move |_| {
                handle.close();
                ctrl.refetch();
            })
        };
        let on_cancel = {
            let handle = handle.clone();
            Callback::new(move |_| handle.close())
        };
        form(id, on_saved, on_cancel)
    });
}

/// Выгрузка всех строк под текущий поиск
fn export_all<E>(ctrl: ListController<E>, kind: ExportKind, busy: RwSignal<bool>)
where
    E: Resource + ReportRow + DeserializeOwned + Clone + Send + Sync + 'static,
{
    busy.set(true);
    spawn_local(async move {
        match ctrl.load_all_for_export().await {
            Ok(rows) => {
                let mut spec = ReportSpec::from_rows(E::TITLE, &rows);
                let search = ctrl.search.get_untracked();
                if !search.is_empty() {
                    spec = spec.with_subtitle(format!("Búsqueda: «{}»", search));
                }
                if let Err(e) = run_export(kind, &spec).await {
                    log::error!("{} export failed: {}", E::KEY, e);
                    ctrl.notify().error(format!("No se pudo generar el archivo: {}", e));
                }
            }
            Err(e) => show_error(ctrl.modal(), e),
        }
        busy.set(false);
    });
}

fn row_view<E>(screen: ListScreen<E>, ctrl: ListController<E>, row: E) -> impl IntoView
where
    E: Resource + ReportRow + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let id = row.id();
    let label = (screen.label)(&row);
    let columns = E::report_columns();
    let estado = E::SOFT_DELETE.then(|| row.estado().unwrap_or(Estado::Activo));
    let badge_index = estado.and(screen.estado_column.report_index(&columns));
    let cells = row
        .report_cells()
        .into_iter()
        .zip(columns.iter().map(|c| c.align))
        .enumerate()
        .map(|(i, (text, align))| match (badge_index == Some(i), estado) {
            (true, Some(e)) => view! { <td class="text-center"><EstadoBadge estado=e /></td> }.into_any(),
            _ => view! { <td class=align_class(align)>{text}</td> }.into_any(),
        })
        .collect_view();

    let estado_cell = estado
        .filter(|_| screen.estado_column.appended_header(&columns).is_some())
        .map(|e| view! { <td class="text-center"><EstadoBadge estado=e /></td> });

    let edit_button = screen.form.map(|form| {
        view! {
            <button
                class="icon-button"
                title="Editar"
                on:click=move |_| open_form(ctrl, form, screen.form_style, Some(id))
            >
                {icon("edit")}
            </button>
        }
    });

    let delete_button = match estado {
        Some(e) if e.is_active() => {
            let label = label.clone();
            view! {
                <button
                    class="icon-button icon-button--danger"
                    title="Desactivar"
                    on:click=move |_| ctrl.soft_delete(id, label.clone())
                >
                    {icon("trash")}
                </button>
            }
            .into_any()
        }
        Some(_) => {
            let label = label.clone();
            view! {
                <button
                    class="icon-button"
                    title="Reactivar"
                    on:click=move |_| ctrl.reactivate(id, label.clone())
                >
                    {icon("refresh")}
                </button>
            }
            .into_any()
        }
        None => {
            let blocked = (screen.delete_guard)(&row);
            let label = label.clone();
            view! {
                <button
                    class="icon-button icon-button--danger"
                    title=blocked.unwrap_or("Eliminar")
                    disabled=blocked.is_some()
                    on:click=move |_| ctrl.hard_delete(id, label.clone(), blocked)
                >
                    {icon("trash")}
                </button>
            }
            .into_any()
        }
    };

    let extras = screen.row_extras.map(|extras| extras(ctrl, &row));
    let inactive = estado.is_some_and(|e| !e.is_active());

    view! {
        <tr class:table__row--inactive=inactive>
            {cells}
            {estado_cell}
            <td class="table__actions">
                {extras}
                {edit_button}
                {delete_button}
            </td>
        </tr>
    }
}

pub fn resource_list<E>(screen: ListScreen<E>) -> impl IntoView
where
    E: Resource + ReportRow + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let ctrl = ListController::<E>::new();
    let exporting = RwSignal::new(false);

    let columns = E::report_columns();
    let estado_header = E::SOFT_DELETE
        .then(|| screen.estado_column.appended_header(&columns))
        .flatten();
    let column_count = columns.len() + 1 + usize::from(estado_header.is_some());
    let headers = columns
        .iter()
        .map(|c| view! { <th class=align_class(c.align)>{c.header}</th> })
        .collect_view();

    let on_search = Callback::new(move |text: String| ctrl.set_search(text));
    let on_export = Callback::new(move |kind: ExportKind| export_all(ctrl, kind, exporting));
    let on_page_change = Callback::new(move |page: usize| ctrl.set_page(page));

    let create_button = screen.form.map(|form| {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| open_form(ctrl, form, screen.form_style, None)
            >
                {icon("plus")}
                " Nuevo"
            </Button>
        }
    });
    let header_extras = screen.header_extras.map(|extras| extras(ctrl));

    let body = move || {
        if let Some(err) = ctrl.error.get() {
            return view! {
                <tr><td class="table__message table__message--error" colspan=column_count>{err}</td></tr>
            }
            .into_any();
        }
        let rows = ctrl.rows.get();
        if rows.is_empty() {
            let text = if ctrl.loading.get() { "Cargando..." } else { "Sin registros" };
            return view! {
                <tr><td class="table__message" colspan=column_count>{text}</td></tr>
            }
            .into_any();
        }
        rows.into_iter()
            .map(|row| row_view(screen, ctrl, row))
            .collect_view()
            .into_any()
    };

    view! {
        <PageFrame page_id=screen.page_id category=PAGE_CAT_LIST>
            <PageHeader title=E::TITLE>
                {header_extras}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctrl.refetch()>
                    {icon("refresh")}
                </Button>
                {create_button}
            </PageHeader>

            <div class="page__content">
                <ListToolbar
                    on_search=on_search
                    on_export=on_export
                    placeholder=screen.search_placeholder
                    busy=exporting
                />

                <div class="table-wrapper" class:table-wrapper--loading=move || ctrl.loading.get()>
                    <table class="table">
                        <thead>
                            <tr>
                                {headers}
                                {estado_header.map(|h| view! { <th class="text-center">{h}</th> })}
                                <th class="table__actions">"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>{body}</tbody>
                    </table>
                </div>

                <PaginationControls
                    window=Signal::derive(move || ctrl.window())
                    on_page_change=on_page_change
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ReportColumn> {
        vec![ReportColumn::new("Nombre"), ReportColumn::center("Estado")]
    }

    #[test]
    fn test_estado_in_report_reuses_column() {
        let cols = columns();
        assert_eq!(EstadoColumn::InReport.report_index(&cols), Some(1));
        assert_eq!(EstadoColumn::InReport.appended_header(&cols), None);
    }

    #[test]
    fn test_estado_appended() {
        let cols = columns();
        let col = EstadoColumn::Appended("Registro");
        assert_eq!(col.report_index(&cols), None);
        assert_eq!(col.appended_header(&cols), Some("Registro"));
        // нет колонки «Estado» в отчёте: бейдж всё равно нужен
        let only_name = vec![ReportColumn::new("Nombre")];
        assert_eq!(EstadoColumn::InReport.appended_header(&only_name), Some("Estado"));
    }
}
