use crate::shared::form_vm::{DetailsViewModel, EntityForm};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Рамка формы в модалке: заголовок по режиму, ошибка, поля, кнопки.
#[component]
pub fn DetailsShell<F>(
    vm: DetailsViewModel<F>,
    title_create: &'static str,
    title_edit: &'static str,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
    /// Кнопки слева от «Guardar» (PDF, WhatsApp...)
    #[prop(optional)]
    actions: Option<ChildrenFn>,
) -> impl IntoView
where
    F: EntityForm,
{
    view! {
        <div class="details">
            <div class="details__header">
                <h3>{move || vm.title(title_create, title_edit)}</h3>
                <button type="button" class="icon-button" title="Cerrar" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                </button>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="details__error">{e}</div> })}

            <div class="details__body" class:details__body--loading=move || vm.loading.get()>
                {children()}
            </div>

            <div class="details__footer">
                {actions.map(|a| view! { <div class="details__extra-actions">{a()}</div> })}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                >
                    {move || if vm.saving.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </div>
        </div>
    }
}
