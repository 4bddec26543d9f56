use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::clinic::{CLINIC_NAME, CLINIC_SLOGAN, LOGO_PATH};
use crate::system::auth::context::SessionContext;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (usuario, set_usuario) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = SessionContext::use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let usuario_val = usuario.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if usuario_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Ingrese usuario y contraseña".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // при успехе AppShell сам переключится на основной layout
            if let Err(e) = session.login(usuario_val, password_val).await {
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <img class="login-box__logo" src=LOGO_PATH alt=CLINIC_NAME />
                <h1>{CLINIC_NAME}</h1>
                <h2>{CLINIC_SLOGAN}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="usuario">"Usuario"</label>
                        <input
                            class="form__input"
                            type="text"
                            id="usuario"
                            autocomplete="username"
                            prop:value=move || usuario.get()
                            on:input=move |ev| set_usuario.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">"Contraseña"</label>
                        <input
                            class="form__input"
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary login-box__submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
