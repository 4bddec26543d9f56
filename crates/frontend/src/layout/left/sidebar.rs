//! Боковое меню: группы разделов, системная группа только для администратора.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (tab key, icon)
    items: Vec<(&'static str, &'static str)>,
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "inicio",
            label: "Inicio",
            icon: "chart",
            items: vec![("d400_statistics", "chart")],
            admin_only: false,
        },
        MenuGroup {
            id: "clinica",
            label: "Clínica",
            icon: "tooth",
            items: vec![
                ("a001_patient", "patients"),
                ("a011_clinical_history", "history"),
                ("a009_proforma", "budget"),
                ("a010_proposal", "proposal"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "caja",
            label: "Caja",
            icon: "payments",
            items: vec![("a008_payment", "payments"), ("a007_payment_method", "settings")],
            admin_only: false,
        },
        MenuGroup {
            id: "laboratorio",
            label: "Laboratorio",
            icon: "lab",
            items: vec![("a005_laboratory", "lab"), ("a006_laboratory_work", "lab")],
            admin_only: false,
        },
        MenuGroup {
            id: "equipo",
            label: "Equipo e inventario",
            icon: "staff",
            items: vec![
                ("a002_doctor", "doctor"),
                ("a003_staff", "staff"),
                ("a004_inventory", "inventory"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "sistema",
            label: "Sistema",
            icon: "settings",
            items: vec![
                ("sys_users", "users"),
                ("sys_backups", "database"),
                ("sys_chatbot", "chat"),
            ],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = AppGlobalContext::use_global();
    let session = SessionContext::use_session();
    let expanded = RwSignal::new(vec!["inicio", "clinica"]);

    let toggle = move |id: &'static str| {
        expanded.update(|items| {
            if let Some(pos) = items.iter().position(|x| *x == id) {
                items.remove(pos);
            } else {
                items.push(id);
            }
        });
    };

    let group_view = move |group: MenuGroup| {
        let id = group.id;
        let items = group
            .items
            .into_iter()
            .map(|(key, icon_name)| {
                let label = tab_label_for_key(key);
                view! {
                    <div
                        class="app-sidebar__item app-sidebar__item--child"
                        class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(key))
                        on:click=move |_| ctx.open_tab(key, label)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(icon_name)}
                            <span>{label}</span>
                        </div>
                    </div>
                }
            })
            .collect_view();

        view! {
            <div class="app-sidebar__group">
                <div class="app-sidebar__item" on:click=move |_| toggle(id)>
                    <div class="app-sidebar__item-content">
                        {icon(group.icon)}
                        <span>{group.label}</span>
                    </div>
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=move || expanded.with(|e| e.contains(&id))
                    >
                        {icon("chevron-right")}
                    </div>
                </div>
                <div class="app-sidebar__children" class:hidden=move || !expanded.with(|e| e.contains(&id))>
                    {items}
                </div>
            </div>
        }
    };

    view! {
        <nav class="app-sidebar__content">
            {move || {
                let is_admin = session.is_admin();
                menu_groups()
                    .into_iter()
                    .filter(|g| is_admin || !g.admin_only)
                    .map(group_view)
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_label() {
        for group in menu_groups() {
            for (key, _) in group.items {
                assert!(!tab_label_for_key(key).is_empty(), "no label for {}", key);
            }
        }
    }

    #[test]
    fn test_only_system_group_is_admin_only() {
        let admin: Vec<_> = menu_groups()
            .into_iter()
            .filter(|g| g.admin_only)
            .map(|g| g.id)
            .collect();
        assert_eq!(admin, vec!["sistema"]);
    }
}
