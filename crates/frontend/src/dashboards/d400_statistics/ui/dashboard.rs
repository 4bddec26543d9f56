//! Статистика клиники за период: карточки, доходы по месяцам и самые
//! частые лечения. Всё считает бэкенд, здесь только показ и печать.

use crate::dashboards::d400_statistics::api;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::today;
use crate::shared::export::print::print_report;
use crate::shared::export::ReportSpec;
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::request_seq::RequestSeq;
use contracts::dashboards::d400_statistics::{Estadisticas, EstadisticasQuery};
use contracts::shared::date_format::format_date;
use contracts::shared::money::format_bs;
use contracts::shared::report::ReportColumn;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Печатная версия: показатели, затем месяцы, затем лечения
pub fn statistics_report(stats: &Estadisticas, query: &EstadisticasQuery) -> ReportSpec {
    let mut rows = vec![
        vec!["Ingresos totales".to_string(), format_bs(stats.ingresos_totales)],
        vec!["Pacientes nuevos".to_string(), stats.pacientes_nuevos.to_string()],
        vec!["Pagos registrados".to_string(), stats.cantidad_pagos.to_string()],
        vec!["Presupuestos activos".to_string(), stats.presupuestos_activos.to_string()],
    ];
    rows.extend(
        stats
            .ingresos_por_mes
            .iter()
            .map(|m| vec![format!("Ingresos {}", m.label()), format_bs(m.total)]),
    );
    rows.extend(stats.tratamientos_top.iter().map(|t| {
        vec![
            t.tratamiento.clone(),
            format!("{} ({})", t.cantidad, format_bs(t.total)),
        ]
    }));

    ReportSpec {
        title: "Estadísticas".to_string(),
        subtitle: Some(format!(
            "Del {} al {}",
            format_date(&query.desde),
            format_date(&query.hasta)
        )),
        columns: vec![
            ReportColumn::new("Indicador").weighted(2.0),
            ReportColumn::right("Valor"),
        ],
        rows,
    }
}

#[component]
pub fn EstadisticasDashboard() -> impl IntoView {
    let today = today();
    let initial = EstadisticasQuery::current_month(today);
    let desde = RwSignal::new(initial.desde);
    let hasta = RwSignal::new(initial.hasta);

    let data = RwSignal::new(None::<Estadisticas>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    // ответ на устаревший период не перетирает текущий
    let latest = RequestSeq::new();
    let notify = use_notify();

    let query = move || EstadisticasQuery {
        desde: desde.get(),
        hasta: hasta.get(),
    };

    Effect::new(move |_| {
        let q = query();
        let seq = latest.next();
        if !q.is_valid() {
            loading.set(false);
            error.set(Some("La fecha inicial debe ser anterior a la final".to_string()));
            return;
        }
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::get_statistics(&q).await;
            if !latest.is_current(seq) {
                return;
            }
            match result {
                Ok(stats) => data.set(Some(stats)),
                Err(e) => {
                    log::error!("statistics load failed: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let on_range = Callback::new(move |(from, to): (String, String)| {
        desde.set(from);
        hasta.set(to);
    });

    let on_print = move |_| {
        let Some(stats) = data.get_untracked() else {
            return;
        };
        let q = EstadisticasQuery {
            desde: desde.get_untracked(),
            hasta: hasta.get_untracked(),
        };
        if let Err(e) = print_report(&statistics_report(&stats, &q)) {
            log::error!("statistics print failed: {}", e);
            notify.error(format!("No se pudo imprimir: {}", e));
        }
    };

    let stat = move |f: fn(&Estadisticas) -> String| {
        Signal::derive(move || data.with(|d| d.as_ref().map(f)))
    };

    view! {
        <PageFrame page_id="d400_statistics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Estadísticas">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || data.with(|d| d.is_none()))
                    on_click=on_print
                >
                    {icon("printer")}
                    " Imprimir"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DateRangePicker date_from=desde date_to=hasta on_change=on_range today=today />

                {move || error.get().map(|e| view! { <div class="details__error">{e}</div> })}

                <div class="stat-grid" class:stat-grid--loading=move || loading.get()>
                    <StatCard
                        label="Ingresos"
                        icon_name="payments"
                        tone="success"
                        value=stat(|d| format_bs(d.ingresos_totales))
                    />
                    <StatCard
                        label="Pacientes nuevos"
                        icon_name="patients"
                        value=stat(|d| d.pacientes_nuevos.to_string())
                    />
                    <StatCard
                        label="Pagos"
                        icon_name="check"
                        value=stat(|d| d.cantidad_pagos.to_string())
                    />
                    <StatCard
                        label="Presupuestos activos"
                        icon_name="budget"
                        tone="warning"
                        value=stat(|d| d.presupuestos_activos.to_string())
                    />
                </div>

                <div class="dashboard-panels">
                    <section class="dashboard-panel">
                        <h3>"Ingresos por mes"</h3>
                        {move || {
                            data.with(|d| {
                                let Some(d) = d else { return ().into_any() };
                                if d.ingresos_por_mes.is_empty() {
                                    return view! { <p class="dashboard-panel__empty">"Sin datos"</p> }.into_any();
                                }
                                let max = d.max_month();
                                d.ingresos_por_mes
                                    .iter()
                                    .map(|m| {
                                        let width = format!("width: {:.1}%", m.percent_of(max));
                                        view! {
                                            <div class="bar-row">
                                                <span class="bar-row__label">{m.label()}</span>
                                                <div class="bar-row__track">
                                                    <div class="bar-row__fill" style=width></div>
                                                </div>
                                                <span class="bar-row__value">{format_bs(m.total)}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            })
                        }}
                    </section>

                    <section class="dashboard-panel">
                        <h3>"Tratamientos más frecuentes"</h3>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Tratamiento"</th>
                                    <th class="text-right">"Cantidad"</th>
                                    <th class="text-right">"Total"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    data.with(|d| {
                                        d.iter()
                                            .flat_map(|d| d.tratamientos_top.iter())
                                            .map(|t| {
                                                view! {
                                                    <tr>
                                                        <td>{t.tratamiento.clone()}</td>
                                                        <td class="text-right">{t.cantidad}</td>
                                                        <td class="text-right">{format_bs(t.total)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    })
                                }}
                            </tbody>
                        </table>
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_statistics::{MesIngreso, TratamientoTop};

    #[test]
    fn test_statistics_report() {
        let stats = Estadisticas {
            ingresos_totales: 1500.0,
            pacientes_nuevos: 4,
            cantidad_pagos: 7,
            presupuestos_activos: 2,
            ingresos_por_mes: vec![MesIngreso {
                mes: "2024-03".into(),
                total: 1500.0,
            }],
            tratamientos_top: vec![TratamientoTop {
                tratamiento: "Limpieza".into(),
                cantidad: 3,
                total: 450.0,
            }],
        };
        let query = EstadisticasQuery {
            desde: "2024-03-01".into(),
            hasta: "2024-03-31".into(),
        };
        let report = statistics_report(&stats, &query);
        assert_eq!(report.rows.len(), 6);
        assert_eq!(report.rows[0][1], "Bs. 1.500,00");
        assert_eq!(report.rows[4][0], "Ingresos mar 2024");
        assert_eq!(report.rows[5][1], "3 (Bs. 450,00)");
        assert_eq!(report.columns.len(), 2);
    }
}
