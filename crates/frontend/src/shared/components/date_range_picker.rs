use chrono::{Datelike, Duration, NaiveDate};
use leptos::prelude::*;
use thaw::*;

/// Первый и последний день месяца
pub fn month_range(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// Месяц перед тем, в который попадает `date`
pub fn previous_month_range(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    month_range(year, month)
}

fn iso_pair((from, to): (NaiveDate, NaiveDate)) -> (String, String) {
    (
        from.format("%Y-%m-%d").to_string(),
        to.format("%Y-%m-%d").to_string(),
    )
}

/// Период «desde / hasta» с быстрыми кнопками
#[component]
pub fn DateRangePicker(
    /// yyyy-mm-dd
    #[prop(into)]
    date_from: Signal<String>,
    #[prop(into)] date_to: Signal<String>,
    /// (desde, hasta)
    on_change: Callback<(String, String)>,
    /// Дата, от которой считаются «Este mes» и «Este año»
    today: NaiveDate,
) -> impl IntoView {
    let apply = move |range: Option<(NaiveDate, NaiveDate)>| {
        if let Some(range) = range {
            on_change.run(iso_pair(range));
        }
    };

    let on_previous = move |_| {
        // от текущего «desde», чтобы листать назад
        let from = NaiveDate::parse_from_str(&date_from.get_untracked(), "%Y-%m-%d").unwrap_or(today);
        apply(previous_month_range(from));
    };

    view! {
        <div class="date-range">
            <label class="date-range__field">
                <span>"Desde"</span>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || date_from.get()
                    on:change=move |ev| on_change.run((event_target_value(&ev), date_to.get_untracked()))
                />
            </label>
            <label class="date-range__field">
                <span>"Hasta"</span>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || date_to.get()
                    on:change=move |ev| on_change.run((date_from.get_untracked(), event_target_value(&ev)))
                />
            </label>
            <div class="date-range__quick">
                <Button size=ButtonSize::Small on_click=move |_| apply(month_range(today.year(), today.month()))>
                    "Este mes"
                </Button>
                <Button size=ButtonSize::Small on_click=on_previous>
                    "Mes anterior"
                </Button>
                <Button
                    size=ButtonSize::Small
                    on_click=move |_| apply(NaiveDate::from_ymd_opt(today.year(), 1, 1).map(|start| (start, today)))
                >
                    "Este año"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_range() {
        let (from, to) = month_range(2024, 2).unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        let (_, dec_end) = month_range(2023, 12).unwrap();
        assert_eq!(dec_end, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert!(month_range(2024, 13).is_none());
    }

    #[test]
    fn test_previous_month_wraps_year() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let range = previous_month_range(jan).unwrap();
        assert_eq!(
            iso_pair(range),
            ("2023-12-01".to_string(), "2023-12-31".to_string())
        );
    }
}
