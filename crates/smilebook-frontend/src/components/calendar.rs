use std::collections::HashMap;

use chrono::{Datelike, Duration, Local, NaiveDate};
use yew::prelude::*;

use smilebook::data::CalendarEntry;

use crate::providers::appointments::{self, FetchStatus};
use crate::providers::use_appointments;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

fn add_months(month: NaiveDate, delta: i32) -> NaiveDate {
    let total = month.year() * 12 + month.month0() as i32 + delta;
    NaiveDate::from_ymd_opt(total.div_euclid(12), (total.rem_euclid(12) + 1) as u32, 1).unwrap()
}

fn days_in_month(month: NaiveDate) -> u32 {
    (add_months(month, 1) - Duration::days(1)).day()
}

/// Day-of-month an entry falls on, if its date parses and lands in `month`.
/// Anything after a `T` in the raw date string is ignored.
fn entry_day(raw_date: &str, month: NaiveDate) -> Option<u32> {
    let date_part = raw_date.split('T').next().unwrap_or(raw_date);
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    (date.year() == month.year() && date.month() == month.month()).then(|| date.day())
}

fn entries_by_day(entries: &[CalendarEntry], month: NaiveDate) -> HashMap<u32, Vec<String>> {
    let mut by_day: HashMap<u32, Vec<String>> = HashMap::new();
    for entry in entries {
        if let Some(day) = entry_day(&entry.date, month) {
            by_day.entry(day).or_default().push(entry.name.clone());
        }
    }
    by_day
}

/// Month-grid view over the global appointments read-model. The only
/// consumer of the appointments store.
#[function_component(CalendarView)]
pub fn calendar_view() -> Html {
    let store = use_appointments();
    let month = use_state(|| month_start(Local::now().date_naive()));

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            appointments::fetch(&store);
        });
    }

    let on_prev = {
        let month = month.clone();
        Callback::from(move |_: MouseEvent| month.set(add_months(*month, -1)))
    };
    let on_next = {
        let month = month.clone();
        Callback::from(move |_: MouseEvent| month.set(add_months(*month, 1)))
    };

    let body = match &store.status {
        FetchStatus::Loading => html! {
            <p class="text-gray-500 py-8 text-center">{ "Loading calendar..." }</p>
        },
        FetchStatus::Failed(message) => html! {
            <p class="text-red-600 py-8 text-center">{ message }</p>
        },
        FetchStatus::Succeeded => {
            let by_day = entries_by_day(&store.entries, *month);
            let leading = month.weekday().num_days_from_sunday() as usize;
            let days = days_in_month(*month);

            let mut cells: Vec<Html> = Vec::with_capacity(leading + days as usize);
            cells.extend((0..leading).map(|_| html! { <div class="h-20"></div> }));
            cells.extend((1..=days).map(|day| {
                html! {
                    <div class="h-20 border border-gray-200 rounded p-1 overflow-hidden">
                        <div class="text-xs text-gray-500">{ day }</div>
                        {
                            by_day.get(&day).into_iter().flatten().map(|name| html! {
                                <div class="text-xs bg-blue-100 text-blue-800 rounded px-1 mt-0.5 truncate">
                                    { name }
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                }
            }));

            html! {
                <div class="grid grid-cols-7 gap-1">
                    { for WEEKDAYS.iter().map(|d| html! {
                        <div class="text-xs font-semibold text-center text-gray-600">{ *d }</div>
                    }) }
                    { for cells }
                </div>
            }
        }
    };

    html! {
        <div class="mt-8">
            <div class="flex items-center justify-between mb-2">
                <h2 class="text-xl font-semibold">{ "Full Appointment Calendar" }</h2>
                <div class="space-x-2">
                    <button class="px-2 py-1 border rounded hover:bg-gray-100" onclick={on_prev}>{ "‹" }</button>
                    <span class="font-medium">{ month.format("%B %Y").to_string() }</span>
                    <button class="px-2 py-1 border rounded hover:bg-gray-100" onclick={on_next}>{ "›" }</button>
                </div>
            </div>
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_months_crosses_year_boundaries() {
        assert_eq!(add_months(date(2026, 12, 1), 1), date(2027, 1, 1));
        assert_eq!(add_months(date(2026, 1, 1), -1), date(2025, 12, 1));
        assert_eq!(add_months(date(2026, 6, 1), -18), date(2024, 12, 1));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(date(2026, 2, 1)), 28);
        assert_eq!(days_in_month(date(2028, 2, 1)), 29);
        assert_eq!(days_in_month(date(2026, 9, 1)), 30);
    }

    #[test]
    fn entry_day_drops_time_suffix_and_filters_by_month() {
        let month = date(2026, 9, 1);
        assert_eq!(entry_day("2026-09-14", month), Some(14));
        assert_eq!(entry_day("2026-09-14T10:30:00Z", month), Some(14));
        assert_eq!(entry_day("2026-10-01", month), None);
        assert_eq!(entry_day("not a date", month), None);
    }

    #[test]
    fn entries_group_by_day() {
        let month = date(2026, 9, 1);
        let entries = vec![
            CalendarEntry {
                id: 1,
                name: "Cleaning".into(),
                date: "2026-09-03".into(),
            },
            CalendarEntry {
                id: 2,
                name: "Checkup".into(),
                date: "2026-09-03".into(),
            },
            CalendarEntry {
                id: 3,
                name: "Elsewhere".into(),
                date: "2026-08-03".into(),
            },
        ];
        let by_day = entries_by_day(&entries, month);
        assert_eq!(by_day.get(&3).map(Vec::len), Some(2));
        assert_eq!(by_day.len(), 1);
    }
}
