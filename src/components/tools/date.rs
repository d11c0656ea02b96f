//! Date calculator page.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use webtools_core::tools::date::{self, DateDifference, DateUnit};

use super::{ErrorLine, ToolPage, segment_class};

stylance::import_crate_style!(css, "src/components/tools/tools.module.css");

const INPUT_FORMAT: &str = "%Y-%m-%d";

fn plural(count: impl Into<i64>, unit: &str) -> String {
    let count = count.into();
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// "1 year, 2 months, 3 days", skipping zero parts except when all are zero.
fn describe(diff: &DateDifference) -> String {
    let parts: Vec<String> = [
        (diff.years, "year"),
        (diff.months, "month"),
        (diff.days, "day"),
    ]
    .into_iter()
    .filter(|(n, _)| *n > 0)
    .map(|(n, unit)| plural(n, unit))
    .collect();

    if parts.is_empty() {
        "0 days".to_string()
    } else {
        parts.join(", ")
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[component]
pub fn DateCalculator() -> impl IntoView {
    let today = today().format(INPUT_FORMAT).to_string();

    view! {
        <ToolPage name="date">
            <Difference today=today.clone() />
            <Arithmetic today=today />
        </ToolPage>
    }
}

#[component]
fn Difference(today: String) -> impl IntoView {
    let start = RwSignal::new(today.clone());
    let end = RwSignal::new(today);

    let diff = Memo::new(move |_| {
        let start = start.with(|s| date::parse_date(s)).map_err(|e| e.to_string())?;
        let end = end.with(|s| date::parse_date(s)).map_err(|e| e.to_string())?;
        Ok::<_, String>(date::difference(start, end))
    });
    let error = Signal::derive(move || diff.get().err());

    view! {
        <section class=css::panel>
            <h2 class=css::panelTitle>"Difference between dates"</h2>
            <div class=css::form>
                <label class=css::field>
                    <span class=css::label>"Start"</span>
                    <input class=css::input type="date" bind:value=start />
                </label>
                <label class=css::field>
                    <span class=css::label>"End"</span>
                    <input class=css::input type="date" bind:value=end />
                </label>
            </div>
            <ErrorLine message=error />

            {move || diff.get().ok().map(|d| view! {
                <p class=css::resultValue>
                    {describe(&d)}
                    {d.negative.then_some(" (end is before start)")}
                </p>
                <div class=css::stats>
                    <div class=css::stat>
                        <span class=css::statLabel>"Total days"</span>
                        <span class=css::statValue>{d.total_days}</span>
                    </div>
                    <div class=css::stat>
                        <span class=css::statLabel>"Weeks"</span>
                        <span class=css::statValue>
                            {format!("{} + {}", plural(d.total_weeks, "week"), plural(d.remaining_days, "day"))}
                        </span>
                    </div>
                    <div class=css::stat>
                        <span class=css::statLabel>"Business days"</span>
                        <span class=css::statValue>{d.business_days}</span>
                    </div>
                </div>
            })}
        </section>
    }
}

#[component]
fn Arithmetic(today: String) -> impl IntoView {
    let base = RwSignal::new(today);
    let amount = RwSignal::new("30".to_string());
    let unit = RwSignal::new(DateUnit::default());
    let subtract = RwSignal::new(false);

    let result = Memo::new(move |_| {
        let base = base.with(|s| date::parse_date(s)).map_err(|e| e.to_string())?;
        let amount: i64 = amount.with(|s| {
            s.trim()
                .parse()
                .map_err(|_| format!("amount: '{}' is not a whole number", s.trim()))
        })?;
        let signed = if subtract.get() { -amount } else { amount };
        date::add(base, signed, unit.get()).map_err(|e| e.to_string())
    });
    let error = Signal::derive(move || result.get().err());

    view! {
        <section class=css::panel>
            <h2 class=css::panelTitle>"Add or subtract"</h2>
            <div class=css::form>
                <label class=css::field>
                    <span class=css::label>"Date"</span>
                    <input class=css::input type="date" bind:value=base />
                </label>
                <div class=css::segmented role="radiogroup">
                    <button
                        class=move || segment_class(!subtract.get())
                        on:click=move |_| subtract.set(false)
                    >
                        "+"
                    </button>
                    <button
                        class=move || segment_class(subtract.get())
                        on:click=move |_| subtract.set(true)
                    >
                        "−"
                    </button>
                </div>
                <label class=css::field>
                    <span class=css::label>"Amount"</span>
                    <input class=css::input inputmode="numeric" bind:value=amount />
                </label>
                <label class=css::field>
                    <span class=css::label>"Unit"</span>
                    <select
                        class=css::select
                        on:change=move |ev| {
                            if let Some(u) = DateUnit::from_label(&event_target_value(&ev)) {
                                unit.set(u);
                            }
                        }
                    >
                        {DateUnit::ALL
                            .into_iter()
                            .map(|u| view! {
                                <option value=u.label() selected=move || unit.get() == u>{u.label()}</option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
            <ErrorLine message=error />

            {move || result.get().ok().map(|d| {
                let info = date::info(d);
                view! {
                    <p class=css::resultValue>
                        {format!("{}, {}", date::weekday_name(info.weekday), d.format(INPUT_FORMAT))}
                    </p>
                    <p class=css::hint>
                        {format!(
                            "ISO week {} of {}, day {} of the year{}",
                            info.iso_week,
                            info.iso_year,
                            info.day_of_year,
                            if info.leap_year { ", leap year" } else { "" },
                        )}
                    </p>
                }
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        date::parse_date(s).unwrap()
    }

    #[test]
    fn test_describe_skips_zero_parts() {
        let diff = date::difference(d("2024-01-15"), d("2025-03-15"));
        assert_eq!(describe(&diff), "1 year, 2 months");
        let diff = date::difference(d("2024-01-15"), d("2024-01-16"));
        assert_eq!(describe(&diff), "1 day");
    }

    #[test]
    fn test_describe_same_day() {
        let diff = date::difference(d("2024-01-15"), d("2024-01-15"));
        assert_eq!(describe(&diff), "0 days");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1u32, "week"), "1 week");
        assert_eq!(plural(0i64, "day"), "0 days");
    }
}
