//! Timezone converter page.

use leptos::prelude::*;
use leptos_icons::Icon;
use webtools_core::tools::timezone::{self, COMMON_ZONES, ZonedTime};

use super::{ErrorLine, ToolPage};
use crate::components::icons as ic;
use crate::config::DEFAULT_TARGET_ZONES;
use crate::utils::dom::local_timezone;

stylance::import_crate_style!(css, "src/components/tools/tools.module.css");

/// Value format of `<input type="datetime-local">`.
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

fn now_input(zone: &str) -> String {
    timezone::now_in(zone)
        .map(|t| t.local.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Zone options: the common list plus `extra` when it is not already there.
fn zone_options(extra: &str) -> Vec<String> {
    let mut zones: Vec<String> = COMMON_ZONES.iter().map(|z| z.to_string()).collect();
    if !extra.is_empty() && !zones.iter().any(|z| z == extra) {
        zones.insert(0, extra.to_string());
    }
    zones
}

#[component]
pub fn TimezoneConverter() -> impl IntoView {
    let local = local_timezone()
        .filter(|z| timezone::parse_zone(z).is_ok())
        .unwrap_or_else(|| "UTC".to_string());
    let options = StoredValue::new(zone_options(&local));

    let source = RwSignal::new(local.clone());
    let datetime = RwSignal::new(now_input(&local));
    let targets = RwSignal::new(
        DEFAULT_TARGET_ZONES
            .iter()
            .map(|z| z.to_string())
            .collect::<Vec<_>>(),
    );

    let converted = Memo::new(move |_| {
        let naive = datetime.with(|s| timezone::parse_datetime(s)).map_err(|e| e.to_string())?;
        targets
            .with(|t| source.with(|src| timezone::convert(naive, src, t)))
            .map_err(|e| e.to_string())
    });
    let error = Signal::derive(move || converted.get().err());

    let set_now = move |_| datetime.set(now_input(&source.get_untracked()));

    let add_target = move |zone: String| {
        targets.update(|t| {
            if !t.contains(&zone) {
                t.push(zone);
            }
        });
    };
    let remove_target = Callback::new(move |zone: String| {
        targets.update(|t| t.retain(|z| *z != zone));
    });

    view! {
        <ToolPage name="timezone">
            <div class=css::panel>
                <div class=css::form>
                    <label class=css::field>
                        <span class=css::label>"Date and time"</span>
                        <input class=css::input type="datetime-local" bind:value=datetime />
                    </label>
                    <label class=css::field>
                        <span class=css::label>"In timezone"</span>
                        <select class=css::select on:change=move |ev| source.set(event_target_value(&ev))>
                            {options
                                .get_value()
                                .into_iter()
                                .map(|z| {
                                    let label = z.clone();
                                    let value = z.clone();
                                    view! {
                                        <option value=value selected=move || source.with(|s| *s == z)>
                                            {label}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <button class=css::iconButton on:click=set_now title="Use the current time">
                        <Icon icon=ic::RESET />
                        <span class=css::iconButtonLabel>"Now"</span>
                    </button>
                </div>
                <ErrorLine message=error />
            </div>

            <div class=css::panel>
                {move || converted.get().ok().map(|rows| view! {
                    <ul class=css::zoneList>
                        {rows
                            .into_iter()
                            .map(|row| view! { <ZoneRow row=row on_remove=remove_target /> })
                            .collect::<Vec<_>>()}
                    </ul>
                })}

                <label class=css::field>
                    <span class=css::label>"Add timezone"</span>
                    <select
                        class=css::select
                        on:change=move |ev| {
                            let zone = event_target_value(&ev);
                            if !zone.is_empty() {
                                add_target(zone);
                            }
                        }
                    >
                        <option value="">"Choose a zone"</option>
                        {options
                            .get_value()
                            .into_iter()
                            .map(|z| view! { <option value=z.clone()>{z.clone()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
        </ToolPage>
    }
}

#[component]
fn ZoneRow(row: ZonedTime, on_remove: Callback<String>) -> impl IntoView {
    let zone = row.zone.clone();
    view! {
        <li class=css::zoneRow>
            <span class=css::zoneName>{row.zone.clone()}</span>
            <span class=css::mono>{row.display_time()}</span>
            <span class=css::badge>{row.abbreviation.clone()}</span>
            <span class=css::hint>{row.display_offset()}</span>
            <button class=css::linkButton on:click=move |_| on_remove.run(zone.clone())>"Remove"</button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_options_adds_unlisted_local_zone_first() {
        let zones = zone_options("Europe/Lisbon");
        assert_eq!(zones[0], "Europe/Lisbon");
        assert_eq!(zones.len(), COMMON_ZONES.len() + 1);
    }

    #[test]
    fn test_zone_options_does_not_duplicate() {
        assert_eq!(zone_options("Asia/Tokyo").len(), COMMON_ZONES.len());
        assert_eq!(zone_options("").len(), COMMON_ZONES.len());
    }

    #[test]
    fn test_now_input_matches_datetime_local_format() {
        let value = now_input("UTC");
        assert!(timezone::parse_datetime(&value).is_ok(), "{value}");
        assert_eq!(now_input("Mars/Olympus"), "");
    }
}
