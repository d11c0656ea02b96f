//! Unit converter page.

use leptos::prelude::*;
use leptos_icons::Icon;
use webtools_core::format::format_number;
use webtools_core::tools::units::{self, Category};

use super::{CopyButton, ErrorLine, ToolPage, chip_class, parse_number};
use crate::components::icons as ic;
use crate::config::RESULT_DECIMALS;

stylance::import_crate_style!(css, "src/components/tools/tools.module.css");

/// First and second unit symbols of a category, the default pair.
fn default_pair(category: Category) -> (&'static str, &'static str) {
    let mut symbols = category.units().map(|u| u.symbol);
    let from = symbols.next().unwrap_or_default();
    let to = symbols.next().unwrap_or(from);
    (from, to)
}

#[component]
pub fn UnitConverter() -> impl IntoView {
    let category = RwSignal::new(Category::Length);
    let (from0, to0) = default_pair(Category::Length);
    let from = RwSignal::new(from0);
    let to = RwSignal::new(to0);
    let value = RwSignal::new("1".to_string());

    let select_category = move |c: Category| {
        let (f, t) = default_pair(c);
        category.set(c);
        from.set(f);
        to.set(t);
    };

    let swap = move |_| {
        let (f, t) = (from.get_untracked(), to.get_untracked());
        from.set(t);
        to.set(f);
    };

    let input_value = Memo::new(move |_| value.with(|s| parse_number("Value", s)));

    let converted = Memo::new(move |_| {
        let v = input_value.get().map_err(|e| e.to_string())?;
        units::convert(v, from.get(), to.get()).map_err(|e| e.to_string())
    });

    let all = Memo::new(move |_| {
        let v = input_value.get().ok()?;
        units::convert_all(v, from.get()).ok()
    });

    let result_text = Signal::derive(move || {
        converted
            .get()
            .map(|v| format!("{} {}", format_number(v, RESULT_DECIMALS), to.get()))
            .unwrap_or_default()
    });
    let error = Signal::derive(move || converted.get().err());

    let unit_options = move |selected: RwSignal<&'static str>| {
        category
            .get()
            .units()
            .map(|u| {
                view! {
                    <option value=u.symbol selected=move || selected.get() == u.symbol>
                        {format!("{} ({})", u.name, u.symbol)}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <ToolPage name="converter">
            <div class=css::panel>
                <div class=css::chips>
                    {Category::ALL
                        .into_iter()
                        .map(|c| view! {
                            <button
                                class=move || chip_class(category.get() == c)
                                on:click=move |_| select_category(c)
                            >
                                {c.label()}
                            </button>
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class=css::form>
                    <label class=css::field>
                        <span class=css::label>"Value"</span>
                        <input class=css::input inputmode="decimal" bind:value=value />
                    </label>
                    <label class=css::field>
                        <span class=css::label>"From"</span>
                        <select
                            class=css::select
                            on:change=move |ev| {
                                if let Ok(unit) = units::find_unit(&event_target_value(&ev)) {
                                    from.set(unit.symbol);
                                }
                            }
                        >
                            {move || unit_options(from)}
                        </select>
                    </label>
                    <button class=css::iconButton on:click=swap title="Swap units">
                        <Icon icon=ic::CONVERTER />
                    </button>
                    <label class=css::field>
                        <span class=css::label>"To"</span>
                        <select
                            class=css::select
                            on:change=move |ev| {
                                if let Ok(unit) = units::find_unit(&event_target_value(&ev)) {
                                    to.set(unit.symbol);
                                }
                            }
                        >
                            {move || unit_options(to)}
                        </select>
                    </label>
                </div>

                <Show when=move || converted.get().is_ok()>
                    <div class=css::result>
                        <span class=css::resultValue>{result_text}</span>
                        <CopyButton value=result_text />
                    </div>
                </Show>
                <ErrorLine message=error />
            </div>

            {move || all.get().map(|rows| view! {
                <div class=css::tableWrap>
                    <table class=css::table>
                        <thead>
                            <tr>
                                <th>"Unit"</th>
                                <th>"Value"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|(unit, v)| view! {
                                    <tr>
                                        <td>{format!("{} ({})", unit.name, unit.symbol)}</td>
                                        <td class=css::mono>{format_number(v, RESULT_DECIMALS)}</td>
                                    </tr>
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </div>
            })}
        </ToolPage>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_is_two_distinct_units() {
        for category in Category::ALL {
            let (from, to) = default_pair(category);
            assert_ne!(from, to, "{}", category.label());
            assert!(units::convert(1.0, from, to).is_ok());
        }
    }
}
