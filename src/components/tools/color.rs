//! Color converter page.

use leptos::prelude::*;
use webtools_core::format::format_number;
use webtools_core::tools::color::{self, ColorFormats};

use super::{CopyButton, ErrorLine, ToolPage};

stylance::import_crate_style!(css, "src/components/tools/tools.module.css");

/// WCAG 2 rating of a contrast ratio for normal-size text.
fn wcag_grade(ratio: f64) -> &'static str {
    if ratio >= 7.0 {
        "AAA"
    } else if ratio >= 4.5 {
        "AA"
    } else if ratio >= 3.0 {
        "AA large"
    } else {
        "Fail"
    }
}

#[component]
pub fn ColorConverter() -> impl IntoView {
    let input = RwSignal::new("#4a90e2".to_string());
    let parsed = Memo::new(move |_| input.with(|s| color::convert(s)).map_err(|e| e.to_string()));

    // Native pickers only understand opaque #rrggbb.
    let picker_value = move || {
        parsed
            .get()
            .ok()
            .and_then(|f| f.hex.get(..7).map(str::to_string))
            .unwrap_or_else(|| "#000000".to_string())
    };
    let error = Signal::derive(move || parsed.get().err());

    view! {
        <ToolPage name="color">
            <div class=css::panel>
                <div class=css::form>
                    <label class=css::fieldWide>
                        <span class=css::label>"Color (hex, rgb(), rgba(), hsl(), hsla())"</span>
                        <input class=css::input spellcheck="false" bind:value=input />
                    </label>
                    <label class=css::field>
                        <span class=css::label>"Picker"</span>
                        <input
                            class=css::colorPicker
                            type="color"
                            prop:value=picker_value
                            on:input=move |ev| input.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <ErrorLine message=error />
            </div>

            {move || parsed.get().ok().map(|formats| view! { <Formats formats=formats /> })}
        </ToolPage>
    }
}

#[component]
fn Formats(formats: ColorFormats) -> impl IntoView {
    let rows = [
        ("HEX", formats.hex.clone()),
        ("RGB", formats.rgb.clone()),
        ("HSL", formats.hsl.clone()),
        ("HSV", formats.hsv.clone()),
        ("CMYK", formats.cmyk.clone()),
    ];

    view! {
        <div class=css::colorLayout>
            <div class=css::swatch style:background-color=formats.rgb.clone()>
                <span class=css::swatchTextLight>"Aa"</span>
                <span class=css::swatchTextDark>"Aa"</span>
            </div>

            <dl class=css::list>
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        let copy = value.clone();
                        view! {
                            <div class=css::listRow>
                                <dt class=css::listLabel>{label}</dt>
                                <dd class=css::mono>{value}</dd>
                                <CopyButton value=Signal::derive(move || copy.clone()) />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </div>

        <div class=css::stats>
            <div class=css::stat>
                <span class=css::statLabel>"Relative luminance"</span>
                <span class=css::statValue>{format_number(formats.luminance, 4)}</span>
            </div>
            <div class=css::stat>
                <span class=css::statLabel>"Contrast on white"</span>
                <span class=css::statValue>
                    {format!("{}:1", format_number(formats.contrast_on_white, 2))}
                </span>
                <span class=css::badge>{wcag_grade(formats.contrast_on_white)}</span>
            </div>
            <div class=css::stat>
                <span class=css::statLabel>"Contrast on black"</span>
                <span class=css::statValue>
                    {format!("{}:1", format_number(formats.contrast_on_black, 2))}
                </span>
                <span class=css::badge>{wcag_grade(formats.contrast_on_black)}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wcag_grade_thresholds() {
        assert_eq!(wcag_grade(21.0), "AAA");
        assert_eq!(wcag_grade(4.5), "AA");
        assert_eq!(wcag_grade(3.2), "AA large");
        assert_eq!(wcag_grade(1.0), "Fail");
    }

    #[test]
    fn test_black_on_white_is_aaa() {
        let formats = color::convert("#000").unwrap();
        assert_eq!(wcag_grade(formats.contrast_on_white), "AAA");
        assert_eq!(wcag_grade(formats.contrast_on_black), "Fail");
    }
}
