//! Gamepad tester page.
//!
//! The Gamepad API has no change events for buttons or axes, so connected
//! pads are polled on an interval and the view only updates when a snapshot
//! differs from the previous one.

use leptos::prelude::*;
use leptos_use::use_interval_fn;
use wasm_bindgen::JsCast;
use webtools_core::format::format_number;
use webtools_core::tools::gamepad::{ButtonState, GamepadSnapshot, StickPosition};

use super::ToolPage;
use crate::config::gamepad::{DEFAULT_DEADZONE, POLL_INTERVAL_MS};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/tools/device.module.css");

fn snapshot(pad: &web_sys::Gamepad) -> GamepadSnapshot {
    GamepadSnapshot {
        index: pad.index(),
        id: pad.id(),
        standard: pad.mapping() == web_sys::GamepadMappingType::Standard,
        buttons: pad
            .buttons()
            .iter()
            .filter_map(|b| b.dyn_into::<web_sys::GamepadButton>().ok())
            .map(|b| ButtonState {
                pressed: b.pressed(),
                value: b.value(),
            })
            .collect(),
        axes: pad.axes().iter().filter_map(|a| a.as_f64()).collect(),
    }
}

/// Snapshots of every connected gamepad, ordered by index.
fn read_gamepads() -> Vec<GamepadSnapshot> {
    let Some(window) = dom::window() else {
        return Vec::new();
    };
    let pads = match window.navigator().get_gamepads() {
        Ok(pads) => pads,
        Err(err) => {
            tracing::warn!(error = %dom::js_error_message(&err), "gamepad API unavailable");
            return Vec::new();
        }
    };

    pads.iter()
        .filter_map(|p| p.dyn_into::<web_sys::Gamepad>().ok())
        .filter(web_sys::Gamepad::connected)
        .map(|p| snapshot(&p))
        .collect()
}

#[component]
pub fn GamepadTester() -> impl IntoView {
    let pads = RwSignal::new(Vec::<GamepadSnapshot>::new());
    let deadzone = RwSignal::new(DEFAULT_DEADZONE);

    let _ = use_interval_fn(
        move || {
            let current = read_gamepads();
            if pads.with_untracked(|p| *p != current) {
                if pads.with_untracked(Vec::len) != current.len() {
                    tracing::info!(connected = current.len(), "gamepads changed");
                }
                pads.set(current);
            }
        },
        POLL_INTERVAL_MS,
    );

    view! {
        <ToolPage name="gamepad">
            <label class=css::slider>
                <span>{move || format!("Stick deadzone: {}", format_number(deadzone.get(), 2))}</span>
                <input
                    type="range"
                    min="0"
                    max="0.5"
                    step="0.01"
                    prop:value=move || deadzone.get()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            deadzone.set(v);
                        }
                    }
                />
            </label>

            {move || {
                let current = pads.get();
                if current.is_empty() {
                    view! {
                        <p class=css::prompt>
                            "No gamepad detected. Connect one and press any button."
                        </p>
                    }
                    .into_any()
                } else {
                    current
                        .into_iter()
                        .map(|pad| view! { <PadView pad=pad deadzone=deadzone /> })
                        .collect::<Vec<_>>()
                        .into_any()
                }
            }}
        </ToolPage>
    }
}

#[component]
fn PadView(pad: GamepadSnapshot, deadzone: RwSignal<f64>) -> impl IntoView {
    let axes = pad.clone();
    let mapping = if pad.standard { "standard mapping" } else { "non-standard mapping" };

    view! {
        <section class=css::pad>
            <header class=css::padHeader>
                <span class=css::padIndex>{format!("#{}", pad.index)}</span>
                <span class=css::padId>{pad.id.clone()}</span>
                <span class=css::padMeta>
                    {format!("{mapping}, {} pressed", pad.pressed_count())}
                </span>
            </header>

            <div class=css::buttons>
                {pad
                    .buttons
                    .iter()
                    .enumerate()
                    .map(|(i, b)| {
                        let class = if b.pressed { css::buttonPressed } else { css::button };
                        view! {
                            <div class=class>
                                <span
                                    class=css::buttonFill
                                    style:height=format!("{}%", (b.value * 100.0).round())
                                ></span>
                                <span class=css::buttonLabel>{pad.button_label(i)}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class=css::sticks>
                {move || {
                    axes.sticks(deadzone.get())
                        .into_iter()
                        .enumerate()
                        .map(|(i, stick)| view! { <Stick index=i position=stick /> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <p class=css::axes>
                {pad
                    .axes
                    .iter()
                    .enumerate()
                    .map(|(i, v)| format!("A{i}: {:+.3}", v))
                    .collect::<Vec<_>>()
                    .join("  ")}
            </p>
        </section>
    }
}

#[component]
fn Stick(index: usize, position: StickPosition) -> impl IntoView {
    // Map -1..1 onto 0..100% of the well; screen y grows downward like the API's.
    let left = format!("{}%", 50.0 + position.x * 50.0);
    let top = format!("{}%", 50.0 + position.y * 50.0);

    view! {
        <figure class=css::stick>
            <div class=css::stickWell>
                <span class=css::stickDot style:left=left style:top=top></span>
            </div>
            <figcaption class=css::stickCaption>
                {format!(
                    "Stick {}: {}, {} ({})",
                    index + 1,
                    format_number(position.x, 2),
                    format_number(position.y, 2),
                    format_number(position.magnitude(), 2),
                )}
            </figcaption>
        </figure>
    }
}
