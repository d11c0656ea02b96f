//! Keyboard tester page.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_event_listener, use_window};
use webtools_core::tools::keyboard::{KeyAction, KeyboardState, display_key};

use super::ToolPage;
use crate::components::icons as ic;
use crate::config::keyboard::HISTORY_LIMIT;

stylance::import_crate_style!(css, "src/components/tools/device.module.css");

/// Physical layout drawn on screen: `(code, label)` per key, row by row.
const LAYOUT: &[&[(&str, &str)]] = &[
    &[
        ("Escape", "Esc"), ("F1", "F1"), ("F2", "F2"), ("F3", "F3"), ("F4", "F4"),
        ("F5", "F5"), ("F6", "F6"), ("F7", "F7"), ("F8", "F8"), ("F9", "F9"),
        ("F10", "F10"), ("F11", "F11"), ("F12", "F12"),
    ],
    &[
        ("Backquote", "`"), ("Digit1", "1"), ("Digit2", "2"), ("Digit3", "3"), ("Digit4", "4"),
        ("Digit5", "5"), ("Digit6", "6"), ("Digit7", "7"), ("Digit8", "8"), ("Digit9", "9"),
        ("Digit0", "0"), ("Minus", "-"), ("Equal", "="), ("Backspace", "Backspace"),
    ],
    &[
        ("Tab", "Tab"), ("KeyQ", "Q"), ("KeyW", "W"), ("KeyE", "E"), ("KeyR", "R"),
        ("KeyT", "T"), ("KeyY", "Y"), ("KeyU", "U"), ("KeyI", "I"), ("KeyO", "O"),
        ("KeyP", "P"), ("BracketLeft", "["), ("BracketRight", "]"), ("Backslash", "\\"),
    ],
    &[
        ("CapsLock", "Caps"), ("KeyA", "A"), ("KeyS", "S"), ("KeyD", "D"), ("KeyF", "F"),
        ("KeyG", "G"), ("KeyH", "H"), ("KeyJ", "J"), ("KeyK", "K"), ("KeyL", "L"),
        ("Semicolon", ";"), ("Quote", "'"), ("Enter", "Enter"),
    ],
    &[
        ("ShiftLeft", "Shift"), ("KeyZ", "Z"), ("KeyX", "X"), ("KeyC", "C"), ("KeyV", "V"),
        ("KeyB", "B"), ("KeyN", "N"), ("KeyM", "M"), ("Comma", ","), ("Period", "."),
        ("Slash", "/"), ("ShiftRight", "Shift"),
    ],
    &[
        ("ControlLeft", "Ctrl"), ("MetaLeft", "Meta"), ("AltLeft", "Alt"), ("Space", "Space"),
        ("AltRight", "Alt"), ("MetaRight", "Meta"), ("ControlRight", "Ctrl"),
        ("ArrowLeft", "←"), ("ArrowUp", "↑"), ("ArrowDown", "↓"), ("ArrowRight", "→"),
    ],
];

/// Keys whose browser default (focus change, scrolling, quick find) would
/// interrupt testing.
fn suppresses_default(code: &str) -> bool {
    matches!(
        code,
        "Tab"
            | "Space"
            | "Backspace"
            | "Quote"
            | "Slash"
            | "ArrowUp"
            | "ArrowDown"
            | "ArrowLeft"
            | "ArrowRight"
            | "PageUp"
            | "PageDown"
            | "Home"
            | "End"
    )
}

#[component]
pub fn KeyboardTester() -> impl IntoView {
    let state = RwSignal::new(KeyboardState::new(HISTORY_LIMIT));

    let _ = use_event_listener(use_window(), ev::keydown, move |e| {
        let code = e.code();
        if suppresses_default(&code) {
            e.prevent_default();
        }
        state.update(|s| s.key_down(&e.key(), &code, e.repeat()));
    });

    let _ = use_event_listener(use_window(), ev::keyup, move |e| {
        state.update(|s| s.key_up(&e.key(), &e.code()));
    });

    // Key-up events are lost while the window is unfocused.
    let _ = use_event_listener(use_window(), ev::blur, move |_| {
        state.update(KeyboardState::release_all);
    });

    let reset = move |_| {
        tracing::debug!("keyboard tester reset");
        state.update(KeyboardState::reset);
    };

    let key_class = move |code: &'static str| {
        state.with(|s| {
            if s.is_held(code) {
                css::keyHeld
            } else if s.was_tested(code) {
                css::keyTested
            } else {
                css::key
            }
        })
    };

    view! {
        <ToolPage name="keyboard">
            <p class=css::prompt>"Press keys anywhere on this page."</p>

            <div class=css::keyboard>
                {LAYOUT
                    .iter()
                    .map(|row| view! {
                        <div class=css::keyRow>
                            {row
                                .iter()
                                .map(|&(code, label)| view! {
                                    <span class=move || key_class(code) title=code>{label}</span>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class=css::summary>
                <span>{move || format!("Keys tested: {}", state.with(KeyboardState::tested_count))}</span>
                <span>{move || format!("Presses: {}", state.with(KeyboardState::presses))}</span>
                <span>
                    {move || state.with(|s| {
                        let held: Vec<&str> = s.held().collect();
                        if held.is_empty() {
                            "Held: none".to_string()
                        } else {
                            format!("Held: {}", held.join(" + "))
                        }
                    })}
                </span>
                <button class=css::resetButton on:click=reset title="Forget tested keys">
                    <Icon icon=ic::RESET />
                    <span>"Reset"</span>
                </button>
            </div>

            <ol class=css::log>
                {move || state.with(|s| {
                    s.history()
                        .map(|event| {
                            let action = match event.action {
                                KeyAction::Down if event.repeat => "repeat",
                                KeyAction::Down => "down",
                                KeyAction::Up => "up",
                            };
                            view! {
                                <li class=css::logEntry>
                                    <span class=css::logAction>{action}</span>
                                    <span class=css::logKey>{display_key(&event.key).to_string()}</span>
                                    <span class=css::logCode>{event.code.clone()}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                })}
            </ol>
        </ToolPage>
    }
}
