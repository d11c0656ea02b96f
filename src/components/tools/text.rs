//! Text tools page: statistics and transformations.

use leptos::prelude::*;
use leptos_icons::Icon;
use webtools_core::tools::text::{self, Transform};

use super::{CopyButton, ToolPage, chip_class};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/tools/tools.module.css");

#[component]
pub fn TextTools() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let output = RwSignal::new(String::new());
    let last = RwSignal::new(None::<Transform>);

    let stats = Memo::new(move |_| input.with(|s| text::stats(s)));

    let apply = move |transform: Transform| {
        let result = input.with_untracked(|s| transform.apply(s));
        tracing::debug!(transform = transform.label(), "text transform");
        output.set(result);
        last.set(Some(transform));
    };

    let use_output = move |_| {
        input.set(output.get_untracked());
        output.set(String::new());
        last.set(None);
    };

    let stat_items = move || {
        let s = stats.get();
        [
            ("Characters", s.characters),
            ("Without spaces", s.characters_no_spaces),
            ("Words", s.words),
            ("Lines", s.lines),
            ("Sentences", s.sentences),
            ("Paragraphs", s.paragraphs),
            ("Reading time (min)", s.reading_minutes),
        ]
        .into_iter()
        .map(|(label, value)| view! {
            <div class=css::stat>
                <span class=css::statLabel>{label}</span>
                <span class=css::statValue>{value}</span>
            </div>
        })
        .collect::<Vec<_>>()
    };

    view! {
        <ToolPage name="text">
            <div class=css::panel>
                <textarea
                    class=css::textarea
                    rows="10"
                    placeholder="Paste or type text here"
                    bind:value=input
                ></textarea>
                <div class=css::stats>{stat_items}</div>
            </div>

            <div class=css::panel>
                <div class=css::chips>
                    {Transform::ALL
                        .into_iter()
                        .map(|t| view! {
                            <button
                                class=move || chip_class(last.get() == Some(t))
                                on:click=move |_| apply(t)
                            >
                                {t.label()}
                            </button>
                        })
                        .collect::<Vec<_>>()}
                </div>

                <Show when=move || last.get().is_some()>
                    <textarea class=css::textarea rows="10" readonly prop:value=move || output.get()></textarea>
                    <div class=css::actions>
                        <CopyButton value=output />
                        <button class=css::iconButton on:click=use_output title="Replace the input with this result">
                            <Icon icon=ic::RESET />
                            <span class=css::iconButtonLabel>"Use as input"</span>
                        </button>
                    </div>
                </Show>
            </div>
        </ToolPage>
    }
}
