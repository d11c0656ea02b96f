//! JSON formatter page.

use leptos::prelude::*;
use webtools_core::error::JsonError;
use webtools_core::tools::json::{self, FormatOptions, Indent};

use super::{CopyButton, ErrorLine, ToolPage};

stylance::import_crate_style!(css, "src/components/tools/tools.module.css");

const SAMPLE: &str = r#"{"name":"webtools","tools":["json","regex"],"version":1}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Format,
    Minify,
}

#[component]
pub fn JsonFormatter() -> impl IntoView {
    let input = RwSignal::new(SAMPLE.to_string());
    let indent = RwSignal::new(Indent::default());
    let sort_keys = RwSignal::new(false);
    let output = RwSignal::new(None::<Result<String, JsonError>>);

    let summary = Memo::new(move |_| input.with(|s| json::validate(s)));

    let run = move |action: Action| {
        let options = FormatOptions {
            indent: indent.get_untracked(),
            sort_keys: sort_keys.get_untracked(),
        };
        let result = input.with_untracked(|s| match action {
            Action::Format => json::format(s, options),
            Action::Minify => json::minify(s, options.sort_keys),
        });
        if let Err(err) = &result {
            tracing::debug!(%err, ?action, "json rejected");
        }
        output.set(Some(result));
    };

    let status = move || match summary.get() {
        Ok(s) => view! {
            <p class=css::ok>
                {format!("Valid JSON: {} root, depth {}, {} values", s.root, s.depth, s.nodes)}
            </p>
        }
        .into_any(),
        Err(JsonError::Empty) => view! { <p class=css::hint>"Paste a JSON document"</p> }.into_any(),
        Err(err) => view! { <p class=css::error role="alert">{err.to_string()}</p> }.into_any(),
    };

    let output_text = Signal::derive(move || {
        output.with(|o| o.as_ref().and_then(|r| r.as_ref().ok().cloned()).unwrap_or_default())
    });
    let output_error = Signal::derive(move || {
        output.with(|o| o.as_ref().and_then(|r| r.as_ref().err().map(ToString::to_string)))
    });

    view! {
        <ToolPage name="json">
            <div class=css::panel>
                <textarea
                    class=css::textareaMono
                    rows="12"
                    spellcheck="false"
                    bind:value=input
                ></textarea>
                {status}

                <div class=css::form>
                    <label class=css::field>
                        <span class=css::label>"Indent"</span>
                        <select
                            class=css::select
                            on:change=move |ev| {
                                if let Some(i) = Indent::from_label(&event_target_value(&ev)) {
                                    indent.set(i);
                                }
                            }
                        >
                            {Indent::ALL
                                .into_iter()
                                .map(|i| view! {
                                    <option value=i.label() selected=move || indent.get() == i>
                                        {i.label()}
                                    </option>
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class=css::checkbox>
                        <input type="checkbox" bind:checked=sort_keys />
                        <span>"Sort keys"</span>
                    </label>
                </div>

                <div class=css::actions>
                    <button class=css::button on:click=move |_| run(Action::Format)>"Format"</button>
                    <button class=css::buttonSecondary on:click=move |_| run(Action::Minify)>"Minify"</button>
                </div>
            </div>

            <Show when=move || output.with(|o| matches!(o, Some(Ok(_))))>
                <div class=css::panel>
                    <pre class=css::codeBlock>{output_text}</pre>
                    <div class=css::actions>
                        <CopyButton value=output_text />
                    </div>
                </div>
            </Show>
            <ErrorLine message=output_error />
        </ToolPage>
    }
}
