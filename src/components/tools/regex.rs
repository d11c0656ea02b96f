//! Regex tester page.

use leptos::prelude::*;
use webtools_core::tools::regex::{MAX_MATCHES, MatchInfo, MatchReport, Tester};

use super::{CopyButton, ErrorLine, ToolPage};

stylance::import_crate_style!(css, "src/components/tools/tools.module.css");

/// Split `haystack` into alternating plain and matched runs for highlighting.
///
/// Empty matches produce no highlighted run.
fn segments(haystack: &str, matches: &[MatchInfo]) -> Vec<(String, bool)> {
    let mut out = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;
    for m in matches.iter().filter(|m| m.end > m.start) {
        if m.start > cursor {
            out.push((haystack[cursor..m.start].to_string(), false));
        }
        out.push((haystack[m.start..m.end].to_string(), true));
        cursor = m.end;
    }
    if cursor < haystack.len() {
        out.push((haystack[cursor..].to_string(), false));
    }
    out
}

/// A compiled pattern. Equality is by pattern and flag text.
#[derive(Clone)]
struct Compiled {
    source: (String, String),
    tester: Result<Tester, String>,
}

impl PartialEq for Compiled {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

#[component]
pub fn RegexTester() -> impl IntoView {
    let pattern = RwSignal::new(r"(?P<user>[\w.]+)@(?P<domain>[\w.]+)".to_string());
    let flags = RwSignal::new("g".to_string());
    let haystack = RwSignal::new("Contact alice@example.com or bob.smith@mail.org".to_string());
    let replacement = RwSignal::new("$user at $domain".to_string());

    let compiled = Memo::new(move |_| {
        let source = (pattern.get(), flags.get());
        let tester = Tester::with_flag_str(&source.0, &source.1).map_err(|e| e.to_string());
        Compiled { source, tester }
    });

    let report = Memo::new(move |_| {
        compiled.with(|c| match &c.tester {
            Ok(tester) => haystack.with(|h| tester.find(h)),
            Err(_) => MatchReport::default(),
        })
    });

    let replaced = Signal::derive(move || {
        compiled.with(|c| match &c.tester {
            Ok(tester) => haystack.with(|h| replacement.with(|r| tester.replace(h, r))),
            Err(_) => String::new(),
        })
    });

    let error = Signal::derive(move || compiled.with(|c| c.tester.as_ref().err().cloned()));

    let summary = move || {
        let groups = compiled.with(|c| c.tester.as_ref().map(Tester::group_count).unwrap_or(0));
        report.with(|r| {
            let count = r.matches.len();
            let more = if r.truncated {
                format!(" (showing first {MAX_MATCHES})")
            } else {
                String::new()
            };
            format!(
                "{} match{}{}, {} capture group{}",
                count,
                if count == 1 { "" } else { "es" },
                more,
                groups,
                if groups == 1 { "" } else { "s" },
            )
        })
    };

    view! {
        <ToolPage name="regex">
            <div class=css::panel>
                <div class=css::form>
                    <label class=css::fieldWide>
                        <span class=css::label>"Pattern"</span>
                        <input class=css::inputMono spellcheck="false" bind:value=pattern />
                    </label>
                    <label class=css::fieldNarrow>
                        <span class=css::label>"Flags (imsxg)"</span>
                        <input class=css::inputMono spellcheck="false" bind:value=flags />
                    </label>
                </div>
                <ErrorLine message=error />

                <textarea
                    class=css::textareaMono
                    rows="6"
                    spellcheck="false"
                    bind:value=haystack
                ></textarea>
            </div>

            <Show when=move || compiled.with(|c| c.tester.is_ok())>
                <div class=css::panel>
                    <p class=css::hint>{summary}</p>
                    <pre class=css::codeBlock>
                        {move || haystack.with(|h| report.with(|r| {
                            segments(h, &r.matches)
                                .into_iter()
                                .map(|(text, hit)| {
                                    if hit {
                                        view! { <mark class=css::highlight>{text}</mark> }.into_any()
                                    } else {
                                        text.into_any()
                                    }
                                })
                                .collect::<Vec<_>>()
                        }))}
                    </pre>

                    <ol class=css::matchList>
                        {move || {
                            report
                                .get()
                                .matches
                                .into_iter()
                                .map(|m| view! { <MatchItem info=m /> })
                                .collect::<Vec<_>>()
                        }}
                    </ol>
                </div>

                <div class=css::panel>
                    <label class=css::field>
                        <span class=css::label>"Replace with ($1, ${name}, $$)"</span>
                        <input class=css::inputMono spellcheck="false" bind:value=replacement />
                    </label>
                    <pre class=css::codeBlock>{replaced}</pre>
                    <div class=css::actions>
                        <CopyButton value=replaced />
                    </div>
                </div>
            </Show>
        </ToolPage>
    }
}

#[component]
fn MatchItem(info: MatchInfo) -> impl IntoView {
    view! {
        <li class=css::matchItem>
            <span class=css::mono>{format!("{:?}", info.text)}</span>
            <span class=css::hint>{format!(" at {}..{}", info.start, info.end)}</span>
            <ul class=css::groupList>
                {info
                    .groups
                    .into_iter()
                    .map(|g| {
                        let label = match g.name {
                            Some(name) => format!("{} ({name})", g.index),
                            None => g.index.to_string(),
                        };
                        let value = match g.text {
                            Some(text) => format!("{text:?}"),
                            None => "no match".to_string(),
                        };
                        view! {
                            <li>
                                <span class=css::listLabel>{label}</span>
                                <span class=css::mono>{value}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </li>
    }
}
