//! Interest calculator page.

use leptos::prelude::*;
use thiserror::Error;
use webtools_core::error::InterestError;
use webtools_core::format::{format_currency, format_percent};
use webtools_core::tools::interest::{
    self, Compounding, InterestInput, InterestMode, InterestSummary, MAX_YEARS,
};

use super::{ErrorLine, FieldError, ToolPage, parse_number, parse_whole, segment_class};

stylance::import_crate_style!(css, "src/components/tools/tools.module.css");

#[derive(Debug, Clone, PartialEq, Error)]
enum FormError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Interest(#[from] InterestError),
}

#[component]
pub fn InterestCalculator() -> impl IntoView {
    let principal = RwSignal::new("10,000".to_string());
    let rate = RwSignal::new("5".to_string());
    let years = RwSignal::new("10".to_string());
    let contribution = RwSignal::new("100".to_string());
    let compounding = RwSignal::new(Compounding::default());
    let mode = RwSignal::new(InterestMode::default());

    let result = Memo::new(move |_| -> Result<InterestSummary, FormError> {
        let input = InterestInput {
            principal: principal.with(|s| parse_number("Principal", s))?,
            annual_rate: rate.with(|s| parse_number("Annual rate", s))?,
            years: years.with(|s| parse_whole("Years", s))?,
            compounding: compounding.get(),
            monthly_contribution: contribution.with(|s| parse_number("Monthly contribution", s))?,
            mode: mode.get(),
        };
        Ok(interest::calculate(&input)?)
    });

    let summary = move || result.get().ok();
    let error = Signal::derive(move || result.get().err().map(|e| e.to_string()));

    view! {
        <ToolPage name="interest">
            <div class=css::panel>
                <div class=css::segmented role="radiogroup">
                    {[InterestMode::Compound, InterestMode::Simple]
                        .into_iter()
                        .map(|m| view! {
                            <button
                                class=move || segment_class(mode.get() == m)
                                on:click=move |_| mode.set(m)
                            >
                                {match m {
                                    InterestMode::Compound => "Compound",
                                    InterestMode::Simple => "Simple",
                                }}
                            </button>
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class=css::form>
                    <label class=css::field>
                        <span class=css::label>"Principal"</span>
                        <input class=css::input inputmode="decimal" bind:value=principal />
                    </label>
                    <label class=css::field>
                        <span class=css::label>"Annual rate (%)"</span>
                        <input class=css::input inputmode="decimal" bind:value=rate />
                    </label>
                    <label class=css::field>
                        <span class=css::label>{format!("Years (max {MAX_YEARS})")}</span>
                        <input class=css::input inputmode="numeric" bind:value=years />
                    </label>
                    <label class=css::field>
                        <span class=css::label>"Monthly contribution"</span>
                        <input class=css::input inputmode="decimal" bind:value=contribution />
                    </label>
                    <Show when=move || mode.get() == InterestMode::Compound>
                        <label class=css::field>
                            <span class=css::label>"Compounding"</span>
                            <select
                                class=css::select
                                on:change=move |ev| {
                                    if let Some(c) = Compounding::from_label(&event_target_value(&ev)) {
                                        compounding.set(c);
                                    }
                                }
                            >
                                {Compounding::ALL
                                    .into_iter()
                                    .map(|c| view! {
                                        <option value=c.label() selected=move || compounding.get() == c>
                                            {c.label()}
                                        </option>
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </Show>
                </div>
                <ErrorLine message=error />
            </div>

            {move || summary().map(|s| view! { <Summary summary=s /> })}
        </ToolPage>
    }
}

#[component]
fn Summary(summary: InterestSummary) -> impl IntoView {
    let interest_share = if summary.final_balance > 0.0 {
        summary.total_interest / summary.final_balance
    } else {
        0.0
    };

    view! {
        <div class=css::stats>
            <div class=css::stat>
                <span class=css::statLabel>"Final balance"</span>
                <span class=css::statValueAccent>{format_currency(summary.final_balance)}</span>
            </div>
            <div class=css::stat>
                <span class=css::statLabel>"Total contributions"</span>
                <span class=css::statValue>{format_currency(summary.total_contributions)}</span>
            </div>
            <div class=css::stat>
                <span class=css::statLabel>"Total interest"</span>
                <span class=css::statValue>{format_currency(summary.total_interest)}</span>
            </div>
            <div class=css::stat>
                <span class=css::statLabel>"Interest share"</span>
                <span class=css::statValue>{format_percent(interest_share)}</span>
            </div>
        </div>

        <div class=css::tableWrap>
            <table class=css::table>
                <thead>
                    <tr>
                        <th>"Year"</th>
                        <th>"Contributions"</th>
                        <th>"Interest"</th>
                        <th>"Balance"</th>
                    </tr>
                </thead>
                <tbody>
                    {summary
                        .schedule
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <td>{row.year}</td>
                                <td>{format_currency(row.contributions)}</td>
                                <td>{format_currency(row.interest)}</td>
                                <td>{format_currency(row.balance)}</td>
                            </tr>
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
