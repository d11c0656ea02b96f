//! Simple and compound interest with optional monthly contributions.

use serde::{Deserialize, Serialize};

use crate::error::InterestError;

/// Longest supported term.
pub const MAX_YEARS: u32 = 100;

/// How often interest is compounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Compounding {
    Annually,
    SemiAnnually,
    Quarterly,
    #[default]
    Monthly,
    Daily,
}

impl Compounding {
    pub const ALL: [Compounding; 5] = [
        Self::Annually,
        Self::SemiAnnually,
        Self::Quarterly,
        Self::Monthly,
        Self::Daily,
    ];

    pub fn periods_per_year(self) -> u32 {
        match self {
            Self::Annually => 1,
            Self::SemiAnnually => 2,
            Self::Quarterly => 4,
            Self::Monthly => 12,
            Self::Daily => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Annually => "Annually",
            Self::SemiAnnually => "Semi-annually",
            Self::Quarterly => "Quarterly",
            Self::Monthly => "Monthly",
            Self::Daily => "Daily",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterestMode {
    Simple,
    #[default]
    Compound,
}

/// Calculator input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestInput {
    pub principal: f64,
    /// Nominal annual rate in percent (5.0 means 5%).
    pub annual_rate: f64,
    pub years: u32,
    pub compounding: Compounding,
    /// Deposited at the end of every month.
    pub monthly_contribution: f64,
    pub mode: InterestMode,
}

/// Totals for one year of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: u32,
    pub contributions: f64,
    pub interest: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestSummary {
    pub final_balance: f64,
    /// Principal plus every monthly contribution.
    pub total_contributions: f64,
    pub total_interest: f64,
    pub schedule: Vec<YearSummary>,
}

impl InterestInput {
    fn validate(&self) -> Result<(), InterestError> {
        for (field, value) in [
            ("principal", self.principal),
            ("rate", self.annual_rate),
            ("contribution", self.monthly_contribution),
        ] {
            if !value.is_finite() {
                return Err(InterestError::NotFinite { field });
            }
        }
        if self.principal < 0.0 {
            return Err(InterestError::NegativePrincipal);
        }
        if self.annual_rate < 0.0 {
            return Err(InterestError::NegativeRate);
        }
        if self.monthly_contribution < 0.0 {
            return Err(InterestError::NegativeContribution);
        }
        if self.years == 0 {
            return Err(InterestError::ZeroTerm);
        }
        if self.years > MAX_YEARS {
            return Err(InterestError::TermTooLong { max: MAX_YEARS });
        }
        Ok(())
    }
}

/// Run the calculation month by month and summarize each year.
pub fn calculate(input: &InterestInput) -> Result<InterestSummary, InterestError> {
    input.validate()?;

    let rate = input.annual_rate / 100.0;
    let n = f64::from(input.compounding.periods_per_year());
    // Growth over one month at the nominal compounding frequency.
    let monthly_growth = (1.0 + rate / n).powf(n / 12.0);

    let mut balance = input.principal;
    let mut total_contributions = input.principal;
    let mut total_interest = 0.0;
    let mut schedule = Vec::with_capacity(input.years as usize);

    // Simple interest accrues on deposits only, never on earned interest.
    let mut deposited = input.principal;

    for year in 1..=input.years {
        let mut year_interest = 0.0;
        let mut year_contributions = 0.0;

        for _ in 0..12 {
            let interest = match input.mode {
                InterestMode::Compound => balance * (monthly_growth - 1.0),
                InterestMode::Simple => deposited * rate / 12.0,
            };
            balance += interest + input.monthly_contribution;
            deposited += input.monthly_contribution;
            year_interest += interest;
            year_contributions += input.monthly_contribution;
        }

        total_interest += year_interest;
        total_contributions += year_contributions;
        schedule.push(YearSummary {
            year,
            contributions: year_contributions,
            interest: year_interest,
            balance,
        });
    }

    Ok(InterestSummary {
        final_balance: balance,
        total_contributions,
        total_interest,
        schedule,
    })
}
