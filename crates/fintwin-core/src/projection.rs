//! Savings projection engine
//!
//! Pure functions mapping (salary, expenses, horizon, scenario rates) to
//! cumulative monthly savings series, plus checkpoint summarization and the
//! goal-month lookup. No I/O, no shared state; every call allocates only its
//! own output. Non-finite inputs propagate through the arithmetic untouched,
//! matching the garbage-in-garbage-out contract of the API layer above
//! (which is responsible for rejecting them).

use crate::models::{ExpenseMap, ProjectionSet, ScenarioRates, ScenarioSet, Summary};
use crate::noise::NoiseSource;

/// Nominal checkpoint indices into a cumulative series (0-based).
const CHECKPOINT_YEARLY: usize = 11;
const CHECKPOINT_TWO_YEARS: usize = 23;

/// Savings for a single scenario in a single month (1-based).
///
/// `salary * (1 + sg)^m - total_expenses * (1 + eg)^m`. With zero rates this
/// degenerates to the constant `salary - total_expenses`.
pub fn monthly_savings(salary: f64, total_expenses: f64, rates: &ScenarioRates, month: usize) -> f64 {
    let m = month as f64;
    salary * (1.0 + rates.salary_growth).powf(m)
        - total_expenses * (1.0 + rates.expense_growth).powf(m)
}

/// Cumulative savings series for all three scenarios.
///
/// Each returned series has exactly `horizon` entries, entry `i` covering
/// months 1 through `i + 1`. `horizon` must be at least 1.
pub fn generate_projections(
    salary: f64,
    expenses: &ExpenseMap,
    horizon: usize,
    rates: &ScenarioSet,
) -> ProjectionSet {
    let total = total_expenses(expenses);
    ProjectionSet {
        base: cumulative_series(salary, total, &rates.base, horizon, None),
        optimistic: cumulative_series(salary, total, &rates.optimistic, horizon, None),
        conservative: cumulative_series(salary, total, &rates.conservative, horizon, None),
    }
}

/// Like [`generate_projections`] but with a per-month perturbation from
/// `noise` added to each monthly value before the running sum, so the noise
/// accumulates over the series. Each scenario-month consumes one draw, in
/// base/optimistic/conservative order.
pub fn generate_projections_with_noise(
    salary: f64,
    expenses: &ExpenseMap,
    horizon: usize,
    rates: &ScenarioSet,
    noise: &mut dyn NoiseSource,
) -> ProjectionSet {
    let total = total_expenses(expenses);
    ProjectionSet {
        base: cumulative_series(salary, total, &rates.base, horizon, Some(&mut *noise)),
        optimistic: cumulative_series(salary, total, &rates.optimistic, horizon, Some(&mut *noise)),
        conservative: cumulative_series(salary, total, &rates.conservative, horizon, Some(noise)),
    }
}

/// Sum of all expense categories. Empty map sums to 0.
pub fn total_expenses(expenses: &ExpenseMap) -> f64 {
    expenses.values().sum()
}

fn cumulative_series(
    salary: f64,
    total: f64,
    rates: &ScenarioRates,
    horizon: usize,
    mut noise: Option<&mut dyn NoiseSource>,
) -> Vec<f64> {
    let mut series = Vec::with_capacity(horizon);
    let mut running = 0.0;
    for month in 1..=horizon {
        let mut saved = monthly_savings(salary, total, rates, month);
        if let Some(src) = noise.as_deref_mut() {
            saved += src.next_offset();
        }
        running += saved;
        series.push(running);
    }
    series
}

/// First 1-based month at which the cumulative series reaches `target`.
///
/// Ascending scan, first match wins; a series that later dips back below the
/// target still reports the first crossing. `None` when the target is never
/// reached within the series.
pub fn goal_month(series: &[f64], target: f64) -> Option<usize> {
    series
        .iter()
        .position(|&value| value >= target)
        .map(|idx| idx + 1)
}

/// Extract the fixed reporting checkpoints from a cumulative series.
///
/// Indices past the end of the series clamp to the last entry, so short
/// horizons report their final value rather than fault.
///
/// # Panics
///
/// Panics on an empty series. Callers always obtain series from
/// [`generate_projections`] with `horizon >= 1`.
pub fn summarize(series: &[f64]) -> Summary {
    let last = series.len() - 1;
    let at = |idx: usize| series[idx.min(last)];
    Summary {
        monthly: at(0),
        yearly: at(CHECKPOINT_YEARLY),
        two_years: at(CHECKPOINT_TWO_YEARS),
        five_years: series[last],
    }
}
