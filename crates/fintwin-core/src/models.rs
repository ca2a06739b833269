//! Data types shared between the projection engine, the API server, and the CLI

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default projection horizon in months (5 years).
pub const DEFAULT_HORIZON: usize = 60;

/// Monthly expenses by category name.
///
/// A BTreeMap so that iteration order is deterministic: wherever a single
/// category must be picked out of several with equal amounts (see
/// [`crate::recommend::largest_expense`]), the first in ascending key
/// order wins.
pub type ExpenseMap = BTreeMap<String, f64>;

/// Multiplicative monthly growth rates for one scenario.
///
/// A rate of 0.003 means +0.3% per month, applied compounding. Salary and
/// aggregate expenses drift independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRates {
    pub salary_growth: f64,
    pub expense_growth: f64,
}

impl ScenarioRates {
    pub const fn new(salary_growth: f64, expense_growth: f64) -> Self {
        Self {
            salary_growth,
            expense_growth,
        }
    }
}

/// Growth rates for the three named scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioSet {
    /// No drift: monthly savings stay constant.
    pub base: ScenarioRates,
    /// Salary grows faster than expenses.
    pub optimistic: ScenarioRates,
    /// Expenses grow while salary stands still.
    pub conservative: ScenarioRates,
}

impl Default for ScenarioSet {
    fn default() -> Self {
        Self {
            base: ScenarioRates::new(0.0, 0.0),
            optimistic: ScenarioRates::new(0.003, 0.002),
            conservative: ScenarioRates::new(0.0, 0.005),
        }
    }
}

/// Cumulative savings over time for the three scenarios.
///
/// Each series has one entry per elapsed month, entry `i` being the running
/// sum of monthly savings through month `i + 1`. A series is non-decreasing
/// only while the underlying monthly savings stay non-negative; dips are
/// expected when expenses outgrow salary, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSet {
    pub base: Vec<f64>,
    pub optimistic: Vec<f64>,
    pub conservative: Vec<f64>,
}

impl ProjectionSet {
    /// Number of months covered (all three series share the same length).
    pub fn horizon(&self) -> usize {
        self.base.len()
    }
}

/// Base-scenario savings at the fixed reporting checkpoints.
///
/// Checkpoints clamp to the end of the series when the horizon is shorter
/// than the nominal index, so a 6-month projection reports its final value
/// for all of yearly/2_years/5_years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Savings after the first month.
    pub monthly: f64,
    /// Cumulative savings after 1 year.
    pub yearly: f64,
    /// Cumulative savings after 2 years.
    #[serde(rename = "2_years")]
    pub two_years: f64,
    /// Cumulative savings at the end of the horizon (nominally 5 years).
    #[serde(rename = "5_years")]
    pub five_years: f64,
}

/// First month each scenario reaches its goal amount, if ever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoalMonths {
    pub base: Option<usize>,
    pub optimistic: Option<usize>,
    pub conservative: Option<usize>,
}

/// Body of `POST /forecast`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastRequest {
    pub salary: f64,
    pub expenses: ExpenseMap,
    /// Projection length in months; defaults to [`DEFAULT_HORIZON`].
    pub horizon: Option<usize>,
    /// Per-scenario growth-rate overrides.
    pub scenarios: Option<ScenarioSet>,
    /// Target cumulative amounts, one per scenario.
    pub base_goal: Option<f64>,
    pub optimistic_goal: Option<f64>,
    pub conservative_goal: Option<f64>,
    /// Seed for the optional fluctuation noise. Absent = deterministic.
    pub noise_seed: Option<u64>,
    /// Noise amplitude; only meaningful together with `noise_seed`.
    pub noise_scale: Option<f64>,
}

impl ForecastRequest {
    pub fn wants_goals(&self) -> bool {
        self.base_goal.is_some() || self.optimistic_goal.is_some() || self.conservative_goal.is_some()
    }
}

/// Body of a successful `POST /forecast` response.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub summary: Summary,
    pub scenarios: ProjectionSet,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_months: Option<GoalMonths>,
}
