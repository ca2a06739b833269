//! Fintwin Core Library
//!
//! Shared functionality for the fintwin savings forecaster:
//! - Projection engine: multi-year cumulative savings under three scenarios
//! - Checkpoint summary and goal-month lookup
//! - Savings-ratio recommendations
//! - Injectable, seedable fluctuation noise
//! - Engine configuration (TOML, with platform config-dir overrides)

pub mod config;
pub mod error;
pub mod models;
pub mod noise;
pub mod projection;
pub mod recommend;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use models::{
    ExpenseMap, ForecastRequest, ForecastResponse, GoalMonths, ProjectionSet, ScenarioRates,
    ScenarioSet, Summary, DEFAULT_HORIZON,
};
pub use noise::{NoiseSource, SeededNoise, ZeroNoise};
pub use projection::{
    generate_projections, generate_projections_with_noise, goal_month, monthly_savings, summarize,
    total_expenses,
};
pub use recommend::{largest_expense, recommend, savings_ratio, RecommendationThresholds};

use tracing::debug;

/// Run a full forecast: projections, summary, recommendation, and optional
/// per-scenario goal months. This is the single entry point the server and
/// CLI both call; the request is consumed read-only and all state is local
/// to the call.
pub fn run_forecast(request: &ForecastRequest, config: &EngineConfig) -> ForecastResponse {
    let horizon = request.horizon.unwrap_or(config.horizon);
    let rates = request.scenarios.unwrap_or(config.scenarios);

    let scenarios = match request.noise_seed {
        Some(seed) => {
            let scale = request.noise_scale.unwrap_or(0.0);
            let mut noise = SeededNoise::new(seed, scale);
            generate_projections_with_noise(
                request.salary,
                &request.expenses,
                horizon,
                &rates,
                &mut noise,
            )
        }
        None => generate_projections(request.salary, &request.expenses, horizon, &rates),
    };

    let summary = summarize(&scenarios.base);

    // Advice is driven by the undrifted first-month figure.
    let monthly = request.salary - total_expenses(&request.expenses);
    let recommendation = recommend(
        request.salary,
        &request.expenses,
        monthly,
        &config.thresholds,
    );

    let goal_months = request.wants_goals().then(|| GoalMonths {
        base: request
            .base_goal
            .and_then(|goal| goal_month(&scenarios.base, goal)),
        optimistic: request
            .optimistic_goal
            .and_then(|goal| goal_month(&scenarios.optimistic, goal)),
        conservative: request
            .conservative_goal
            .and_then(|goal| goal_month(&scenarios.conservative, goal)),
    });

    debug!(
        horizon,
        monthly_savings = monthly,
        "Forecast computed"
    );

    ForecastResponse {
        summary,
        scenarios,
        recommendation,
        goal_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(salary: f64, pairs: &[(&str, f64)]) -> ForecastRequest {
        ForecastRequest {
            salary,
            expenses: pairs
                .iter()
                .map(|(name, amount)| (name.to_string(), *amount))
                .collect(),
            horizon: None,
            scenarios: None,
            base_goal: None,
            optimistic_goal: None,
            conservative_goal: None,
            noise_seed: None,
            noise_scale: None,
        }
    }

    #[test]
    fn test_run_forecast_reference_numbers() {
        let req = request(5000.0, &[("rent", 1500.0), ("food", 500.0)]);
        let response = run_forecast(&req, &EngineConfig::default());

        assert_eq!(response.scenarios.horizon(), 60);
        assert_eq!(response.summary.monthly, 3000.0);
        assert_eq!(response.summary.yearly, 36000.0);
        assert_eq!(response.summary.two_years, 72000.0);
        assert_eq!(response.summary.five_years, 180000.0);
        assert!(response.goal_months.is_none());
        // 3000/5000 = 0.6 saved: top tier.
        assert!(response.recommendation.contains("Great work"));
    }

    #[test]
    fn test_run_forecast_goals_only_when_requested() {
        let mut req = request(5000.0, &[("rent", 1500.0), ("food", 500.0)]);
        req.base_goal = Some(50_000.0);
        req.conservative_goal = Some(10_000_000.0);

        let response = run_forecast(&req, &EngineConfig::default());
        let goals = response.goal_months.unwrap();
        assert_eq!(goals.base, Some(17));
        assert_eq!(goals.optimistic, None); // not asked for
        assert_eq!(goals.conservative, None); // asked for, never reached
    }

    #[test]
    fn test_run_forecast_request_horizon_wins() {
        let mut req = request(1000.0, &[]);
        req.horizon = Some(6);
        let response = run_forecast(&req, &EngineConfig::default());
        assert_eq!(response.scenarios.horizon(), 6);
        assert_eq!(response.summary.yearly, response.summary.five_years);
    }

    #[test]
    fn test_run_forecast_zero_salary() {
        let req = request(0.0, &[("rent", 800.0)]);
        let response = run_forecast(&req, &EngineConfig::default());
        assert_eq!(response.summary.monthly, -800.0);
        assert!(response.recommendation.contains("less than 10%"));
    }

    #[test]
    fn test_run_forecast_seeded_noise_is_stable() {
        let mut req = request(5000.0, &[("rent", 1500.0)]);
        req.noise_seed = Some(11);
        req.noise_scale = Some(100.0);

        let config = EngineConfig::default();
        let first = run_forecast(&req, &config);
        let second = run_forecast(&req, &config);
        assert_eq!(first.scenarios, second.scenarios);
        // Bounded noise can't push the 3500/month base series far off course.
        assert!((first.summary.five_years - 210_000.0).abs() < 100.0 * 60.0);
    }
}
