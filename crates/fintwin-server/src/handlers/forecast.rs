//! Forecast handler
//!
//! The engine is total over finite numbers and documents malformed input as
//! a precondition, so every rejection lives here: non-finite values, empty
//! category names, and out-of-range horizons all turn into 400s before the
//! engine runs.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::{AppError, AppState, MAX_HORIZON};
use fintwin_core::{run_forecast, ForecastRequest, ForecastResponse};

/// POST /forecast - Compute savings projections for a salary/expense profile
pub async fn forecast(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, AppError> {
    validate(&request)?;

    let response = run_forecast(&request, &state.engine);

    info!(
        salary = request.salary,
        categories = request.expenses.len(),
        horizon = response.scenarios.horizon(),
        "Forecast served"
    );

    Ok(Json(response))
}

fn validate(request: &ForecastRequest) -> Result<(), AppError> {
    if !request.salary.is_finite() {
        return Err(AppError::bad_request("salary must be a finite number"));
    }

    for (name, amount) in &request.expenses {
        if name.trim().is_empty() {
            return Err(AppError::bad_request("expense category names must be non-empty"));
        }
        if !amount.is_finite() {
            return Err(AppError::bad_request(&format!(
                "expense '{}' must be a finite number",
                name
            )));
        }
    }

    if let Some(horizon) = request.horizon {
        if horizon == 0 || horizon > MAX_HORIZON {
            return Err(AppError::bad_request(&format!(
                "horizon must be between 1 and {} months",
                MAX_HORIZON
            )));
        }
    }

    if let Some(scenarios) = &request.scenarios {
        for rates in [&scenarios.base, &scenarios.optimistic, &scenarios.conservative] {
            if !rates.salary_growth.is_finite() || !rates.expense_growth.is_finite() {
                return Err(AppError::bad_request("scenario growth rates must be finite"));
            }
        }
    }

    if let Some(scale) = request.noise_scale {
        if !scale.is_finite() || scale < 0.0 {
            return Err(AppError::bad_request("noise_scale must be finite and non-negative"));
        }
        if request.noise_seed.is_none() {
            return Err(AppError::bad_request("noise_scale requires noise_seed"));
        }
    }

    Ok(())
}
