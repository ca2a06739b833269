//! One-shot forecast command

use std::path::Path;

use anyhow::{bail, Result};

use super::load_config;
use fintwin_core::{run_forecast, ExpenseMap, ForecastRequest};
use fintwin_server::MAX_HORIZON;

pub struct ForecastArgs {
    pub salary: f64,
    pub expenses: Vec<String>,
    pub horizon: Option<usize>,
    pub base_goal: Option<f64>,
    pub optimistic_goal: Option<f64>,
    pub conservative_goal: Option<f64>,
    pub seed: Option<u64>,
    pub noise_scale: Option<f64>,
    pub json: bool,
}

pub fn cmd_forecast(config_path: Option<&Path>, args: ForecastArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let expenses = parse_expense_pairs(&args.expenses)?;

    // The engine documents a positive horizon as a precondition; reject
    // out-of-range values here like the server does.
    if let Some(horizon) = args.horizon {
        if horizon == 0 || horizon > MAX_HORIZON {
            bail!("Horizon must be between 1 and {} months", MAX_HORIZON);
        }
    }

    let request = ForecastRequest {
        salary: args.salary,
        expenses,
        horizon: args.horizon,
        scenarios: None,
        base_goal: args.base_goal,
        optimistic_goal: args.optimistic_goal,
        conservative_goal: args.conservative_goal,
        noise_seed: args.seed,
        noise_scale: args.noise_scale,
    };

    let response = run_forecast(&request, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("💰 Savings projection ({} months)", response.scenarios.horizon());
    println!();
    println!("   After 1 month:  {:>14.2}", response.summary.monthly);
    println!("   After 1 year:   {:>14.2}", response.summary.yearly);
    println!("   After 2 years:  {:>14.2}", response.summary.two_years);
    println!("   End of horizon: {:>14.2}", response.summary.five_years);
    println!();
    println!(
        "   Final cumulative by scenario: base {:.2} | optimistic {:.2} | conservative {:.2}",
        response.scenarios.base.last().copied().unwrap_or(0.0),
        response.scenarios.optimistic.last().copied().unwrap_or(0.0),
        response.scenarios.conservative.last().copied().unwrap_or(0.0),
    );

    if let Some(goals) = &response.goal_months {
        println!();
        if args.base_goal.is_some() {
            println!("   Base goal:         {}", describe_goal(goals.base));
        }
        if args.optimistic_goal.is_some() {
            println!("   Optimistic goal:   {}", describe_goal(goals.optimistic));
        }
        if args.conservative_goal.is_some() {
            println!("   Conservative goal: {}", describe_goal(goals.conservative));
        }
    }

    println!();
    println!("   💡 {}", response.recommendation);

    Ok(())
}

fn describe_goal(month: Option<usize>) -> String {
    match month {
        Some(m) => format!("month {}", m),
        None => "not reached within the horizon".to_string(),
    }
}

/// Parse repeated `name=amount` flags into an expense map.
///
/// Category names must be unique; a repeated name is an error rather than a
/// silent overwrite.
pub fn parse_expense_pairs(pairs: &[String]) -> Result<ExpenseMap> {
    let mut expenses = ExpenseMap::new();
    for pair in pairs {
        let Some((name, amount)) = pair.split_once('=') else {
            bail!("Invalid expense '{}': expected name=amount", pair);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("Invalid expense '{}': category name is empty", pair);
        }
        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid expense '{}': amount is not a number", pair))?;
        if expenses.insert(name.to_string(), amount).is_some() {
            bail!("Duplicate expense category '{}'", name);
        }
    }
    Ok(expenses)
}
