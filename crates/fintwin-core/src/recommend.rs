//! Savings-ratio recommendation
//!
//! Derives a per-request advice string from how much of the salary survives
//! the month and which category eats the largest share. The ratio thresholds
//! are configuration, not literals, so tuning them never touches this code.

use serde::{Deserialize, Serialize};

use crate::models::ExpenseMap;

/// Savings-ratio boundaries for the three advice tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// Below this ratio the user is warned to cut their largest expense.
    pub low_ratio: f64,
    /// Above this ratio the user is congratulated.
    pub high_ratio: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            low_ratio: 0.10,
            high_ratio: 0.30,
        }
    }
}

/// Fraction of salary saved per month. Defined as 0 for a zero salary so a
/// zero-income request falls into the low tier instead of dividing by zero.
pub fn savings_ratio(salary: f64, monthly_savings: f64) -> f64 {
    if salary == 0.0 {
        0.0
    } else {
        monthly_savings / salary
    }
}

/// Category with the largest monthly amount, or `None` for an empty map.
///
/// Ties go to the first category in ascending name order (the map's
/// iteration order), which keeps the choice deterministic.
pub fn largest_expense(expenses: &ExpenseMap) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (name, &amount) in expenses {
        match best {
            Some((_, max)) if amount <= max => {}
            _ => best = Some((name.as_str(), amount)),
        }
    }
    best
}

/// Build the advice string for one forecast.
pub fn recommend(
    salary: f64,
    expenses: &ExpenseMap,
    monthly_savings: f64,
    thresholds: &RecommendationThresholds,
) -> String {
    let ratio = savings_ratio(salary, monthly_savings);
    let largest = largest_expense(expenses);

    if ratio < thresholds.low_ratio {
        match largest {
            Some((name, amount)) => format!(
                "You're saving less than {:.0}% of your salary. Your largest expense is '{}' at {:.2}/month; look there first for cuts.",
                thresholds.low_ratio * 100.0,
                name,
                amount
            ),
            None => format!(
                "You're saving less than {:.0}% of your salary. Consider increasing your income or setting a savings target.",
                thresholds.low_ratio * 100.0
            ),
        }
    } else if ratio > thresholds.high_ratio {
        format!(
            "Great work - you're saving over {:.0}% of your salary. Keep it up.",
            thresholds.high_ratio * 100.0
        )
    } else {
        match largest {
            Some((name, amount)) => format!(
                "You're on a steady track. Trimming your largest expense '{}' ({:.2}/month) would speed things up.",
                name, amount
            ),
            None => "You're on a steady track. Consider setting a savings goal to aim for.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expenses(pairs: &[(&str, f64)]) -> ExpenseMap {
        pairs
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect()
    }

    #[test]
    fn test_savings_ratio_zero_salary() {
        assert_eq!(savings_ratio(0.0, -2000.0), 0.0);
        assert_eq!(savings_ratio(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_largest_expense_picks_max() {
        let map = expenses(&[("rent", 1500.0), ("food", 500.0), ("transport", 120.0)]);
        assert_eq!(largest_expense(&map), Some(("rent", 1500.0)));
    }

    #[test]
    fn test_largest_expense_tie_breaks_by_name() {
        let map = expenses(&[("utilities", 800.0), ("childcare", 800.0), ("food", 300.0)]);
        // Equal amounts: first in ascending key order wins.
        assert_eq!(largest_expense(&map), Some(("childcare", 800.0)));
    }

    #[test]
    fn test_largest_expense_empty_map() {
        assert_eq!(largest_expense(&ExpenseMap::new()), None);
    }

    #[test]
    fn test_low_ratio_names_largest_category() {
        let map = expenses(&[("rent", 1800.0), ("food", 400.0)]);
        let advice = recommend(2400.0, &map, 200.0, &RecommendationThresholds::default());
        assert!(advice.contains("rent"), "advice was: {advice}");
        assert!(advice.contains("1800.00"), "advice was: {advice}");
    }

    #[test]
    fn test_high_ratio_congratulates() {
        let map = expenses(&[("rent", 1500.0)]);
        let advice = recommend(5000.0, &map, 3500.0, &RecommendationThresholds::default());
        assert!(advice.contains("Great work"), "advice was: {advice}");
    }

    #[test]
    fn test_middle_ratio_neutral_mentions_category() {
        let map = expenses(&[("rent", 1500.0), ("food", 500.0)]);
        // Ratio 0.2 sits between the tiers.
        let advice = recommend(5000.0, &map, 1000.0, &RecommendationThresholds::default());
        assert!(advice.contains("steady track"), "advice was: {advice}");
        assert!(advice.contains("rent"), "advice was: {advice}");
    }

    #[test]
    fn test_zero_salary_hits_low_branch_without_fault() {
        let map = expenses(&[("rent", 900.0)]);
        let advice = recommend(0.0, &map, -900.0, &RecommendationThresholds::default());
        assert!(advice.contains("less than 10%"), "advice was: {advice}");
    }

    #[test]
    fn test_empty_expenses_fall_back_to_ratio_only() {
        let advice = recommend(1000.0, &ExpenseMap::new(), 50.0, &RecommendationThresholds::default());
        assert!(!advice.is_empty());
        assert!(advice.contains("less than 10%"), "advice was: {advice}");
    }

    #[test]
    fn test_custom_thresholds_respected() {
        let map = expenses(&[("rent", 1500.0)]);
        let thresholds = RecommendationThresholds {
            low_ratio: 0.5,
            high_ratio: 0.9,
        };
        // 0.4 would be neutral under the defaults but is low here.
        let advice = recommend(5000.0, &map, 2000.0, &thresholds);
        assert!(advice.contains("less than 50%"), "advice was: {advice}");
    }
}
