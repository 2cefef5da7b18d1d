//! Nutrition summary
//!
//! Derived view over the intake ledger; never stored on its own.

use serde::Serialize;

use super::Nutrition;

/// Reference daily amounts used for the approximate percentage display.
/// Where men and women differ, the midpoint is used.
const DAILY_REFERENCES: [(&str, f64, &str, &str); 4] = [
    ("Vitamin C", 82.5, "mg", "RDA: 90mg men, 75mg women"),
    ("Calcium", 1000.0, "mg", "RDA: 1000mg"),
    ("Iron", 13.0, "mg", "RDA: 18mg women, 8mg men"),
    ("Magnesium", 355.0, "mg", "RDA: 400mg men, 310mg women"),
];

/// Totals of every tracked nutrient across a set of intake entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutritionSummary {
    pub entry_count: usize,
    pub totals: Nutrition,
}

/// Share of a reference daily amount covered by the summarized intake
#[derive(Debug, Clone, Serialize)]
pub struct DailyValue {
    pub nutrient: &'static str,
    pub amount: f64,
    pub reference_amount: f64,
    pub unit: &'static str,
    pub percent: f64,
    pub note: &'static str,
}

impl NutritionSummary {
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    pub fn total_calories(&self) -> f64 {
        self.totals.calories
    }

    /// Approximate percent of daily reference amounts (vitamin C, calcium, iron, magnesium)
    pub fn daily_values(&self) -> Vec<DailyValue> {
        let amounts = [
            self.totals.vitamin_c,
            self.totals.calcium,
            self.totals.iron,
            self.totals.magnesium,
        ];

        DAILY_REFERENCES
            .iter()
            .zip(amounts)
            .map(|(&(nutrient, reference_amount, unit, note), amount)| DailyValue {
                nutrient,
                amount,
                reference_amount,
                unit,
                percent: amount / reference_amount * 100.0,
                note,
            })
            .collect()
    }
}

impl std::ops::Add for NutritionSummary {
    type Output = NutritionSummary;

    fn add(self, other: NutritionSummary) -> NutritionSummary {
        NutritionSummary {
            entry_count: self.entry_count + other.entry_count,
            totals: self.totals + other.totals,
        }
    }
}
