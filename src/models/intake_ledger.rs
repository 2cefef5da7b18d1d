//! Intake Ledger
//!
//! Ordered record of the foods eaten today and their aggregation.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::{NutritionError, NutritionResult};
use super::{FoodRecord, Nutrition, NutritionSummary};

/// A logged portion of a reference food
#[derive(Debug, Clone)]
pub struct IntakeEntry {
    pub food: Arc<FoodRecord>,
    pub quantity_grams: f64,
}

impl IntakeEntry {
    /// This entry's contribution to each nutrient
    pub fn nutrition(&self) -> Nutrition {
        self.food.nutrition_for(self.quantity_grams)
    }

    pub fn calories(&self) -> f64 {
        self.food.calories() * self.quantity_grams / 100.0
    }
}

/// Today's food intake, in the order it was logged
#[derive(Debug, Clone)]
pub struct IntakeLedger {
    date: NaiveDate,
    entries: Vec<IntakeEntry>,
}

impl IntakeLedger {
    /// Start an empty ledger for the given day
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    /// Start an empty ledger for the local calendar day
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Append a portion; the quantity must be a positive number of grams
    pub fn add_entry(
        &mut self,
        food: Arc<FoodRecord>,
        quantity_grams: f64,
    ) -> NutritionResult<&IntakeEntry> {
        if !quantity_grams.is_finite() || quantity_grams <= 0.0 {
            return Err(NutritionError::InvalidQuantity(quantity_grams));
        }

        tracing::info!("Logged {:.0}g of {} for {}", quantity_grams, food.name(), self.date);
        self.entries.push(IntakeEntry {
            food,
            quantity_grams,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove every entry, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        tracing::info!("Cleared {} intake entries for {}", removed, self.date);
        removed
    }

    pub fn entries(&self) -> &[IntakeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_calories(&self) -> f64 {
        self.entries.iter().map(IntakeEntry::calories).sum()
    }

    /// Aggregate every nutrient over all entries
    pub fn summarize(&self) -> NutritionSummary {
        NutritionSummary {
            entry_count: self.entries.len(),
            totals: self.entries.iter().map(IntakeEntry::nutrition).sum(),
        }
    }
}

impl Default for IntakeLedger {
    fn default() -> Self {
        Self::today()
    }
}
