//! Session context
//!
//! Owns the state of one user's session: the food reference, the profile and
//! today's intake ledger.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::NutritionResult;
use crate::models::{
    meal_split, sample_combos, CalorieGoals, FoodRecord, FoodRecordCreate, FoodReference,
    IntakeEntry, IntakeLedger, MealSplit, NutritionSummary, Profile, SampleCombo,
};

#[derive(Debug, Clone)]
pub struct Session {
    pub reference: FoodReference,
    pub profile: Profile,
    pub ledger: IntakeLedger,
    goal_delta: f64,
}

impl Session {
    /// Fresh session with the built-in foods and an empty profile and ledger
    pub fn new(config: &AppConfig) -> Self {
        Self::with_parts(FoodReference::builtin(), IntakeLedger::today(), config.goal_delta)
    }

    pub fn with_parts(reference: FoodReference, ledger: IntakeLedger, goal_delta: f64) -> Self {
        Self {
            reference,
            profile: Profile::new(),
            ledger,
            goal_delta,
        }
    }

    pub fn goal_delta(&self) -> f64 {
        self.goal_delta
    }

    pub fn lookup_food(&self, name: &str) -> NutritionResult<Arc<FoodRecord>> {
        self.reference.lookup(name)
    }

    pub fn add_food(&mut self, data: FoodRecordCreate) -> NutritionResult<Arc<FoodRecord>> {
        self.reference.insert(data)
    }

    /// Look up a food by name and log a portion of it
    pub fn log_food(&mut self, name: &str, quantity_grams: f64) -> NutritionResult<&IntakeEntry> {
        let food = self.reference.lookup(name)?;
        self.ledger.add_entry(food, quantity_grams)
    }

    pub fn summarize(&self) -> NutritionSummary {
        self.ledger.summarize()
    }

    pub fn calorie_goals(&self) -> NutritionResult<CalorieGoals> {
        self.profile.calorie_goals(self.goal_delta)
    }

    /// Meal budgets from the profile's daily calorie need
    pub fn meal_plan(&self) -> NutritionResult<(f64, MealSplit, Vec<SampleCombo>)> {
        let daily = self.profile.daily_calories()?;
        Ok((daily, meal_split(daily), sample_combos(&self.reference)?))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NutritionError;
    use crate::models::Gender;

    #[test]
    fn test_log_food_by_name() {
        let mut session = Session::default();
        let entry = session.log_food("Banana", 120.0).unwrap();
        assert_eq!(entry.food.name(), "Banana");
        assert_eq!(session.ledger.len(), 1);
        assert!((session.summarize().totals.calories - 106.8).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_food_leaves_ledger_untouched() {
        let mut session = Session::default();
        let err = session.log_food("kiwi", 100.0).unwrap_err();
        assert_eq!(err, NutritionError::NotFound("kiwi".to_string()));
        assert!(session.ledger.is_empty());
    }

    #[test]
    fn test_inserted_food_can_be_logged() {
        let mut session = Session::default();
        session
            .add_food(FoodRecordCreate::new("Greek Yogurt", 59.0, 10.0, 3.6, 0.4))
            .unwrap();
        session.log_food("greek yogurt", 150.0).unwrap();
        assert!((session.ledger.total_calories() - 88.5).abs() < 1e-9);
    }

    #[test]
    fn test_meal_plan_requires_complete_profile() {
        let mut session = Session::default();
        assert_eq!(session.meal_plan().unwrap_err(), NutritionError::ProfileIncomplete);

        session.profile.set_age(30);
        session.profile.set_gender(Gender::Male);
        session.profile.set_weight(70.0);
        session.profile.set_height(175.0);
        session.profile.set_activity_level(3);
        let (daily, split, combos) = session.meal_plan().unwrap();
        assert!((split.total() - daily).abs() < 1e-9);
        assert!(!combos.is_empty());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Session::default();
        let second = Session::default();
        first.log_food("rice", 100.0).unwrap();
        assert_eq!(first.ledger.len(), 1);
        assert!(second.ledger.is_empty());
    }
}
