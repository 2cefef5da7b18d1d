//! Data models
//!
//! Reference foods, the user profile, the intake ledger and derived views.

mod food_record;
mod food_reference;
mod intake_ledger;
mod nutrition;
mod profile;
mod recommendation;
mod summary;

pub use food_record::{food_key, FoodRecord, FoodRecordCreate};
pub use food_reference::FoodReference;
pub use intake_ledger::{IntakeEntry, IntakeLedger};
pub use nutrition::Nutrition;
pub use profile::{
    basal_metabolic_rate, ActivityLevel, BmiCategory, CalorieGoals, Gender, Profile,
    DEFAULT_GOAL_DELTA,
};
pub use recommendation::{
    meal_split, sample_combos, ComboItem, MealSlot, MealSplit, SampleCombo, NUTRITION_TIPS,
};
pub use summary::{DailyValue, NutritionSummary};
