//! Intake Tools
//!
//! Logging food against today's ledger and summarizing it.

use serde::Serialize;

use crate::error::{NutritionError, NutritionResult};
use crate::models::{DailyValue, IntakeEntry, Nutrition};
use crate::nutrition::to_grams;
use crate::session::Session;

/// One ledger line
#[derive(Debug, Serialize)]
pub struct IntakeLine {
    pub food: String,
    pub quantity_grams: f64,
    pub calories: f64,
}

impl From<&IntakeEntry> for IntakeLine {
    fn from(entry: &IntakeEntry) -> Self {
        Self {
            food: entry.food.name().to_string(),
            quantity_grams: entry.quantity_grams,
            calories: entry.calories(),
        }
    }
}

/// Response for log_food
#[derive(Debug, Serialize)]
pub struct LogFoodResponse {
    pub date: String,
    pub entry: IntakeLine,
    pub nutrition: Nutrition,
    pub entries_today: usize,
    pub total_calories: f64,
}

/// Response for view_intake
#[derive(Debug, Serialize)]
pub struct IntakeResponse {
    pub date: String,
    pub entries: Vec<IntakeLine>,
    pub total_calories: f64,
}

/// Response for clear_intake
#[derive(Debug, Serialize)]
pub struct ClearIntakeResponse {
    pub success: bool,
    pub removed: usize,
}

/// Response for nutrition_summary
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub date: String,
    pub entry_count: usize,
    pub totals: Nutrition,
    pub daily_values: Vec<DailyValue>,
}

pub fn log_food(
    session: &mut Session,
    name: &str,
    quantity_grams: f64,
) -> NutritionResult<LogFoodResponse> {
    let entry = session.log_food(name, quantity_grams)?;
    let line = IntakeLine::from(entry);
    let nutrition = entry.nutrition();

    Ok(LogFoodResponse {
        date: session.ledger.date().to_string(),
        entry: line,
        nutrition,
        entries_today: session.ledger.len(),
        total_calories: session.ledger.total_calories(),
    })
}

/// Log a portion given in any supported weight unit
pub fn log_food_in_unit(
    session: &mut Session,
    name: &str,
    quantity: f64,
    unit: &str,
) -> NutritionResult<LogFoodResponse> {
    let grams =
        to_grams(quantity, unit).ok_or_else(|| NutritionError::InvalidUnit(unit.to_string()))?;
    log_food(session, name, grams)
}

pub fn view_intake(session: &Session) -> IntakeResponse {
    IntakeResponse {
        date: session.ledger.date().to_string(),
        entries: session.ledger.entries().iter().map(IntakeLine::from).collect(),
        total_calories: session.ledger.total_calories(),
    }
}

pub fn clear_intake(session: &mut Session) -> ClearIntakeResponse {
    ClearIntakeResponse {
        success: true,
        removed: session.ledger.clear(),
    }
}

pub fn nutrition_summary(session: &Session) -> SummaryResponse {
    let summary = session.summarize();
    SummaryResponse {
        date: session.ledger.date().to_string(),
        entry_count: summary.entry_count,
        totals: summary.totals,
        daily_values: summary.daily_values(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::units::G_PER_OZ;

    #[test]
    fn test_log_and_view() {
        let mut session = Session::default();
        let logged = log_food(&mut session, "Oats", 80.0).unwrap();
        assert_eq!(logged.entry.food, "Oats");
        assert_eq!(logged.entries_today, 1);
        assert!((logged.nutrition.fiber - 8.48).abs() < 1e-9);

        log_food(&mut session, "milk", 200.0).unwrap();
        let intake = view_intake(&session);
        assert_eq!(intake.entries.len(), 2);
        assert!((intake.total_calories - (311.2 + 84.0)).abs() < 1e-9);
    }

    #[test]
    fn test_log_food_errors() {
        let mut session = Session::default();
        assert!(matches!(
            log_food(&mut session, "kiwi", 50.0),
            Err(NutritionError::NotFound(_))
        ));
        assert!(matches!(
            log_food(&mut session, "apple", 0.0),
            Err(NutritionError::InvalidQuantity(_))
        ));
        assert!(view_intake(&session).entries.is_empty());
    }

    #[test]
    fn test_log_in_ounces() {
        let mut session = Session::default();
        let logged = log_food_in_unit(&mut session, "almonds", 1.0, "oz").unwrap();
        assert!((logged.entry.quantity_grams - G_PER_OZ).abs() < 1e-9);
        assert!((logged.nutrition.calcium - 269.0 * G_PER_OZ / 100.0).abs() < 1e-9);
        assert!((logged.total_calories - 579.0 * G_PER_OZ / 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_in_unknown_unit() {
        let mut session = Session::default();
        assert_eq!(
            log_food_in_unit(&mut session, "milk", 1.0, "cup").unwrap_err(),
            NutritionError::InvalidUnit("cup".to_string())
        );
        assert!(session.ledger.is_empty());
    }

    #[test]
    fn test_summary_and_clear() {
        let mut session = Session::default();
        log_food(&mut session, "apple", 200.0).unwrap();
        let summary = nutrition_summary(&session);
        assert_eq!(summary.entry_count, 1);
        assert!((summary.totals.vitamin_c - 9.2).abs() < 1e-9);
        assert_eq!(summary.daily_values.len(), 4);

        assert_eq!(clear_intake(&mut session).removed, 1);
        let empty = nutrition_summary(&session);
        assert_eq!(empty.entry_count, 0);
        assert_eq!(empty.totals, Nutrition::zero());
    }
}
