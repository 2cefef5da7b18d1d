//! Meal Recommendation Tools

use serde::Serialize;

use crate::error::NutritionResult;
use crate::models::{MealSplit, SampleCombo, NUTRITION_TIPS};
use crate::session::Session;

/// Response for meal_recommendations
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub daily_calories: f64,
    pub meal_split: MealSplit,
    pub sample_combos: Vec<SampleCombo>,
    pub tips: Vec<&'static str>,
}

pub fn meal_recommendations(session: &Session) -> NutritionResult<RecommendationsResponse> {
    let (daily_calories, meal_split, sample_combos) = session.meal_plan()?;
    Ok(RecommendationsResponse {
        daily_calories,
        meal_split,
        sample_combos,
        tips: NUTRITION_TIPS.to_vec(),
    })
}
