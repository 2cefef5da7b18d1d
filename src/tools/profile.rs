//! Profile Tools
//!
//! Setup of the biometric profile and the metrics derived from it.

use serde::Serialize;

use crate::error::NutritionResult;
use crate::models::{ActivityLevel, BmiCategory, CalorieGoals, Gender};
use crate::session::Session;

/// Input for setup_profile; every field is optional so a profile can be filled in stages
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity_level: Option<i32>,
}

/// Current profile state
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub age: i32,
    pub gender: Option<Gender>,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: i32,
    pub activity_description: Option<&'static str>,
    pub complete: bool,
}

/// Response for calculate_calories
#[derive(Debug, Serialize)]
pub struct CaloriesResponse {
    pub bmr: f64,
    pub daily_calories: f64,
    pub activity_level: ActivityLevel,
    pub multiplier: f64,
    pub goals: CalorieGoals,
}

/// Response for calculate_bmi
#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: BmiCategory,
    pub category_label: &'static str,
}

/// Apply the given fields and return the resulting profile
pub fn setup_profile(session: &mut Session, update: ProfileUpdate) -> ProfileResponse {
    let profile = &mut session.profile;
    if let Some(age) = update.age {
        profile.set_age(age);
    }
    if let Some(gender) = update.gender {
        profile.set_gender(gender);
    }
    if let Some(weight) = update.weight_kg {
        profile.set_weight(weight);
    }
    if let Some(height) = update.height_cm {
        profile.set_height(height);
    }
    if let Some(level) = update.activity_level {
        profile.set_activity_level(level);
    }
    tracing::info!("Profile updated (complete: {})", profile.is_complete());
    get_profile(session)
}

pub fn get_profile(session: &Session) -> ProfileResponse {
    let profile = &session.profile;
    ProfileResponse {
        age: profile.age(),
        gender: profile.gender(),
        weight_kg: profile.weight(),
        height_cm: profile.height(),
        activity_level: profile.activity_level(),
        activity_description: ActivityLevel::try_from(profile.activity_level())
            .ok()
            .map(|level| level.description()),
        complete: profile.is_complete(),
    }
}

/// BMR, daily calorie need and weight-goal targets
pub fn calculate_calories(session: &Session) -> NutritionResult<CaloriesResponse> {
    let profile = &session.profile;
    let daily_calories = profile.daily_calories()?;
    let activity_level = ActivityLevel::try_from(profile.activity_level())?;
    Ok(CaloriesResponse {
        bmr: profile.bmr()?,
        daily_calories,
        activity_level,
        multiplier: activity_level.multiplier(),
        goals: session.calorie_goals()?,
    })
}

pub fn calculate_bmi(session: &Session) -> NutritionResult<BmiResponse> {
    let bmi = session.profile.bmi()?;
    let category = BmiCategory::from_bmi(bmi);
    Ok(BmiResponse {
        bmi,
        category,
        category_label: category.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NutritionError;

    fn complete_update() -> ProfileUpdate {
        ProfileUpdate {
            age: Some(30),
            gender: Some(Gender::Male),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            activity_level: Some(3),
        }
    }

    #[test]
    fn test_setup_in_stages() {
        let mut session = Session::default();
        let partial = setup_profile(
            &mut session,
            ProfileUpdate {
                weight_kg: Some(70.0),
                height_cm: Some(175.0),
                ..ProfileUpdate::default()
            },
        );
        assert!(!partial.complete);
        assert!(calculate_bmi(&session).is_ok());
        assert_eq!(calculate_calories(&session).unwrap_err(), NutritionError::ProfileIncomplete);

        let full = setup_profile(&mut session, complete_update());
        assert!(full.complete);
        assert_eq!(
            full.activity_description,
            Some("Moderate (moderate exercise 3-5 days/week)")
        );
    }

    #[test]
    fn test_calculate_calories() {
        let mut session = Session::default();
        setup_profile(&mut session, complete_update());
        let calories = calculate_calories(&session).unwrap();
        assert_eq!(calories.activity_level, ActivityLevel::Moderate);
        assert!((calories.daily_calories - calories.bmr * 1.55).abs() < 1e-9);
        assert!((calories.goals.weight_loss - (calories.daily_calories - 500.0)).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_activity_level() {
        let mut session = Session::default();
        setup_profile(
            &mut session,
            ProfileUpdate {
                activity_level: Some(9),
                ..complete_update()
            },
        );
        assert_eq!(
            calculate_calories(&session).unwrap_err(),
            NutritionError::InvalidActivityLevel(9)
        );
        assert_eq!(get_profile(&session).activity_description, None);
    }

    #[test]
    fn test_calculate_bmi() {
        let mut session = Session::default();
        setup_profile(
            &mut session,
            ProfileUpdate {
                weight_kg: Some(92.0),
                height_cm: Some(175.0),
                ..ProfileUpdate::default()
            },
        );
        let bmi = calculate_bmi(&session).unwrap();
        assert_eq!(bmi.category, BmiCategory::Obesity);
        assert_eq!(bmi.category_label, "Obesity");
    }
}
