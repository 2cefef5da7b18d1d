//! Profile model
//!
//! Biometric inputs and the metrics derived from them (BMR, BMI, calorie need).

use serde::Serialize;

use crate::error::{NutritionError, NutritionResult};

/// Default kcal offset between maintenance and the loss/gain targets
pub const DEFAULT_GOAL_DELTA: f64 = 500.0;

/// Gender used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Parse user input; anything not starting with 'M' is treated as female
    pub fn from_input(s: &str) -> Self {
        match s.trim().chars().next() {
            Some('M') | Some('m') => Gender::Male,
            _ => Gender::Female,
        }
    }
}

/// Activity level with its TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Menu number, 1 through 5
    pub fn level(&self) -> i32 {
        match self {
            ActivityLevel::Sedentary => 1,
            ActivityLevel::Light => 2,
            ActivityLevel::Moderate => 3,
            ActivityLevel::Active => 4,
            ActivityLevel::VeryActive => 5,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little/no exercise)",
            ActivityLevel::Light => "Light (light exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (moderate exercise 3-5 days/week)",
            ActivityLevel::Active => "Active (hard exercise 6-7 days/week)",
            ActivityLevel::VeryActive => "Very Active (very hard exercise/physical job)",
        }
    }
}

impl TryFrom<i32> for ActivityLevel {
    type Error = NutritionError;

    fn try_from(level: i32) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(ActivityLevel::Sedentary),
            2 => Ok(ActivityLevel::Light),
            3 => Ok(ActivityLevel::Moderate),
            4 => Ok(ActivityLevel::Active),
            5 => Ok(ActivityLevel::VeryActive),
            other => Err(NutritionError::InvalidActivityLevel(i64::from(other))),
        }
    }
}

/// BMI weight category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// Lower bounds are inclusive: 18.5 is normal, 25 overweight, 30 obesity
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily calorie targets for weight goals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieGoals {
    pub weight_loss: f64,
    pub maintenance: f64,
    pub weight_gain: f64,
}

/// The session's biometric profile
///
/// Setters accept any value; zero or negative required fields only make the
/// profile incomplete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    age: i32,
    gender: Option<Gender>,
    weight_kg: f64,
    height_cm: f64,
    activity_level: i32,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
    }

    pub fn set_weight(&mut self, weight_kg: f64) {
        self.weight_kg = weight_kg;
    }

    pub fn set_height(&mut self, height_cm: f64) {
        self.height_cm = height_cm;
    }

    /// Store the raw menu number; it is validated when a metric needs it
    pub fn set_activity_level(&mut self, level: i32) {
        self.activity_level = level;
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn weight(&self) -> f64 {
        self.weight_kg
    }

    pub fn height(&self) -> f64 {
        self.height_cm
    }

    pub fn activity_level(&self) -> i32 {
        self.activity_level
    }

    pub fn is_complete(&self) -> bool {
        self.age > 0 && self.weight_kg > 0.0 && self.height_cm > 0.0 && self.activity_level != 0
    }

    fn has_body_measurements(&self) -> bool {
        self.weight_kg > 0.0 && self.height_cm > 0.0
    }

    /// Basal metabolic rate in kcal/day
    pub fn bmr(&self) -> NutritionResult<f64> {
        if self.age <= 0 || !self.has_body_measurements() {
            return Err(NutritionError::ProfileIncomplete);
        }
        Ok(basal_metabolic_rate(
            self.gender,
            self.weight_kg,
            self.height_cm,
            self.age,
        ))
    }

    /// Daily calorie need: BMR scaled by the activity multiplier
    pub fn daily_calories(&self) -> NutritionResult<f64> {
        if !self.is_complete() {
            return Err(NutritionError::ProfileIncomplete);
        }
        let level = ActivityLevel::try_from(self.activity_level)?;
        Ok(self.bmr()? * level.multiplier())
    }

    /// Body mass index from weight in kg and height in cm
    pub fn bmi(&self) -> NutritionResult<f64> {
        if !self.has_body_measurements() {
            return Err(NutritionError::ProfileIncomplete);
        }
        let height_m = self.height_cm / 100.0;
        Ok(self.weight_kg / (height_m * height_m))
    }

    pub fn bmi_category(&self) -> NutritionResult<BmiCategory> {
        self.bmi().map(BmiCategory::from_bmi)
    }

    /// Loss and gain targets offset from maintenance by `delta` kcal
    pub fn calorie_goals(&self, delta: f64) -> NutritionResult<CalorieGoals> {
        let maintenance = self.daily_calories()?;
        Ok(CalorieGoals {
            weight_loss: maintenance - delta,
            maintenance,
            weight_gain: maintenance + delta,
        })
    }
}

/// Harris-Benedict (revised) BMR; unset gender takes the female branch
pub fn basal_metabolic_rate(
    gender: Option<Gender>,
    weight_kg: f64,
    height_cm: f64,
    age: i32,
) -> f64 {
    let age = f64::from(age);
    match gender {
        Some(Gender::Male) => 88.362 + (13.397 * weight_kg) + (4.799 * height_cm) - (5.677 * age),
        Some(Gender::Female) | None => {
            447.593 + (9.247 * weight_kg) + (3.098 * height_cm) - (4.330 * age)
        }
    }
}
