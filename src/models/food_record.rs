//! Food Record model
//!
//! Represents a reference food with nutritional information per 100 g.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, NutritionResult};
use super::Nutrition;

/// A reference food; immutable once built
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    name: String,
    #[serde(skip)]
    key: String,
    per_100g: Nutrition,
}

/// Data for creating a new food record, all values per 100 g
///
/// The four macro fields are required; every other nutrient defaults to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FoodRecordCreate {
    /// Display name, unique ignoring case
    pub name: String,
    /// kcal
    pub calories: f64,
    /// grams
    pub protein: f64,
    /// grams
    pub carbs: f64,
    /// grams
    pub fat: f64,
    /// grams
    #[serde(default)]
    pub fiber: f64,
    /// mg
    #[serde(default)]
    pub vitamin_c: f64,
    /// µg
    #[serde(default)]
    pub vitamin_d: f64,
    /// µg
    #[serde(default)]
    pub vitamin_b12: f64,
    /// mg
    #[serde(default)]
    pub calcium: f64,
    /// mg
    #[serde(default)]
    pub iron: f64,
    /// mg
    #[serde(default)]
    pub magnesium: f64,
    /// mg
    #[serde(default)]
    pub potassium: f64,
    /// mg
    #[serde(default)]
    pub zinc: f64,
    /// µg
    #[serde(default)]
    pub folate: f64,
    /// grams
    #[serde(default)]
    pub omega3: f64,
}

impl FoodRecordCreate {
    /// Start a record with the required macro fields
    pub fn new(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fat,
            ..Self::default()
        }
    }

    fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
            vitamin_c: self.vitamin_c,
            vitamin_d: self.vitamin_d,
            vitamin_b12: self.vitamin_b12,
            calcium: self.calcium,
            iron: self.iron,
            magnesium: self.magnesium,
            potassium: self.potassium,
            zinc: self.zinc,
            folate: self.folate,
            omega3: self.omega3,
        }
    }
}

/// Normalize a food name into its lookup key
pub fn food_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl FoodRecord {
    /// Build a record, rejecting empty names and negative or non-finite values
    pub fn new(data: FoodRecordCreate) -> NutritionResult<Self> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(NutritionError::InvalidFood("name cannot be empty".to_string()));
        }

        let per_100g = data.nutrition();
        for (field, value) in per_100g.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(NutritionError::InvalidFood(format!(
                    "{} for '{}' must be a non-negative number, got {}",
                    field, name, value
                )));
            }
        }

        Ok(Self {
            name: name.to_string(),
            key: food_key(name),
            per_100g,
        })
    }

    /// Display name, e.g. "Chicken Breast"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive lookup key, e.g. "chicken breast"
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn per_100g(&self) -> &Nutrition {
        &self.per_100g
    }

    pub fn calories(&self) -> f64 {
        self.per_100g.calories
    }

    /// Nutrition for a portion of the given weight
    pub fn nutrition_for(&self, grams: f64) -> Nutrition {
        self.per_100g.for_grams(grams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_to_zero() {
        let record = FoodRecord::new(FoodRecordCreate::new("Rice", 130.0, 2.7, 28.0, 0.3)).unwrap();
        assert_eq!(record.name(), "Rice");
        assert_eq!(record.key(), "rice");
        assert_eq!(record.per_100g().iron, 0.0);
        assert_eq!(record.per_100g().omega3, 0.0);
    }

    #[test]
    fn test_key_is_trimmed_lowercase() {
        let data = FoodRecordCreate::new("  Sweet Potato ", 86.0, 1.6, 20.1, 0.1);
        let record = FoodRecord::new(data).unwrap();
        assert_eq!(record.name(), "Sweet Potato");
        assert_eq!(record.key(), "sweet potato");
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = FoodRecord::new(FoodRecordCreate::new("   ", 1.0, 0.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, NutritionError::InvalidFood(_)));
    }

    #[test]
    fn test_rejects_negative_nutrient() {
        let data = FoodRecordCreate {
            iron: -1.0,
            ..FoodRecordCreate::new("Kale", 49.0, 4.3, 8.8, 0.9)
        };
        let err = FoodRecord::new(data).unwrap_err();
        assert!(matches!(err, NutritionError::InvalidFood(msg) if msg.contains("iron")));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let data: FoodRecordCreate = serde_json::from_str(
            r#"{"name": "Kiwi", "calories": 61, "protein": 1.1, "carbs": 15, "fat": 0.5,
                "vitamin_c": 92.7}"#,
        )
        .unwrap();
        let record = FoodRecord::new(data).unwrap();
        assert!((record.per_100g().vitamin_c - 92.7).abs() < 1e-9);
        assert_eq!(record.per_100g().fiber, 0.0);
    }

    #[test]
    fn test_nutrition_for_portion() {
        let data = FoodRecordCreate::new("Oats", 389.0, 16.9, 66.0, 6.9);
        let record = FoodRecord::new(data).unwrap();
        assert!((record.nutrition_for(80.0).calories - 311.2).abs() < 1e-9);
    }
}
