//! Food Reference
//!
//! The session's table of known foods, keyed by case-insensitive name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{NutritionError, NutritionResult};
use super::food_record::food_key;
use super::{FoodRecord, FoodRecordCreate};

/// Read-only registry of reference foods in insertion order
#[derive(Debug, Clone, Default)]
pub struct FoodReference {
    records: Vec<Arc<FoodRecord>>,
    index: HashMap<String, usize>,
}

impl FoodReference {
    /// Create an empty reference
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in reference dataset
    pub fn builtin() -> Self {
        let mut reference = Self::new();
        for data in builtin_foods() {
            // The built-in table has unique, valid entries
            if let Err(e) = reference.insert(data) {
                tracing::warn!("Skipping built-in food: {}", e);
            }
        }
        reference
    }

    /// Look up a food by name, ignoring case and surrounding whitespace
    pub fn lookup(&self, name: &str) -> NutritionResult<Arc<FoodRecord>> {
        self.index
            .get(&food_key(name))
            .map(|&i| Arc::clone(&self.records[i]))
            .ok_or_else(|| {
                tracing::debug!("Food lookup miss: '{}'", name);
                NutritionError::NotFound(name.trim().to_string())
            })
    }

    /// All records in insertion order
    pub fn list_all(&self) -> &[Arc<FoodRecord>] {
        &self.records
    }

    /// Display names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a new food; existing names are never replaced
    pub fn insert(&mut self, data: FoodRecordCreate) -> NutritionResult<Arc<FoodRecord>> {
        let record = FoodRecord::new(data)?;
        if self.index.contains_key(record.key()) {
            return Err(NutritionError::DuplicateFood(record.name().to_string()));
        }

        let record = Arc::new(record);
        self.index.insert(record.key().to_string(), self.records.len());
        self.records.push(Arc::clone(&record));
        tracing::debug!("Added food '{}' ({} kcal/100g)", record.name(), record.calories());
        Ok(record)
    }
}

fn builtin_foods() -> Vec<FoodRecordCreate> {
    vec![
        FoodRecordCreate {
            fiber: 2.4,
            vitamin_c: 4.6,
            potassium: 107.0,
            ..FoodRecordCreate::new("Apple", 52.0, 0.3, 14.0, 0.2)
        },
        FoodRecordCreate {
            fiber: 2.6,
            vitamin_c: 8.7,
            potassium: 358.0,
            magnesium: 27.0,
            ..FoodRecordCreate::new("Banana", 89.0, 1.1, 23.0, 0.3)
        },
        FoodRecordCreate {
            iron: 0.7,
            zinc: 1.0,
            vitamin_b12: 0.3,
            ..FoodRecordCreate::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6)
        },
        FoodRecordCreate {
            fiber: 0.4,
            magnesium: 25.0,
            iron: 0.8,
            ..FoodRecordCreate::new("Rice", 130.0, 2.7, 28.0, 0.3)
        },
        FoodRecordCreate {
            fiber: 2.6,
            vitamin_c: 89.2,
            folate: 63.0,
            iron: 0.7,
            ..FoodRecordCreate::new("Broccoli", 34.0, 2.8, 7.0, 0.4)
        },
        FoodRecordCreate {
            omega3: 1.8,
            vitamin_d: 11.0,
            vitamin_b12: 3.2,
            ..FoodRecordCreate::new("Salmon", 208.0, 22.0, 0.0, 12.0)
        },
        FoodRecordCreate {
            fiber: 2.2,
            iron: 2.7,
            folate: 194.0,
            magnesium: 79.0,
            ..FoodRecordCreate::new("Spinach", 23.0, 2.9, 3.6, 0.4)
        },
        FoodRecordCreate {
            fiber: 10.6,
            magnesium: 177.0,
            zinc: 4.0,
            iron: 4.7,
            ..FoodRecordCreate::new("Oats", 389.0, 16.9, 66.0, 6.9)
        },
        FoodRecordCreate {
            vitamin_b12: 0.6,
            vitamin_d: 2.0,
            zinc: 1.3,
            ..FoodRecordCreate::new("Egg", 155.0, 13.0, 1.1, 11.0)
        },
        FoodRecordCreate {
            calcium: 113.0,
            vitamin_d: 1.3,
            vitamin_b12: 0.4,
            ..FoodRecordCreate::new("Milk", 42.0, 3.4, 5.0, 1.0)
        },
        // Vitamin E (25.6 mg) is not tracked
        FoodRecordCreate {
            fiber: 12.5,
            magnesium: 270.0,
            calcium: 269.0,
            ..FoodRecordCreate::new("Almonds", 579.0, 21.2, 21.6, 49.9)
        },
        FoodRecordCreate {
            fiber: 3.0,
            vitamin_c: 2.4,
            potassium: 337.0,
            magnesium: 25.0,
            ..FoodRecordCreate::new("Sweet Potato", 86.0, 1.6, 20.1, 0.1)
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_reference_foods_in_order() {
        let reference = FoodReference::builtin();
        assert_eq!(reference.len(), 12);
        assert_eq!(
            reference.names(),
            vec![
                "Apple", "Banana", "Chicken Breast", "Rice", "Broccoli", "Salmon",
                "Spinach", "Oats", "Egg", "Milk", "Almonds", "Sweet Potato",
            ]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let reference = FoodReference::builtin();
        let upper = reference.lookup("APPLE").unwrap();
        let lower = reference.lookup("apple").unwrap();
        assert!(Arc::ptr_eq(&upper, &lower));
        assert_eq!(upper.per_100g(), lower.per_100g());

        let chicken = reference.lookup("  Chicken BREAST ").unwrap();
        assert_eq!(chicken.name(), "Chicken Breast");
        assert!((chicken.per_100g().protein - 31.0).abs() < 1e-9);
    }

    #[test]
    fn test_lookup_unknown_food() {
        let reference = FoodReference::builtin();
        let before = reference.len();
        let err = reference.lookup("kiwi").unwrap_err();
        assert_eq!(err, NutritionError::NotFound("kiwi".to_string()));
        assert_eq!(reference.len(), before);
    }

    #[test]
    fn test_reference_values() {
        let reference = FoodReference::builtin();
        let salmon = reference.lookup("salmon").unwrap();
        assert!((salmon.per_100g().omega3 - 1.8).abs() < 1e-9);
        assert!((salmon.per_100g().vitamin_d - 11.0).abs() < 1e-9);

        let spinach = reference.lookup("spinach").unwrap();
        assert!((spinach.per_100g().folate - 194.0).abs() < 1e-9);
        assert_eq!(spinach.per_100g().vitamin_c, 0.0);
    }

    #[test]
    fn test_insert_new_food() {
        let mut reference = FoodReference::builtin();
        let kiwi = reference
            .insert(FoodRecordCreate {
                vitamin_c: 92.7,
                ..FoodRecordCreate::new("Kiwi", 61.0, 1.1, 15.0, 0.5)
            })
            .unwrap();
        assert_eq!(kiwi.name(), "Kiwi");
        assert_eq!(reference.len(), 13);
        assert_eq!(reference.list_all().last().unwrap().name(), "Kiwi");
        assert!(reference.lookup("KIWI").is_ok());
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut reference = FoodReference::builtin();
        let err = reference
            .insert(FoodRecordCreate::new("banana", 1.0, 1.0, 1.0, 1.0))
            .unwrap_err();
        assert_eq!(err, NutritionError::DuplicateFood("banana".to_string()));
        assert!((reference.lookup("Banana").unwrap().calories() - 89.0).abs() < 1e-9);
        assert_eq!(reference.len(), 12);
    }
}
