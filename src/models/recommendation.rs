//! Meal recommendations
//!
//! Fixed calorie split across meals and a static set of example combinations.

use serde::Serialize;

use crate::error::NutritionResult;
use super::FoodReference;

/// Meal slot
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }

    /// Fraction of the daily calories assigned to this slot
    pub fn share(&self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Dinner => 0.30,
            MealSlot::Snack => 0.10,
        }
    }
}

/// Calorie budget per meal slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealSplit {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snack: f64,
}

impl MealSplit {
    pub fn get(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snack => self.snack,
        }
    }

    pub fn total(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner + self.snack
    }
}

/// Split a daily calorie target 25/35/30/10 across breakfast, lunch, dinner and snacks
pub fn meal_split(daily_calories: f64) -> MealSplit {
    MealSplit {
        breakfast: daily_calories * MealSlot::Breakfast.share(),
        lunch: daily_calories * MealSlot::Lunch.share(),
        dinner: daily_calories * MealSlot::Dinner.share(),
        snack: daily_calories * MealSlot::Snack.share(),
    }
}

/// One component of an example combination
#[derive(Debug, Clone, Serialize)]
pub struct ComboItem {
    pub label: &'static str,
    pub calories: f64,
}

/// An illustrative food combination for a meal slot
#[derive(Debug, Clone, Serialize)]
pub struct SampleCombo {
    pub slot: MealSlot,
    pub description: String,
    pub items: Vec<ComboItem>,
    pub calories: f64,
}

enum Portion {
    /// A reference food by name and weight in grams
    Food(&'static str, f64, &'static str),
    /// An item outside the reference table with a fixed energy value
    Fixed(&'static str, f64),
}

const SAMPLE_COMBOS: &[(MealSlot, &[Portion])] = &[
    (
        MealSlot::Breakfast,
        &[
            Portion::Food("oats", 80.0, "80g Oats"),
            Portion::Food("milk", 200.0, "200ml Milk"),
        ],
    ),
    (
        MealSlot::Breakfast,
        &[
            Portion::Food("egg", 200.0, "2 Eggs"),
            Portion::Fixed("1 slice bread", 80.0),
        ],
    ),
    (
        MealSlot::Breakfast,
        &[
            Portion::Food("banana", 150.0, "150g Banana"),
            Portion::Food("almonds", 30.0, "30g Almonds"),
        ],
    ),
    (
        MealSlot::Lunch,
        &[
            Portion::Food("chicken breast", 150.0, "150g Chicken Breast"),
            Portion::Food("rice", 200.0, "200g Rice"),
            Portion::Food("broccoli", 100.0, "100g Broccoli"),
        ],
    ),
    (
        MealSlot::Lunch,
        &[
            Portion::Food("salmon", 200.0, "200g Salmon"),
            Portion::Food("sweet potato", 150.0, "150g Sweet Potato"),
        ],
    ),
    (
        MealSlot::Dinner,
        &[
            Portion::Food("chicken breast", 120.0, "120g Chicken"),
            Portion::Food("rice", 150.0, "150g Rice"),
            Portion::Food("spinach", 100.0, "100g Spinach"),
        ],
    ),
    (
        MealSlot::Dinner,
        &[
            Portion::Food("salmon", 150.0, "150g Salmon"),
            Portion::Food("sweet potato", 200.0, "200g Sweet Potato"),
            Portion::Fixed("vegetables", 50.0),
        ],
    ),
    (
        MealSlot::Snack,
        &[
            Portion::Food("apple", 150.0, "1 Apple"),
            Portion::Food("almonds", 20.0, "20g Almonds"),
        ],
    ),
    (
        MealSlot::Snack,
        &[
            Portion::Food("milk", 200.0, "200ml Milk"),
            Portion::Food("banana", 100.0, "1 Banana"),
        ],
    ),
];

/// Example combinations with calorie sums taken from the reference table
///
/// Fails with `NotFound` if a referenced food is missing.
pub fn sample_combos(reference: &FoodReference) -> NutritionResult<Vec<SampleCombo>> {
    SAMPLE_COMBOS
        .iter()
        .map(|(slot, portions)| {
            let items = portions
                .iter()
                .map(|portion| match *portion {
                    Portion::Food(name, grams, label) => Ok(ComboItem {
                        label,
                        calories: reference.lookup(name)?.calories() * grams / 100.0,
                    }),
                    Portion::Fixed(label, calories) => Ok(ComboItem { label, calories }),
                })
                .collect::<NutritionResult<Vec<_>>>()?;

            let description = items.iter().map(|i| i.label).collect::<Vec<_>>().join(" + ");
            let calories = items.iter().map(|i| i.calories).sum();
            Ok(SampleCombo {
                slot: *slot,
                description,
                items,
                calories,
            })
        })
        .collect()
}

pub const NUTRITION_TIPS: [&str; 6] = [
    "Include protein in every meal",
    "Eat 5-9 servings of fruits and vegetables daily",
    "Choose whole grains over refined grains",
    "Include healthy fats (omega-3, nuts, avocado)",
    "Stay hydrated - drink 8-10 glasses of water daily",
    "Limit processed foods and added sugars",
];
