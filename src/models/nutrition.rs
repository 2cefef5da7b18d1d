//! Shared nutrition data structure
//!
//! Used for per-100g food values, per-entry contributions and daily totals.

use serde::Serialize;

/// Nutritional information
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,     // grams
    pub carbs: f64,       // grams
    pub fat: f64,         // grams
    pub fiber: f64,       // grams
    pub vitamin_c: f64,   // milligrams
    pub vitamin_d: f64,   // micrograms
    pub vitamin_b12: f64, // micrograms
    pub calcium: f64,     // milligrams
    pub iron: f64,        // milligrams
    pub magnesium: f64,   // milligrams
    pub potassium: f64,   // milligrams
    pub zinc: f64,        // milligrams
    pub folate: f64,      // micrograms
    pub omega3: f64,      // grams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
            vitamin_c: self.vitamin_c * multiplier,
            vitamin_d: self.vitamin_d * multiplier,
            vitamin_b12: self.vitamin_b12 * multiplier,
            calcium: self.calcium * multiplier,
            iron: self.iron * multiplier,
            magnesium: self.magnesium * multiplier,
            potassium: self.potassium * multiplier,
            zinc: self.zinc * multiplier,
            folate: self.folate * multiplier,
            omega3: self.omega3 * multiplier,
        }
    }

    /// Scale per-100g values to the given weight in grams
    pub fn for_grams(&self, grams: f64) -> Self {
        self.scale(grams / 100.0)
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            vitamin_c: self.vitamin_c + other.vitamin_c,
            vitamin_d: self.vitamin_d + other.vitamin_d,
            vitamin_b12: self.vitamin_b12 + other.vitamin_b12,
            calcium: self.calcium + other.calcium,
            iron: self.iron + other.iron,
            magnesium: self.magnesium + other.magnesium,
            potassium: self.potassium + other.potassium,
            zinc: self.zinc + other.zinc,
            folate: self.folate + other.folate,
            omega3: self.omega3 + other.omega3,
        }
    }

    /// All fifteen values in display order, with their labels
    pub fn fields(&self) -> [(&'static str, f64); 15] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("vitamin_c", self.vitamin_c),
            ("vitamin_d", self.vitamin_d),
            ("vitamin_b12", self.vitamin_b12),
            ("calcium", self.calcium),
            ("iron", self.iron),
            ("magnesium", self.magnesium),
            ("potassium", self.potassium),
            ("zinc", self.zinc),
            ("folate", self.folate),
            ("omega3", self.omega3),
        ]
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Nutrition {
        Nutrition {
            calories: 52.0,
            protein: 0.3,
            carbs: 14.0,
            fat: 0.2,
            fiber: 2.4,
            vitamin_c: 4.6,
            potassium: 107.0,
            ..Nutrition::zero()
        }
    }

    #[test]
    fn test_for_grams_scales_per_100g() {
        let n = sample().for_grams(200.0);
        assert!((n.calories - 104.0).abs() < 1e-9);
        assert!((n.fiber - 4.8).abs() < 1e-9);
        assert!((n.potassium - 214.0).abs() < 1e-9);
        assert_eq!(n.vitamin_d, 0.0);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Nutrition = std::iter::empty().sum();
        assert_eq!(total, Nutrition::zero());
        assert!(total.fields().iter().all(|(_, v)| *v == 0.0));
    }

    #[test]
    fn test_sum_matches_pairwise_add() {
        let parts = [sample(), sample().scale(0.5), sample().for_grams(30.0)];
        let total: Nutrition = parts.iter().copied().sum();
        let expected = parts[0].add(&parts[1]).add(&parts[2]);
        assert_eq!(total, expected);
        assert!((total.calories - 52.0 * 1.8).abs() < 1e-9);
    }
}
