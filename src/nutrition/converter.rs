//! Quantity parsing
//!
//! Turns user input such as "150", "150g", "5 oz" or "0.2 kg" into grams.

use crate::error::{NutritionError, NutritionResult};
use super::units::grams_per_unit;

/// Parse a weight, defaulting to grams when no unit is given
///
/// Examples:
/// - "150" -> 150.0
/// - "150g" -> 150.0
/// - "2 oz" -> 56.699
/// - "0.25kg" -> 250.0
pub fn parse_quantity(input: &str) -> NutritionResult<f64> {
    let trimmed = input.trim();
    let (number, unit) = trimmed.split_at(number_len(trimmed));

    let value = number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| NutritionError::InvalidUnit(trimmed.to_string()))?;

    match grams_per_unit(unit) {
        Some(factor) => Ok(value * factor),
        None => {
            tracing::warn!("Unrecognized weight unit '{}' in '{}'", unit.trim(), trimmed);
            Err(NutritionError::InvalidUnit(trimmed.to_string()))
        }
    }
}

/// Length of the leading number, including an exponent such as "1e3"
fn number_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    while end < bytes.len() {
        let b = bytes[end];
        let exponent = matches!(b, b'e' | b'E')
            && bytes[end + 1..]
                .iter()
                .find(|c| !matches!(c, b'+' | b'-'))
                .is_some_and(u8::is_ascii_digit);
        if b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+') || exponent {
            end += 1;
        } else {
            break;
        }
    }
    end
}

/// Convert a quantity in the given weight unit to grams
pub fn to_grams(quantity: f64, unit: &str) -> Option<f64> {
    grams_per_unit(unit).map(|factor| quantity * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::units::{G_PER_LB, G_PER_OZ};

    #[test]
    fn test_parse_bare_number_is_grams() {
        assert_eq!(parse_quantity("150").unwrap(), 150.0);
        assert_eq!(parse_quantity("  72.5 ").unwrap(), 72.5);
    }

    #[test]
    fn test_parse_with_units() {
        assert_eq!(parse_quantity("150g").unwrap(), 150.0);
        assert_eq!(parse_quantity("150 grams").unwrap(), 150.0);
        assert!((parse_quantity("2 oz").unwrap() - 2.0 * G_PER_OZ).abs() < 1e-9);
        assert!((parse_quantity("0.25kg").unwrap() - 250.0).abs() < 1e-9);
        assert!((parse_quantity("1 LB").unwrap() - G_PER_LB).abs() < 1e-9);
    }

    #[test]
    fn test_parse_keeps_sign_for_validation() {
        // Negative weights are rejected later by the ledger, not here
        assert_eq!(parse_quantity("-20").unwrap(), -20.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_quantity("abc"), Err(NutritionError::InvalidUnit(_))));
        assert!(matches!(parse_quantity(""), Err(NutritionError::InvalidUnit(_))));
        assert!(matches!(parse_quantity("2 cups"), Err(NutritionError::InvalidUnit(_))));
    }

    #[test]
    fn test_parse_exponent_forms() {
        assert_eq!(parse_quantity("1e3").unwrap(), 1000.0);
        assert_eq!(parse_quantity("2.5E2 g").unwrap(), 250.0);
        assert!((parse_quantity("1e-1kg").unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let huge = "9".repeat(400);
        assert!(matches!(parse_quantity(&huge), Err(NutritionError::InvalidUnit(_))));
        assert!(parse_quantity("inf").is_err());
        assert!(parse_quantity("NaN").is_err());
    }

    #[test]
    fn test_to_grams() {
        assert_eq!(to_grams(3.0, "kg"), Some(3000.0));
        assert_eq!(to_grams(3.0, "cup"), None);
    }
}
