//! Food Reference Tools
//!
//! Listing, lookup and insertion of reference foods.

use serde::Serialize;

use crate::error::NutritionResult;
use crate::models::{FoodRecord, FoodRecordCreate, Nutrition};
use crate::session::Session;

/// Summary of a food for list results
#[derive(Debug, Serialize)]
pub struct FoodSummary {
    pub name: String,
    pub calories_per_100g: f64,
}

impl From<&FoodRecord> for FoodSummary {
    fn from(food: &FoodRecord) -> Self {
        Self {
            name: food.name().to_string(),
            calories_per_100g: food.calories(),
        }
    }
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub foods: Vec<FoodSummary>,
    pub total: usize,
}

/// Full food detail response
#[derive(Debug, Serialize)]
pub struct FoodDetail {
    pub name: String,
    pub per_100g: Nutrition,
}

impl From<&FoodRecord> for FoodDetail {
    fn from(food: &FoodRecord) -> Self {
        Self {
            name: food.name().to_string(),
            per_100g: *food.per_100g(),
        }
    }
}

/// Response for a lookup miss, listing what is available
#[derive(Debug, Serialize)]
pub struct FoodNotFoundResponse {
    pub error: String,
    pub available: Vec<String>,
}

pub fn list_foods(session: &Session) -> ListFoodsResponse {
    let foods: Vec<FoodSummary> = session
        .reference
        .list_all()
        .iter()
        .map(|food| FoodSummary::from(food.as_ref()))
        .collect();
    let total = foods.len();
    ListFoodsResponse { foods, total }
}

/// Look up a food; a miss returns the available names instead of an error
pub fn lookup_food(session: &Session, name: &str) -> Result<FoodDetail, FoodNotFoundResponse> {
    session
        .lookup_food(name)
        .map(|food| FoodDetail::from(food.as_ref()))
        .map_err(|e| FoodNotFoundResponse {
            error: e.to_string(),
            available: session.reference.names().into_iter().map(String::from).collect(),
        })
}

/// Insert a new reference food
pub fn add_food(session: &mut Session, data: FoodRecordCreate) -> NutritionResult<FoodDetail> {
    let food = session.add_food(data)?;
    Ok(FoodDetail::from(food.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NutritionError;

    #[test]
    fn test_list_foods() {
        let session = Session::default();
        let list = list_foods(&session);
        assert_eq!(list.total, 12);
        assert_eq!(list.foods[0].name, "Apple");
        assert_eq!(list.foods[0].calories_per_100g, 52.0);
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let session = Session::default();
        let milk = lookup_food(&session, "MILK").unwrap();
        assert_eq!(milk.name, "Milk");
        assert_eq!(milk.per_100g.calcium, 113.0);

        let miss = lookup_food(&session, "kiwi").unwrap_err();
        assert_eq!(miss.error, "Food not found: kiwi");
        assert_eq!(miss.available.len(), 12);
    }

    #[test]
    fn test_add_food() {
        let mut session = Session::default();
        let detail = add_food(
            &mut session,
            FoodRecordCreate {
                fiber: 6.7,
                ..FoodRecordCreate::new("Avocado", 160.0, 2.0, 8.5, 14.7)
            },
        )
        .unwrap();
        assert_eq!(detail.name, "Avocado");
        assert_eq!(list_foods(&session).total, 13);

        let err = add_food(&mut session, FoodRecordCreate::new("avocado", 1.0, 1.0, 1.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, NutritionError::DuplicateFood(_)));
    }
}
