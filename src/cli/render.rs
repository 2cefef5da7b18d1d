//! Console rendering for the interactive menu

use std::io::{self, Write};

use crate::models::{
    ActivityLevel, BmiCategory, CalorieGoals, FoodReference, IntakeLedger, MealSlot, MealSplit,
    NutritionSummary, SampleCombo, NUTRITION_TIPS,
};

pub fn main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "1. Setup User Profile")?;
    writeln!(out, "2. Calculate Daily Calories")?;
    writeln!(out, "3. Calculate BMI")?;
    writeln!(out, "4. Track Daily Nutrients")?;
    writeln!(out, "5. Get Meal Recommendations")?;
    writeln!(out, "6. View Nutrition Summary")?;
    writeln!(out, "7. Exit")
}

pub fn tracker_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n1. Add Food Item")?;
    writeln!(out, "2. View Available Foods")?;
    writeln!(out, "3. View Today's Intake")?;
    writeln!(out, "4. Clear Today's Intake")?;
    writeln!(out, "5. Back to Main Menu")
}

pub fn activity_levels<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nActivity Levels:")?;
    for level in ActivityLevel::ALL {
        writeln!(out, "{}. {}", level.level(), level.description())?;
    }
    Ok(())
}

pub fn calories<W: Write>(
    out: &mut W,
    bmr: f64,
    goals: &CalorieGoals,
    delta: f64,
) -> io::Result<()> {
    writeln!(out, "\n=== Daily Calorie Calculator ===")?;
    writeln!(out, "Your BMR (Basal Metabolic Rate): {:.0} calories", bmr)?;
    writeln!(out, "Your Daily Calorie Needs: {:.0} calories", goals.maintenance)?;
    writeln!(out, "\nFor different goals:")?;
    writeln!(out, "Weight Loss: {:.0} calories (deficit of {:.0})", goals.weight_loss, delta)?;
    writeln!(out, "Weight Maintenance: {:.0} calories", goals.maintenance)?;
    writeln!(out, "Weight Gain: {:.0} calories (surplus of {:.0})", goals.weight_gain, delta)
}

pub fn bmi<W: Write>(out: &mut W, bmi: f64, category: BmiCategory) -> io::Result<()> {
    writeln!(out, "\n=== BMI Calculator ===")?;
    writeln!(out, "Your BMI: {:.1}", bmi)?;
    writeln!(out, "Category: {}", category)?;
    writeln!(out, "\nBMI Categories:")?;
    writeln!(out, "Underweight: < 18.5")?;
    writeln!(out, "Normal weight: 18.5 - 24.9")?;
    writeln!(out, "Overweight: 25 - 29.9")?;
    writeln!(out, "Obesity: ≥ 30")
}

pub fn available_foods<W: Write>(out: &mut W, reference: &FoodReference) -> io::Result<()> {
    writeln!(out, "\nAvailable Foods:")?;
    writeln!(out, "{}", "-".repeat(40))?;
    for food in reference.list_all() {
        writeln!(out, "{:<15} - {:>3.0} cal/100g", food.name(), food.calories())?;
    }
    Ok(())
}

pub fn daily_intake<W: Write>(out: &mut W, ledger: &IntakeLedger) -> io::Result<()> {
    if ledger.is_empty() {
        return writeln!(out, "No food items added today.");
    }

    writeln!(out, "\n=== Today's Food Intake ({}) ===", ledger.date())?;
    writeln!(out, "{}", "-".repeat(50))?;
    for entry in ledger.entries() {
        writeln!(
            out,
            "{:<15} {:>6.0}g - {:>4.0} cal",
            entry.food.name(),
            entry.quantity_grams,
            entry.calories()
        )?;
    }
    writeln!(out, "{}", "-".repeat(50))?;
    writeln!(out, "Total Calories: {:.0}", ledger.total_calories())
}

pub fn nutrition_summary<W: Write>(out: &mut W, summary: &NutritionSummary) -> io::Result<()> {
    if summary.is_empty() {
        return writeln!(out, "No food items to analyze.");
    }
    let t = &summary.totals;

    writeln!(out, "=== Detailed Nutrition Summary ===")?;
    writeln!(out, "{}", "-".repeat(40))?;

    writeln!(out, "MACRONUTRIENTS:")?;
    writeln!(out, "Calories: {:.0} kcal", t.calories)?;
    writeln!(out, "Protein: {:.1} g", t.protein)?;
    writeln!(out, "Carbohydrates: {:.1} g", t.carbs)?;
    writeln!(out, "Fat: {:.1} g", t.fat)?;
    writeln!(out, "Fiber: {:.1} g", t.fiber)?;

    writeln!(out, "\nMICRONUTRIENTS:")?;
    writeln!(out, "Vitamins:")?;
    writeln!(out, "  Vitamin C: {:.1} mg", t.vitamin_c)?;
    writeln!(out, "  Vitamin D: {:.1} µg", t.vitamin_d)?;
    writeln!(out, "  Vitamin B12: {:.1} µg", t.vitamin_b12)?;
    writeln!(out, "  Folate: {:.1} µg", t.folate)?;

    writeln!(out, "Minerals:")?;
    writeln!(out, "  Calcium: {:.1} mg", t.calcium)?;
    writeln!(out, "  Iron: {:.1} mg", t.iron)?;
    writeln!(out, "  Magnesium: {:.1} mg", t.magnesium)?;
    writeln!(out, "  Potassium: {:.1} mg", t.potassium)?;
    writeln!(out, "  Zinc: {:.1} mg", t.zinc)?;

    writeln!(out, "Other:")?;
    writeln!(out, "  Omega-3: {:.1} g", t.omega3)?;

    writeln!(out, "\n=== Daily Value Percentages (Approximate) ===")?;
    for dv in summary.daily_values() {
        writeln!(out, "{}: {:.0}% ({})", dv.nutrient, dv.percent, dv.note)?;
    }
    Ok(())
}

pub fn recommendations<W: Write>(
    out: &mut W,
    daily_calories: f64,
    split: &MealSplit,
    combos: &[SampleCombo],
) -> io::Result<()> {
    writeln!(out, "\n=== Meal Recommendations ===")?;
    writeln!(out, "Based on your daily calorie needs: {:.0} calories", daily_calories)?;

    writeln!(out, "\n=== Meal Distribution ===")?;
    for slot in MealSlot::ALL {
        writeln!(
            out,
            "{}: {:.0} calories ({:.0}%)",
            slot_title(slot),
            split.get(slot),
            slot.share() * 100.0
        )?;
    }

    writeln!(out, "\n=== Sample Meal Plans ===")?;
    for slot in MealSlot::ALL {
        writeln!(out, "\n{} OPTIONS:", slot_heading(slot))?;
        for combo in combos.iter().filter(|c| c.slot == slot) {
            writeln!(out, "• {} = {:.0} cal", combo.description, combo.calories)?;
        }
    }

    writeln!(out, "\n=== Nutrition Tips ===")?;
    for tip in NUTRITION_TIPS {
        writeln!(out, "• {}", tip)?;
    }
    Ok(())
}

fn slot_title(slot: MealSlot) -> &'static str {
    match slot {
        MealSlot::Breakfast => "Breakfast",
        MealSlot::Lunch => "Lunch",
        MealSlot::Dinner => "Dinner",
        MealSlot::Snack => "Snacks",
    }
}

fn slot_heading(slot: MealSlot) -> &'static str {
    match slot {
        MealSlot::Breakfast => "BREAKFAST",
        MealSlot::Lunch => "LUNCH",
        MealSlot::Dinner => "DINNER",
        MealSlot::Snack => "HEALTHY SNACK",
    }
}
