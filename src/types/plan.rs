//! The structured plan returned by the model.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Workout, diet and body metrics generated for one profile.
///
/// Produced atomically: a reply missing any field fails to deserialize as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub bmi: f64,
    pub bmi_category: String,
    #[serde(deserialize_with = "whole_number")]
    pub daily_calories: u32,
    pub macro_split: Vec<MacroSplit>,
    pub diet_plan: Vec<DailyMeal>,
    pub workout_plan: Vec<DayWorkout>,
    pub summary: String,
}

impl GeneratedPlan {
    /// The macro split that is presented; later entries are ignored.
    pub fn primary_macro_split(&self) -> Option<&MacroSplit> {
        self.macro_split.first()
    }
}

/// Percentages of protein, carbohydrate and fat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum MealType {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyMeal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    #[serde(deserialize_with = "whole_number")]
    pub calories: u32,
    pub description: String,
}

/// One day of the weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayWorkout {
    /// "Day 1", "Day 2", ...
    pub day: String,
    /// e.g. "Chest/Triceps" or "Rest".
    pub focus: String,
    pub exercises: Vec<Exercise>,
}

/// Sets and reps stay free text ("3", "12-15", "30 sec").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub sets: String,
    pub reps: String,
}

/// Accept `1800` as well as `1800.0`, since the schema only promises a NUMBER.
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative calorie count, got {value}"
        )));
    }
    Ok(value.round() as u32)
}
