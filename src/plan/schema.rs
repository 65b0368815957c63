//! Gemini `responseSchema` describing [`GeneratedPlan`](crate::types::GeneratedPlan).
//!
//! Gemini accepts an OpenAPI subset with upper-case type names, so the schema is
//! written out by hand rather than derived.

use serde_json::{json, Value};
use strum::IntoEnumIterator;

use crate::types::MealType;

/// Name attached to the structured-output request.
pub const PLAN_SCHEMA_NAME: &str = "GeneratedPlan";

fn number(description: &str) -> Value {
    json!({ "type": "NUMBER", "description": description })
}

fn string(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn object(properties: Value) -> Value {
    let required: Vec<String> = properties
        .as_object()
        .map(|props| props.keys().cloned().collect())
        .unwrap_or_default();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

fn array(description: &str, items: Value) -> Value {
    json!({ "type": "ARRAY", "description": description, "items": items })
}

/// Build the full response schema.
pub fn plan_response_schema() -> Value {
    let meal_types: Vec<String> = MealType::iter().map(|m| m.to_string()).collect();

    let macro_split = object(json!({
        "protein": number("Percentage of protein"),
        "carbs": number("Percentage of carbs"),
        "fats": number("Percentage of fats"),
    }));

    let meal = object(json!({
        "type": { "type": "STRING", "enum": meal_types },
        "name": string("Name of the meal"),
        "calories": number("Approximate calories"),
        "description": string("Brief description of ingredients or method"),
    }));

    let exercise = object(json!({
        "name": { "type": "STRING" },
        "sets": { "type": "STRING" },
        "reps": { "type": "STRING" },
    }));

    let day = object(json!({
        "day": string("Day 1, Day 2, etc."),
        "focus": string("Main focus area e.g. Chest/Triceps, Rest"),
        "exercises": array("Exercises for the day", exercise),
    }));

    object(json!({
        "bmi": number("Calculated BMI value"),
        "bmiCategory": string("BMI Category e.g. Normal, Overweight"),
        "dailyCalories": number("Target daily calorie intake"),
        "macroSplit": array("Macro nutrient distribution percentages", macro_split),
        "dietPlan": array("A sample daily diet plan", meal),
        "workoutPlan": array("7-day workout routine", day),
        "summary": string("A short motivational summary and advice for the user."),
    }))
}
