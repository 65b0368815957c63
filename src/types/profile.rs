//! The user profile collected by the form.

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{FitError, Result};

/// Inclusive bounds accepted for each numeric field.
pub const AGE_RANGE: (u32, u32) = (10, 100);
pub const WEIGHT_RANGE_KG: (f64, f64) = (20.0, 200.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);

/// What the user wants the plan to work towards.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum FitnessGoal {
    #[serde(rename = "Fat Loss")]
    #[strum(to_string = "Fat Loss", serialize = "fat-loss")]
    FatLoss,
    #[serde(rename = "Muscle Gain")]
    #[strum(to_string = "Muscle Gain", serialize = "muscle-gain")]
    MuscleGain,
    #[serde(rename = "Endurance")]
    #[strum(to_string = "Endurance", serialize = "endurance")]
    Endurance,
    #[default]
    #[serde(rename = "General Fitness")]
    #[strum(to_string = "General Fitness", serialize = "general-fitness")]
    GeneralFitness,
}

/// Which foods the diet plan may use.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum DietaryPreference {
    #[default]
    #[serde(rename = "Vegetarian")]
    #[strum(to_string = "Vegetarian", serialize = "vegetarian")]
    Vegetarian,
    #[serde(rename = "Eggetarian")]
    #[strum(to_string = "Eggetarian", serialize = "eggetarian")]
    Eggetarian,
    #[serde(rename = "Non-Vegetarian")]
    #[strum(to_string = "Non-Vegetarian", serialize = "non-vegetarian")]
    NonVegetarian,
    #[serde(rename = "Vegan")]
    #[strum(to_string = "Vegan", serialize = "vegan")]
    Vegan,
}

/// Biometric data and preferences for one plan request.
///
/// ```
/// use fitgenie::types::{DietaryPreference, FitnessGoal, UserProfile};
///
/// let profile = UserProfile::builder()
///     .name("Asha")
///     .age(22)
///     .weight(60.0)
///     .height(165.0)
///     .goal(FitnessGoal::FatLoss)
///     .build();
/// assert_eq!(profile.preference, DietaryPreference::Vegetarian);
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, Builder, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[builder(into, default)]
    pub name: String,
    #[builder(default = 20)]
    pub age: u32,
    /// Kilograms.
    #[builder(default = 70.0)]
    pub weight: f64,
    /// Centimetres.
    #[builder(default = 170.0)]
    pub height: f64,
    #[builder(default)]
    pub goal: FitnessGoal,
    #[builder(default)]
    pub preference: DietaryPreference,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// An individually editable field of [`UserProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProfileField {
    Name,
    Age,
    Weight,
    Height,
    Goal,
    Preference,
}

impl UserProfile {
    /// Update exactly one field from its raw form text.
    ///
    /// Numeric fields are coerced; on failure the profile is left untouched.
    pub fn set_field(&mut self, field: ProfileField, raw: &str) -> Result<()> {
        let value = raw.trim();
        match field {
            ProfileField::Name => self.name = raw.to_string(),
            ProfileField::Age => {
                self.age = value
                    .parse()
                    .map_err(|_| FitError::validation("age", format!("'{raw}' is not a whole number")))?;
            }
            ProfileField::Weight => self.weight = parse_measure("weight", value)?,
            ProfileField::Height => self.height = parse_measure("height", value)?,
            ProfileField::Goal => {
                self.goal = value
                    .parse()
                    .map_err(|_| FitError::validation("goal", format!("unknown goal '{raw}'")))?;
            }
            ProfileField::Preference => {
                self.preference = value.parse().map_err(|_| {
                    FitError::validation("preference", format!("unknown dietary preference '{raw}'"))
                })?;
            }
        }
        Ok(())
    }

    /// Check the numeric fields against the form bounds.
    pub fn validate(&self) -> Result<()> {
        let (min_age, max_age) = AGE_RANGE;
        if !(min_age..=max_age).contains(&self.age) {
            return Err(FitError::validation(
                "age",
                format!("must be between {min_age} and {max_age}"),
            ));
        }
        check_range("weight", self.weight, WEIGHT_RANGE_KG, "kg")?;
        check_range("height", self.height, HEIGHT_RANGE_CM, "cm")?;
        Ok(())
    }
}

fn parse_measure(field: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FitError::validation(field, format!("'{value}' is not a number"))),
    }
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64), unit: &str) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(FitError::validation(
            field,
            format!("must be between {min} and {max} {unit}"),
        ))
    }
}
