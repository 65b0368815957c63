//! Natural-language instruction sent with every plan request.

use std::fmt::Write;

use crate::types::UserProfile;

/// Fixed constraints appended after the profile.
pub const PLAN_CONSTRAINTS: [&str; 5] = [
    "Diet suggestions must be practical, affordable, and widely available in India \
     (e.g., using Paneer, Soya, Dal, Roti, Rice, Chicken, Eggs depending on preference), \
     and must respect the dietary preference above.",
    "Workout should be suitable for a student/beginner environment (mix of home/gym).",
    "Provide exactly a 7-day workout schedule.",
    "Provide a representative daily meal plan.",
    "Calculate BMI and estimated daily calorie needs yourself.",
];

/// Build the prompt for one profile.
pub fn build_prompt(profile: &UserProfile) -> String {
    let mut prompt = String::from(
        "Act as an expert fitness trainer and nutritionist specializing in personalized plans \
         for Indian students and professionals.\n\
         Create a detailed workout and diet plan for the following user:\n",
    );

    // Writing into a String cannot fail.
    let _ = writeln!(prompt, "Name: {}", profile.name.trim());
    let _ = writeln!(prompt, "Age: {}", profile.age);
    let _ = writeln!(prompt, "Weight: {} kg", profile.weight);
    let _ = writeln!(prompt, "Height: {} cm", profile.height);
    let _ = writeln!(prompt, "Goal: {}", profile.goal);
    let _ = writeln!(prompt, "Dietary Preference: {}", profile.preference);

    prompt.push_str("\nConstraints:\n");
    for constraint in PLAN_CONSTRAINTS {
        let _ = writeln!(prompt, "- {constraint}");
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DietaryPreference, FitnessGoal};

    #[test]
    fn prompt_embeds_profile_fields() {
        let profile = UserProfile::builder()
            .name("Asha")
            .age(22)
            .weight(60.0)
            .height(165.0)
            .goal(FitnessGoal::FatLoss)
            .preference(DietaryPreference::Vegetarian)
            .build();

        let prompt = build_prompt(&profile);

        assert!(prompt.contains("Name: Asha\n"));
        assert!(prompt.contains("Age: 22\n"));
        assert!(prompt.contains("Weight: 60 kg\n"));
        assert!(prompt.contains("Height: 165 cm\n"));
        assert!(prompt.contains("Goal: Fat Loss\n"));
        assert!(prompt.contains("Dietary Preference: Vegetarian\n"));
    }

    #[test]
    fn prompt_lists_every_constraint() {
        let prompt = build_prompt(&UserProfile::default());
        for constraint in PLAN_CONSTRAINTS {
            assert!(prompt.contains(constraint));
        }
        assert!(prompt.contains("7-day workout schedule"));
        assert!(prompt.contains("Weight: 70 kg\n"));
    }
}
