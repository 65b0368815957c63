//! Result presentation: tab state, macro breakdown and terminal rendering.

use std::fmt::Write;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::types::{DailyMeal, GeneratedPlan};

/// The three mutually exclusive result views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ResultTab {
    #[default]
    Overview,
    Workout,
    Diet,
}

/// A generated plan together with the currently selected tab.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanView {
    plan: GeneratedPlan,
    tab: ResultTab,
}

impl PlanView {
    /// New views always open on [`ResultTab::Overview`].
    pub fn new(plan: GeneratedPlan) -> Self {
        Self {
            plan,
            tab: ResultTab::default(),
        }
    }

    pub fn plan(&self) -> &GeneratedPlan {
        &self.plan
    }

    pub fn tab(&self) -> ResultTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: ResultTab) {
        self.tab = tab;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Macro {
    Protein,
    Carbs,
    Fats,
}

/// One slice of the macro chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSlice {
    pub name: Macro,
    pub percent: f64,
}

/// Protein/carbs/fats slices from the first macro split entry.
///
/// An empty macro split yields an empty breakdown.
pub fn macro_breakdown(plan: &GeneratedPlan) -> Vec<MacroSlice> {
    let Some(split) = plan.primary_macro_split() else {
        return Vec::new();
    };
    vec![
        MacroSlice { name: Macro::Protein, percent: split.protein },
        MacroSlice { name: Macro::Carbs, percent: split.carbs },
        MacroSlice { name: Macro::Fats, percent: split.fats },
    ]
}

/// Sum of the listed meals' calories.
///
/// Widened to `u64` since each meal may carry any `u32`.
pub fn meal_calories(meals: &[DailyMeal]) -> u64 {
    meals.iter().map(|m| u64::from(m.calories)).sum()
}

/// Fixed note shown above the meal list.
pub const DIETARY_NOTE: &str =
    "This plan respects your dietary preference. Ensure you stay hydrated (3-4L water/day).";

/// Render the active tab as plain text.
pub fn render(view: &PlanView) -> String {
    match view.tab() {
        ResultTab::Overview => render_overview(view.plan()),
        ResultTab::Workout => render_workout(view.plan()),
        ResultTab::Diet => render_diet(view.plan()),
    }
}

fn render_overview(plan: &GeneratedPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "BMI: {:.1} ({})", plan.bmi, plan.bmi_category);
    let _ = writeln!(out, "Daily calories: {} kcal", plan.daily_calories);

    let slices = macro_breakdown(plan);
    if slices.is_empty() {
        out.push_str("Macros: not provided\n");
    } else {
        let parts: Vec<String> = slices
            .iter()
            .map(|s| format!("{} {}%", s.name, s.percent))
            .collect();
        let _ = writeln!(out, "Macros: {}", parts.join(", "));
    }

    let _ = write!(out, "\n{}\n", plan.summary);
    out
}

fn render_workout(plan: &GeneratedPlan) -> String {
    let mut out = String::new();
    for day in &plan.workout_plan {
        let _ = writeln!(out, "{}: {}", day.day, day.focus);
        for exercise in &day.exercises {
            let _ = writeln!(
                out,
                "  - {} ({} x {})",
                exercise.name, exercise.sets, exercise.reps
            );
        }
    }
    out
}

fn render_diet(plan: &GeneratedPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dietary note: {DIETARY_NOTE}\n");
    for meal in &plan.diet_plan {
        let _ = writeln!(
            out,
            "{}: {} ({} kcal)",
            meal.meal_type, meal.name, meal.calories
        );
        if !meal.description.is_empty() {
            let _ = writeln!(out, "  {}", meal.description);
        }
    }
    let _ = writeln!(out, "Total: {} kcal", meal_calories(&plan.diet_plan));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DayWorkout, Exercise, MacroSplit, MealType};
    use pretty_assertions::assert_eq;

    fn sample_plan() -> GeneratedPlan {
        GeneratedPlan {
            bmi: 22.04,
            bmi_category: "Normal".into(),
            daily_calories: 1800,
            macro_split: vec![MacroSplit { protein: 30.0, carbs: 45.0, fats: 25.0 }],
            diet_plan: vec![
                DailyMeal {
                    meal_type: MealType::Breakfast,
                    name: "Poha".into(),
                    calories: 300,
                    description: "Flattened rice with peanuts".into(),
                },
                DailyMeal {
                    meal_type: MealType::Dinner,
                    name: "Dal and roti".into(),
                    calories: 550,
                    description: String::new(),
                },
            ],
            workout_plan: vec![DayWorkout {
                day: "Day 1".into(),
                focus: "Legs".into(),
                exercises: vec![Exercise {
                    name: "Squat".into(),
                    sets: "3".into(),
                    reps: "12".into(),
                }],
            }],
            summary: "Stay consistent.".into(),
        }
    }

    #[test]
    fn new_view_opens_on_overview() {
        let view = PlanView::new(sample_plan());
        assert_eq!(view.tab(), ResultTab::Overview);
    }

    #[test]
    fn breakdown_uses_first_split_only() {
        let mut plan = sample_plan();
        plan.macro_split.push(MacroSplit { protein: 90.0, carbs: 5.0, fats: 5.0 });

        let slices = macro_breakdown(&plan);

        assert_eq!(
            slices,
            vec![
                MacroSlice { name: Macro::Protein, percent: 30.0 },
                MacroSlice { name: Macro::Carbs, percent: 45.0 },
                MacroSlice { name: Macro::Fats, percent: 25.0 },
            ]
        );
    }

    #[test]
    fn empty_split_gives_empty_breakdown() {
        let mut plan = sample_plan();
        plan.macro_split.clear();

        assert!(macro_breakdown(&plan).is_empty());
        let text = render(&PlanView::new(plan));
        assert!(text.contains("Macros: not provided"));
    }

    #[test]
    fn overview_renders_metrics() {
        let text = render(&PlanView::new(sample_plan()));
        assert_eq!(
            text,
            "BMI: 22.0 (Normal)\nDaily calories: 1800 kcal\nMacros: Protein 30%, Carbs 45%, Fats 25%\n\nStay consistent.\n"
        );
    }

    #[test]
    fn workout_tab_lists_exercises() {
        let mut view = PlanView::new(sample_plan());
        view.select_tab(ResultTab::Workout);
        assert_eq!(render(&view), "Day 1: Legs\n  - Squat (3 x 12)\n");
    }

    #[test]
    fn diet_tab_totals_calories() {
        let mut view = PlanView::new(sample_plan());
        view.select_tab(ResultTab::Diet);
        let text = render(&view);
        assert!(text.starts_with(
            "Dietary note: This plan respects your dietary preference. Ensure you stay hydrated (3-4L water/day).\n\nBreakfast: Poha (300 kcal)\n  Flattened rice with peanuts\n"
        ));
        assert!(text.ends_with("Total: 850 kcal\n"));
    }

    #[test]
    fn huge_meal_calories_total_without_overflow() {
        let mut plan = sample_plan();
        for meal in &mut plan.diet_plan {
            meal.calories = 3_000_000_000;
        }
        assert_eq!(meal_calories(&plan.diet_plan), 6_000_000_000);

        let mut view = PlanView::new(plan);
        view.select_tab(ResultTab::Diet);
        assert!(render(&view).ends_with("Total: 6000000000 kcal\n"));
    }

    #[test]
    fn tab_parses_case_insensitively() {
        assert_eq!("Workout".parse::<ResultTab>().unwrap(), ResultTab::Workout);
        assert_eq!("diet".parse::<ResultTab>().unwrap(), ResultTab::Diet);
    }
}
