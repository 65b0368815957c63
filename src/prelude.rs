//! Convenience re-exports for common use.

pub use crate::config::FitConfig;
pub use crate::error::{FitError, Result};
pub use crate::plan::{ModelPlanProvider, PlanProvider};
pub use crate::presenter::{PlanView, ResultTab};
pub use crate::provider::ModelProvider;
pub use crate::session::{PlanSession, SessionState};
pub use crate::types::{
    DietaryPreference, FitnessGoal, GeneratedPlan, ProfileField, UserProfile,
};
