//! FitGenie: personalised workout and diet plans from Gemini.
//!
//! A [`UserProfile`](types::UserProfile) is turned into a prompt plus a strict
//! JSON response schema, sent once to a hosted model, and parsed into a
//! [`GeneratedPlan`](types::GeneratedPlan). A [`PlanSession`](session::PlanSession)
//! tracks the form and result state around that single call.
//!
//! # Quick Start
//!
//! ```no_run
//! use fitgenie::prelude::*;
//!
//! # async fn example() -> fitgenie::error::Result<()> {
//! let config = FitConfig::load()?;
//! let planner = ModelPlanProvider::new(fitgenie::provider::create_provider(&config)?);
//!
//! let mut session = PlanSession::new();
//! session.edit(ProfileField::Name, "Asha")?;
//! session.edit(ProfileField::Goal, "fat-loss")?;
//! session.submit(&planner).await?;
//!
//! if let Some(view) = session.view() {
//!     println!("{}", fitgenie::presenter::render(view));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod plan;
pub mod prelude;
pub mod presenter;
pub mod provider;
pub mod session;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
