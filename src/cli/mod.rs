//! Terminal front end for FitGenie.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::{FitError, Result};
use crate::plan::{build_prompt, plan_response_schema, PlanProvider};
use crate::presenter::{render, ResultTab};
use crate::session::PlanSession;
use crate::types::ProfileField;

/// FitGenie CLI
#[derive(Parser, Debug)]
#[command(name = "fitgenie", version, about = "FitGenie: AI workout and diet plans")]
pub struct Cli {
    /// Config file (defaults to ~/.fitgenie/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Gemini model ID, overriding config and FITGENIE_MODEL
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a workout and diet plan
    Plan(PlanArgs),
    /// Print the prompt that would be sent, without calling the API
    Prompt(ProfileArgs),
    /// Print the structured-output schema sent to the model
    Schema,
}

/// Profile fields. Omitted fields keep the form defaults.
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Age in years (10-100)
    #[arg(long)]
    pub age: Option<String>,
    /// Weight in kg (20-200)
    #[arg(long)]
    pub weight: Option<String>,
    /// Height in cm (100-250)
    #[arg(long)]
    pub height: Option<String>,
    /// fat-loss, muscle-gain, endurance or general-fitness
    #[arg(long)]
    pub goal: Option<String>,
    /// vegetarian, eggetarian, non-vegetarian or vegan
    #[arg(long)]
    pub preference: Option<String>,
}

/// Arguments for `fitgenie plan`.
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Which result tab to print
    #[arg(short, long, default_value = "overview")]
    pub tab: ResultTab,

    /// Print the raw plan as JSON instead of a tab
    #[arg(long)]
    pub json: bool,
}

impl ProfileArgs {
    fn edits(&self) -> [(ProfileField, Option<&String>); 6] {
        [
            (ProfileField::Name, self.name.as_ref()),
            (ProfileField::Age, self.age.as_ref()),
            (ProfileField::Weight, self.weight.as_ref()),
            (ProfileField::Height, self.height.as_ref()),
            (ProfileField::Goal, self.goal.as_ref()),
            (ProfileField::Preference, self.preference.as_ref()),
        ]
    }

    /// Fill a fresh session's form, one field edit per provided flag.
    pub fn to_session(&self) -> Result<PlanSession> {
        let mut session = PlanSession::new();
        for (field, raw) in self.edits() {
            if let Some(raw) = raw {
                session.edit(field, raw)?;
            }
        }
        Ok(session)
    }
}

/// `fitgenie prompt`
pub fn prompt_command(args: &ProfileArgs) -> Result<String> {
    let session = args.to_session()?;
    Ok(build_prompt(session.profile()))
}

/// `fitgenie schema`
pub fn schema_command() -> Result<String> {
    Ok(serde_json::to_string_pretty(&plan_response_schema())?)
}

/// Outcome of `fitgenie plan`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutput {
    /// The rendered tab, or the plan as JSON.
    Plan(String),
    /// The session ended in its error state with this user-facing message.
    Failed(String),
}

/// `fitgenie plan`: one submission, rendered for the terminal.
pub async fn plan_command(args: &PlanArgs, provider: &dyn PlanProvider) -> Result<PlanOutput> {
    let mut session = args.profile.to_session()?;
    session.submit(provider).await?;

    if let Some(message) = session.error_message() {
        return Ok(PlanOutput::Failed(message.to_string()));
    }
    if args.json {
        let plan = session
            .plan()
            .ok_or_else(|| FitError::InvalidState("submission ended without a plan".into()))?;
        return Ok(PlanOutput::Plan(serde_json::to_string_pretty(plan)?));
    }

    session.select_tab(args.tab)?;
    let view = session
        .view()
        .ok_or_else(|| FitError::InvalidState("submission ended without a plan".into()))?;
    Ok(PlanOutput::Plan(render(view)))
}
