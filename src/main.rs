//! FitGenie CLI binary entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitgenie::cli::{Cli, Commands, PlanOutput};
use fitgenie::config::FitConfig;
use fitgenie::error::FitError;
use fitgenie::plan::ModelPlanProvider;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitgenie=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Plan(args) => handle_plan(&cli, args).await,
        Commands::Prompt(args) => fitgenie::cli::prompt_command(args).map(Some),
        Commands::Schema => fitgenie::cli::schema_command().map(Some),
    };

    match result {
        Ok(Some(output)) => println!("{output}"),
        Ok(None) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    }
}

async fn handle_plan(
    cli: &Cli,
    args: &fitgenie::cli::PlanArgs,
) -> Result<Option<String>, FitError> {
    let mut config = FitConfig::load_from(cli.config.as_deref())?;
    if let Some(model) = &cli.model {
        config.set_model(model.clone());
    }

    let provider = fitgenie::provider::create_provider(&config)?;
    let planner = ModelPlanProvider::new(provider);

    match fitgenie::cli::plan_command(args, &planner).await? {
        PlanOutput::Plan(text) => Ok(Some(text)),
        PlanOutput::Failed(message) => {
            eprintln!("Error: {message}");
            Ok(None)
        }
    }
}
