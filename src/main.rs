use anyhow::Result;
use clap::Parser;
use procure_flow::cli::commands::{
    guide::GuideCommand, play::PlayCommand, route::RouteCommand, show_how_to_get_started,
    steps::StepsCommand, Command,
};
use procure_flow::cli::{Cli, Commands};
use procure_flow::{init_telemetry, ProcureFlowConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_file = ProcureFlowConfig::load_env_file();
    let config = ProcureFlowConfig::load()?;
    init_telemetry(&config.observability)?;
    match env_file {
        Ok(true) => tracing::info!("Loaded environment variables from .env file"),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }

    match cli.command {
        // Default behavior: no subcommand - explain how to get started
        None => tokio::runtime::Runtime::new()?.block_on(async { show_how_to_get_started().await }),
        Some(Commands::Play {
            auto,
            time_scale,
            no_guide,
        }) => tokio::runtime::Runtime::new()?.block_on(async {
            PlayCommand::new(&config)
                .with_autoplay(auto)
                .with_time_scale(time_scale)
                .with_guide_hidden(no_guide)
                .execute()
                .await
        }),
        Some(Commands::Steps { json }) => {
            tokio::runtime::Runtime::new()?.block_on(async { StepsCommand::new(json).execute().await })
        }
        Some(Commands::Route) => tokio::runtime::Runtime::new()?.block_on(async { RouteCommand.execute().await }),
        Some(Commands::Guide { step_id }) => {
            tokio::runtime::Runtime::new()?.block_on(async { GuideCommand::new(step_id).execute().await })
        }
    }
}
