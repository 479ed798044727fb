use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "procure-flow")]
#[command(about = "Interactive walkthrough of the Project MnM procurement lifecycle")]
#[command(long_about = "procure-flow walks through a fixed procurement workflow (nomination, sourcing, \
                       PR and PO release, payments, goods receipt) one role screen at a time. \
                       Get started with 'procure-flow play'.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the walkthrough in the terminal (one input per line on stdin)
    Play {
        /// Click through manual steps automatically
        #[arg(long, help = "Autoplay: manual steps are completed after a short dwell")]
        auto: bool,
        /// Multiplier applied to every scripted delay
        #[arg(long, value_name = "F", help = "Scale scripted delays (0 fires every phase immediately)")]
        time_scale: Option<f64>,
        /// Hide the guide panel
        #[arg(long, help = "Start with the guide panel collapsed")]
        no_guide: bool,
    },
    /// List the workflow steps
    Steps {
        /// Emit JSON instead of a table
        #[arg(long, help = "Print the registry as JSON")]
        json: bool,
    },
    /// Show which screen each step is routed to
    Route,
    /// Render the guide panel for one step
    Guide {
        /// Step id (1-based)
        #[arg(value_name = "STEP_ID")]
        step_id: u32,
    },
}
