use super::Command;
use crate::config::ProcureFlowConfig;
use crate::shutdown::ShutdownCoordinator;
use crate::telemetry::{create_session_span, generate_session_id};
use crate::walkthrough::{EndReason, Walkthrough, WalkthroughSettings};
use anyhow::Result;
use tokio::io::BufReader;
use tracing::Instrument;

pub struct PlayCommand {
    pub settings: WalkthroughSettings,
}

impl PlayCommand {
    pub fn new(config: &ProcureFlowConfig) -> Self {
        Self {
            settings: WalkthroughSettings::from(&config.playback),
        }
    }

    pub fn with_autoplay(mut self, auto: bool) -> Self {
        self.settings.autoplay |= auto;
        self
    }

    pub fn with_time_scale(mut self, time_scale: Option<f64>) -> Self {
        if let Some(time_scale) = time_scale {
            self.settings.time_scale = time_scale;
        }
        self
    }

    pub fn with_guide_hidden(mut self, hidden: bool) -> Self {
        if hidden {
            self.settings.show_guide = false;
        }
        self
    }
}

impl Command for PlayCommand {
    async fn execute(&self) -> Result<()> {
        let session_id = generate_session_id();
        let span = create_session_span(&session_id, self.settings.autoplay, self.settings.time_scale);

        let mut walkthrough = Walkthrough::new(self.settings.clone(), std::io::stdout());
        let stdin = BufReader::new(tokio::io::stdin());
        let shutdown = ShutdownCoordinator::new().wait_for_shutdown();

        let outcome = walkthrough.run(stdin, shutdown).instrument(span).await?;

        println!();
        match outcome.reason {
            EndReason::Quit if outcome.snapshot.current_step_index >= crate::steps::step_count() => {
                println!("👋 Walkthrough complete.")
            }
            EndReason::Quit => println!("👋 Session ended."),
            EndReason::EndOfInput => println!("👋 Input closed, session ended."),
            EndReason::Interrupted => println!("🛑 Interrupted."),
        }
        Ok(())
    }
}
