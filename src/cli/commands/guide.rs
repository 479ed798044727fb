use super::Command;
use crate::errors::WalkthroughError;
use crate::guide::GuideShell;
use crate::render::progress_bar;
use crate::steps::{step_by_id, steps};
use anyhow::Result;

pub struct GuideCommand {
    pub step_id: u32,
}

impl GuideCommand {
    pub fn new(step_id: u32) -> Self {
        Self { step_id }
    }

    fn shell(&self) -> Result<GuideShell, WalkthroughError> {
        let unknown = || WalkthroughError::UnknownStep {
            id: self.step_id,
            max: steps().len(),
        };
        let step = step_by_id(self.step_id).ok_or_else(unknown)?;
        let index = steps().iter().position(|s| s.id == step.id).ok_or_else(unknown)?;
        GuideShell::project(steps(), index).ok_or_else(unknown)
    }
}

impl Command for GuideCommand {
    async fn execute(&self) -> Result<()> {
        let guide = self.shell()?;
        println!("{} {:.0}%", progress_bar(guide.progress), guide.progress * 100.0);
        for line in guide.lines() {
            println!("{line}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_step() {
        let guide = GuideCommand::new(5).shell().unwrap();
        assert_eq!(guide.counter(), "Step 5 / 8");
    }

    #[test]
    fn test_unknown_step() {
        let err = GuideCommand::new(0).shell().unwrap_err();
        assert!(matches!(err, WalkthroughError::UnknownStep { id: 0, max: 8 }));
    }
}
