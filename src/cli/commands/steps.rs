use super::Command;
use crate::render::steps_json;
use crate::steps::steps;
use anyhow::Result;

pub struct StepsCommand {
    pub json: bool,
}

impl StepsCommand {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl Command for StepsCommand {
    async fn execute(&self) -> Result<()> {
        if self.json {
            println!("{}", steps_json()?);
            return Ok(());
        }

        println!("📋 Project MnM workflow ({} steps)", steps().len());
        println!();
        for step in steps() {
            let mode = if step.is_automated() { "auto" } else { "manual" };
            println!("  {:>2}. [{:<8}] {:<28} {mode}", step.id, step.actor.code(), step.title);
        }
        Ok(())
    }
}
