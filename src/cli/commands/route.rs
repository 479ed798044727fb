use super::Command;
use crate::router::route;
use crate::steps::steps;
use anyhow::Result;

pub struct RouteCommand;

impl Command for RouteCommand {
    async fn execute(&self) -> Result<()> {
        println!("🔀 Screen dispatch per step");
        println!();
        for step in steps() {
            println!(
                "  {:>2}. {:<8} {:<28} → {}",
                step.id,
                step.actor.code(),
                step.title,
                route(Some(step))
            );
        }
        println!("   ·  past the last step            → {}", route(None));
        Ok(())
    }
}
