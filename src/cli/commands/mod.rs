use anyhow::Result;

pub mod guide;
pub mod play;
pub mod route;
pub mod steps;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

pub async fn show_how_to_get_started() -> Result<()> {
    println!("🏭 procure-flow - Project MnM Procurement Walkthrough");
    println!();
    println!("To get started:");
    println!("  ▶️  procure-flow play            # Walk through the workflow");
    println!("  🤖 procure-flow play --auto     # Let it run unattended");
    println!();
    println!("Reference:");
    println!("  📋 procure-flow steps           # List the workflow steps");
    println!("  🔀 procure-flow route           # Screen chosen for each step");
    println!("  🧭 procure-flow guide <STEP_ID> # Guide panel for one step");
    println!();
    println!("During play: ⏎ next · 1/2 pick POrg · d document · g guide · r restart · q quit");
    Ok(())
}
