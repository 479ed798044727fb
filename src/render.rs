//! Text frames written to stdout, one per state change.

use crate::errors::{WalkthroughError, WalkthroughResult};
use crate::guide::GuideShell;
use crate::navigation::NavigationSnapshot;
use crate::screens::Screen;
use crate::steps::{step_at, steps, Step};
use serde::Serialize;
use std::io::Write;

const RULE_WIDTH: usize = 72;
const BAR_WIDTH: usize = 24;

pub fn progress_bar(fraction: f64) -> String {
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn header(snapshot: NavigationSnapshot, screen: &Screen) -> String {
    let title = screen.model().title();
    if !snapshot.started {
        return format!("FTG PROCESS VISUALIZER · {title}");
    }
    match step_at(snapshot.current_step_index) {
        Some(step) => format!("[{}] {}", step.actor, title),
        None => format!("[Closure] {title}"),
    }
}

/// Write one full frame for the mounted screen.
pub fn write_frame<W: Write>(
    out: &mut W,
    snapshot: NavigationSnapshot,
    screen: &Screen,
    notice: Option<&str>,
    show_guide: bool,
) -> WalkthroughResult<()> {
    let rule = "─".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", header(snapshot, screen))?;

    if snapshot.started {
        let total = steps().len();
        let done = snapshot.current_step_index.min(total);
        let fraction = if total == 0 { 1.0 } else { done as f64 / total as f64 };
        writeln!(out, "{} {done}/{total}", progress_bar(fraction))?;
    }
    writeln!(out, "{rule}")?;

    for line in screen.model().view() {
        writeln!(out, "{line}")?;
    }

    if let Some(notice) = notice {
        writeln!(out)?;
        writeln!(out, "⚠ {notice}")?;
    }

    if show_guide && snapshot.started {
        if let Some(guide) = GuideShell::project(steps(), snapshot.current_step_index) {
            writeln!(out)?;
            for line in guide.lines() {
                writeln!(out, "{line}")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "» {}  (g guide · r restart · q quit)", screen.model().hint())?;
    out.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct StepListing<'a> {
    #[serde(flatten)]
    step: &'a Step,
    screen: &'static str,
}

/// Registry as pretty JSON, each entry annotated with the screen it routes to.
pub fn steps_json() -> WalkthroughResult<String> {
    let listing: Vec<StepListing<'_>> = steps()
        .iter()
        .map(|step| StepListing {
            step,
            screen: crate::router::route(Some(step)).name(),
        })
        .collect();
    serde_json::to_string_pretty(&listing).map_err(|e| WalkthroughError::Render {
        reason: e.to_string(),
    })
}
