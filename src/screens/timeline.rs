use crate::steps::{fixtures, steps};

/// Compact project status timeline shared by the automated screens.
pub fn render(current_step_id: u32) -> Vec<String> {
    let total = steps().len().max(2) as f64;
    let progress = (current_step_id.saturating_sub(1) as f64 / (total - 1.0)).clamp(0.0, 1.0);

    let markers: Vec<String> = steps()
        .iter()
        .map(|step| {
            let mark = if step.id < current_step_id {
                "✓"
            } else if step.id == current_step_id {
                "●"
            } else {
                "○"
            };
            format!("{mark} {}", step.title)
        })
        .collect();

    vec![
        format!(
            "📍 Project MnM - Progress Timeline  [{}]  {:>3.0}%",
            fixtures::PR_NUMBER,
            progress * 100.0
        ),
        format!("   {}", markers.join("  ")),
    ]
}
