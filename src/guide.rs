//! Guide panel: a pure projection of `(steps, index)`.

use crate::steps::{instruction_for, Blueprint, Step};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideShell {
    pub position: usize,
    pub total: usize,
    /// `(position) / total`, clamped to 1.0
    pub progress: f64,
    pub step_title: &'static str,
    pub role_title: &'static str,
    pub role_summary: &'static str,
    pub instruction: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub blueprint: Option<Blueprint>,
}

impl GuideShell {
    /// Guide for the step at `index`, `None` past the end of the workflow.
    pub fn project(steps: &'static [Step], index: usize) -> Option<Self> {
        let step = steps.get(index)?;
        let total = steps.len();
        let position = index + 1;
        Some(Self {
            position,
            total,
            progress: (position as f64 / total as f64).min(1.0),
            step_title: step.title,
            role_title: step.actor.role_title(),
            role_summary: step.actor.role_summary(),
            instruction: instruction_for(step),
            description: step.description,
            details: step.details,
            blueprint: step.blueprint.clone(),
        })
    }

    pub fn counter(&self) -> String {
        format!("Step {} / {}", self.position, self.total)
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("🧭 {}  ·  {}", self.counter(), self.step_title),
            format!("   Role: {}", self.role_title),
            format!("         {}", self.role_summary),
            format!("   Instructions: {}", self.instruction),
            format!("   {}", self.description),
        ];
        for detail in self.details {
            lines.push(format!("     • {detail}"));
        }
        if let Some(blueprint) = &self.blueprint {
            lines.push(format!("   Blueprint {}: {}", blueprint.id, blueprint.title));
            lines.push(format!("     {}", blueprint.desc));
        }
        lines
    }
}
