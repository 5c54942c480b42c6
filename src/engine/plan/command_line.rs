//! Renders typed step parameters as the command lines executors expect.
//!
//! Distributed and administrative steps become ` -key value` argument lists; the
//! flattening step becomes a single `hive -e "..."` invocation.

use super::job_plan::Plan;
use super::step::{Step, StepCategory};

pub fn render_step(step: &Step) -> String {
    match step.category {
        StepCategory::ShellHiveScript => render_hive_script(step),
        _ => render_arguments(step),
    }
}

/// One `[sequence] name: command` line per step.
pub fn render_plan(plan: &Plan) -> Vec<String> {
    plan.steps()
        .iter()
        .map(|step| format!("[{}] {}:{}", step.sequence, step.name, render_step(step)))
        .collect()
}

fn render_arguments(step: &Step) -> String {
    let mut cmd = String::new();
    for param in step.params.iter() {
        cmd.push_str(" -");
        cmd.push_str(&param.key);
        cmd.push(' ');
        cmd.push_str(&param.value.to_string());
    }
    cmd
}

fn render_hive_script(step: &Step) -> String {
    let mut cmd = String::from("hive -e \"");
    for param in step.params.iter() {
        cmd.push_str(&param.value.to_string());
        cmd.push('\n');
    }
    cmd.push('"');
    cmd
}
