//! tdo status command implementation
//!
//! Single-pane summary of the task collection.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for the status command
pub struct StatusOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(options: StatusOptions) -> Result<()> {
    let ops = super::open_ops(options.data_dir.as_deref())?;
    let report = ops.status();

    let header = if report.total == 0 {
        "no tasks yet".to_string()
    } else if report.pending == 0 {
        "all tasks done".to_string()
    } else {
        format!("{} of {} tasks pending", report.pending, report.total)
    };

    let mut human = HumanOutput::new(header);
    human.push_summary("total", report.total.to_string());
    human.push_summary("done", report.done.to_string());
    human.push_summary("pending", report.pending.to_string());
    if report.pending > 0 {
        human.push_next_step("tdo done <id>".to_string());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "status",
        &report,
        Some(&human),
    )
}
