//! tdo done command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for the done command
pub struct DoneOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(options: DoneOptions) -> Result<()> {
    let mut ops = super::open_ops(options.data_dir.as_deref())?;
    let task = ops.toggle(&options.id)?;

    let state = if task.done { "done" } else { "pending" };
    let mut human = HumanOutput::new(format!("task {} marked {}", task.id, state));
    human.push_detail(task.render_line());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "done",
        &task,
        Some(&human),
    )
}
