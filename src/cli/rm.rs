//! tdo rm command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for the rm command
pub struct RmOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(options: RmOptions) -> Result<()> {
    let mut ops = super::open_ops(options.data_dir.as_deref())?;
    let task = ops.remove(&options.id)?;

    let mut human = HumanOutput::new(format!("deleted task {}", task.id));
    human.push_detail(task.render_line());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "rm",
        &task,
        Some(&human),
    )
}
