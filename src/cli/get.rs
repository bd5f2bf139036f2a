//! tdo get command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for the get command
pub struct GetOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(options: GetOptions) -> Result<()> {
    let ops = super::open_ops(options.data_dir.as_deref())?;
    let task = ops.get(&options.id)?.clone();

    let mut human = HumanOutput::new(task.render_line());
    human.push_summary("done", if task.done { "yes" } else { "no" });

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "get",
        &task,
        Some(&human),
    )
}
