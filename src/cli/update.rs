//! tdo update command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for the update command
pub struct UpdateOptions {
    pub id: String,
    pub text: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(options: UpdateOptions) -> Result<()> {
    let mut ops = super::open_ops(options.data_dir.as_deref())?;
    let task = ops.update(&options.id, &options.text)?;

    let mut human = HumanOutput::new(format!("updated task {}", task.id));
    human.push_detail(task.render_line());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "update",
        &task,
        Some(&human),
    )
}
