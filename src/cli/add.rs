//! tdo add command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for the add command
pub struct AddOptions {
    pub text: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(options: AddOptions) -> Result<()> {
    let mut ops = super::open_ops(options.data_dir.as_deref())?;
    let task = ops.add(&options.text)?;

    let mut human = HumanOutput::new(format!("added task {}", task.id));
    human.push_detail(task.render_line());
    human.push_next_step("tdo list".to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &task,
        Some(&human),
    )
}
