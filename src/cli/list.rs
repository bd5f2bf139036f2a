//! tdo list command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for the list command
pub struct ListOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(options: ListOptions) -> Result<()> {
    let ops = super::open_ops(options.data_dir.as_deref())?;
    let tasks = ops.list().to_vec();

    let mut human = if tasks.is_empty() {
        let mut human = HumanOutput::new("no tasks yet");
        human.push_next_step("tdo add \"task text\"".to_string());
        human
    } else {
        HumanOutput::new(format!("tasks: {} total", tasks.len()))
    };

    for task in &tasks {
        human.push_detail(task.render_line());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &tasks,
        Some(&human),
    )
}
