//! tdo serve command implementation
//!
//! Loads the store once, then hands it to the HTTP adapter on a blocking
//! tokio runtime. The CLI itself stays synchronous; only this command
//! spins up async machinery.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::ops::TaskOps;
use crate::server;

/// Options for the serve command
pub struct ServeOptions {
    pub addr: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub quiet: bool,
}

pub fn run(options: ServeOptions) -> Result<()> {
    let config = Config::load()?;
    let ops = TaskOps::open(config.tasks_file(options.data_dir.as_deref()))?;
    let addr = options.addr.unwrap_or_else(|| config.server.addr.clone());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        // Announce only once the address is actually held.
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        if !options.quiet {
            println!("tdo api listening on {}", listener.local_addr()?);
        }
        server::serve(server::shared(ops), listener).await
    })
}
