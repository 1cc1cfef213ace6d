use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::web;

/// Handle the `serve` command: run the HTTP server on a fresh tokio runtime.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        let mut cfg = cfg.clone();
        if let Some(h) = host {
            cfg.host = h.clone();
        }
        if let Some(p) = port {
            cfg.port = *p;
        }

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(web::serve(&cfg))?;
    }

    Ok(())
}
