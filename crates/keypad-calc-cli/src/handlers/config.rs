//! Config command handler

use std::io::Write;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Execute the config command: print the effective configuration as YAML
pub fn execute_config<W: Write>(out: &mut W, config: &CliConfig) -> CliResult<()> {
    write!(out, "{}", config.to_yaml()?)?;
    Ok(())
}
