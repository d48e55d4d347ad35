//! `movierec config` command - print the effective configuration

use crate::cli::{Cli, OutputFormat};
use crate::commands::session::Session;
use movierec_core::error::Result;

/// Execute the config command
pub fn execute(cli: &Cli, session: &Session) -> Result<()> {
    let config = session.config();

    match cli.format {
        OutputFormat::Json => {
            let mut output = serde_json::to_value(config)?;
            if let Some(obj_mut) = output.as_object_mut() {
                obj_mut.insert(
                    "data_dir".to_string(),
                    serde_json::json!(session.data_dir().display().to_string()),
                );
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human | OutputFormat::Records => {
            if !cli.quiet {
                println!("# data_dir = {}", session.data_dir().display());
            }
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
