use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;

/// Show the configuration file.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "No config file at {}. Run `punchclock init` first.",
                    path.display()
                )));
            }

            let content = fs::read_to_string(&path)?;
            println!("# {}", path.display());
            println!("{}", content);
        }
    }
    Ok(())
}
