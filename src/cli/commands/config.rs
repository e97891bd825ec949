use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        init,
    } = cmd
    {
        if *init {
            Config::default().save()?;
            success(format!("Config file written: {:?}", Config::config_file()));
            return Ok(());
        }

        if *check {
            let missing = Config::check()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for field in missing {
                    warning(format!("Missing field (default in use): {}", field));
                }
            }
            return Ok(());
        }

        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("serialize: {}", e)))?;
            info(format!("Config file: {:?}\n", Config::config_file()));
            println!("{}", yaml);
            return Ok(());
        }

        info(format!("Config file: {:?}", Config::config_file()));
    }
    Ok(())
}
