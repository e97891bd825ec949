use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, file, force } = cmd {
        let store = super::open_store(cfg)?;
        ExportLogic::export(&store, format.clone(), file, *force)?;
    }
    Ok(())
}
