use super::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let session = Session::open(cfg);
        ExportLogic::export(&session.ledger, *format, file, *force)?;
    }
    Ok(())
}
