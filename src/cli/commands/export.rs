use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::session::Session;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        project,
        force,
    } = cmd
    {
        let session = Session::open(cfg)?;
        ExportLogic::export(&session, format.clone(), file, period, *project, *force)?;
    }
    Ok(())
}
