use crate::cli::commands::resolve_employee;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        name,
        month,
        force,
    } = cmd
    {
        let employee = resolve_employee(name, cfg)?;
        let report = Core::build_employee_report(cfg, &employee, *month)?;
        ExportLogic::export(&report, format, file, *force)?;
    }
    Ok(())
}
