use crate::cli::commands::resolve_employee;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::Reporter;
use std::io::IsTerminal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        name,
        month,
        no_color,
    } = cmd
    {
        let employee = resolve_employee(name, cfg)?;
        let report = Core::build_employee_report(cfg, &employee, *month)?;

        tracing::info!(employee = %report.employee, days = report.day_count(), "report ready");

        // plain text when piped or redirected
        let color = !*no_color && std::io::stdout().is_terminal();
        Reporter::new(color, &cfg.separator_char).print(&report);
    }
    Ok(())
}
