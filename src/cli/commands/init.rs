use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the configuration file (default location or `--config`).
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init {
        export_root,
        employee,
        force,
    } = &cli.command
    {
        let root = export_root.clone().or_else(|| cli.root.clone());
        let path = Config::init_all(cli.config.as_deref(), root, employee.clone(), *force)?;
        let cfg = Config::load(Some(path.as_path()))?;

        info(format!("Config file : {}", path.display()));
        info(format!("Export root : {}", cfg.export_root));
        if !cfg.default_employee.is_empty() {
            info(format!("Employee    : {}", cfg.default_employee));
        }

        success("rAttendance initialization completed!");
    }
    Ok(())
}
