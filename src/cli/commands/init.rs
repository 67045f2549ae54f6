use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the data directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    println!("⚙️  Initializing rWorklog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Data dir    : {}", cfg.data_path().display());

    success("rWorklog initialization completed!");
    Ok(())
}
