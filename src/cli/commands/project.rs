use super::Session;
use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project { action } = cmd {
        let mut session = Session::open(cfg);

        match action {
            ProjectAction::Add { name } => {
                if session.projects.add(name)? {
                    success(format!("Project '{}' added.", name.trim()));
                } else {
                    warning(format!("Project '{}' not added (blank or already listed).", name.trim()));
                }
            }
            ProjectAction::List => {
                for p in session.projects.names() {
                    let marker = if *p == cfg.default_project { "*" } else { " " };
                    println!("{marker} {p}");
                }
            }
        }
    }
    Ok(())
}
