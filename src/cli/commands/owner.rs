use super::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Owner { name, clear } = cmd {
        let mut session = Session::open(cfg);

        if *clear {
            session.owner.set("")?;
            success("Owner cleared.");
        } else if let Some(n) = name {
            session.owner.set(n)?;
            match session.owner.get() {
                Some(o) => success(format!("Owner set to '{o}'.")),
                None => success("Owner cleared."),
            }
        } else {
            match session.owner.get() {
                Some(o) => println!("{o}"),
                None => info("No owner set."),
            }
        }
    }
    Ok(())
}
