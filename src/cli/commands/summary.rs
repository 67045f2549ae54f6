use super::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Summary;
use crate::ui::messages::{labelled, overtime};
use crate::utils::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary = cmd {
        let session = Session::open(cfg);
        print_summary(&session.ledger.summary());
    }
    Ok(())
}

pub(crate) fn print_summary(s: &Summary) {
    labelled(
        "Total work",
        format!(
            "{} h ({})",
            s.work_hours_str(),
            mins2readable(s.work_minutes, false, false)
        ),
    );
    labelled(
        "Total break",
        format!(
            "{} h ({})",
            s.break_hours_str(),
            mins2readable(s.break_minutes, false, false)
        ),
    );
    overtime(s.overtime_hours, s.overtime_hours_str());
}
