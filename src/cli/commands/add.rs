use super::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::EntryDraft;
use crate::ui::messages::{success, warning};

/// Add an entry from the command options.
///
/// Missing date, start or end leaves the log untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        project,
        category,
        owner,
    } = cmd
    {
        let mut session = Session::open(cfg);

        let template = session.template(
            cfg,
            date.as_deref(),
            project.as_deref(),
            *category,
            owner.as_deref(),
        );
        let draft = EntryDraft {
            start: start.clone().unwrap_or_default(),
            end: end.clone().unwrap_or_default(),
            ..template
        };

        let recorded = session.ledger.append(draft)?.map(|e| {
            (
                e.project().to_string(),
                format!(
                    "Added {} entry on {}: {} → {} ({} h).",
                    e.category().as_str(),
                    e.date(),
                    e.start(),
                    e.end(),
                    e.hours_str()
                ),
            )
        });

        match recorded {
            Some((project, msg)) => {
                success(msg);
                session.remember_project(&project)?;
            }
            None => warning("Entry not added: date, start (--in) and end (--out) are required."),
        }
    }

    Ok(())
}
