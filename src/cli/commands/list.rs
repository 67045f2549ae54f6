use super::Session;
use super::summary::print_summary;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let session = Session::open(cfg);
        let ledger = &session.ledger;

        if ledger.is_empty() {
            info("No entries recorded yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("Date"),
            Column::left("Owner"),
            Column::left("Project"),
            Column::left("Category"),
            Column::left("Start"),
            Column::left("End"),
            Column::right("Hours"),
        ]);

        for (i, e) in ledger.entries().iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                e.date().to_string(),
                e.owner().to_string(),
                e.project().to_string(),
                e.category().label().to_string(),
                e.start().to_string(),
                e.end().to_string(),
                e.hours_str(),
            ]);
        }

        header(format!("{} entries", ledger.len()));
        print!("{}", table.render());
        println!();
        print_summary(&ledger.summary());
    }
    Ok(())
}
