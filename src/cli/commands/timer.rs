use super::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{TickObserver, Timer};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::today_str;
use crate::utils::time::{clock_string, format_elapsed};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

/// Redraws the elapsed time on the current terminal line.
struct ConsoleTicker;

impl TickObserver for ConsoleTicker {
    fn on_tick(&self, elapsed_secs: i64) {
        print!("\r⏱  {}  (Enter = stop)", format_elapsed(elapsed_secs));
        io::stdout().flush().ok();
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timer {
        date,
        project,
        category,
        owner,
    } = cmd
    {
        let mut session = Session::open(cfg);
        let date = date.clone().unwrap_or_else(today_str);
        let template = session.template(
            cfg,
            Some(date.as_str()),
            project.as_deref(),
            *category,
            owner.as_deref(),
        );

        let mut timer = Timer::default().with_interval(Duration::from_secs(cfg.tick_seconds.max(1)));
        timer.subscribe(Arc::new(ConsoleTicker));
        timer.start()?;

        if let Some(since) = timer.started_at() {
            info(format!(
                "Timer started at {} for '{}' ({}). Press Enter to stop.",
                clock_string(&since),
                template.project,
                template.category.as_str()
            ));
        }

        let mut line = String::new();
        if let Err(e) = io::stdin().read_line(&mut line) {
            timer.cancel();
            return Err(e.into());
        }
        println!();

        let recorded = timer
            .stop(&mut session.ledger, template)?
            .map(|e| {
                (
                    e.project().to_string(),
                    format!(
                        "Timer stopped: {} → {} on {} ({} h).",
                        e.start(),
                        e.end(),
                        e.date(),
                        e.hours_str()
                    ),
                )
            });

        match recorded {
            Some((project, msg)) => {
                success(msg);
                session.remember_project(&project)?;
            }
            None => warning("Timer stopped, nothing recorded."),
        }
    }

    Ok(())
}
