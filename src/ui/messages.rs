//! User-facing console messages.

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Red.bold().paint(ICON_ERR), msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}",
        Blue.bold()
            .paint(format!("====================== {msg}"))
    );
}

/// Bold label followed by a plain value, e.g. `Total work: 8.00 h`.
pub fn labelled<T: fmt::Display>(label: &str, value: T) {
    println!("{} {}", Style::new().bold().paint(format!("{label}:")), value);
}

/// Red when positive, dimmed otherwise.
pub fn overtime<T: fmt::Display>(hours: f64, rendered: T) {
    let text = format!("Overtime: {rendered} h");
    if hours > 0.0 {
        println!("{}", Red.bold().paint(text));
    } else {
        println!("{}", Style::new().dimmed().paint(text));
    }
}
