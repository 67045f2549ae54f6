use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn today_str() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(parse_date("2025-09-01"), NaiveDate::from_ymd_opt(2025, 9, 1));
        assert!(parse_date("01/09/2025").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn today_round_trips() {
        assert_eq!(parse_date(&today_str()), Some(today()));
    }
}
