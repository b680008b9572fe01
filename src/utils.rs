use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Identifier};

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("IDENTIFIER pattern is valid"));

static ISO_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P([0-9]+Y)?([0-9]+M)?([0-9]+W)?([0-9]+D)?(T([0-9]+H)?([0-9]+M)?([0-9]+(\.[0-9]+)?S)?)?$")
        .expect("ISO_DURATION pattern is valid")
});

static CRON_FIELD: Lazy<Regex> = Lazy::new(|| {
    let token = r"(\*|\?|[0-9A-Za-z]+(-[0-9A-Za-z]+)?)(/[0-9]+)?";
    Regex::new(&format!("^{token}(,{token})*$")).expect("CRON_FIELD pattern is valid")
});

/// Identifiers travel as decimal strings in the flattened form.
pub(crate) fn parse_identifier(field: &str, s: &str) -> Result<Identifier, Error> {
    if !IDENTIFIER.is_match(s) {
        return Err(Error::ValidationError(format!(
            "`{}` must be a numeric identifier, got '{}'",
            field, s
        )));
    }
    s.parse().map_err(|_| {
        Error::ValidationError(format!("`{}` identifier '{}' is out of range", field, s))
    })
}

pub(crate) fn validate_date(field: &str, s: &str) -> Result<(), Error> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|e| Error::ValidationError(format!("`{}` must be a YYYY-MM-DD date, {}", field, e)))
}

pub(crate) fn validate_time_of_day(field: &str, s: &str) -> Result<(), Error> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .map(|_| ())
        .map_err(|e| Error::ValidationError(format!("`{}` must be a HH:MM:SS time, {}", field, e)))
}

/// ISO-8601 durations such as `PT15M` or `P1DT12H`
pub(crate) fn validate_iso_duration(field: &str, s: &str) -> Result<(), Error> {
    if s.len() > 1 && !s.ends_with('T') && ISO_DURATION.is_match(s) {
        Ok(())
    } else {
        Err(Error::ValidationError(format!(
            "`{}` must be an ISO-8601 duration, got '{}'",
            field, s
        )))
    }
}

/// Accepts classic 5-field and 6-field (with seconds) cron expressions.
pub(crate) fn validate_cron(field: &str, s: &str) -> Result<(), Error> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if !(5..=6).contains(&fields.len()) {
        return Err(Error::ValidationError(format!(
            "`{}` must have 5 or 6 fields, got '{}'",
            field, s
        )));
    }
    match fields.iter().find(|f| !CRON_FIELD.is_match(f)) {
        Some(bad) => Err(Error::ValidationError(format!(
            "`{}` has an invalid cron field '{}' in '{}'",
            field, bad, s
        ))),
        None => Ok(()),
    }
}

/// Empty strings stand for "unset" in the flattened form
pub(crate) fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Like `non_empty`, but a whitespace-only value is rejected
pub(crate) fn non_blank(field: &str, s: &str) -> Result<Option<String>, Error> {
    if !s.is_empty() && s.trim().is_empty() {
        return Err(Error::ValidationError(format!(
            "`{}` must not be whitespace only",
            field
        )));
    }
    Ok(non_empty(s))
}

pub(crate) fn remove_trailing_slash(s: &str) -> String {
    s.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifier() {
        assert_eq!(parse_identifier("cluster", "42").unwrap(), 42);
        assert_eq!(parse_identifier("cluster", "007").unwrap(), 7);
        assert!(parse_identifier("cluster", "").is_err());
        assert!(parse_identifier("cluster", "-1").is_err());
        assert!(parse_identifier("cluster", "4x2").is_err());
        assert!(parse_identifier("cluster", "99999999999999999999999").is_err());
    }

    #[test]
    fn test_dates_and_times() {
        assert!(validate_date("start_date", "2022-02-28").is_ok());
        assert!(validate_date("start_date", "2022-02-30").is_err());
        assert!(validate_date("start_date", "28/02/2022").is_err());
        assert!(validate_time_of_day("start_time_of_day", "00:00:00").is_ok());
        assert!(validate_time_of_day("start_time_of_day", "23:59:59").is_ok());
        assert!(validate_time_of_day("start_time_of_day", "24:00:00").is_err());
        assert!(validate_time_of_day("start_time_of_day", "1am").is_err());
    }

    #[test]
    fn test_iso_duration() {
        assert!(validate_iso_duration("backoff", "PT15M").is_ok());
        assert!(validate_iso_duration("backoff", "P1DT12H").is_ok());
        assert!(validate_iso_duration("backoff", "PT0.5S").is_ok());
        assert!(validate_iso_duration("backoff", "P").is_err());
        assert!(validate_iso_duration("backoff", "PT").is_err());
        assert!(validate_iso_duration("backoff", "15m").is_err());
    }

    #[test]
    fn test_cron() {
        assert!(validate_cron("cron_string", "0 * * * *").is_ok());
        assert!(validate_cron("cron_string", "*/15 0-6 1,15 * MON-FRI").is_ok());
        assert!(validate_cron("cron_string", "0 0 12 * * ?").is_ok());
        assert!(validate_cron("cron_string", "").is_err());
        assert!(validate_cron("cron_string", "* * *").is_err());
        assert!(validate_cron("cron_string", "0 * * * * * *").is_err());
        assert!(validate_cron("cron_string", "0 * * % *").is_err());
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(remove_trailing_slash("http://localhost:8080/"), "http://localhost:8080");
        assert_eq!(remove_trailing_slash("http://localhost:8080"), "http://localhost:8080");
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("x"), Some("x".to_string()));
        assert_eq!(non_blank("folder", "").unwrap(), None);
        assert_eq!(non_blank("folder", " a ").unwrap(), Some(" a ".to_string()));
        assert!(matches!(
            non_blank("folder", " \t").unwrap_err(),
            Error::ValidationError(_)
        ));
    }
}
