use chrono::{NaiveDate, NaiveTime};

use crate::prelude::*;

/// Display format for limit timestamps: `dd.MM.yyyy hh:mm:ss`, 12-hour clock.
pub fn format_date(date: DateTime) -> String {
  date.format("%d.%m.%Y %I:%M:%S").to_string()
}

pub fn now() -> DateTime {
  Utc::now().naive_utc()
}

/// Parses an ISO-8601 timestamp into UTC. Accepts RFC 3339 with an offset,
/// a naive datetime (taken as UTC) or a bare date (midnight).
pub fn parse_date(raw: &str) -> Option<DateTime> {
  let raw = raw.trim();
  chrono::DateTime::parse_from_rfc3339(raw)
    .map(|date| date.naive_utc())
    .or_else(|_| raw.parse::<DateTime>())
    .or_else(|_| raw.parse::<NaiveDate>().map(|d| d.and_time(NaiveTime::MIN)))
    .ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
  }

  #[test]
  fn parses_iso_forms() {
    assert_eq!(parse_date("2021-01-01T00:00:00"), Some(at(2021, 1, 1, 0)));
    assert_eq!(parse_date("2021-01-01T00:00:00Z"), Some(at(2021, 1, 1, 0)));
    assert_eq!(
      parse_date("2021-01-01T00:00:00+03:00"),
      Some(at(2020, 12, 31, 21))
    );
    assert_eq!(parse_date("2021-01-01"), Some(at(2021, 1, 1, 0)));
    assert_eq!(parse_date("01.01.2021"), None);
  }
}
