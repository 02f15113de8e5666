use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::event::EventRecord;

/// Key of a single day in the event map.
///
/// The numbers are stored as read, a key for a day that does not exist
/// (e.g. April 31) is valid and is simply never looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateKey {
  Date { year: i32, month: u32, day: u32 },
  MonthDay { month: u32, day: u32 },
}

impl DateKey {
  /// Parses `YYYY-MM-DD` with zero padded month and day.
  pub fn parse_iso(value: &str) -> Option<Self> {
    let mut parts = value.trim().split('-');

    let year = digits(parts.next()?, 4)?;
    let month = digits(parts.next()?, 2)?;
    let day = digits(parts.next()?, 2)?;

    if parts.next().is_some() {
      return None;
    }

    Some(Self::Date { year: year as i32, month, day })
  }

  /// Parses `MMDD`, exactly four digits.
  pub fn parse_month_day(value: &str) -> Option<Self> {
    let value = value.trim();

    if value.len() != 4 {
      return None;
    }

    Some(Self::MonthDay {
      month: digits(value.get(0..2)?, 2)?,
      day: digits(value.get(2..4)?, 2)?,
    })
  }
}

fn digits(field: &str, width: usize) -> Option<u32> {
  if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }

  field.parse().ok()
}

impl From<NaiveDate> for DateKey {
  fn from(date: NaiveDate) -> Self {
    Self::Date {
      year: date.year(),
      month: date.month(),
      day: date.day(),
    }
  }
}

#[derive(Debug, Default, PartialEq)]
pub struct DayEvents {
  // Events per day, in file encounter order
  events: BTreeMap<DateKey, Vec<EventRecord>>,
}

impl DayEvents {
  pub fn push(&mut self, key: DateKey, event: EventRecord) {
    self.events.entry(key).or_default().push(event);
  }

  /// All events shown on `date`, full-date keys first, then month-day keys.
  pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &EventRecord> {
    let month_day = DateKey::MonthDay {
      month: date.month(),
      day: date.day(),
    };

    [DateKey::from(date), month_day]
      .into_iter()
      .flat_map(move |key| self.get(&key))
  }

  pub fn get(&self, key: &DateKey) -> &[EventRecord] {
    self.events.get(key).map_or(&[], Vec::as_slice)
  }

  pub fn len_events(&self) -> usize {
    self.events.values().map(Vec::len).sum()
  }

  pub fn len_days(&self) -> usize {
    self.events.len()
  }

  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::calendar::Rank;

  #[test]
  fn parses_iso_dates_without_validation() {
    assert_eq!(
      DateKey::parse_iso("2022-04-31"),
      Some(DateKey::Date { year: 2022, month: 4, day: 31 })
    );
    assert_eq!(DateKey::parse_iso("2022-4"), None);
    assert_eq!(DateKey::parse_iso("someday"), None);
  }

  #[test]
  fn iso_dates_need_zero_padding() {
    assert_eq!(DateKey::parse_iso("2022-1-1"), None);
    assert_eq!(DateKey::parse_iso("+2022-01-01"), None);
    assert_eq!(DateKey::parse_iso("22-01-01"), None);
    assert_eq!(DateKey::parse_iso("2022-01-01-01"), None);
    assert_eq!(DateKey::parse_iso(" 2022-01-01 "), Some(DateKey::Date { year: 2022, month: 1, day: 1 }));
  }

  #[test]
  fn parses_month_day() {
    assert_eq!(DateKey::parse_month_day("0131"), Some(DateKey::MonthDay { month: 1, day: 31 }));
    assert_eq!(DateKey::parse_month_day("131"), None);
    assert_eq!(DateKey::parse_month_day("01a1"), None);
  }

  #[test]
  fn keeps_encounter_order() {
    let mut map = DayEvents::default();
    let key = DateKey::MonthDay { month: 3, day: 1 };

    map.push(key, EventRecord::deadline("first", Rank::A));
    map.push(key, EventRecord::deadline("second", Rank::B));

    let labels: Vec<_> = map.get(&key).iter().map(EventRecord::label).collect();
    assert_eq!(labels, ["first", "second"]);
    assert_eq!(map.len_events(), 2);
    assert_eq!(map.len_days(), 1);
  }

  #[test]
  fn looks_up_both_key_kinds() {
    let date = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
    let mut map = DayEvents::default();

    map.push(DateKey::MonthDay { month: 3, day: 1 }, EventRecord::deadline("md", Rank::N));
    map.push(DateKey::from(date), EventRecord::deadline("full", Rank::N));
    map.push(DateKey::Date { year: 2023, month: 3, day: 1 }, EventRecord::deadline("other", Rank::N));

    let labels: Vec<_> = map.events_on(date).map(EventRecord::label).collect();
    assert_eq!(labels, ["full", "md"]);
  }
}
