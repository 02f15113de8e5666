use std::fmt;
use std::path::Path;

use anyhow::Context;

use super::{DateKey, DayEvents, EventRecord, Rank};

const DELIMITER: char = ',';
const COMMENT: char = '#';

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
  /// Every line read, header included
  pub processed: usize,
  pub events: usize,
  /// Blank, comment and malformed lines
  pub skipped: usize,
}

impl fmt::Display for LoadReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "processed {} lines, {} events, {} skipped",
      self.processed, self.events, self.skipped
    )
  }
}

pub fn load_events(path: &Path) -> anyhow::Result<(DayEvents, LoadReport)> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read events file at {}", path.display()))?;

  parse_events(&content).with_context(|| format!("Failed to parse events file at {}", path.display()))
}

pub fn load_deadlines(path: &Path) -> anyhow::Result<(DayEvents, LoadReport)> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read deadlines file at {}", path.display()))?;

  parse_deadlines(&content)
    .with_context(|| format!("Failed to parse deadlines file at {}", path.display()))
}

/// Parses a CSV file with a `date,label,font_color,bg_color` header.
pub fn parse_events(content: &str) -> anyhow::Result<(DayEvents, LoadReport)> {
  let mut map = DayEvents::default();
  let mut report = LoadReport::default();
  let mut columns: Option<Columns> = None;

  for (idx, line) in content.lines().enumerate() {
    report.processed += 1;

    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT) {
      report.skipped += 1;
      continue;
    }

    let fields = split_fields(line, DELIMITER);

    let cols = match columns {
      Some(cols) => cols,
      None => {
        columns = Some(Columns::from_header(&fields)?);
        log::info!("found column names: {}", fields.join(", "));
        continue;
      }
    };

    let Some(row) = cols.row(&fields) else {
      log::debug!("line {}: too few fields, skipping", idx + 1);
      report.skipped += 1;
      continue;
    };

    let Some(key) = DateKey::parse_iso(row.date) else {
      log::debug!("line {}: unreadable date {:?}, skipping", idx + 1, row.date);
      report.skipped += 1;
      continue;
    };

    let event = EventRecord::labeled(row.label, row.font_color, row.bg_color)
      .with_context(|| format!("Invalid color on line {}", idx + 1))?;

    map.push(key, event);
    report.events += 1;
  }

  if columns.is_none() {
    log::warn!("events file has no header line");
  }

  Ok((map, report))
}

/// Parses `abbr,MMDD[,rank]` lines.
pub fn parse_deadlines(content: &str) -> anyhow::Result<(DayEvents, LoadReport)> {
  let mut map = DayEvents::default();
  let mut report = LoadReport::default();

  for (idx, line) in content.lines().enumerate() {
    report.processed += 1;

    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT) {
      report.skipped += 1;
      continue;
    }

    let fields = split_fields(line, DELIMITER);
    if fields.len() < 2 {
      log::debug!("line {}: too few fields, skipping", idx + 1);
      report.skipped += 1;
      continue;
    }

    let Some(key) = DateKey::parse_month_day(&fields[1]) else {
      log::debug!("line {}: unreadable day {:?}, skipping", idx + 1, fields[1]);
      report.skipped += 1;
      continue;
    };

    let rank = match fields.get(2).filter(|rank| !rank.is_empty()) {
      Some(rank) => rank
        .parse::<Rank>()
        .with_context(|| format!("Invalid rank on line {}", idx + 1))?,
      None => Rank::default(),
    };

    map.push(key, EventRecord::deadline(&fields[0], rank));
    report.events += 1;
  }

  Ok((map, report))
}

#[derive(Debug, Clone, Copy)]
struct Columns {
  date: usize,
  label: usize,
  font_color: Option<usize>,
  bg_color: Option<usize>,
}

struct Row<'a> {
  date: &'a str,
  label: &'a str,
  font_color: &'a str,
  bg_color: &'a str,
}

impl Columns {
  fn from_header(fields: &[String]) -> anyhow::Result<Self> {
    let find = |name: &str| fields.iter().position(|field| field.eq_ignore_ascii_case(name));

    Ok(Self {
      date: find("date").context("Header has no `date` column")?,
      label: find("label").context("Header has no `label` column")?,
      font_color: find("font_color"),
      bg_color: find("bg_color"),
    })
  }

  fn row<'a>(&self, fields: &'a [String]) -> Option<Row<'a>> {
    let optional = |idx: Option<usize>| idx.and_then(|idx| fields.get(idx)).map_or("", String::as_str);

    Some(Row {
      date: fields.get(self.date)?,
      label: fields.get(self.label)?,
      font_color: optional(self.font_color),
      bg_color: optional(self.bg_color),
    })
  }
}

/// Splits a line on `delimiter`, honouring double quotes (`""` escapes a quote).
fn split_fields(line: &str, delimiter: char) -> Vec<String> {
  let mut fields = Vec::new();
  let mut field = String::new();
  let mut quoted = false;
  let mut chars = line.chars().peekable();

  while let Some(c) = chars.next() {
    match c {
      '"' if quoted && chars.peek() == Some(&'"') => {
        field.push('"');
        chars.next();
      }
      '"' => quoted = !quoted,
      c if c == delimiter && !quoted => fields.push(std::mem::take(&mut field)),
      c => field.push(c),
    }
  }
  fields.push(field);

  fields.into_iter().map(|field| field.trim().to_string()).collect()
}
