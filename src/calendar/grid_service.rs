use chrono::{Datelike as _, NaiveDate};

/// Day columns in a month panel, Monday first.
pub const GRID_COLS: usize = 7;
/// A month spans at most six calendar rows.
pub const GRID_ROWS: usize = 6;

pub const PANEL_COLS: usize = 4;
pub const PANEL_ROWS: usize = 3;

pub const PAGE_WIDTH: f64 = (PANEL_COLS * GRID_COLS) as f64;
pub const PAGE_HEIGHT: f64 = (PANEL_ROWS * GRID_ROWS) as f64;

/// Stacking slots per day cell.
///
/// The 5th and later events of a day are clamped into the last slot and drawn
/// over the 4th chip. Stacking them further up would push them into the cell
/// above.
pub const EVENT_SLOTS: usize = 4;
pub const SLOT_HEIGHT: f64 = 0.25;
pub const CHIP_HEIGHT: f64 = 0.24;

pub const WEEKDAY_LABELS: [&str; GRID_COLS] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A point in grid units, one unit per day cell, y grows downwards.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
  pub x: f64,
  pub y: f64,
  pub width: f64,
  pub height: f64,
}

impl Rect {
  pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
    Self { x, y, width, height }
  }

  pub const fn top_left(&self) -> Point {
    Point::new(self.x, self.y)
  }

  pub fn bottom_right(&self) -> Point {
    Point::new(self.x + self.width, self.y + self.height)
  }

  pub fn center(&self) -> Point {
    Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
  }

  pub fn bottom(&self) -> f64 {
    self.y + self.height
  }
}

/// One existing day of a month and its place inside the month panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
  pub date: NaiveDate,
  /// Monday = 0 .. Sunday = 6
  pub weekday: usize,
  pub week_row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridService {
  year: i32,
}

impl GridService {
  pub const fn new(year: i32) -> Self {
    Self { year }
  }

  /// Panel column and row of `month` (1-based).
  pub const fn panel_position(month: u32) -> (usize, usize) {
    let idx = month.saturating_sub(1) as usize;

    (idx % PANEL_COLS, idx / PANEL_COLS)
  }

  pub fn panel_rect(month: u32) -> Rect {
    let (col, row) = Self::panel_position(month);

    Rect::new(
      (col * GRID_COLS) as f64,
      (row * GRID_ROWS) as f64,
      GRID_COLS as f64,
      GRID_ROWS as f64,
    )
  }

  /// Days of `month`, stopping at the first day the calendar rejects.
  pub fn month_days(&self, month: u32) -> Vec<DayCell> {
    let mut days = Vec::with_capacity(31);
    let mut week_row = 0;

    for day in 1.. {
      let Some(date) = NaiveDate::from_ymd_opt(self.year, month, day) else {
        break;
      };

      let weekday = date.weekday().num_days_from_monday() as usize;
      days.push(DayCell { date, weekday, week_row });

      if weekday == GRID_COLS - 1 {
        week_row += 1;
      }
    }

    days
  }

  pub fn cell_rect(month: u32, cell: &DayCell) -> Rect {
    let panel = Self::panel_rect(month);

    Rect::new(panel.x + cell.weekday as f64, panel.y + cell.week_row as f64, 1.0, 1.0)
  }

  /// Rectangle of the `slot`th event chip, slot 0 sits on the bottom of the cell.
  pub fn chip_rect(cell: Rect, slot: usize) -> Rect {
    let slot = slot.min(EVENT_SLOTS - 1);
    let bottom = cell.y + (EVENT_SLOTS - slot) as f64 * SLOT_HEIGHT * cell.height;
    let height = CHIP_HEIGHT * cell.height;

    Rect::new(cell.x, bottom - height, cell.width, height)
  }
}
