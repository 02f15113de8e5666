use std::fmt;
use std::str::FromStr;

use palette::Srgb;

pub type Color = Srgb<u8>;

pub const DEFAULT_FONT_COLOR: Color = Srgb::new(0, 0, 0);
pub const DEFAULT_BG_COLOR: Color = Srgb::new(255, 255, 255);

#[derive(Debug, Clone, PartialEq)]
pub enum EventRecord {
  Labeled {
    label: String,
    font_color: Color,
    bg_color: Color,
  },
  Deadline {
    abbreviation: String,
    rank: Rank,
  },
}

impl EventRecord {
  /// Builds a labeled event, falling back to black on white for empty color fields.
  pub fn labeled(label: &str, font_color: &str, bg_color: &str) -> Result<Self, ColorError> {
    Ok(Self::Labeled {
      label: label.to_string(),
      font_color: parse_color_or(font_color, DEFAULT_FONT_COLOR)?,
      bg_color: parse_color_or(bg_color, DEFAULT_BG_COLOR)?,
    })
  }

  pub fn deadline(abbreviation: &str, rank: Rank) -> Self {
    Self::Deadline {
      abbreviation: abbreviation.to_string(),
      rank,
    }
  }

  pub fn label(&self) -> &str {
    match self {
      Self::Labeled { label, .. } => label,
      Self::Deadline { abbreviation, .. } => abbreviation,
    }
  }

  pub const fn fg_color(&self) -> Color {
    match self {
      Self::Labeled { font_color, .. } => *font_color,
      Self::Deadline { rank, .. } => rank.colors().0,
    }
  }

  pub const fn bg_color(&self) -> Color {
    match self {
      Self::Labeled { bg_color, .. } => *bg_color,
      Self::Deadline { rank, .. } => rank.colors().1,
    }
  }
}

/// Priority tier of a deadline, drives the chip colors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
  A,
  B,
  C,
  #[default]
  N,
}

impl Rank {
  /// Foreground and background color of a chip with this rank.
  pub const fn colors(self) -> (Color, Color) {
    match self {
      Self::A => (Srgb::new(255, 255, 255), Srgb::new(0, 0, 0)),
      Self::B => (Srgb::new(255, 255, 255), Srgb::new(0x55, 0x55, 0x55)),
      Self::C => (Srgb::new(0, 0, 0), Srgb::new(0xbb, 0xbb, 0xbb)),
      Self::N => (Srgb::new(0, 0, 0), Srgb::new(255, 255, 255)),
    }
  }
}

impl FromStr for Rank {
  type Err = RankError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_uppercase().as_str() {
      "A" => Ok(Self::A),
      "B" => Ok(Self::B),
      "C" => Ok(Self::C),
      "N" => Ok(Self::N),
      _ => Err(RankError(s.to_string())),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankError(pub String);

impl fmt::Display for RankError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown rank {:?}, expected one of A, B, C, N", self.0)
  }
}

impl std::error::Error for RankError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorError(pub String);

impl fmt::Display for ColorError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown color {:?}", self.0)
  }
}

impl std::error::Error for ColorError {}

/// Parses `#rrggbb`, `#rgb` or a CSS color name.
pub fn parse_color(value: &str) -> Result<Color, ColorError> {
  let value = value.trim();
  let lower = value.to_lowercase();

  palette::named::from_str(&lower)
    .or_else(|| lower.parse::<Color>().ok())
    .ok_or_else(|| ColorError(value.to_string()))
}

fn parse_color_or(value: &str, default: Color) -> Result<Color, ColorError> {
  if value.trim().is_empty() {
    Ok(default)
  } else {
    parse_color(value)
  }
}
