use std::path::PathBuf;

use clap::Parser;

use crate::config::InputKind;

#[derive(Debug, Clone, Default, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
  /// Path to the configuration file
  #[clap(name = "config")]
  pub config: Option<PathBuf>,

  /// Year to render
  #[clap(long)]
  pub year: Option<i32>,

  /// Page title, defaults to "<year> Events" or "<year> Deadlines"
  #[clap(long)]
  pub title: Option<String>,

  /// Events CSV or deadlines text file
  #[clap(long)]
  pub input: Option<PathBuf>,

  /// Format of the input file
  #[clap(long, value_enum)]
  pub kind: Option<InputKind>,

  /// Directory the page is written to, created if missing
  #[clap(long)]
  pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn command_is_well_formed() {
    Cli::command().debug_assert();
  }

  #[test]
  fn parses_overrides() {
    let cli = Cli::try_parse_from([
      "yearcal",
      "calendar.toml",
      "--year",
      "2024",
      "--kind",
      "deadlines",
      "--input",
      "ddl.txt",
    ])
    .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("calendar.toml")));
    assert_eq!(cli.year, Some(2024));
    assert_eq!(cli.kind, Some(InputKind::Deadlines));
    assert_eq!(cli.input, Some(PathBuf::from("ddl.txt")));
    assert_eq!(cli.output_dir, None);
  }

  #[test]
  fn config_file_is_optional() {
    let cli = Cli::try_parse_from(["yearcal"]).unwrap();

    assert!(cli.config.is_none());
  }

  #[test]
  fn rejects_unknown_kind() {
    assert!(Cli::try_parse_from(["yearcal", "--kind", "holidays"]).is_err());
  }
}
