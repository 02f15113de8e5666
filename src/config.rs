use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Datelike, NaiveDate};

use crate::cli::Cli;

#[derive(Debug, serde::Deserialize)]
pub struct Config {
    #[serde(default = "default_year")]
    pub year: i32,
    pub title: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    pub output_name: Option<String>,
    #[serde(default)]
    pub input: Input,
    #[serde(default)]
    pub page: Page,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Input {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub kind: InputKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// CSV with `date,label,font_color,bg_color`
    #[default]
    Events,
    /// Lines of `abbr,MMDD[,rank]`
    Deadlines,
}

/// Pixel geometry of the exported page.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Page {
    /// Pixels per day cell
    #[serde(default = "default_unit")]
    pub unit: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            year: default_year(),
            title: None,
            output_dir: default_output_dir(),
            output_name: None,
            input: Input::default(),
            page: Page::default(),
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            kind: InputKind::default(),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            margin: default_margin(),
            font_family: default_font_family(),
        }
    }
}

impl InputKind {
    const fn title(self) -> &'static str {
        match self {
            Self::Events => "Events",
            Self::Deadlines => "Deadlines",
        }
    }

    const fn file_suffix(self) -> &'static str {
        match self {
            Self::Events => "page",
            Self::Deadlines => "deadlines",
        }
    }
}

impl Config {
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.year, self.input.kind.title()))
    }

    pub fn output_path(&self) -> PathBuf {
        let name = self
            .output_name
            .clone()
            .unwrap_or_else(|| format!("{}-{}.svg", self.year, self.input.kind.file_suffix()));

        self.output_dir.join(name)
    }

    /// Command line flags win over the file.
    pub fn apply(&mut self, cli: &Cli) {
        if let Some(year) = cli.year {
            self.year = year;
        }
        if let Some(title) = &cli.title {
            self.title = Some(title.clone());
        }
        if let Some(input) = &cli.input {
            self.input.path.clone_from(input);
        }
        if let Some(kind) = cli.kind {
            self.input.kind = kind;
        }
        if let Some(output_dir) = &cli.output_dir {
            self.output_dir.clone_from(output_dir);
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if NaiveDate::from_ymd_opt(self.year, 1, 1).is_none()
            || NaiveDate::from_ymd_opt(self.year, 12, 31).is_none()
        {
            anyhow::bail!("Year {} is outside the supported calendar range", self.year);
        }

        if !self.page.unit.is_finite() || self.page.unit <= 0.0 {
            anyhow::bail!("Page unit must be a positive number, got {}", self.page.unit);
        }

        if !self.page.margin.is_finite() || self.page.margin < 0.0 {
            anyhow::bail!("Page margin must not be negative, got {}", self.page.margin);
        }

        Ok(())
    }
}

pub fn init(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load(path)?,
        None => Config::default(),
    };

    config.apply(cli);
    config.validate()?;

    Ok(config)
}

pub fn load(path: &Path) -> anyhow::Result<Config> {
    let string = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    toml::from_str(&string).with_context(|| format!("Failed to parse config file at {}", path.display()))
}

fn default_year() -> i32 {
    chrono::Local::now().year()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_input_path() -> PathBuf {
    PathBuf::from("data.csv")
}

const fn default_unit() -> f64 {
    36.0
}

const fn default_margin() -> f64 {
    12.0
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}
