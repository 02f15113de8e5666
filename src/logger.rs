use std::fmt::Display;

const DEFAULT_FILTER: &str = concat!(env!("CARGO_CRATE_NAME"), "=info");

pub fn init() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
    .format_timestamp(None)
    .init();
}

pub trait LogExt<T> {
  /// Logs the failure with the caller location and turns it into an `anyhow` error.
  fn log_error(self, msg: &str) -> anyhow::Result<T>;
}

impl<T, E> LogExt<T> for Result<T, E> where E: Display {
  #[track_caller]
  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => {
        let location = std::panic::Location::caller().to_string();

        log::error!(location; "{msg}: {error:#}");

        anyhow::bail!("{msg}: {error:#}")
      }
    }
  }
}
