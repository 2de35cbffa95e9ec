//! Command-line configuration: positional arguments, then environment.

use std::path::PathBuf;

use thiserror::Error;

pub const INVOICE_PATH_VAR: &str = "THEATER_INVOICE_PATH";
pub const PLAYS_PATH_VAR: &str = "THEATER_PLAYS_PATH";
pub const PRICING_PATH_VAR: &str = "THEATER_PRICING_PATH";
pub const OUTPUT_VAR: &str = "THEATER_OUTPUT";

pub const USAGE: &str = "\
usage: theater-statement <invoice.json> <plays.json>

environment:
  THEATER_INVOICE_PATH   invoice file when no positional argument is given
  THEATER_PLAYS_PATH     play catalog file when no positional argument is given
  THEATER_PRICING_PATH   optional pricing rules file (partial overrides allowed)
  THEATER_OUTPUT         text (default) or json
  RUST_LOG               log filter, logs go to stderr";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {what}: pass it as an argument or set {var}")]
    MissingInput { what: &'static str, var: &'static str },

    #[error("unsupported output format {0:?} (expected \"text\" or \"json\")")]
    UnknownOutput(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl core::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownOutput(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub invoice_path: PathBuf,
    pub plays_path: PathBuf,
    pub pricing_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Config {
    /// Resolve from CLI arguments (program name already stripped) and the
    /// process environment.
    pub fn from_env(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        Self::from_sources(args, |key| std::env::var(key).ok())
    }

    /// Resolve from arguments plus an arbitrary variable lookup.
    pub fn from_sources(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut args = args.into_iter();
        let invoice_arg = args.next();
        let plays_arg = args.next();
        if let Some(extra) = args.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        let invoice_path = invoice_arg
            .or_else(|| env(INVOICE_PATH_VAR))
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingInput {
                what: "invoice file",
                var: INVOICE_PATH_VAR,
            })?;
        let plays_path = plays_arg
            .or_else(|| env(PLAYS_PATH_VAR))
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingInput {
                what: "plays file",
                var: PLAYS_PATH_VAR,
            })?;
        let pricing_path = env(PRICING_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let output = match env(OUTPUT_VAR) {
            Some(value) => value.parse()?,
            None => OutputFormat::Text,
        };

        Ok(Self {
            invoice_path,
            plays_path,
            pricing_path,
            output,
        })
    }
}
