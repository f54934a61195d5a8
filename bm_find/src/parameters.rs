//! Search defaults loaded from `parameters.toml`.

use anyhow::{Context, Result};
use boyer_moore::AlphabetSource;
use log::warn;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Name of the parameters file looked up next to the running executable.
pub const PARAMETERS_FILE: &str = "parameters.toml";

/// Defaults for the `search` command. Command-line flags take precedence.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// Maximum number of matches reported per pattern. Negative means no cap.
    pub default_limit: i64,
    /// Printed between the match positions of one pattern.
    pub separator: Cow<'static, str>,
    /// Where the bad-character alphabet comes from.
    pub alphabet_source: AlphabetSource,
}

/// Values used for keys missing from the file, or when there is no file.
pub const DEFAULT_PARAMETERS: Parameters = Parameters {
    default_limit: 10,
    separator: Cow::Borrowed(" / "),
    alphabet_source: AlphabetSource::Text,
};

impl Default for Parameters {
    fn default() -> Self {
        DEFAULT_PARAMETERS
    }
}

macro_rules! warn_non_default {
    ($p:expr, $($a:ident),+) => {
        $(
            if DEFAULT_PARAMETERS.$a != $p.$a {
                warn!("using non-default {} = {:?}", stringify!($a), $p.$a);
            }
        )+
    };
}

impl Parameters {
    /// Load `path`, or `parameters.toml` beside the executable when `path` is None.
    /// A missing default file falls back to [`DEFAULT_PARAMETERS`]; an
    /// explicitly given file must exist.
    pub fn load(path: Option<&Path>) -> Result<Parameters> {
        match path {
            Some(p) => Parameters::read(p),
            None => Parameters::load_or_default(&default_path()?),
        }
    }

    /// Read `path` if it exists, otherwise warn and use [`DEFAULT_PARAMETERS`].
    fn load_or_default(path: &Path) -> Result<Parameters> {
        if !path.exists() {
            warn!(
                "could not find {} at {}, falling back to defaults",
                PARAMETERS_FILE,
                path.display()
            );
            return Ok(DEFAULT_PARAMETERS);
        }
        Parameters::read(path)
    }

    fn read(path: &Path) -> Result<Parameters> {
        let s = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
        let params = Parameters::from_toml(&s).with_context(|| path.display().to_string())?;
        warn_non_default!(params, default_limit, separator, alphabet_source);
        Ok(params)
    }

    /// Parse parameters from TOML text. Missing keys take their default.
    pub fn from_toml(s: &str) -> Result<Parameters> {
        Ok(toml::from_str(s)?)
    }

    /// The per-pattern match cap, `None` meaning unbounded.
    pub fn limit(&self) -> Option<usize> {
        usize::try_from(self.default_limit).ok()
    }
}

fn default_path() -> Result<PathBuf> {
    Ok(std::env::current_exe()
        .context("Unable to locate the running executable")?
        .with_file_name(PARAMETERS_FILE))
}
