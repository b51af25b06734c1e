use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::topics::frequency::DEFAULT_TOP_K;

/// Settings for one analysis run.
///
/// CLI values take precedence. When a value is not given on the command
/// line, `LEXSIM_TOPK` and `LEXSIM_EXPORT` are consulted (the .env file is
/// loaded at startup via dotenvy), then the built-in defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for .txt files
    pub dir: PathBuf,
    /// How many top words to keep per document
    pub top_k: usize,
    /// Export file prefix; empty means no export
    pub export_prefix: String,
    /// Directory the export files are written into (empty: working directory)
    pub export_dir: PathBuf,
    /// Print the report as JSON instead of text
    pub json: bool,
}

impl Config {
    /// Resolve the run configuration from CLI values and the environment.
    pub fn load(
        dir: PathBuf,
        top_k: Option<usize>,
        export_prefix: Option<String>,
        json: bool,
    ) -> Result<Self> {
        let top_k = match top_k {
            Some(k) => k,
            None => match env::var("LEXSIM_TOPK") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("LEXSIM_TOPK is not a valid integer: {raw:?}"))?,
                Err(_) => DEFAULT_TOP_K,
            },
        };

        let export_prefix = export_prefix
            .or_else(|| env::var("LEXSIM_EXPORT").ok())
            .unwrap_or_default();

        let config = Self {
            dir,
            top_k,
            export_prefix,
            export_dir: PathBuf::new(),
            json,
        };
        config.validate()?;
        Ok(config)
    }

    /// A config with defaults for everything but the input directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            top_k: DEFAULT_TOP_K,
            export_prefix: String::new(),
            export_dir: PathBuf::new(),
            json: false,
        }
    }

    /// Check the settings before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            anyhow::bail!("--topk must be at least 1");
        }
        Ok(())
    }

    /// Whether tabular export was requested.
    pub fn exports(&self) -> bool {
        !self.export_prefix.is_empty()
    }

    /// Paths of the pairs and top-K export files.
    pub fn export_paths(&self) -> (PathBuf, PathBuf) {
        let prefix = &self.export_prefix;
        (
            self.export_dir.join(format!("{prefix}_pairs.csv")),
            self.export_dir.join(format!("{prefix}_topk.csv")),
        )
    }
}
