use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while running the calculator.
#[derive(Debug, Error)]
pub enum CliError {
    /// The scenario file could not be read.
    #[error("failed to read scenario file `{}`", path.display())]
    ReadScenario {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The scenario file is not a valid scenario.
    #[error("invalid scenario file `{}`", path.display())]
    ParseScenario {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Reading an answer or writing a prompt failed.
    #[error("interactive input failed")]
    Prompt(#[source] io::Error),

    /// Writing the report failed.
    #[error("failed to write report")]
    Output(#[source] io::Error),

    /// The report could not be serialized as JSON.
    #[error("failed to serialize report")]
    Json(#[from] serde_json::Error),
}
