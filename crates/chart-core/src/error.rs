// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the encoder, backends and the composer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The per-run output directory could not be created.
    #[error("cannot create chart output directory {}: {source}", path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Compressing or writing an image failed. Nothing is retried.
    #[error("failed to encode {}: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{backend} backend could not render {}: {message}", path.display())]
    Backend {
        backend: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("invalid month key `{0}`, expected YYYY.MM")]
    InvalidMonthKey(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
