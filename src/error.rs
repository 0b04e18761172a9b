//! Error type shared by the composer, renderer, exporter and server.

use std::path::PathBuf;

use thiserror::Error;

/// Failures the site can hit while rendering or writing pages.
///
/// Widget state transitions never fail: out-of-range selections are
/// clamped or ignored, and missing optional content simply suppresses
/// its section. What is left is template rendering, file output and
/// lookups of routes or widgets that do not exist.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no page registered for route '{0}'")]
    UnknownRoute(String),

    #[error("no widget registered under '{0}'")]
    UnknownWidget(String),
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
