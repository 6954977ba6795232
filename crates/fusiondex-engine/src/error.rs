//! Error type for `fusiondex-engine`.
//!
//! Every variant is a startup failure: a partially loaded engine is never
//! handed out.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] fusiondex_core::Error),

  #[error("asset error: {0}")]
  Assets(#[from] fusiondex_assets::Error),

  #[error("i/o error at {}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed catalog {}: {source}", .path.display())]
  MalformedCatalog {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("invalid settings: {0}")]
  Settings(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
