//! Error type for `fusiondex-assets`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not a directory: {}", .0.display())]
  NotADirectory(PathBuf),

  #[error("i/o error at {}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("directory walk error: {0}")]
  Walk(#[from] walkdir::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("core error: {0}")]
  Core(#[from] fusiondex_core::Error),
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
    let path = path.into();
    move |source| Self::Io { path, source }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
