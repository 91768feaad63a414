use std::io;

use thiserror::Error;

/// Failures a preview operation can surface to the caller.
///
/// Routine staleness is deliberately absent: an already-closed window or an
/// already-deleted buffer is cleaned up best-effort and only logged. Only
/// conditions that leave the requested preview unrendered propagate.
#[derive(Debug, Error)]
pub enum PreviewError {
  /// Reading the preview source from disk failed; the preview fails
  /// outright, with no partial rendering.
  #[error("failed to read preview file: {0}")]
  Io(#[from] io::Error),

  /// The terminal process could not be started. Not retried.
  #[error("failed to start terminal preview: {0}")]
  TerminalSpawn(anyhow::Error),

  /// A window, buffer, or highlight call was rejected by the host in a
  /// position where the preview cannot proceed without it.
  #[error("editor host call failed: {0}")]
  Host(anyhow::Error),
}

impl From<anyhow::Error> for PreviewError {
  fn from(err: anyhow::Error) -> Self {
    Self::Host(err)
  }
}
