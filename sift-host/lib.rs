//! Editor-host boundary for the sift preview subsystem.
//!
//! The preview controller never touches windows, buffers, highlights, or
//! terminal processes directly. Everything goes through the async traits in
//! this crate, implemented by whichever editor adapter embeds sift. Every
//! method is a suspension point: the host serializes editor commands, so
//! calls complete in issue order and no internal locking is needed on top.

mod config;
mod handles;
mod ops;
mod term;

pub use config::{
  PreviewWindowConfig,
  SplitOrientation,
};
pub use handles::{
  BufferId,
  HighlightSpan,
  MatchId,
  WindowId,
};
pub use ops::{
  BufferOps,
  EditorHost,
  FsOps,
  HighlightOps,
  WindowOps,
};
pub use term::{
  CommandChannel,
  EmbeddedTerminalSpawn,
  JobSpawnOptions,
  JobTerminalSpawn,
  TerminalSpawn,
};
