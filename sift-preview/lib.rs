//! Preview-window controller for the sift item browser.
//!
//! Given the item currently selected in the finder, [`PreviewUi`] decides
//! what to show (a file or buffer, in-memory text, or a running terminal
//! command), opens or reuses the one dedicated preview window, renders the
//! content with cursor placement and highlights, and tears everything down
//! without leaking buffers or overlays. Requesting the item that is already
//! previewed toggles the window closed.
//!
//! All editor access goes through the [`sift_host`] boundary traits; this
//! crate owns only the state machine.

mod content;
mod controller;
mod error;
mod highlight;
mod previewer;
mod term;

pub use controller::PreviewUi;
pub use error::PreviewError;
pub use previewer::{
  ActionFlag,
  BufferRef,
  PreviewItem,
  Previewer,
  PreviewerResolver,
  PreviewerSource,
};
pub use sift_host::{
  BufferId,
  BufferOps,
  EditorHost,
  FsOps,
  HighlightOps,
  HighlightSpan,
  MatchId,
  PreviewWindowConfig,
  SplitOrientation,
  TerminalSpawn,
  WindowId,
  WindowOps,
};
