use std::{
  io,
  path::Path,
};

use anyhow::Result;
use async_trait::async_trait;

use crate::{
  BufferId,
  HighlightSpan,
  MatchId,
  PreviewWindowConfig,
  TerminalSpawn,
  WindowId,
};

/// Window lifecycle and focus control.
#[async_trait]
pub trait WindowOps: Send + Sync {
  /// The window that currently has focus.
  async fn current_window(&self) -> Result<WindowId>;

  async fn focus_window(&self, window: WindowId) -> Result<()>;

  /// Force-close the given window. The host decides where focus lands.
  async fn close_window(&self, window: WindowId) -> Result<()>;

  /// Open a new preview window with the given geometry and focus it.
  async fn open_preview_window(&self, config: &PreviewWindowConfig) -> Result<WindowId>;
}

/// Buffer lifecycle, naming, and content control.
///
/// "Current buffer" below always means the buffer displayed in the focused
/// window.
#[async_trait]
pub trait BufferOps: Send + Sync {
  async fn current_buffer(&self) -> Result<BufferId>;

  async fn buffer_name(&self, buffer: BufferId) -> Result<String>;

  /// Look up a listed buffer by its full name.
  async fn listed_buffer_by_name(&self, name: &str) -> Result<Option<BufferId>>;

  /// Switch the focused window to the buffer with this name, creating the
  /// buffer if it does not exist yet.
  async fn edit_buffer(&self, name: &str) -> Result<BufferId>;

  /// Switch the focused window to an existing buffer.
  async fn switch_to_buffer(&self, buffer: BufferId) -> Result<()>;

  /// Create a fresh empty buffer in the focused window.
  async fn create_scratch_buffer(&self) -> Result<BufferId>;

  /// Mark a buffer as a non-file scratch buffer (never written to disk).
  async fn set_scratch(&self, buffer: BufferId) -> Result<()>;

  /// Replace the entire buffer content.
  async fn replace_lines(&self, buffer: BufferId, lines: &[String]) -> Result<()>;

  async fn buffer_lines(&self, buffer: BufferId) -> Result<Vec<String>>;

  async fn buffer_exists(&self, buffer: BufferId) -> Result<bool>;

  async fn is_listed(&self, buffer: BufferId) -> Result<bool>;

  /// Force-delete a buffer, discarding unsaved changes.
  async fn delete_buffer(&self, buffer: BufferId) -> Result<()>;

  /// Apply an explicit syntax to a buffer.
  async fn set_syntax(&self, buffer: BufferId, syntax: &str) -> Result<()>;

  /// Ask the host to auto-detect the filetype of a buffer.
  async fn detect_filetype(&self, buffer: BufferId) -> Result<()>;
}

/// File reads performed on behalf of preview rendering.
#[async_trait]
pub trait FsOps: Send + Sync {
  /// Raw bytes of a file. Callers decode as UTF-8 and split on `\n`.
  async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Cursor movement and highlight primitives.
#[async_trait]
pub trait HighlightOps: Send + Sync {
  /// Move the cursor of the focused window to a 1-based line.
  async fn move_cursor(&self, line: usize) -> Result<()>;

  /// Scroll to make the cursor visible, then center it in the viewport.
  async fn reveal_cursor(&self) -> Result<()>;

  /// Add a window-scoped whole-line match.
  async fn add_line_match(&self, window: WindowId, group: &str, line: usize) -> Result<MatchId>;

  async fn clear_match(&self, window: WindowId, id: MatchId) -> Result<()>;

  /// Remove every span annotation from a buffer.
  async fn clear_span_highlights(&self, buffer: BufferId) -> Result<()>;

  async fn add_span_highlight(&self, buffer: BufferId, span: &HighlightSpan) -> Result<()>;
}

/// Everything the preview controller needs from an editor host.
pub trait EditorHost: WindowOps + BufferOps + FsOps + HighlightOps + TerminalSpawn {}

impl<T> EditorHost for T where T: WindowOps + BufferOps + FsOps + HighlightOps + TerminalSpawn {}
