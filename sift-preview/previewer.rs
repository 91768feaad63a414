use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use sift_host::{
  BufferId,
  HighlightSpan,
};

/// Outcome of a preview action, reported back to the finder UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionFlag {
  /// Nothing changed: resolution failed, content was unusable, or the
  /// request toggled the preview closed.
  None,
  /// The preview window is showing the item; keep the finder open.
  Persist,
}

/// Reference to an existing editor buffer used as a preview source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferRef {
  Id(BufferId),
  Name(String),
}

/// Where preview content comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewerSource {
  /// Run a command and show its live output.
  Terminal { cmds: Vec<String> },
  /// An existing editor buffer or a file on disk.
  Buffer {
    expr: Option<BufferRef>,
    path: Option<PathBuf>,
  },
  /// Literal line content with no backing file.
  NoFile { contents: Vec<String> },
}

/// Resolved description of what to render and how.
///
/// `syntax`, `line_nr`, and `highlights` only apply to buffer-backed
/// sources; terminal previews have no source-line concept.
#[derive(Debug, Clone, PartialEq)]
pub struct Previewer {
  pub source:     PreviewerSource,
  pub syntax:     Option<String>,
  /// 1-based line to place the cursor on and mark.
  pub line_nr:    Option<usize>,
  pub highlights: Vec<HighlightSpan>,
}

impl Previewer {
  pub fn new(source: PreviewerSource) -> Self {
    Self {
      source,
      syntax: None,
      line_nr: None,
      highlights: Vec::new(),
    }
  }

  pub fn terminal(cmds: Vec<String>) -> Self {
    Self::new(PreviewerSource::Terminal { cmds })
  }

  pub fn file(path: impl Into<PathBuf>) -> Self {
    Self::new(PreviewerSource::Buffer {
      expr: None,
      path: Some(path.into()),
    })
  }

  pub fn no_file(contents: Vec<String>) -> Self {
    Self::new(PreviewerSource::NoFile { contents })
  }

  pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
    self.syntax = Some(syntax.into());
    self
  }

  pub fn with_line_nr(mut self, line_nr: usize) -> Self {
    self.line_nr = Some(line_nr);
    self
  }

  pub fn with_highlights(mut self, highlights: Vec<HighlightSpan>) -> Self {
    self.highlights = highlights;
    self
  }
}

/// A finder item as seen by the preview controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewItem {
  /// Display label, used to name `NoFile` preview buffers.
  pub word:   String,
  /// Opaque action payload identifying what is being previewed. Compared by
  /// deep structural equality for toggle detection.
  pub action: Value,
}

impl PreviewItem {
  pub fn new(word: impl Into<String>, action: Value) -> Self {
    Self {
      word: word.into(),
      action,
    }
  }
}

/// Looks an item up and produces a previewer descriptor.
///
/// Pure lookup: resolution must not mutate editor state. Returning `None`
/// means the item has nothing to preview, which is not an error.
#[async_trait]
pub trait PreviewerResolver: Send + Sync {
  async fn resolve(&self, item: &PreviewItem, action_params: &Value) -> Option<Previewer>;
}
