use serde::Deserialize;

/// How the preview window is placed relative to the finder window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitOrientation {
  #[default]
  Horizontal,
  Vertical,
  Floating,
}

/// Geometry the host applies when it opens the preview window.
///
/// Forwarded opaquely through [`WindowOps::open_preview_window`]; the
/// controller never interprets these fields itself.
///
/// [`WindowOps::open_preview_window`]: crate::WindowOps::open_preview_window
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PreviewWindowConfig {
  pub orientation: SplitOrientation,
  /// Height in rows for horizontal splits and floats.
  pub rows:        u16,
  /// Width in columns for vertical splits and floats.
  pub cols:        u16,
  /// Border style for floating windows. Ignored for splits.
  pub border:      String,
}

impl Default for PreviewWindowConfig {
  fn default() -> Self {
    Self {
      orientation: SplitOrientation::Horizontal,
      rows:        10,
      cols:        40,
      border:      "none".to_string(),
    }
  }
}
