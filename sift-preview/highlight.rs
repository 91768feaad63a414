//! Cursor placement and highlight overlays.
//!
//! Overlays replace, never stack: the previous window-scoped line match and
//! every buffer-scoped span annotation are cleared before anything new is
//! painted. Clearing is best-effort: stale handles are logged and ignored.

use sift_host::{
  BufferId,
  EditorHost,
  HighlightOps,
};

use crate::{
  PreviewError,
  Previewer,
  controller::PreviewUi,
};

/// Highlight group for the cursor-line match.
const LINE_MATCH_GROUP: &str = "Search";

impl PreviewUi {
  /// Move the cursor to the descriptor's target line and reveal it.
  pub(crate) async fn jump<H>(&self, host: &H, previewer: &Previewer) -> Result<(), PreviewError>
  where
    H: EditorHost + ?Sized,
  {
    if let Some(line_nr) = previewer.line_nr {
      host.move_cursor(line_nr).await?;
      host.reveal_cursor().await?;
    }
    Ok(())
  }

  /// Replace the window's overlay state with this invocation's highlights.
  pub(crate) async fn apply_highlights<H>(
    &mut self,
    host: &H,
    previewer: &Previewer,
    bufnr: BufferId,
  ) -> Result<(), PreviewError>
  where
    H: EditorHost + ?Sized,
  {
    let Some(preview_win) = self.preview_win else {
      return Ok(());
    };

    if let Some(id) = self.match_ids.remove(&preview_win) {
      if let Err(err) = host.clear_match(preview_win, id).await {
        log::warn!("failed to clear stale line match {id}: {err}");
      }
    }
    if let Err(err) = host.clear_span_highlights(bufnr).await {
      log::warn!("failed to clear span highlights of buffer {bufnr}: {err}");
    }

    if let Some(line_nr) = previewer.line_nr {
      let id = host.add_line_match(preview_win, LINE_MATCH_GROUP, line_nr).await?;
      self.match_ids.insert(preview_win, id);
    }

    for span in &previewer.highlights {
      host.add_span_highlight(bufnr, span).await?;
    }

    Ok(())
  }
}
