//! The preview state machine.
//!
//! One [`PreviewUi`] exists per finder session and is passed explicitly to
//! every preview operation; there is no process-wide instance. It tracks the
//! single preview window, the buffers it created, the last previewed target,
//! and one line-match overlay per window. At most one preview operation is
//! logically in flight at a time: the host serializes editor commands, and
//! `&mut self` makes overlapping calls from one session unrepresentable.

use std::collections::{
  HashMap,
  HashSet,
};

use serde_json::Value;
use sift_host::{
  BufferId,
  BufferOps,
  EditorHost,
  MatchId,
  PreviewWindowConfig,
  WindowId,
  WindowOps,
};

use crate::{
  ActionFlag,
  PreviewError,
  PreviewItem,
  PreviewerResolver,
  previewer::PreviewerSource,
};

pub struct PreviewUi {
  /// The one preview window, if open.
  pub(crate) preview_win:      Option<WindowId>,
  /// Last terminal buffer created, retained only until its replacement is
  /// running so it can be deleted without flicker.
  pub(crate) terminal_buf:     Option<BufferId>,
  /// Action payload of the last successfully previewed item.
  pub(crate) previewed_target: Value,
  /// At most one live line-match per window.
  pub(crate) match_ids:        HashMap<WindowId, MatchId>,
  /// Every buffer this controller created, for the teardown sweep.
  pub(crate) preview_bufs:     HashSet<BufferId>,
}

impl PreviewUi {
  pub fn new() -> Self {
    Self {
      preview_win:      None,
      terminal_buf:     None,
      previewed_target: Value::Null,
      match_ids:        HashMap::new(),
      preview_bufs:     HashSet::new(),
    }
  }

  /// Whether the preview window is currently open.
  pub fn is_open(&self) -> bool {
    self.preview_win.is_some()
  }

  /// Payload of the last successfully previewed item. `Null` until the
  /// first successful render; deliberately not reset by [`close`].
  ///
  /// [`close`]: Self::close
  pub fn previewed_target(&self) -> &Value {
    &self.previewed_target
  }

  /// Number of preview buffers still tracked for cleanup.
  pub fn tracked_buffers(&self) -> usize {
    self.preview_bufs.len()
  }

  /// Preview `item` in the dedicated preview window.
  ///
  /// Requesting the item whose action payload structurally equals the one
  /// already previewed closes the window instead (toggle). Items that
  /// resolve to nothing, or to unusable content, are a silent no-op. On
  /// success the caller's window focus is restored and the new target is
  /// recorded.
  pub async fn preview<H, R>(
    &mut self,
    host: &H,
    resolver: &R,
    config: &PreviewWindowConfig,
    item: &PreviewItem,
    action_params: &Value,
  ) -> Result<ActionFlag, PreviewError>
  where
    H: EditorHost + ?Sized,
    R: PreviewerResolver + ?Sized,
  {
    let return_window = host.current_window().await?;

    // Close if the target is the same as the previous one.
    if self.preview_win.is_some() && item.action == self.previewed_target {
      self.close(host).await?;
      return Ok(ActionFlag::None);
    }

    let Some(previewer) = resolver.resolve(item, action_params).await else {
      return Ok(ActionFlag::None);
    };

    let flag = match &previewer.source {
      PreviewerSource::Terminal { cmds } => self.preview_terminal(host, cmds, config).await?,
      PreviewerSource::Buffer { .. } | PreviewerSource::NoFile { .. } => {
        self.preview_buffer(host, &previewer, config, item).await?
      },
    };
    if flag == ActionFlag::None {
      return Ok(flag);
    }

    if !matches!(previewer.source, PreviewerSource::Terminal { .. }) {
      self.jump(host, &previewer).await?;
    }

    let bufnr = host.current_buffer().await?;
    self.preview_bufs.insert(bufnr);
    self.previewed_target = item.action.clone();
    host.focus_window(return_window).await?;

    Ok(ActionFlag::Persist)
  }

  /// Close the preview window and sweep every tracked buffer. Idempotent,
  /// and safe against a window that was already closed behind our back:
  /// stale-window failures are logged and never abort the sweep.
  ///
  /// The remembered target is kept: the toggle comparison also requires an
  /// open window, so closing and previewing the same item again renders it
  /// rather than toggling.
  pub async fn close<H>(&mut self, host: &H) -> Result<(), PreviewError>
  where
    H: EditorHost + ?Sized,
  {
    if let Some(preview_win) = self.preview_win.take() {
      match host.current_window().await {
        Ok(save) => {
          match host.focus_window(preview_win).await {
            Ok(()) => {
              if let Err(err) = host.close_window(preview_win).await {
                log::warn!("failed to close preview window {preview_win}: {err}");
              }
            },
            Err(err) => log::warn!("failed to focus preview window {preview_win}: {err}"),
          }
          if let Err(err) = host.focus_window(save).await {
            log::warn!("failed to restore window focus to {save}: {err}");
          }
        },
        Err(err) => log::warn!("failed to capture current window: {err}"),
      }
    }

    // Best-effort sweep: a buffer that refuses to die must not strand the
    // rest of the set.
    for bufnr in std::mem::take(&mut self.preview_bufs) {
      match host.is_listed(bufnr).await {
        Ok(true) => {
          if let Err(err) = host.delete_buffer(bufnr).await {
            log::warn!("failed to delete preview buffer {bufnr}: {err}");
          }
        },
        Ok(false) => {},
        Err(err) => log::warn!("failed to check preview buffer {bufnr}: {err}"),
      }
    }

    Ok(())
  }
}

impl Default for PreviewUi {
  fn default() -> Self {
    Self::new()
  }
}
