//! Terminal rendering: run a command and show its live output in the
//! preview window.

use sift_host::{
  BufferOps,
  EditorHost,
  PreviewWindowConfig,
  TerminalSpawn,
  WindowOps,
};

use crate::{
  ActionFlag,
  PreviewError,
  controller::PreviewUi,
};

impl PreviewUi {
  pub(crate) async fn preview_terminal<H>(
    &mut self,
    host: &H,
    cmds: &[String],
    config: &PreviewWindowConfig,
  ) -> Result<ActionFlag, PreviewError>
  where
    H: EditorHost + ?Sized,
  {
    let preview_win = match self.preview_win {
      Some(preview_win) => {
        // Each terminal invocation gets an isolated buffer.
        host.focus_window(preview_win).await?;
        host.create_scratch_buffer().await?;
        preview_win
      },
      None => {
        let preview_win = host.open_preview_window(config).await?;
        self.preview_win = Some(preview_win);
        preview_win
      },
    };

    host
      .spawn_terminal(cmds, preview_win)
      .await
      .map_err(PreviewError::TerminalSpawn)?;

    // Delete the previous terminal buffer only after the new one is
    // running, so the window is never briefly empty.
    if let Some(old) = self.terminal_buf {
      match host.buffer_exists(old).await {
        Ok(true) => match host.delete_buffer(old).await {
          Ok(()) => self.terminal_buf = None,
          Err(err) => log::error!("failed to delete previous terminal buffer {old}: {err}"),
        },
        Ok(false) => self.terminal_buf = None,
        Err(err) => log::error!("failed to check previous terminal buffer {old}: {err}"),
      }
    }
    self.terminal_buf = Some(host.current_buffer().await?);

    Ok(ActionFlag::Persist)
  }
}
