//! Buffer-content rendering: real sources (`Buffer`) and synthetic line
//! content (`NoFile`).
//!
//! Preview buffers are named deterministically from the descriptor and
//! reused by name: previewing the same source twice switches back to the
//! existing buffer instead of re-reading it, trading staleness for no
//! redundant I/O and no flicker. Highlights are per-invocation and are
//! re-applied even on the reuse path.

use sift_host::{
  BufferOps,
  EditorHost,
  FsOps,
  PreviewWindowConfig,
  WindowOps,
};

use crate::{
  ActionFlag,
  PreviewError,
  PreviewItem,
  Previewer,
  controller::PreviewUi,
  previewer::{
    BufferRef,
    PreviewerSource,
  },
};

/// Name prefix marking buffers owned by the preview controller.
const PREVIEW_BUFFER_PREFIX: &str = "sift://";

impl PreviewUi {
  pub(crate) async fn preview_buffer<H>(
    &mut self,
    host: &H,
    previewer: &Previewer,
    config: &PreviewWindowConfig,
    item: &PreviewItem,
  ) -> Result<ActionFlag, PreviewError>
  where
    H: EditorHost + ?Sized,
  {
    match &previewer.source {
      PreviewerSource::NoFile { contents } if contents.is_empty() => {
        return Ok(ActionFlag::None);
      },
      PreviewerSource::Buffer {
        expr: None,
        path: None,
      } => {
        return Ok(ActionFlag::None);
      },
      _ => {},
    }

    let bufname = preview_buffer_name(host, previewer, item).await?;
    let existing = host.listed_buffer_by_name(&bufname).await?;

    match self.preview_win {
      Some(preview_win) => host.focus_window(preview_win).await?,
      None => {
        self.preview_win = Some(host.open_preview_window(config).await?);
      },
    }

    let bufnr = match existing {
      None => {
        let bufnr = host.edit_buffer(&bufname).await?;
        let text = preview_contents(host, previewer).await?;
        // A real source stays a normal buffer; synthetic content becomes a
        // scratch buffer that can never be written out.
        if matches!(previewer.source, PreviewerSource::NoFile { .. }) {
          host.set_scratch(bufnr).await?;
        }
        host.replace_lines(bufnr, &text).await?;
        match (&previewer.syntax, &previewer.source) {
          (Some(syntax), _) => host.set_syntax(bufnr, syntax).await?,
          (None, PreviewerSource::Buffer { .. }) => host.detect_filetype(bufnr).await?,
          (None, _) => {},
        }
        bufnr
      },
      Some(bufnr) => {
        // Reuse path: switch, don't re-render.
        host.switch_to_buffer(bufnr).await?;
        bufnr
      },
    };

    self.apply_highlights(host, previewer, bufnr).await?;
    Ok(ActionFlag::Persist)
  }
}

/// Stable per-source buffer name, the reuse key.
async fn preview_buffer_name<H>(
  host: &H,
  previewer: &Previewer,
  item: &PreviewItem,
) -> Result<String, PreviewError>
where
  H: EditorHost + ?Sized,
{
  let name = match &previewer.source {
    PreviewerSource::Buffer { expr: Some(expr), .. } => match expr {
      BufferRef::Id(bufnr) => host.buffer_name(*bufnr).await?,
      BufferRef::Name(name) => name.clone(),
    },
    PreviewerSource::Buffer { path: Some(path), .. } => path.display().to_string(),
    // Rejected above: a buffer source with neither expr nor path.
    PreviewerSource::Buffer { .. } => String::new(),
    _ => item.word.clone(),
  };
  Ok(format!("{PREVIEW_BUFFER_PREFIX}{name}"))
}

/// Lines to render for a freshly created preview buffer.
async fn preview_contents<H>(
  host: &H,
  previewer: &Previewer,
) -> Result<Vec<String>, PreviewError>
where
  H: EditorHost + ?Sized,
{
  match &previewer.source {
    PreviewerSource::Buffer { expr, path } => {
      if let Some(bufnr) = listed_source(host, expr.as_ref()).await? {
        // The source is open in the editor: read its live lines rather than
        // whatever is on disk.
        Ok(host.buffer_lines(bufnr).await?)
      } else if let Some(path) = path {
        let bytes = host.read_file(path).await?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(text.split('\n').map(str::to_string).collect())
      } else {
        Ok(Vec::new())
      }
    },
    PreviewerSource::NoFile { contents } => Ok(contents.clone()),
    PreviewerSource::Terminal { .. } => Ok(Vec::new()),
  }
}

async fn listed_source<H>(
  host: &H,
  expr: Option<&BufferRef>,
) -> Result<Option<sift_host::BufferId>, PreviewError>
where
  H: EditorHost + ?Sized,
{
  match expr {
    Some(BufferRef::Id(bufnr)) => {
      if host.is_listed(*bufnr).await? {
        Ok(Some(*bufnr))
      } else {
        Ok(None)
      }
    },
    Some(BufferRef::Name(name)) => Ok(host.listed_buffer_by_name(name).await?),
    None => Ok(None),
  }
}
