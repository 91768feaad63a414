//! Terminal attachment, abstracted over the two known host call shapes.
//!
//! Hosts agree on what a terminal preview means (run this command, show its
//! live output in the current window) but not on how the call is phrased:
//! embedded-terminal hosts take the command list alone, job-control hosts
//! take the command list plus per-call options. The render path only sees
//! [`TerminalSpawn`]; the embedder picks one of the two adapters at startup.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{
  Value,
  json,
};

use crate::WindowId;

/// Raw command channel into the editor process.
///
/// The lowest-level surface the adapters need: a named call with positional
/// JSON arguments, answered by the host.
#[async_trait]
pub trait CommandChannel: Send + Sync {
  async fn call(&self, method: &str, args: Vec<Value>) -> Result<Value>;
}

/// Capability to run a command as an interactive terminal attached to a
/// window. The window must already be focused when this is called.
#[async_trait]
pub trait TerminalSpawn: Send + Sync {
  async fn spawn_terminal(&self, cmds: &[String], window: WindowId) -> Result<()>;
}

/// Per-call options accepted by job-control hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSpawnOptions {
  /// Kill the process when its window is closed instead of waiting for it.
  pub kill_on_close: bool,
}

impl Default for JobSpawnOptions {
  fn default() -> Self {
    Self {
      kill_on_close: true,
    }
  }
}

/// Embedded-terminal call shape: the command list alone, attached to the
/// current window implicitly.
pub struct EmbeddedTerminalSpawn<C> {
  channel: C,
}

impl<C> EmbeddedTerminalSpawn<C> {
  pub fn new(channel: C) -> Self {
    Self { channel }
  }
}

#[async_trait]
impl<C: CommandChannel> TerminalSpawn for EmbeddedTerminalSpawn<C> {
  async fn spawn_terminal(&self, cmds: &[String], _window: WindowId) -> Result<()> {
    self.channel.call("termopen", vec![json!(cmds)]).await?;
    Ok(())
  }
}

/// Job-control call shape: command list plus options, pinned to the current
/// window via `curwin`.
pub struct JobTerminalSpawn<C> {
  channel: C,
  options: JobSpawnOptions,
}

impl<C> JobTerminalSpawn<C> {
  pub fn new(channel: C, options: JobSpawnOptions) -> Self {
    Self { channel, options }
  }
}

#[async_trait]
impl<C: CommandChannel> TerminalSpawn for JobTerminalSpawn<C> {
  async fn spawn_terminal(&self, cmds: &[String], _window: WindowId) -> Result<()> {
    let mut options = json!({ "curwin": true });
    if self.options.kill_on_close {
      options["term_kill"] = json!("kill");
    }
    self.channel.call("term_start", vec![json!(cmds), options]).await?;
    Ok(())
  }
}
