//! Clipboard sink backed by an external command.
//!
//! The command is started once with a piped stdin; rendered rows are written
//! straight into that pipe as they are produced.

use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard command available on this platform; use --stdout or --clipboard-command")]
    Unavailable,
    #[error("failed to start clipboard command `{0}`: {1}")]
    Spawn(String, io::Error),
    #[error("clipboard command `{0}` failed with status {1}")]
    Failed(String, ExitStatus),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Returns the platform clipboard command that accepts `text/html`.
#[cfg(target_os = "linux")]
pub const fn default_command() -> Option<&'static str> {
    Some("xclip -t text/html -selection clipboard -i")
}

/// Returns None on platforms without a known HTML-capable clipboard command.
#[cfg(not(target_os = "linux"))]
pub const fn default_command() -> Option<&'static str> {
    None
}

/// A running clipboard command whose stdin receives the HTML.
pub struct ClipboardSink {
    command: String,
    child: Child,
    stdin: Option<ChildStdin>,
}

impl ClipboardSink {
    /// Starts `command` through the platform shell.
    pub fn spawn(command: &str) -> Result<Self, ClipboardError> {
        let mut cmd = if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(command);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(command);
            c
        };

        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());

        let mut child = cmd
            .spawn()
            .map_err(|e| ClipboardError::Spawn(command.to_string(), e))?;
        let stdin = child.stdin.take();

        Ok(Self {
            command: command.to_string(),
            child,
            stdin,
        })
    }

    /// Closes the pipe and waits for the command to exit.
    pub fn finish(mut self) -> Result<(), ClipboardError> {
        drop(self.stdin.take());
        let status = self.child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Failed(self.command.clone(), status))
        }
    }

    fn pipe(&mut self) -> io::Result<&mut ChildStdin> {
        self.stdin
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "clipboard pipe is closed"))
    }
}

impl Write for ClipboardSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pipe()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.pipe()?.flush()
    }
}

impl Drop for ClipboardSink {
    fn drop(&mut self) {
        if self.stdin.take().is_some() {
            let _ = self.child.wait();
        }
    }
}
