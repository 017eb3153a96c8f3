use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use super::{ExportSink, SinkError};

/// An external command that reads clipboard text from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardTool {
    name: String,
    program: String,
    args: Vec<String>,
}

impl ClipboardTool {
    /// Describe a tool invoked as `program args...`.
    pub fn new<I, S>(name: impl Into<String>, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Tool name for messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pipe `text` into the tool.
    ///
    /// Returns `Ok(false)` when the program is not installed.
    fn try_copy(&self, text: &str) -> Result<bool, String> {
        let mut child = match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.to_string()),
        };

        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = stdin.write_all(text.as_bytes())
        {
            // Close the pipe and reap the child before reporting.
            drop(stdin);
            let _ = child.kill();
            let _ = child.wait();
            return Err(e.to_string());
        }

        let status = child.wait().map_err(|e| e.to_string())?;
        if status.success() {
            Ok(true)
        } else {
            Err(format!("exited with {status}"))
        }
    }
}

/// Platform clipboard tools in priority order.
#[must_use]
pub fn platform_tools() -> Vec<ClipboardTool> {
    #[cfg(target_os = "macos")]
    {
        vec![ClipboardTool::new("pbcopy", "pbcopy", Vec::<String>::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            ClipboardTool::new("wl-copy", "wl-copy", Vec::<String>::new()),
            ClipboardTool::new("xclip", "xclip", ["-selection", "clipboard"]),
            ClipboardTool::new("xsel", "xsel", ["--clipboard", "--input"]),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// System clipboard writer.
///
/// Tries each tool in order and stops at the first that succeeds. Tools that
/// are not installed are skipped silently.
#[derive(Debug, Clone)]
pub struct Clipboard {
    tools: Vec<ClipboardTool>,
}

impl Clipboard {
    /// Clipboard using the platform's usual tools.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Clipboard using specific tools (for testing).
    #[must_use]
    pub fn with_tools(tools: Vec<ClipboardTool>) -> Self {
        Self { tools }
    }

    /// Configured tools.
    #[must_use]
    pub fn tools(&self) -> &[ClipboardTool] {
        &self.tools
    }

    /// Copy `text` with the first working tool.
    ///
    /// # Errors
    ///
    /// [`SinkError::NoClipboardTool`] when no tool is installed, otherwise
    /// the failure of the last tool that ran.
    pub fn copy_text(&self, text: &str) -> Result<(), SinkError> {
        let mut last_failure = None;

        for tool in &self.tools {
            match tool.try_copy(text) {
                Ok(true) => {
                    tracing::debug!(
                        tool = tool.name(),
                        bytes = text.len(),
                        "copied to clipboard"
                    );
                    return Ok(());
                }
                Ok(false) => continue,
                Err(message) => {
                    tracing::debug!(tool = tool.name(), %message, "clipboard tool failed");
                    last_failure = Some((tool, message));
                }
            }
        }

        match last_failure {
            Some((tool, message)) => Err(SinkError::ClipboardTool {
                tool: tool.name().to_string(),
                message,
            }),
            None => Err(SinkError::NoClipboardTool),
        }
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink for clipboard-only front ends. File saves are refused.
#[derive(Debug, Clone, Default)]
pub struct ClipboardSink {
    clipboard: Clipboard,
}

impl ClipboardSink {
    /// Sink over the platform clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink over a specific clipboard.
    #[must_use]
    pub fn with_clipboard(clipboard: Clipboard) -> Self {
        Self { clipboard }
    }
}

impl ExportSink for ClipboardSink {
    fn save_file(&mut self, _bytes: &[u8], _name: &str) -> Result<(), SinkError> {
        Err(SinkError::Unsupported("save files"))
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), SinkError> {
        self.clipboard.copy_text(text)
    }
}
