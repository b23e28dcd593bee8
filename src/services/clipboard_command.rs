use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Fallback clipboard that pipes text into an external clipboard utility.
///
/// Candidates are tried in order; a candidate whose program is not
/// installed is skipped. The first one that starts decides the outcome.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    commands: Vec<Vec<String>>,
}

impl CommandClipboard {
    /// Use a single user-configured command (program followed by arguments).
    pub fn with_command(argv: Vec<String>) -> Self {
        Self { commands: vec![argv] }
    }

    /// Clipboard utilities commonly shipped on this platform.
    pub fn platform_default() -> Self {
        Self { commands: platform_commands() }
    }

    pub fn commands(&self) -> &[Vec<String>] {
        &self.commands
    }
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

#[cfg(target_os = "macos")]
fn platform_commands() -> Vec<Vec<String>> {
    vec![argv(&["pbcopy"])]
}

// clip decodes stdin with the console code page, so non-ASCII text such as
// the emoji headers can arrive mangled; arboard goes first on Windows.
#[cfg(windows)]
fn platform_commands() -> Vec<Vec<String>> {
    vec![argv(&["clip"])]
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_commands() -> Vec<Vec<String>> {
    let mut commands = Vec::new();
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        commands.push(argv(&["wl-copy"]));
    }
    commands.push(argv(&["xclip", "-selection", "clipboard"]));
    commands.push(argv(&["xsel", "--clipboard", "--input"]));
    commands
}

impl ClipboardWriter for CommandClipboard {
    fn name(&self) -> &'static str {
        "command"
    }

    fn is_available(&self) -> bool {
        self.commands.iter().any(|argv| !argv.is_empty())
    }

    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        let mut missing = Vec::new();

        for argv in &self.commands {
            let Some((program, args)) = argv.split_first() else {
                continue;
            };

            let child = match Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                // utilities like xclip leave a daemon holding inherited pipes
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => child,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(program = %program, "clipboard command not installed");
                    missing.push(program.clone());
                    continue;
                }
                Err(e) => {
                    return Err(AppError::ClipboardError(format!(
                        "failed to start '{}': {}",
                        program, e
                    )));
                }
            };

            return feed(SpawnedHolder::new(child), program, text);
        }

        Err(AppError::ClipboardError(format!(
            "no clipboard command found (tried: {})",
            missing.join(", ")
        )))
    }
}

fn feed(mut holder: SpawnedHolder, program: &str, text: &str) -> Result<(), AppError> {
    let mut stdin = holder
        .stdin()
        .ok_or_else(|| AppError::ClipboardError(format!("'{}' has no stdin", program)))?;
    stdin.write_all(text.as_bytes()).map_err(|e| {
        AppError::ClipboardError(format!("failed to write to '{}': {}", program, e))
    })?;
    // closing stdin signals end of input
    drop(stdin);

    let status = holder
        .finish()
        .map_err(|e| AppError::ClipboardError(format!("failed to wait for '{}': {}", program, e)))?;
    if status.success() {
        debug!(program = %program, bytes = text.len(), "copied via clipboard command");
        Ok(())
    } else {
        Err(AppError::ClipboardError(format!("'{}' exited with {}", program, status)))
    }
}

/// Exclusively owned clipboard child process.
///
/// Dropping an unfinished holder kills and reaps the process, so every
/// early return releases it.
struct SpawnedHolder {
    child: Option<Child>,
}

impl SpawnedHolder {
    fn new(child: Child) -> Self {
        Self { child: Some(child) }
    }

    fn stdin(&mut self) -> Option<ChildStdin> {
        self.child.as_mut().and_then(|child| child.stdin.take())
    }

    fn finish(mut self) -> io::Result<ExitStatus> {
        match self.child.take() {
            Some(mut child) => child.wait(),
            None => Err(io::Error::other("clipboard process already released")),
        }
    }
}

impl Drop for SpawnedHolder {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
