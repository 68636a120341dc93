//! Usage: Synchronous external command execution and host probing for DND strategies.

use super::DndError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const FALLBACK_BIN_DIR: &str = "/usr/bin";
const DESKTOP_ENV_KEY: &str = "XDG_CURRENT_DESKTOP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Runs one command to completion. Exit status 0 is success.
pub trait CommandRunner: Send + Sync {
    fn run(&self, cmd: &ShellCommand) -> Result<(), DndError>;
}

/// Answers "what is installed / which desktop is this" for backend detection.
pub trait HostProbe: Send + Sync {
    fn has_binary(&self, name: &str) -> bool;
    fn current_desktop(&self) -> Option<String>;
}

#[cfg(windows)]
fn hide_window_cmd(program: &str) -> Command {
    let mut cmd = Command::new(program);
    use std::os::windows::process::CommandExt;
    const CREATE_NO_WINDOW: u32 = 0x08000000;
    cmd.creation_flags(CREATE_NO_WINDOW);
    cmd
}

#[cfg(not(windows))]
fn hide_window_cmd(program: &str) -> Command {
    Command::new(program)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &ShellCommand) -> Result<(), DndError> {
        let output = hide_window_cmd(&cmd.program)
            .args(&cmd.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| DndError::Spawn {
                command: cmd.to_string(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !stderr.is_empty() {
            tracing::debug!(command = %cmd, stderr = %stderr, "command stderr");
        }
        Err(DndError::CommandFailed {
            command: cmd.to_string(),
            code: output.status.code(),
        })
    }
}

fn exe_names_for(cmd: &str) -> Vec<String> {
    #[cfg(windows)]
    {
        return vec![format!("{cmd}.exe"), cmd.to_string()];
    }
    #[cfg(not(windows))]
    {
        vec![cmd.to_string()]
    }
}

fn find_exe_in_dir(dir: &Path, names: &[String]) -> Option<PathBuf> {
    names.iter().map(|name| dir.join(name)).find(|p| p.is_file())
}

fn find_exe_in_path(names: &[String]) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path).find_map(|dir| find_exe_in_dir(&dir, names))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl HostProbe for SystemHost {
    fn has_binary(&self, name: &str) -> bool {
        let names = exe_names_for(name);
        find_exe_in_path(&names).is_some()
            || find_exe_in_dir(Path::new(FALLBACK_BIN_DIR), &names).is_some()
    }

    fn current_desktop(&self) -> Option<String> {
        std::env::var(DESKTOP_ENV_KEY)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
