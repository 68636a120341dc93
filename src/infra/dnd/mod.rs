//! Usage: Best-effort OS "Do Not Disturb" toggle (per-platform strategies, picked at runtime).

mod command;
mod linux;

pub use command::{CommandRunner, HostProbe, ShellCommand, SystemHost, SystemRunner};
pub use linux::{LinuxDndBackend, PROBE_ORDER};

use std::sync::Arc;

const WINDOWS_FOCUS_ASSIST_KEY: &str =
    r"HKCU:\Software\Microsoft\Windows\CurrentVersion\FocusAssist";
const MACOS_NOTIFICATION_CENTER_DOMAIN: &str = "com.apple.notificationcenterui";

#[derive(Debug, thiserror::Error)]
pub enum DndError {
    #[error("DND_UNSUPPORTED: unsupported platform: {0}")]
    Unsupported(String),
    #[error("DND_NO_BACKEND: no known notification daemon or desktop environment detected")]
    NoBackend,
    #[error("DND_SPAWN: failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("DND_COMMAND_FAILED: `{command}` exited with code {code:?}")]
    CommandFailed { command: String, code: Option<i32> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other(&'static str),
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &'static str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DndStrategy {
    /// Focus Assist registry value via PowerShell.
    WindowsFocusAssist,
    /// Notification Center preference + restart of the NotificationCenter process.
    MacNotificationCenter,
    /// Priority-ordered probe over known daemons and desktops.
    LinuxProbe(Vec<LinuxDndBackend>),
    Unsupported(&'static str),
}

impl DndStrategy {
    pub fn for_platform(platform: Platform, pinned: Option<LinuxDndBackend>) -> Self {
        match platform {
            Platform::Windows => Self::WindowsFocusAssist,
            Platform::MacOs => Self::MacNotificationCenter,
            Platform::Linux => Self::LinuxProbe(match pinned {
                Some(backend) => vec![backend],
                None => PROBE_ORDER.to_vec(),
            }),
            Platform::Other(os) => Self::Unsupported(os),
        }
    }

    fn set_enabled(
        &self,
        enabled: bool,
        runner: &dyn CommandRunner,
        host: &dyn HostProbe,
    ) -> Result<&'static str, DndError> {
        let action = if enabled { "enable" } else { "disable" };
        match self {
            Self::WindowsFocusAssist => {
                tracing::info!("{action} DND on Windows");
                runner.run(&windows_focus_assist_command(enabled))?;
                Ok("Windows Focus Assist")
            }
            Self::MacNotificationCenter => {
                tracing::info!("{action} DND on macOS");
                for cmd in macos_notification_center_commands(enabled) {
                    runner.run(&cmd)?;
                }
                Ok("macOS Notification Center")
            }
            Self::LinuxProbe(backends) => linux::set_enabled(backends, enabled, runner, host),
            Self::Unsupported(os) => {
                tracing::warn!(os = %os, "DND is not supported on this platform");
                Err(DndError::Unsupported(os.to_string()))
            }
        }
    }
}

fn windows_focus_assist_command(enabled: bool) -> ShellCommand {
    let key = WINDOWS_FOCUS_ASSIST_KEY;
    let script = if enabled {
        format!(
            "if (-not (Test-Path '{key}')) {{ New-Item -Path '{key}' -Force | Out-Null }}; \
             New-ItemProperty -Path '{key}' -Name 'FocusAssist' -Value 2 -PropertyType DWord -Force | Out-Null"
        )
    } else {
        // A missing key fails the call and surfaces as a non-zero exit.
        format!("Set-ItemProperty -Path '{key}' -Name 'FocusAssist' -Value 0 -ErrorAction Stop")
    };
    ShellCommand::new(
        "powershell",
        ["-NoProfile", "-NonInteractive", "-Command", script.as_str()],
    )
}

fn macos_notification_center_commands(enabled: bool) -> [ShellCommand; 2] {
    [
        ShellCommand::new(
            "defaults",
            [
                "-currentHost",
                "write",
                MACOS_NOTIFICATION_CENTER_DOMAIN,
                "doNotDisturb",
                "-boolean",
                if enabled { "true" } else { "false" },
            ],
        ),
        ShellCommand::new("killall", ["NotificationCenter"]),
    ]
}

/// Owns the platform strategy plus the process runner and host probe it uses.
pub struct DndController {
    strategy: DndStrategy,
    runner: Arc<dyn CommandRunner>,
    host: Arc<dyn HostProbe>,
}

impl DndController {
    pub fn new(
        strategy: DndStrategy,
        runner: Arc<dyn CommandRunner>,
        host: Arc<dyn HostProbe>,
    ) -> Self {
        Self {
            strategy,
            runner,
            host,
        }
    }

    pub fn for_current_platform(pinned: Option<LinuxDndBackend>) -> Self {
        Self::new(
            DndStrategy::for_platform(Platform::current(), pinned),
            Arc::new(SystemRunner),
            Arc::new(SystemHost),
        )
    }

    pub fn strategy(&self) -> &DndStrategy {
        &self.strategy
    }

    /// Applies the DND state and returns the label of the mechanism that took effect.
    /// Blocks until the external command exits.
    pub fn set_do_not_disturb(&self, enabled: bool) -> Result<&'static str, DndError> {
        self.strategy
            .set_enabled(enabled, self.runner.as_ref(), self.host.as_ref())
    }
}

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;
