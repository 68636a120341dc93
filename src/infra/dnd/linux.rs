//! Usage: Linux DND backends (notification daemons first, then desktop environments).

use super::command::{CommandRunner, HostProbe, ShellCommand};
use super::DndError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinuxDndBackend {
    SwayNc,
    Mako,
    Dunst,
    Hyprland,
    Gnome,
    Kde,
}

pub const PROBE_ORDER: [LinuxDndBackend; 6] = [
    LinuxDndBackend::SwayNc,
    LinuxDndBackend::Mako,
    LinuxDndBackend::Dunst,
    LinuxDndBackend::Hyprland,
    LinuxDndBackend::Gnome,
    LinuxDndBackend::Kde,
];

enum Detection {
    Binary(&'static str),
    Desktop(&'static str),
}

impl LinuxDndBackend {
    pub fn label(self) -> &'static str {
        match self {
            Self::SwayNc => "SwayNC",
            Self::Mako => "Mako",
            Self::Dunst => "Dunst",
            Self::Hyprland => "Hyprland",
            Self::Gnome => "GNOME",
            Self::Kde => "KDE",
        }
    }

    fn detection(self) -> Detection {
        match self {
            Self::SwayNc => Detection::Binary("swaync-client"),
            Self::Mako => Detection::Binary("makoctl"),
            Self::Dunst => Detection::Binary("dunstctl"),
            Self::Hyprland => Detection::Binary("hyprctl"),
            Self::Gnome => Detection::Desktop("GNOME"),
            Self::Kde => Detection::Desktop("KDE"),
        }
    }

    /// Desktop backends match on the desktop id only, for both enable and disable.
    fn is_detected(self, host: &dyn HostProbe) -> bool {
        match self.detection() {
            Detection::Binary(name) => host.has_binary(name),
            Detection::Desktop(id) => host
                .current_desktop()
                .is_some_and(|desktop| desktop_matches(&desktop, id)),
        }
    }

    pub fn command(self, enabled: bool) -> ShellCommand {
        match self {
            Self::SwayNc => {
                ShellCommand::new("swaync-client", [if enabled { "-dn" } else { "-df" }])
            }
            Self::Mako => ShellCommand::new(
                "makoctl",
                ["mode", if enabled { "-a" } else { "-r" }, "do-not-disturb"],
            ),
            Self::Dunst => ShellCommand::new(
                "dunstctl",
                ["set-paused", if enabled { "true" } else { "false" }],
            ),
            Self::Hyprland => ShellCommand::new(
                "hyprctl",
                [
                    "dispatch",
                    "notify",
                    "2",
                    if enabled {
                        "Do Not Disturb Enabled"
                    } else {
                        "Do Not Disturb Disabled"
                    },
                ],
            ),
            // show-banners is the inverse of DND.
            Self::Gnome => ShellCommand::new(
                "gsettings",
                [
                    "set",
                    "org.gnome.desktop.notifications",
                    "show-banners",
                    if enabled { "false" } else { "true" },
                ],
            ),
            Self::Kde => ShellCommand::new(
                "qdbus",
                [
                    "org.kde.plasmashell",
                    "/PlasmaShell",
                    "org.kde.PlasmaShell.evaluateScript",
                    if enabled {
                        "dndManager.enabled=true"
                    } else {
                        "dndManager.enabled=false"
                    },
                ],
            ),
        }
    }
}

/// `XDG_CURRENT_DESKTOP` is a colon-separated list, e.g. `ubuntu:GNOME`.
pub(super) fn desktop_matches(desktop: &str, id: &str) -> bool {
    let id = id.to_ascii_uppercase();
    desktop
        .split(':')
        .any(|part| part.trim().to_ascii_uppercase().contains(&id))
}

/// Tries `backends` in order; the first detected backend whose command succeeds wins.
pub(super) fn set_enabled(
    backends: &[LinuxDndBackend],
    enabled: bool,
    runner: &dyn CommandRunner,
    host: &dyn HostProbe,
) -> Result<&'static str, DndError> {
    let action = if enabled { "enable" } else { "disable" };

    for backend in backends.iter().copied() {
        if !backend.is_detected(host) {
            continue;
        }

        tracing::info!(backend = backend.label(), "{action} DND");
        match runner.run(&backend.command(enabled)) {
            Ok(()) => return Ok(backend.label()),
            Err(err) => {
                tracing::warn!(backend = backend.label(), "DND {action} failed: {err}");
            }
        }
    }

    tracing::warn!("could not detect a known notification daemon or desktop to {action} DND");
    Err(DndError::NoBackend)
}
