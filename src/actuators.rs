use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context as _, Result};
use tracing::info;

/// Media-related key presses the skills can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKey {
    VolumeUp,
    VolumeDown,
    MuteToggle,
    PlayPause,
    NextTrack,
    PrevTrack,
}

/// One OS-level operation. Skills describe what they want done; the
/// implementation decides how the host actually does it.
#[derive(Debug, Clone, PartialEq)]
pub enum DesktopOp {
    /// Launch a program by its shell command line.
    Launch(String),
    OpenUrl(String),
    OpenPath(PathBuf),
    Media(MediaKey),
    Screenshot(PathBuf),
    LockSession,
    MinimizeAll,
    Hibernate,
    BrightnessUp,
    BrightnessDown,
}

/// Narrow seam between the capabilities and the host desktop.
pub trait DesktopControl: Send + Sync {
    fn perform(&self, op: DesktopOp) -> Result<()>;
}

/// Process-spawning implementation. Fire-and-forget: children are detached
/// and never awaited, matching the launch semantics the assistant needs.
#[derive(Debug, Default)]
pub struct ShellDesktop;

impl ShellDesktop {
    pub fn new() -> Self {
        Self
    }

    fn spawn(&self, program: &str, args: &[&str]) -> Result<()> {
        Command::new(program)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;
        Ok(())
    }
}

impl DesktopControl for ShellDesktop {
    fn perform(&self, op: DesktopOp) -> Result<()> {
        info!(?op, "desktop action");
        match op {
            DesktopOp::Launch(cmdline) => self.spawn("sh", &["-c", &cmdline]),
            DesktopOp::OpenUrl(url) => self.spawn("xdg-open", &[&url]),
            DesktopOp::OpenPath(path) => {
                let shown = path.to_string_lossy().into_owned();
                self.spawn("xdg-open", &[&shown])
            }
            DesktopOp::Media(key) => match key {
                MediaKey::VolumeUp => {
                    self.spawn("pactl", &["set-sink-volume", "@DEFAULT_SINK@", "+5%"])
                }
                MediaKey::VolumeDown => {
                    self.spawn("pactl", &["set-sink-volume", "@DEFAULT_SINK@", "-5%"])
                }
                MediaKey::MuteToggle => {
                    self.spawn("pactl", &["set-sink-mute", "@DEFAULT_SINK@", "toggle"])
                }
                MediaKey::PlayPause => self.spawn("playerctl", &["play-pause"]),
                MediaKey::NextTrack => self.spawn("playerctl", &["next"]),
                MediaKey::PrevTrack => self.spawn("playerctl", &["previous"]),
            },
            DesktopOp::Screenshot(path) => {
                let shown = path.to_string_lossy().into_owned();
                self.spawn("gnome-screenshot", &["-f", &shown])
            }
            DesktopOp::LockSession => self.spawn("loginctl", &["lock-session"]),
            DesktopOp::MinimizeAll => self.spawn("wmctrl", &["-k", "on"]),
            DesktopOp::Hibernate => self.spawn("systemctl", &["hibernate"]),
            DesktopOp::BrightnessUp => self.spawn("brightnessctl", &["set", "+10%"]),
            DesktopOp::BrightnessDown => self.spawn("brightnessctl", &["set", "10%-"]),
        }
    }
}
