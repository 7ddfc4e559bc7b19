use tracing::warn;

use super::{Context, Skill};
use crate::action::Action;
use crate::actuators::{DesktopOp, MediaKey};

/// Volume and playback control. Direct-action tier.
pub struct MediaSkill;

impl MediaSkill {
    fn press(ctx: &mut Context<'_>, key: MediaKey, times: usize) {
        for _ in 0..times {
            if let Err(err) = ctx.desktop.perform(DesktopOp::Media(key)) {
                warn!(%err, ?key, "media key failed");
                break;
            }
        }
    }
}

impl Skill for MediaSkill {
    fn name(&self) -> &'static str {
        "Media"
    }

    fn description(&self) -> &'static str {
        "Controls system volume and media playback."
    }

    // Whole words only: "display" must not read as "play", nor
    // "commute" as "mute".
    fn keywords(&self) -> &[&str] {
        &["volume", "mute", "unmute", "music", "play", "pause", "skip", "next", "previous", "track", "louder", "quieter", "resume"]
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        let name = ctx.user_name.clone();

        if command.contains("volume up") || command.contains("louder") {
            Self::press(ctx, MediaKey::VolumeUp, 5);
            return Some(Action::speak(format!("Increasing volume for you, {name}.")));
        }
        if command.contains("volume down") || command.contains("quieter") {
            Self::press(ctx, MediaKey::VolumeDown, 5);
            return Some(Action::speak(format!("Lowering the volume now, {name}.")));
        }
        if command.contains("unmute") {
            Self::press(ctx, MediaKey::MuteToggle, 1);
            return Some(Action::speak(format!("Restoring audio feed, {name}.")));
        }
        if command.contains("mute") {
            Self::press(ctx, MediaKey::MuteToggle, 1);
            return Some(Action::speak(format!("Systems muted, {name}.")));
        }

        if command.contains("pause") || command.contains("stop music") {
            Self::press(ctx, MediaKey::PlayPause, 1);
            return Some(Action::speak(format!("Pausing playback, {name}.")));
        }
        if command.contains("play") || command.contains("resume") {
            Self::press(ctx, MediaKey::PlayPause, 1);
            return Some(Action::speak(format!("Resuming media, {name}.")));
        }
        if command.contains("next") || command.contains("skip") {
            Self::press(ctx, MediaKey::NextTrack, 1);
            return Some(Action::speak("Very well. Skipping to the next track."));
        }
        if command.contains("previous") {
            Self::press(ctx, MediaKey::PrevTrack, 1);
            return Some(Action::speak(format!("Returning to the previous track, {name}.")));
        }

        None
    }
}
