use tracing::warn;

use super::{contains_any, Context, Skill};
use crate::action::Action;
use crate::actuators::{DesktopOp, MediaKey};
use crate::state::SessionState;

/// Named multi-step routines ("protocol deep work", "protocol zero").
/// Always produces an answer once it matches; an unknown protocol gets a
/// teach-me reply instead of silence.
pub struct ProtocolSkill;

impl ProtocolSkill {
    fn run_ops(ctx: &mut Context<'_>, ops: Vec<DesktopOp>) {
        for op in ops {
            if let Err(err) = ctx.desktop.perform(op) {
                warn!(%err, "protocol step failed");
            }
        }
    }
}

impl Skill for ProtocolSkill {
    fn name(&self) -> &'static str {
        "Protocol"
    }

    fn description(&self) -> &'static str {
        "Executes multi-step desktop routines."
    }

    fn matches(&self, command: &str) -> bool {
        command.contains("protocol")
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        let name = ctx.user_name.clone();

        if contains_any(command, &["deep work", "development"]) {
            ctx.state.transition(SessionState::FocusMode);
            let mut ops = vec![
                DesktopOp::Launch("google-chrome".to_string()),
                DesktopOp::Launch("code .".to_string()),
            ];
            ops.extend(std::iter::repeat(DesktopOp::Media(MediaKey::VolumeDown)).take(10));
            Self::run_ops(ctx, ops);
            return Some(Action::speak(format!(
                "Protocol Deep Work engaged. Volume is minimized and your development \
                 environment is initializing. Good luck, {name}."
            )));
        }

        if contains_any(command, &["house party", "relax"]) {
            let mut ops = vec![DesktopOp::Launch("spotify".to_string())];
            ops.extend(std::iter::repeat(DesktopOp::Media(MediaKey::VolumeUp)).take(10));
            Self::run_ops(ctx, ops);
            return Some(Action::speak(format!(
                "Engaging relaxation protocols. Spotify is initializing and audio gain \
                 is being boosted. I'll be here if you need anything else, {name}."
            )));
        }

        if contains_any(command, &["zero", "clean slate"]) {
            Self::run_ops(ctx, vec![DesktopOp::MinimizeAll]);
            return Some(Action::speak(format!(
                "Protocol Zero initiated. Workspace cleared. Standing by for fresh \
                 instructions, {name}."
            )));
        }

        if command.contains("diagnostic") {
            return Some(Action::speak(format!(
                "Full system sweep complete. Power levels nominal. Perception layers \
                 at 100 percent. We are green across the board, {name}."
            )));
        }

        Some(Action::speak(format!(
            "I'm sorry {name}, I don't have that specific protocol in my database yet. \
             Would you like to teach it to me?"
        )))
    }
}
