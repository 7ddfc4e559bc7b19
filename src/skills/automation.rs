use std::path::PathBuf;

use chrono::Local;
use tracing::warn;

use super::{contains_any, Context, Skill};
use crate::action::Action;
use crate::actuators::DesktopOp;

/// One-shot OS actions: screenshots, session lock, minimize-all,
/// hibernation, and display brightness.
pub struct AutomationSkill;

impl Skill for AutomationSkill {
    fn name(&self) -> &'static str {
        "Automation"
    }

    fn description(&self) -> &'static str {
        "System-level actions like screenshots and locking."
    }

    fn matches(&self, command: &str) -> bool {
        contains_any(
            command,
            &["screenshot", "capture screen", "lock computer", "lock the computer", "minimize all", "clear desktop", "hibernate", "suspend", "brightness"],
        )
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        let name = ctx.user_name.clone();

        if command.contains("screenshot") || command.contains("capture") {
            let stamp = Local::now().format("%Y%m%d_%H%M%S");
            let path = PathBuf::from("screenshots").join(format!("screenshot_{stamp}.png"));
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(err) = ctx.desktop.perform(DesktopOp::Screenshot(path)) {
                warn!(%err, "screenshot failed");
                return Some(Action::speak(format!(
                    "My capture subsystem hit a snag, {name}. No screenshot this time."
                )));
            }
            return Some(Action::speak(format!(
                "Screen capture saved to your screenshots folder, {name}."
            )));
        }

        if command.contains("lock") {
            if let Err(err) = ctx.desktop.perform(DesktopOp::LockSession) {
                warn!(%err, "lock failed");
            }
            return Some(Action::speak(format!(
                "Systems locked. Standing by for your return, {name}."
            )));
        }

        if command.contains("minimize") || command.contains("clear desktop") {
            if let Err(err) = ctx.desktop.perform(DesktopOp::MinimizeAll) {
                warn!(%err, "minimize failed");
            }
            return Some(Action::speak("Clearing the workspace now."));
        }

        if command.contains("hibernate") || command.contains("suspend") {
            if let Err(err) = ctx.desktop.perform(DesktopOp::Hibernate) {
                warn!(%err, "hibernate failed");
                return Some(Action::speak(format!(
                    "The power subsystem refused the hibernation request, {name}."
                )));
            }
            return Some(Action::speak(format!(
                "Entering hibernation, {name}. I'll be here when you wake the system."
            )));
        }

        if command.contains("brightness") {
            let op = if command.contains("down") || command.contains("lower") || command.contains("dim") {
                DesktopOp::BrightnessDown
            } else {
                DesktopOp::BrightnessUp
            };
            if let Err(err) = ctx.desktop.perform(op) {
                warn!(%err, "brightness adjustment failed");
            }
            return Some(Action::speak(format!("Adjusting display brightness, {name}.")));
        }

        None
    }
}
