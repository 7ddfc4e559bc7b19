use sysinfo::System;

use super::{contains_any, Context, Skill};
use crate::action::Action;

/// Hardware diagnostics. Direct-action tier: "check cpu" is an imperative,
/// not a question for the reasoner.
pub struct SystemHealthSkill;

impl Skill for SystemHealthSkill {
    fn name(&self) -> &'static str {
        "SystemHealth"
    }

    fn description(&self) -> &'static str {
        "Reports hardware load and verifies the voice subsystem."
    }

    fn keywords(&self) -> &[&str] {
        &["cpu", "ram", "memory", "storage", "diagnostic", "diagnostics", "hardware", "voice test", "audio check"]
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        let name = &ctx.user_name;

        if contains_any(command, &["voice test", "audio check"]) {
            return Some(Action::speak(format!(
                "Voice subsystem test in progress. If you can hear this, our primary \
                 TTS link is secure, {name}."
            )));
        }

        let mut sys = System::new_all();
        sys.refresh_all();
        let cpu = sys.global_cpu_usage();
        let ram = if sys.total_memory() > 0 {
            (sys.used_memory() as f64 / sys.total_memory() as f64) * 100.0
        } else {
            0.0
        };

        Some(Action::speak(format!(
            "Diagnostics complete, {name}. CPU load is at {cpu:.0} percent, and memory \
             utilization is at {ram:.0} percent. Audio drivers are currently active."
        )))
    }
}
