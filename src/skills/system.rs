use chrono::Local;
use rand::prelude::*;

use super::{contains_any, Context, Skill};
use crate::action::Action;

const STATUS_PHRASES: &[&str] = &[
    "All internal systems are nominal, {name}.",
    "Primary logic cores are stable. Connectivity is established at 100 percent.",
    "Environment is clear. Primary functions are at maximum capacity, {name}.",
    "Diagnostics indicate all modules are performing within optimal parameters.",
];

/// Greetings, identity, clock, and status lines. Shutdown phrases are NOT
/// handled here -- the engine checks those before any capability runs.
pub struct SystemSkill;

impl Skill for SystemSkill {
    fn name(&self) -> &'static str {
        "System"
    }

    fn description(&self) -> &'static str {
        "Core system operations: greetings, identity, time, and status."
    }

    fn keywords(&self) -> &[&str] {
        &["status", "time", "clock", "date", "who are you", "who is jarvis", "hello", "hi", "hey"]
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        let name = &ctx.user_name;

        if contains_any(command, &["hello", "hi ", "hey"]) || command == "hi" {
            return Some(Action::speak(format!(
                "Greetings, {name}. All systems are active and ready for your instruction."
            )));
        }

        if contains_any(command, &["who are you", "who is jarvis", "who you"]) {
            return Some(Action::speak(format!(
                "I am Jarvis, a personal autonomous intelligence. \
                 I am here to facilitate your primary workflows, {name}."
            )));
        }

        if contains_any(command, &["time", "clock", "date"]) {
            let now = Local::now().format("%I:%M %p");
            return Some(Action::speak(format!("The current time is {now}, {name}.")));
        }

        if command.contains("status") {
            let line = STATUS_PHRASES
                .choose(&mut rand::rng())
                .copied()
                .unwrap_or(STATUS_PHRASES[0]);
            return Some(Action::speak(line.replace("{name}", name)));
        }

        None
    }
}
