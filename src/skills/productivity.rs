use tracing::warn;

use super::{contains_any, Context, Skill};
use crate::action::Action;
use crate::personality::ResponseCategory;
use crate::state::SessionState;

/// Focus sessions and activity reporting.
pub struct ProductivitySkill;

impl Skill for ProductivitySkill {
    fn name(&self) -> &'static str {
        "Productivity"
    }

    fn description(&self) -> &'static str {
        "Manages focus sessions and summarizes tracked activity."
    }

    fn matches(&self, command: &str) -> bool {
        contains_any(
            command,
            &["focus", "deep work", "work", "stop mode", "break", "idle", "status report", "how is my day", "productivity"],
        )
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        let name = ctx.user_name.clone();

        if contains_any(command, &["status report", "how is my day", "productivity"]) {
            let summary = match ctx.db.activity_summary() {
                Ok(rows) => rows,
                Err(err) => {
                    warn!(%err, "activity summary query failed");
                    Vec::new()
                }
            };
            if summary.is_empty() {
                return Some(Action::speak(format!(
                    "I don't have enough data yet to compile a full report, {name}. \
                     We should begin monitoring your focus sessions."
                )));
            }
            let top_app = summary[0].app_name.clone();
            let total_seconds: f64 = summary.iter().map(|row| row.total_duration).sum();
            let minutes = (total_seconds / 60.0) as i64;
            return Some(Action::speak(format!(
                "Report for today, {name}. Your primary activity has been {top_app}. \
                 I have logged a total of {minutes} minutes of active usage across all applications."
            )));
        }

        if contains_any(command, &["focus", "deep work", "work"]) {
            ctx.state.transition(SessionState::FocusMode);
            // Reset the distraction counter for the fresh session.
            ctx.memory.set("switch_count", 0);
            let line = ctx.personality.get(ResponseCategory::FocusStart);
            return Some(Action::speak(line));
        }

        if contains_any(command, &["stop", "break", "idle"]) {
            ctx.state.transition(SessionState::Idle);
            return Some(Action::speak(format!(
                "I have deactivated focus mode. You are now in idle state, {name}."
            )));
        }

        None
    }
}
