use rand::prelude::*;

use super::{Context, Skill};
use crate::action::Action;
use crate::state::SessionState;

const JOKES: &[&str] = &[
    "Why did the developer go broke? Because he used up all his cache.",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "How many programmers does it take to change a light bulb? None, it's a hardware problem.",
    "There are only 10 kinds of people: those who understand binary, and those who don't.",
    "Why do Java programmers have to wear glasses? Because they don't C#.",
];

pub struct FunSkill;

impl Skill for FunSkill {
    fn name(&self) -> &'static str {
        "Fun"
    }

    fn description(&self) -> &'static str {
        "Humor on request."
    }

    fn keywords(&self) -> &[&str] {
        &["joke", "funny", "laugh", "humour", "humor"]
    }

    fn execute(&self, _command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        ctx.state.transition(SessionState::Chatting);
        let joke = JOKES.choose(&mut rand::rng()).copied().unwrap_or(JOKES[0]);
        Some(Action::speak(format!("A little levity? Very well. {joke}")))
    }
}
