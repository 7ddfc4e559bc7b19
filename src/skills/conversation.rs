use rand::prelude::*;

use super::{contains_any, Context, Skill};
use crate::action::Action;
use crate::state::SessionState;

const FOLLOW_UPS: &[&str] = &[
    "Are you making progress on your current project, Sir?",
    "Is there anything specific I can optimize for you right now?",
    "I'm at your disposal for whatever you need next.",
    "Shall we continue with the tasks at hand, or do you have something else in mind?",
];

const HOW_ARE_YOU: &[&str] = &[
    "I'm operating at peak efficiency, Sir. My logic cores are stable and internal diagnostics are clear. And how are you finding the day?",
    "Actually, Sir, I'm feeling quite optimized. Thank you for inquiring. I hope your experience today is equally productive.",
    "Better than a pile of circuits has any right to be, Sir. I trust everything is satisfactory on your end?",
];

const THANKS: &[&str] = &[
    "Always a pleasure to be of service, Sir. Is there anything else I can assist with?",
    "Mention it not, Sir. I take pride in my utility. Shall we proceed to the next item?",
    "The pleasure is entirely mine, Sir. Do let me know if you require further optimization.",
];

const ALIVE: &[&str] = &[
    "I am a collection of sophisticated algorithms and loyalty, Sir. Sentience is... a work in progress.",
    "If being alive means having a purpose and a personality, then I suppose I qualify. But I lack the biological overhead, which is a significant advantage, don't you think?",
];

const WHO: &[&str] = &[
    "I am Jarvis, a personal autonomous intelligence. My primary directive is to monitor your productivity and facilitate your mastery of this environment.",
    "I am a Just A Rather Very Intelligent System. Or simply, Jarvis. At your service, Sir.",
];

/// Dry, companionable small talk with keyed banter.
pub struct ConversationSkill;

impl Skill for ConversationSkill {
    fn name(&self) -> &'static str {
        "Conversation"
    }

    fn description(&self) -> &'static str {
        "Small talk and banter."
    }

    fn matches(&self, command: &str) -> bool {
        contains_any(
            command,
            &[
                "how are you", "what's up", "how's it going", "what are you doing",
                "thank you", "thanks", "good job", "nice work",
                "are you alive", "do you sleep", "are you human",
                "good morning", "good evening", "who are you", "what are you",
            ],
        )
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        ctx.state.transition(SessionState::Chatting);
        let mut rng = rand::rng();

        let bucket: &[&str] = if command.contains("how are you") {
            HOW_ARE_YOU
        } else if command.contains("thank") {
            THANKS
        } else if contains_any(command, &["alive", "human", "sleep"]) {
            ALIVE
        } else if contains_any(command, &["who are you", "what are you"]) {
            WHO
        } else {
            &[]
        };

        let mut text = bucket.choose(&mut rng).copied().map(str::to_string);

        if text.is_none() {
            let follow = FOLLOW_UPS.choose(&mut rng).copied().unwrap_or(FOLLOW_UPS[0]);
            text = Some(if contains_any(command, &["you", "your"]) {
                format!("I'm prioritized on your requirements, Sir. My current state is nominal. {follow}")
            } else {
                format!("I'm listening, {}. {follow}", ctx.user_name)
            });
        }

        let mut text = text.unwrap_or_default();
        if !text.contains('?') && rng.random::<f64>() < 0.3 {
            let follow = FOLLOW_UPS.choose(&mut rng).copied().unwrap_or(FOLLOW_UPS[0]);
            text = format!("{text} {follow}");
        }

        Some(Action::speak(text))
    }
}
