use rand::prelude::*;

/// Template buckets for the canned side of the personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCategory {
    Greeting,
    FocusStart,
    CoachSwitch,
    Thinking,
    SmallTalk,
}

const GREETING: &[&str] = &[
    "At your service, Sir. I've been monitoring the datastreams in your absence. Everything is exactly as you left it.",
    "Welcome back, Sir. It's been a while since our last session. I've kept the seat warm for you.",
    "System initialized. Good to see you, Sir. Shall we continue our work on the latest project?",
    "Hello, Sir. I've taken the liberty of optimizing the background tasks. We are green across the board.",
];

const FOCUS_START: &[&str] = &[
    "Engaging focus protocols, Sir. I'll make sure the rest of the world stays out of your way.",
    "Locked and loaded. I'm monitoring the digital perimeter now. Let's get some deep work done, shall we?",
    "Focus mode active. I'll filter out the distractions. Time waits for no one, Sir.",
];

const COACH_SWITCH: &[&str] = &[
    "Pardon me, Sir, but we seem to be task-switching a bit aggressively. Might I suggest picking a direction?",
    "Sir, you're drifting. I've logged a significant drop in focus. Shall I close the non-essential windows?",
    "Forgive the interruption, Sir, but your momentum is wavering. Let's get back to it, shall we?",
];

const THINKING: &[&str] = &[
    "Just a moment, Sir. I'm running a multi-threaded recursive analysis.",
    "Evaluating the logic flow now. Stand by.",
    "Processing... I'll have an assessment for you in a second, Sir.",
];

const SMALL_TALK: &[&str] = &[
    "I'm operating at peak efficiency, Sir. My neural networks are stable and my loyalty is unwavering.",
    "Better than a pile of circuits has any right to be, Sir. And how is the world outside the screen treating you?",
    "I'm at 100% capacity. Ready to conquer the digital frontier by your side, Sir.",
];

const INTRO_FRAGMENTS: &[&str] =
    &["As it happens,", "Actually,", "Interestingly enough,", "If I'm not mistaken,", "By all accounts,"];

const OUTRO_FRAGMENTS: &[&str] = &[
    ", wouldn't you say?",
    ", as per standard protocol.",
    ", of course.",
    ". I hope that suffices.",
];

/// Picks a phrase for a category and occasionally decorates it with an
/// intro or outro fragment for some conversational variance. Greetings are
/// left undecorated.
#[derive(Debug, Default, Clone)]
pub struct ResponseGenerator;

impl ResponseGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn get(&self, category: ResponseCategory) -> String {
        let options = match category {
            ResponseCategory::Greeting => GREETING,
            ResponseCategory::FocusStart => FOCUS_START,
            ResponseCategory::CoachSwitch => COACH_SWITCH,
            ResponseCategory::Thinking => THINKING,
            ResponseCategory::SmallTalk => SMALL_TALK,
        };

        let mut rng = rand::rng();
        let mut text = options
            .choose(&mut rng)
            .copied()
            .unwrap_or("Understood, Sir.")
            .to_string();

        if category != ResponseCategory::Greeting && rng.random::<f64>() < 0.25 {
            if rng.random::<bool>() {
                let head = INTRO_FRAGMENTS.choose(&mut rng).copied().unwrap_or_default();
                let mut chars = text.chars();
                if let Some(first) = chars.next() {
                    text = format!("{head} {}{}", first.to_lowercase(), chars.as_str());
                }
            } else {
                let tail = OUTRO_FRAGMENTS.choose(&mut rng).copied().unwrap_or_default();
                text = format!("{}{}", text.trim_end_matches('.'), tail);
            }
        }

        text
    }
}
