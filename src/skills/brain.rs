use tracing::{debug, warn};

use super::{contains_any, contains_word, Context, Skill};
use crate::action::Action;
use crate::services::{LlmClient, SearchClient};

/// Words suggesting the answer depends on the world right now, so a live
/// lookup is worth the latency.
const SEARCH_TRIGGERS: &[&str] = &[
    "news", "weather", "latest", "who is", "what happened", "stock", "price",
    "current", "update", "today", "tomorrow",
];

/// Phrases stripped from the utterance before it is used as a search query.
const QUERY_STRIP: &[&str] = &[
    "jarvis", "tell me about", "what is", "do a search for", "google", "search for", "find out",
];

const APOLOGY: &str = "My apologies, Sir. My connection to the primary reasoning core is \
                       intermittent. I am however monitoring your environment and stand ready.";

/// The designated catch-all intelligence: combines the visual scene, current
/// activity, recent conversation, and (when warranted) a live search into a
/// prompt for the local reasoning service. Guards every external call and
/// degrades to a templated apology; it must always return an action.
pub struct BrainSkill {
    llm: LlmClient,
    search: SearchClient,
}

impl BrainSkill {
    pub fn new(llm: LlmClient, search: SearchClient) -> Self {
        Self { llm, search }
    }

    fn vision_report(ctx: &Context<'_>) -> String {
        let Some(vision) = ctx.vision else {
            return "Optic Status: offline".to_string();
        };
        let mut details = Vec::new();
        let objects = vision.detected_objects();
        if !objects.is_empty() {
            details.push(format!("Detected Objects: {}", objects.join(", ")));
        }
        if let Some(held) = vision.object_in_hand() {
            details.push(format!("Active Manipulation: User is holding a {held}"));
        }
        if let Some(emotion) = vision.emotion() {
            details.push(format!("User Facial Emotion: {emotion}"));
        }
        if details.is_empty() {
            "Optic Status: scanning".to_string()
        } else {
            format!("Optic Status: {}", details.join(" | "))
        }
    }

    fn activity_report(ctx: &Context<'_>) -> String {
        let app = ctx.memory.get_text("current_app");
        if app.is_empty() {
            "System: status nominal.".to_string()
        } else {
            let title = ctx.memory.get_text("window_title");
            format!("User Activity: currently using {app} ({title}).")
        }
    }

    fn search_context(&self, command: &str) -> String {
        if !contains_any(command, SEARCH_TRIGGERS) {
            return String::new();
        }

        let mut query = command.to_string();
        for phrase in QUERY_STRIP {
            query = query.replace(phrase, "");
        }
        let query = query.trim();
        if query.is_empty() {
            return String::new();
        }

        debug!(query, "consulting live search");
        match self.search.instant_answer(query) {
            Ok(snippets) if !snippets.is_empty() => {
                let lines: Vec<String> = snippets.iter().map(|s| format!("- {s}")).collect();
                format!("\nRecent real-world data:\n{}", lines.join("\n"))
            }
            Ok(_) => String::new(),
            Err(err) => {
                warn!(%err, "live search unavailable");
                String::new()
            }
        }
    }

    fn build_prompt(&self, command: &str, ctx: &Context<'_>) -> String {
        let vision_report = Self::vision_report(ctx);
        let activity_report = Self::activity_report(ctx);
        let search_context = self.search_context(command);

        let mut chat_log = String::new();
        for (speaker, message) in ctx.history.recent(5) {
            chat_log.push_str(&format!("{}: {}\n", speaker.as_str(), message));
        }

        format!(
            "You are JARVIS, a sophisticated, witty, proactive personal assistant.\n\
             [CURRENT ENVIRONMENT]:\n{vision_report}\n{activity_report}\n{search}\n\
             INSTRUCTIONS:\n\
             1. Address the user as '{name}'.\n\
             2. Be concise (max 2 sentences).\n\
             3. Use the environmental data naturally.\n\
             4. If live data is present, summarize the answer, don't just say you checked.\n\
             5. No emojis.\n\n\
             [CONVERSATION HISTORY]:\n{chat_log}\n\
             {name}: {command}\nJARVIS:",
            name = ctx.user_name,
            search = if search_context.is_empty() {
                "[Live data: not required for this request]"
            } else {
                &search_context
            },
        )
    }
}

impl Skill for BrainSkill {
    fn name(&self) -> &'static str {
        "Brain"
    }

    fn description(&self) -> &'static str {
        "Central intelligence: reasoning, lookup, and free-form replies."
    }

    fn keywords(&self) -> &[&str] {
        &[
            "why", "how", "what", "who", "tell me", "explain", "analyze", "think",
            "suggest", "opinion", "strategy", "help", "weather", "news", "price",
            "stock", "is it",
        ]
    }

    fn matches(&self, command: &str) -> bool {
        // Spoken arithmetic belongs to the math capability even when it is
        // phrased as a question.
        if command.chars().any(|c| c.is_ascii_digit())
            && contains_any(command, &["plus", "minus", "times", "divided", "calculate"])
        {
            return false;
        }
        self.keywords().iter().any(|kw| contains_word(command, kw))
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        let prompt = self.build_prompt(command, ctx);

        match self.llm.generate(&prompt) {
            Ok(answer) => Some(Action::speak(answer)),
            Err(err) => {
                warn!(%err, "reasoning core unreachable, degrading");
                Some(Action::speak(APOLOGY))
            }
        }
    }
}
