use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use rand::prelude::*;
use tracing::warn;

use super::{Context, Skill};
use crate::action::Action;
use crate::actuators::DesktopOp;

/// Search verbs and phrases, longest first so the more specific phrasing
/// wins when extracting the subject.
const SEARCH_VERBS: &[&str] = &[
    "perform a search on",
    "do a search for",
    "tell me about",
    "information on",
    "search for",
    "find out",
    "research",
    "lookup",
    "google",
    "search",
    "who is",
    "what is",
];

/// Opens a browser search for the spoken subject.
pub struct WebSearchSkill;

impl WebSearchSkill {
    fn extract_subject(command: &str) -> String {
        let mut query = command.replace("jarvis", "");
        let query_trimmed = query.trim().to_string();
        query = query_trimmed;

        for verb in SEARCH_VERBS {
            if let Some(rest) = query.strip_prefix(verb) {
                query = rest.trim().to_string();
                break;
            }
            if let Some((_, rest)) = query.split_once(verb) {
                query = rest.trim().to_string();
                break;
            }
        }

        for filler in ["the ", "a ", "an ", "some ", "about "] {
            if let Some(rest) = query.strip_prefix(filler) {
                query = rest.to_string();
                break;
            }
        }
        query
    }
}

impl Skill for WebSearchSkill {
    fn name(&self) -> &'static str {
        "WebSearch"
    }

    fn description(&self) -> &'static str {
        "Opens a web search for the requested subject."
    }

    fn keywords(&self) -> &[&str] {
        &["search", "google", "find out", "lookup", "research", "tell me about"]
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        let name = ctx.user_name.clone();
        let query = Self::extract_subject(command);

        if query.len() < 2 {
            return Some(Action::speak(format!(
                "{name}, I'm ready to search, but I need a clearer subject. \
                 What would you like me to look up?"
            )));
        }

        let encoded = utf8_percent_encode(&query, NON_ALPHANUMERIC);
        let url = format!("https://www.google.com/search?q={encoded}");
        if let Err(err) = ctx.desktop.perform(DesktopOp::OpenUrl(url)) {
            warn!(%err, "failed to open search results");
        }

        let responses = [
            format!("I've initiated a search for '{query}', {name}."),
            format!("Actually, I've located some data on '{query}'. Browsing the results now."),
            format!("Searching the global networks for '{query}' as requested."),
            format!("Researching '{query}' now. Results should be visible on your primary display, {name}."),
        ];
        let line = responses.choose(&mut rand::rng()).cloned().unwrap_or_default();
        Some(Action::speak(line))
    }
}
