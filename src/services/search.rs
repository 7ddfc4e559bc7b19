use std::time::Duration;

use anyhow::{anyhow, Result};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::blocking::Client;
use serde::Deserialize;

/// DuckDuckGo instant-answer lookup with a hard timeout. Best-effort
/// context for the reasoner, not a full search engine.
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
}

#[derive(Deserialize)]
struct InstantAnswer {
    #[serde(rename = "AbstractText", default)]
    abstract_text: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

#[derive(Deserialize)]
struct RelatedTopic {
    #[serde(rename = "Text", default)]
    text: String,
}

impl SearchClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Up to three short snippets for the query, most relevant first.
    pub fn instant_answer(&self, query: &str) -> Result<Vec<String>> {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        let url = format!("https://api.duckduckgo.com/?q={encoded}&format=json&no_html=1");

        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(anyhow!("search endpoint error: {}", response.status()));
        }

        // The endpoint labels the body application/x-javascript, so parse
        // the text instead of relying on the json content-type check.
        let parsed: InstantAnswer = serde_json::from_str(&response.text()?)?;

        let mut snippets = Vec::new();
        if !parsed.abstract_text.is_empty() {
            snippets.push(parsed.abstract_text);
        }
        for topic in parsed.related_topics {
            if snippets.len() >= 3 {
                break;
            }
            if !topic.text.is_empty() {
                snippets.push(topic.text);
            }
        }
        Ok(snippets)
    }
}
