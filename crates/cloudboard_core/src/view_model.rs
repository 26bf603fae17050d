use crate::analysis::{tokenize, truncate, FrequencyAnalysis, RECOMMENDED_MIN_WORDS, TRUNCATION_LIMIT};
use crate::cloud::{cloud_words, CloudWord, CLOUD_MAX_WORDS};
use crate::{StatusMessage, Tab};

/// What a render pass reads from the session, captured once at its start.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderInput {
    pub raw_text: String,
    pub topic: String,
}

impl RenderInput {
    pub fn new(raw_text: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            topic: topic.into(),
        }
    }

    /// The topic with surrounding whitespace removed, if any is left.
    pub fn topic_label(&self) -> Option<&str> {
        let trimmed = self.topic.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Original-case tokens, truncated to the analysis limit.
    ///
    /// Returns `None` while there is nothing to analyze.
    pub fn truncated_tokens(&self) -> Option<Vec<&str>> {
        let tokens = tokenize(&self.raw_text);
        if tokens.is_empty() {
            return None;
        }
        Some(truncate(&tokens, TRUNCATION_LIMIT).to_vec())
    }

    pub fn cloud_words(&self) -> Option<Vec<CloudWord>> {
        self.truncated_tokens()
            .map(|tokens| cloud_words(&tokens, CLOUD_MAX_WORDS))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputStats {
    /// Whitespace tokens in the whole text, before truncation.
    pub word_count: usize,
    pub below_recommended: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudView {
    pub words: Vec<CloudWord>,
    /// Tokens the cloud was built from, after truncation.
    pub source_tokens: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub tab: Tab,
    pub topic: Option<String>,
    pub raw_text: String,
    /// Bumped whenever the text is replaced from outside the editor.
    pub input_revision: u64,
    pub input: Option<InputStats>,
    pub cloud: Option<CloudView>,
    pub frequency: Option<FrequencyAnalysis>,
    pub status: Option<StatusMessage>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn build(
        input: &RenderInput,
        tab: Tab,
        input_revision: u64,
        status: Option<StatusMessage>,
        dirty: bool,
    ) -> Self {
        let word_count = tokenize(&input.raw_text).len();
        let input_stats = (!input.raw_text.is_empty()).then_some(InputStats {
            word_count,
            below_recommended: word_count < RECOMMENDED_MIN_WORDS,
        });

        let (cloud, frequency) = match input.truncated_tokens() {
            Some(truncated) => (
                Some(CloudView {
                    words: cloud_words(&truncated, CLOUD_MAX_WORDS),
                    source_tokens: truncated.len(),
                }),
                Some(FrequencyAnalysis::from_tokens(&truncated)),
            ),
            None => (None, None),
        };

        Self {
            tab,
            topic: input.topic_label().map(ToOwned::to_owned),
            raw_text: input.raw_text.clone(),
            input_revision,
            input: input_stats,
            cloud,
            frequency,
            status,
            dirty,
        }
    }

    pub fn cloud_header(&self) -> String {
        with_topic("Word Cloud Visualization", self.topic.as_deref())
    }

    pub fn frequency_header(&self) -> String {
        with_topic("Word Frequency Analysis", self.topic.as_deref())
    }
}

fn with_topic(base: &str, topic: Option<&str>) -> String {
    match topic {
        Some(topic) => format!("{base}: {topic}"),
        None => base.to_string(),
    }
}
