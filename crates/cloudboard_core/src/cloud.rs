//! Word selection and weighting for the word cloud.
//!
//! The cloud groups tokens case-insensitively and shows each group in its
//! most frequent original spelling. Stopwords and bare numbers are left out
//! of the cloud only; the frequency tab counts every token.

use std::collections::HashMap;

/// Distinct words drawn in one cloud.
pub const CLOUD_MAX_WORDS: usize = 100;

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do",
    "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few", "for",
    "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he",
    "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him", "himself", "his",
    "how", "how's", "however", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is",
    "isn't", "it", "it's", "its", "itself", "just", "let's", "like", "me", "more", "most",
    "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own", "same",
    "shall", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "since", "so",
    "some", "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves",
    "then", "there", "there's", "therefore", "these", "they", "they'd", "they'll", "they're",
    "they've", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's",
    "when", "when's", "where", "where's", "which", "while", "who", "who's", "whom", "why",
    "why's", "with", "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've",
    "your", "yours", "yourself", "yourselves",
];

pub fn is_stopword(folded: &str) -> bool {
    STOPWORDS.contains(&folded)
}

fn is_numeric(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

/// A word to draw, with its weight relative to the most frequent word.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudWord {
    pub text: String,
    pub count: usize,
    /// `count / max_count`, in `(0, 1]`.
    pub weight: f32,
}

#[derive(Default)]
struct Group {
    count: usize,
    first_seen: usize,
    spellings: Vec<(String, usize)>,
}

impl Group {
    fn add(&mut self, spelling: &str) {
        self.count += 1;
        match self.spellings.iter_mut().find(|(s, _)| s == spelling) {
            Some((_, n)) => *n += 1,
            None => self.spellings.push((spelling.to_string(), 1)),
        }
    }

    fn display(&self) -> &str {
        let mut best: Option<&(String, usize)> = None;
        for candidate in &self.spellings {
            if best.map_or(true, |b| candidate.1 > b.1) {
                best = Some(candidate);
            }
        }
        best.map(|(s, _)| s.as_str()).unwrap_or_default()
    }
}

/// Pick up to `max_words` cloud words from an already truncated sequence.
pub fn cloud_words<S: AsRef<str>>(truncated: &[S], max_words: usize) -> Vec<CloudWord> {
    let mut groups: HashMap<String, Group> = HashMap::new();
    for (position, token) in truncated.iter().enumerate() {
        let token = token.as_ref();
        let folded = token.to_lowercase();
        if is_stopword(&folded) || is_numeric(token) {
            continue;
        }
        groups
            .entry(folded)
            .or_insert_with(|| Group {
                first_seen: position,
                ..Group::default()
            })
            .add(token);
    }

    let mut ranked: Vec<&Group> = groups.values().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen)));
    ranked.truncate(max_words);

    let max_count = ranked.first().map_or(1, |g| g.count) as f32;
    ranked
        .into_iter()
        .map(|group| CloudWord {
            text: group.display().to_string(),
            count: group.count,
            weight: group.count as f32 / max_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_case_variants_under_dominant_spelling() {
        let words = cloud_words(&["Rust", "rust", "Rust", "crab"], CLOUD_MAX_WORDS);
        assert_eq!(words[0].text, "Rust");
        assert_eq!(words[0].count, 3);
        assert_eq!(words[1].text, "crab");
        assert!((words[1].weight - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn first_spelling_wins_a_tie() {
        let words = cloud_words(&["rust", "Rust"], CLOUD_MAX_WORDS);
        assert_eq!(words[0].text, "rust");
    }

    #[test]
    fn skips_stopwords_and_numbers() {
        let words = cloud_words(&["The", "cat", "and", "42", "dogs"], CLOUD_MAX_WORDS);
        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["cat", "dogs"]);
    }

    #[test]
    fn caps_word_count() {
        let tokens: Vec<String> = (0..150).map(|i| format!("w{i}")).collect();
        assert_eq!(cloud_words(&tokens, CLOUD_MAX_WORDS).len(), CLOUD_MAX_WORDS);
    }
}
