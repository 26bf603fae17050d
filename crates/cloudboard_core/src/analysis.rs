//! Word-frequency pipeline: tokenize, truncate, count, rank.
//!
//! Every function here is pure. A render pass runs the whole chain once over
//! the current raw text and discards the results afterwards.

use std::collections::HashMap;

/// Maximum number of tokens considered by any analysis or visualization.
pub const TRUNCATION_LIMIT: usize = 500;

/// Below this many words the text tab shows an advisory.
pub const RECOMMENDED_MIN_WORDS: usize = 500;

/// Rows in the frequency table.
pub const TABLE_ROWS: usize = 20;

/// Bars in the frequency chart.
pub const CHART_BARS: usize = 15;

/// Shown in place of the most common word when there is nothing to count.
pub const NO_DATA_SENTINEL: &str = "N/A";

/// Split on runs of whitespace. Tokens keep their original case and order.
///
/// The ASCII information separators U+001C..=U+001F also split, so files
/// that use them as field or record marks tokenize like spaced text.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1C}'..='\u{1F}')
}

/// The first `min(tokens.len(), limit)` tokens.
pub fn truncate<T>(tokens: &[T], limit: usize) -> &[T] {
    &tokens[..tokens.len().min(limit)]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

/// Lower-cased token counts that remember first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&slot| self.entries[slot].count)
    }

    /// Number of distinct folded tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that were counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    fn record(&mut self, word: String) {
        match self.index.get(&word) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push(FrequencyEntry { word, count: 1 });
            }
        }
    }
}

/// Count tokens after lower-casing them.
pub fn count_frequency<S: AsRef<str>>(tokens: &[S]) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for token in tokens {
        table.record(token.as_ref().to_lowercase());
    }
    table
}

/// The `n` highest counts, descending. Equal counts keep first-occurrence order.
pub fn top_n(table: &FrequencyTable, n: usize) -> Vec<FrequencyEntry> {
    let mut ranked: Vec<FrequencyEntry> = table.entries.clone();
    // Stable sort, so ties stay in insertion order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

/// Headline numbers shown under the frequency chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub total_tokens: usize,
    pub unique_tokens: usize,
    pub most_common: Option<String>,
}

impl AnalysisSummary {
    pub fn most_common_label(&self) -> &str {
        self.most_common.as_deref().unwrap_or(NO_DATA_SENTINEL)
    }
}

/// Everything the frequency tab needs, derived from one truncated sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyAnalysis {
    pub top_entries: Vec<FrequencyEntry>,
    pub summary: AnalysisSummary,
}

impl FrequencyAnalysis {
    pub fn from_tokens<S: AsRef<str>>(truncated: &[S]) -> Self {
        let table = count_frequency(truncated);
        let top_entries = top_n(&table, TABLE_ROWS);
        let summary = AnalysisSummary {
            total_tokens: truncated.len(),
            unique_tokens: table.len(),
            most_common: top_entries.first().map(|e| e.word.clone()),
        };
        Self {
            top_entries,
            summary,
        }
    }

    /// Leading slice of the table used for the bar chart.
    pub fn chart_entries(&self) -> &[FrequencyEntry] {
        truncate(&self.top_entries, CHART_BARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_collapses_whitespace_runs() {
        assert_eq!(tokenize("  a\tb\n\n c  "), vec!["a", "b", "c"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn table_remembers_first_occurrence() {
        let table = count_frequency(&["b", "A", "a", "B", "c"]);
        let words: Vec<_> = table.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn most_common_falls_back_to_sentinel() {
        let analysis = FrequencyAnalysis::from_tokens::<&str>(&[]);
        assert_eq!(analysis.summary.most_common_label(), NO_DATA_SENTINEL);
        assert!(analysis.chart_entries().is_empty());
    }
}
