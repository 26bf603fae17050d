use cloudboard_core::{
    count_frequency, tokenize, top_n, truncate, FrequencyAnalysis, FrequencyEntry, RenderInput,
    NO_DATA_SENTINEL, TRUNCATION_LIMIT,
};
use pretty_assertions::assert_eq;

fn entry(word: &str, count: usize) -> FrequencyEntry {
    FrequencyEntry {
        word: word.to_string(),
        count,
    }
}

fn numbered_text(n: usize) -> String {
    (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}

#[test]
fn short_text_is_not_truncated() {
    let text = numbered_text(499);
    let tokens = tokenize(&text);
    assert_eq!(truncate(&tokens, TRUNCATION_LIMIT), tokens.as_slice());
}

#[test]
fn long_text_keeps_exact_prefix() {
    for n in [500, 501, 1200] {
        let text = numbered_text(n);
        let tokens = tokenize(&text);
        let truncated = truncate(&tokens, TRUNCATION_LIMIT);
        assert_eq!(truncated.len(), TRUNCATION_LIMIT);
        assert_eq!(truncated, &tokens[..TRUNCATION_LIMIT]);
        assert_eq!(truncated.last(), Some(&"w499"));
    }
}

#[test]
fn counting_is_case_insensitive() {
    let table = count_frequency(&tokenize("Cat cat CAT dog"));
    assert_eq!(table.get("cat"), Some(3));
    assert_eq!(table.get("Cat"), None);
    assert_eq!(table.get("dog"), Some(1));
    assert_eq!(table.len(), 2);
}

#[test]
fn reference_sentence_counts_and_ranking() {
    let tokens = tokenize("the cat sat on the mat the cat ran");
    assert_eq!(tokens.len(), 9);
    assert_eq!(truncate(&tokens, TRUNCATION_LIMIT).len(), 9);

    let table = count_frequency(&tokens);
    let counts: Vec<_> = table.iter().cloned().collect();
    assert_eq!(
        counts,
        vec![
            entry("the", 3),
            entry("cat", 2),
            entry("sat", 1),
            entry("on", 1),
            entry("mat", 1),
            entry("ran", 1),
        ]
    );

    assert_eq!(
        top_n(&table, 3),
        vec![entry("the", 3), entry("cat", 2), entry("sat", 1)]
    );
}

#[test]
fn ranking_is_non_increasing_with_first_occurrence_ties() {
    let tokens = tokenize("b a c b a d e d c b f");
    let ranked = top_n(&count_frequency(&tokens), 20);

    assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    let words: Vec<_> = ranked.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["b", "a", "c", "d", "e", "f"]);
}

#[test]
fn top_n_limits_rows() {
    let text = numbered_text(40);
    let table = count_frequency(&tokenize(&text));
    assert_eq!(top_n(&table, 20).len(), 20);
    assert_eq!(top_n(&table, 0).len(), 0);
}

#[test]
fn unique_count_never_exceeds_total() {
    let distinct = FrequencyAnalysis::from_tokens(&tokenize("one two three"));
    assert_eq!(distinct.summary.unique_tokens, distinct.summary.total_tokens);

    let repeated = FrequencyAnalysis::from_tokens(&tokenize("one two One"));
    assert_eq!(repeated.summary.total_tokens, 3);
    assert_eq!(repeated.summary.unique_tokens, 2);
    assert_eq!(repeated.summary.most_common_label(), "one");
}

#[test]
fn summary_counts_only_the_truncated_prefix() {
    let text = format!("{} tail tail tail", numbered_text(TRUNCATION_LIMIT));
    let input = RenderInput::new(text, "");
    let truncated = input.truncated_tokens().unwrap();
    let analysis = FrequencyAnalysis::from_tokens(&truncated);

    assert_eq!(analysis.summary.total_tokens, TRUNCATION_LIMIT);
    assert!(analysis.top_entries.iter().all(|e| e.word != "tail"));
    assert_eq!(analysis.chart_entries().len(), 15);
}

#[test]
fn empty_input_is_not_analyzed() {
    assert_eq!(RenderInput::new("", "").truncated_tokens(), None);
    assert_eq!(RenderInput::new("  \n\t", "").cloud_words(), None);
    assert_eq!(
        FrequencyAnalysis::from_tokens::<&str>(&[]).summary.most_common_label(),
        NO_DATA_SENTINEL
    );
}

#[test]
fn information_separators_split_tokens() {
    let text = "alpha\u{1C}beta\u{1D}gamma\u{1E}\u{1F}delta \u{85}epsilon";
    assert_eq!(
        tokenize(text),
        vec!["alpha", "beta", "gamma", "delta", "epsilon"]
    );
}
