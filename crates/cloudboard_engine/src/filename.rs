/// File name used when no topic is set.
pub const DEFAULT_CLOUD_FILENAME: &str = "wordcloud_output.png";

const MAX_SLUG_CHARS: usize = 80;

/// Image file name for a topic: `wordcloud_{topic}.png`.
///
/// Whitespace and path-hostile characters become `_`, one for one. An empty
/// or whitespace-only topic maps to [`DEFAULT_CLOUD_FILENAME`].
pub fn slugify(topic: &str) -> String {
    let trimmed = topic.trim();
    if trimmed.is_empty() {
        return DEFAULT_CLOUD_FILENAME.to_string();
    }
    let slug: String = trimmed
        .chars()
        .take(MAX_SLUG_CHARS)
        .map(|c| {
            if c.is_whitespace() || is_forbidden(c) {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("wordcloud_{slug}.png")
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}' | '\u{7F}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_topics_are_capped_on_char_boundaries() {
        let topic = "é".repeat(200);
        let name = slugify(&topic);
        let slug = name
            .strip_prefix("wordcloud_")
            .and_then(|s| s.strip_suffix(".png"))
            .unwrap();
        assert_eq!(slug.chars().count(), MAX_SLUG_CHARS);
    }
}
