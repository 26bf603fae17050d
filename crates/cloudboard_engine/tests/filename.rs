use cloudboard_engine::{slugify, DEFAULT_CLOUD_FILENAME};
use pretty_assertions::assert_eq;

#[test]
fn spaces_become_underscores() {
    assert_eq!(slugify("Technology Trends"), "wordcloud_Technology_Trends.png");
    assert_eq!(slugify("Data  Science"), "wordcloud_Data__Science.png");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(slugify("  Marketing \t"), "wordcloud_Marketing.png");
}

#[test]
fn empty_topics_fall_back_to_default() {
    assert_eq!(slugify(""), DEFAULT_CLOUD_FILENAME);
    assert_eq!(slugify(" \n\t "), DEFAULT_CLOUD_FILENAME);
    assert_eq!(DEFAULT_CLOUD_FILENAME, "wordcloud_output.png");
}

#[test]
fn path_separators_cannot_escape_the_output_dir() {
    assert_eq!(slugify("../etc/passwd"), "wordcloud_.._etc_passwd.png");
    assert_eq!(slugify(r"a\b:c*d?"), "wordcloud_a_b_c_d_.png");
}

#[test]
fn slug_is_deterministic() {
    assert_eq!(slugify("Q3 Review"), slugify("Q3 Review"));
}
