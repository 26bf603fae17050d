pub const APP_TITLE: &str = " Word Cloud Analysis Dashboard ";

pub const SIDEBAR_WIDTH: u16 = 34;

pub const TOPIC_LABEL: &str = " Topic Name (e.g., Technology Trends, Marketing Analysis) ";
pub const TEXT_LABEL: &str = " Paste your text here (minimum 500 words recommended) ";
pub const UPLOAD_LABEL: &str = " Or upload a text file: path to a .txt file, Enter to load ";

pub const CLOUD_PLACEHOLDER: &str =
    "Please enter text in the 'Text Input' tab to generate word cloud";
pub const FREQUENCY_PLACEHOLDER: &str =
    "Please enter text in the 'Text Input' tab to see analysis";

pub const INSTRUCTIONS: &[&str] = &[
    "1. Enter Topic Name at the top",
    "2. Text Input: paste your text (500+ words)",
    "3. Word Cloud: view the cloud",
    "4. Word Frequency: analyze word counts",
];

pub const TIPS: &[&str] = &[
    "More words = better visualization",
    "Upload .txt files for convenience",
    "Only the first 500 words are analyzed",
];

pub const KEY_HINTS: &str =
    "F1-F3 tabs | Tab focus | Ctrl+S save cloud | Ctrl+Q quit";
