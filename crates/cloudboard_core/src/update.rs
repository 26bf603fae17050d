use cloudboard_logging::{board_debug, board_info, board_warn};

use crate::analysis::tokenize;
use crate::{AppState, Effect, Msg, StatusKind};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TextEdited(text) => {
            state.set_text(text);
            Vec::new()
        }
        Msg::TopicEdited(topic) => {
            state.set_topic(topic);
            Vec::new()
        }
        Msg::TabSelected(tab) => {
            state.set_tab(tab);
            Vec::new()
        }
        Msg::NextTab => {
            let next = state.tab().next();
            state.set_tab(next);
            Vec::new()
        }
        Msg::PrevTab => {
            let prev = state.tab().prev();
            state.set_tab(prev);
            Vec::new()
        }
        Msg::UploadRequested(raw) => {
            let path = raw.trim();
            if path.is_empty() {
                return (state, Vec::new());
            }
            board_info!("Upload requested path={}", path);
            vec![Effect::LoadFile {
                path: path.to_string(),
            }]
        }
        Msg::UploadDecoded { name, text } => {
            let word_count = tokenize(&text).len();
            board_info!("Upload decoded name={} words={}", name, word_count);
            state.replace_text(text);
            state.set_status(
                StatusKind::Success,
                format!("File uploaded! Word count: {word_count}"),
            );
            Vec::new()
        }
        Msg::UploadFailed { name, reason } => {
            board_warn!("Upload failed name={} reason={}", name, reason);
            state.set_status(StatusKind::Error, format!("Could not load {name}: {reason}"));
            Vec::new()
        }
        Msg::SaveClicked => {
            let input = state.render_input();
            match input.cloud_words() {
                None => {
                    state.set_status(
                        StatusKind::Info,
                        "Enter text in the 'Text Input' tab before saving a word cloud",
                    );
                    Vec::new()
                }
                Some(words) if words.is_empty() => {
                    state.set_status(
                        StatusKind::Error,
                        "No words left to draw after removing stopwords and numbers",
                    );
                    Vec::new()
                }
                Some(words) => {
                    board_debug!("Save requested words={}", words.len());
                    vec![Effect::SaveCloud {
                        topic: input.topic_label().map(ToOwned::to_owned),
                        words,
                    }]
                }
            }
        }
        Msg::CloudSaved { path } => {
            board_info!("Word cloud saved to {}", path);
            state.set_status(
                StatusKind::Success,
                format!("Word cloud saved successfully to {path}"),
            );
            Vec::new()
        }
        Msg::SaveFailed { reason } => {
            board_warn!("Word cloud save failed: {}", reason);
            state.set_status(StatusKind::Error, format!("Saving failed: {reason}"));
            Vec::new()
        }
        Msg::QuitRequested => vec![Effect::Quit],
    };

    (state, effects)
}
