use std::path::{Path, PathBuf};

use cloudboard_core::{Effect, Msg};
use cloudboard_engine::{load_text_file, save_cloud, upload_name, CloudSettings};
use cloudboard_logging::{board_debug, board_warn};

/// Executes effects inline and turns their outcome into the next message.
pub struct EffectRunner {
    output_dir: PathBuf,
    settings: CloudSettings,
}

impl EffectRunner {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            settings: CloudSettings::default(),
        }
    }

    pub fn cloud_settings(&self) -> &CloudSettings {
        &self.settings
    }

    /// Runs one effect. `Effect::Quit` belongs to the event loop and is ignored here.
    pub fn run(&self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::LoadFile { path } => {
                let path = Path::new(&path);
                let msg = match load_text_file(path) {
                    Ok(uploaded) => Msg::UploadDecoded {
                        name: uploaded.name,
                        text: uploaded.text,
                    },
                    Err(err) => {
                        board_warn!("Upload of {:?} failed: {}", path, err);
                        Msg::UploadFailed {
                            name: upload_name(path),
                            reason: err.to_string(),
                        }
                    }
                };
                Some(msg)
            }
            Effect::SaveCloud { topic, words } => {
                board_debug!("Rendering word cloud words={}", words.len());
                let msg = match save_cloud(&self.output_dir, topic.as_deref(), &words, &self.settings)
                {
                    Ok(path) => Msg::CloudSaved {
                        path: path.display().to_string(),
                    },
                    Err(err) => Msg::SaveFailed {
                        reason: err.to_string(),
                    },
                };
                Some(msg)
            }
            Effect::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudboard_core::{cloud_words, tokenize, update, AppState};
    use tempfile::TempDir;

    #[test]
    fn load_effect_reports_decoded_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("speech.txt");
        std::fs::write(&path, "we choose to go").unwrap();

        let runner = EffectRunner::new(temp.path().to_path_buf());
        let msg = runner.run(Effect::LoadFile {
            path: path.display().to_string(),
        });

        assert_eq!(
            msg,
            Some(Msg::UploadDecoded {
                name: "speech.txt".into(),
                text: "we choose to go".into(),
            })
        );
    }

    #[test]
    fn failed_upload_leaves_session_text_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xE9").unwrap();
        let runner = EffectRunner::new(temp.path().to_path_buf());

        let (state, _) = update(AppState::new(), Msg::TextEdited("original text".into()));
        let (state, effects) = update(state, Msg::UploadRequested(path.display().to_string()));
        let mut state = state;
        for effect in effects {
            let msg = runner.run(effect).unwrap();
            assert!(matches!(msg, Msg::UploadFailed { .. }));
            state = update(state, msg).0;
        }

        assert_eq!(state.view().raw_text, "original text");
    }

    #[test]
    fn save_effect_writes_into_output_dir() {
        let temp = TempDir::new().unwrap();
        let runner = EffectRunner::new(temp.path().join("out"));
        let words = cloud_words(&tokenize("ferris crab ferris"), 100);

        let msg = runner.run(Effect::SaveCloud {
            topic: Some("My Topic".into()),
            words,
        });

        let expected = temp.path().join("out").join("wordcloud_My_Topic.png");
        assert_eq!(
            msg,
            Some(Msg::CloudSaved {
                path: expected.display().to_string(),
            })
        );
        assert!(expected.is_file());
    }

    #[test]
    fn quit_is_not_an_engine_effect() {
        let temp = TempDir::new().unwrap();
        let runner = EffectRunner::new(temp.path().to_path_buf());
        assert_eq!(runner.run(Effect::Quit), None);
    }
}
