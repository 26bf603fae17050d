use crate::CloudWord;

/// Side effects requested by `update`, executed by the app's effect runner.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Read and decode an uploaded text file.
    LoadFile { path: String },
    /// Render the given words and write the image named after `topic`.
    SaveCloud {
        topic: Option<String>,
        words: Vec<CloudWord>,
    },
    Quit,
}
