use crate::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the text area; carries the full editor contents.
    TextEdited(String),
    /// User edited the topic name field.
    TopicEdited(String),
    /// User jumped directly to a tab.
    TabSelected(Tab),
    NextTab,
    PrevTab,
    /// User submitted a file path in the upload field.
    UploadRequested(String),
    /// Upload read and decoded as UTF-8.
    UploadDecoded { name: String, text: String },
    /// Upload could not be read or decoded.
    UploadFailed { name: String, reason: String },
    /// User asked to save the current word cloud.
    SaveClicked,
    /// Word cloud image written.
    CloudSaved { path: String },
    /// Word cloud image could not be rendered or written.
    SaveFailed { reason: String },
    QuitRequested,
}
