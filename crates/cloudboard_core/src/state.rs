use crate::view_model::{AppViewModel, RenderInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Tab {
    #[default]
    TextInput,
    WordCloud,
    WordFrequency,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::TextInput, Tab::WordCloud, Tab::WordFrequency];

    pub fn index(self) -> usize {
        match self {
            Tab::TextInput => 0,
            Tab::WordCloud => 1,
            Tab::WordFrequency => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::TextInput => "Text Input",
            Tab::WordCloud => "Word Cloud",
            Tab::WordFrequency => "Word Frequency",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line feedback shown in the status bar until the next one replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// The single mutable session: raw text, topic, active tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    raw_text: String,
    topic: String,
    tab: Tab,
    input_revision: u64,
    status: Option<StatusMessage>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable snapshot for one render pass.
    pub fn render_input(&self) -> RenderInput {
        RenderInput {
            raw_text: self.raw_text.clone(),
            topic: self.topic.clone(),
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(
            &self.render_input(),
            self.tab,
            self.input_revision,
            self.status.clone(),
            self.dirty,
        )
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn tab(&self) -> Tab {
        self.tab
    }

    pub(crate) fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.dirty = true;
        }
    }

    /// Text typed into the editor. Does not bump the input revision because
    /// the editor already holds this text.
    pub(crate) fn set_text(&mut self, text: String) {
        if self.raw_text != text {
            self.raw_text = text;
            self.dirty = true;
        }
    }

    /// Text coming from outside the editor; the editor must resync.
    pub(crate) fn replace_text(&mut self, text: String) {
        self.raw_text = text;
        self.input_revision += 1;
        self.dirty = true;
    }

    pub(crate) fn set_topic(&mut self, topic: String) {
        if self.topic != topic {
            self.topic = topic;
            self.dirty = true;
        }
    }

    pub(crate) fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind,
            text: text.into(),
        });
        self.dirty = true;
    }
}
