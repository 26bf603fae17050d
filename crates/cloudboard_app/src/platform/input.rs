//! Editable fields on the text input tab: the topic line, the text area and
//! the upload path. Editing itself is done by `ratatui_code_editor`.

use anyhow::anyhow;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui_code_editor::editor::Editor;

/// Which field receives typed characters on the text input tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Topic,
    #[default]
    Text,
    UploadPath,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Topic => Focus::Text,
            Focus::Text => Focus::UploadPath,
            Focus::UploadPath => Focus::Topic,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Topic => Focus::UploadPath,
            Focus::Text => Focus::Topic,
            Focus::UploadPath => Focus::Text,
        }
    }
}

/// A plain-text editor widget and the area it was last drawn in.
pub struct Field {
    editor: Editor,
    multiline: bool,
    /// The editor maps keys against its render area.
    area: Rect,
}

impl Field {
    pub fn single_line() -> anyhow::Result<Self> {
        Self::new(false)
    }

    pub fn multi_line() -> anyhow::Result<Self> {
        Self::new(true)
    }

    fn new(multiline: bool) -> anyhow::Result<Self> {
        let mut editor = Editor::new("text", "", vec![])
            .map_err(|err| anyhow!("cannot create text editor: {err:?}"))?;
        editor.show_line_numbers(false);
        Ok(Self {
            editor,
            multiline,
            area: Rect::new(0, 0, 80, 3),
        })
    }

    pub fn text(&self) -> String {
        self.editor.get_content()
    }

    pub fn widget(&self) -> &Editor {
        &self.editor
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Replace the contents and put the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        let text = self.accept(text);
        self.editor.set_content(&text);
        self.editor.set_cursor(text.chars().count());
    }

    /// Forward a key to the editor. Returns whether the contents changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter && !self.multiline {
            return false;
        }
        let before = self.editor.get_content();
        let _ = self.editor.input(key, &self.area);
        self.editor.get_content() != before
    }

    /// Insert pasted text at the cursor as one edit.
    pub fn paste(&mut self, pasted: &str) -> bool {
        let pasted = self.accept(pasted);
        if pasted.is_empty() {
            return false;
        }
        let content = self.editor.get_content();
        let cursor = self.editor.get_cursor().min(content.chars().count());
        let at = content
            .char_indices()
            .nth(cursor)
            .map_or(content.len(), |(offset, _)| offset);

        let mut spliced = String::with_capacity(content.len() + pasted.len());
        spliced.push_str(&content[..at]);
        spliced.push_str(&pasted);
        spliced.push_str(&content[at..]);
        self.editor.set_content(&spliced);
        self.editor.set_cursor(cursor + pasted.chars().count());
        true
    }

    /// Single-line fields fold line breaks into spaces.
    fn accept(&self, s: &str) -> String {
        if self.multiline {
            s.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            s.replace("\r\n", " ").replace(['\r', '\n'], " ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn press(field: &mut Field, code: KeyCode) -> bool {
        field.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_reports_changes() {
        let mut field = Field::multi_line().unwrap();
        assert!(press(&mut field, KeyCode::Char('n')));
        assert!(press(&mut field, KeyCode::Char('é')));
        assert_eq!(field.text(), "né");
        assert!(press(&mut field, KeyCode::Backspace));
        assert_eq!(field.text(), "n");
    }

    #[test]
    fn enter_only_breaks_lines_in_the_text_area() {
        let mut text = Field::multi_line().unwrap();
        text.set_text("ab");
        assert!(press(&mut text, KeyCode::Enter));
        assert_eq!(text.text(), "ab\n");

        let mut topic = Field::single_line().unwrap();
        topic.set_text("Topic");
        assert!(!press(&mut topic, KeyCode::Enter));
        assert_eq!(topic.text(), "Topic");
    }

    #[test]
    fn paste_inserts_at_cursor_and_folds_lines_in_single_line_fields() {
        let mut topic = Field::single_line().unwrap();
        assert!(topic.paste("line one\r\nline two"));
        assert_eq!(topic.text(), "line one line two");
        assert!(!topic.paste(""));

        let mut text = Field::multi_line().unwrap();
        text.set_text("first");
        assert!(text.paste("\r\nsecond"));
        assert_eq!(text.text(), "first\nsecond");
    }

    #[test]
    fn focus_cycles() {
        assert_eq!(Focus::Topic.next().next().next(), Focus::Topic);
        assert_eq!(Focus::Text.prev(), Focus::Topic);
        assert_eq!(Focus::UploadPath.next(), Focus::Topic);
    }
}
