use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::path::Path;

use anyhow::Context;
use cloudboard_core::{update, AppState, AppViewModel, Effect, Msg, Tab};
use cloudboard_engine::WordCloud;
use cloudboard_logging::{board_debug, board_info, board_trace, board_warn, next_render_pass};
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::config::{load_config, DashboardConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::input::{Field, Focus};
use super::logging;
use super::ui;

type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = match load_config(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (DashboardConfig::default(), Some(err)),
    };
    logging::initialize(&config);
    if let Some(err) = config_error {
        board_warn!("Falling back to default config: {:#}", err);
    }
    board_info!("Starting cloudboard output_dir={:?}", config.output_dir);

    let mut terminal = setup_terminal().context("failed to prepare the terminal")?;
    let result = App::new(EffectRunner::new(config.output_dir))
        .and_then(|mut app| app.run(&mut terminal));
    let restored = restore_terminal(&mut terminal).context("failed to restore the terminal");

    board_info!("Shutting down");
    result.and(restored)
}

fn setup_terminal() -> anyhow::Result<DashboardTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut DashboardTerminal) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// The running dashboard: session state, editors and the cached preview.
struct App {
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    topic: Field,
    text: Field,
    upload: Field,
    focus: Focus,
    synced_revision: u64,
    /// Laid-out cloud for the current view; dropped whenever the words change.
    preview: Option<WordCloud>,
    should_quit: bool,
}

impl App {
    fn new(runner: EffectRunner) -> anyhow::Result<Self> {
        let state = AppState::new();
        let view = state.view();
        Ok(Self {
            synced_revision: view.input_revision,
            state,
            view,
            runner,
            topic: Field::single_line()?,
            text: Field::multi_line()?,
            upload: Field::single_line()?,
            focus: Focus::default(),
            preview: None,
            should_quit: false,
        })
    }

    fn run(&mut self, terminal: &mut DashboardTerminal) -> anyhow::Result<()> {
        while !self.should_quit {
            next_render_pass();
            self.ensure_preview();
            let mut editors = ui::render::EditorAreas::default();
            terminal.draw(|frame| editors = ui::render::draw(frame, &self.view, &self.ui_context()))?;
            self.remember_editor_areas(editors);
            board_trace!("Frame drawn");

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Paste(text) => self.handle_paste(&text),
                _ => {}
            }
        }
        Ok(())
    }

    fn ui_context(&self) -> ui::render::UiContext<'_> {
        ui::render::UiContext {
            focus: self.focus,
            topic: &self.topic,
            text: &self.text,
            upload: &self.upload,
            preview: self.preview.as_ref(),
        }
    }

    /// Keys are mapped against the area each editor was last drawn in.
    fn remember_editor_areas(&mut self, editors: ui::render::EditorAreas) {
        let fields = [
            (&mut self.topic, editors.topic),
            (&mut self.text, editors.text),
            (&mut self.upload, editors.upload),
        ];
        for (field, area) in fields {
            if let Some(area) = area {
                field.set_area(area);
            }
        }
    }

    /// Lays out the cloud only when the cloud tab is about to be drawn.
    fn ensure_preview(&mut self) {
        if self.view.tab != Tab::WordCloud || self.preview.is_some() {
            return;
        }
        if let Some(cloud) = &self.view.cloud {
            let generated = WordCloud::generate(&cloud.words, self.runner.cloud_settings());
            board_debug!(
                "Preview laid out words={} placed={}",
                cloud.words.len(),
                generated.placements().len()
            );
            self.preview = Some(generated);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => self.dispatch(Msg::QuitRequested),
            KeyCode::Char('s') if ctrl => self.dispatch(Msg::SaveClicked),
            KeyCode::F(n @ 1..=3) => {
                self.dispatch(Msg::TabSelected(Tab::ALL[usize::from(n - 1)]));
            }
            KeyCode::Left if ctrl => self.dispatch(Msg::PrevTab),
            KeyCode::Right if ctrl => self.dispatch(Msg::NextTab),
            _ if self.view.tab == Tab::TextInput => self.handle_editing_key(key),
            KeyCode::Tab => self.dispatch(Msg::NextTab),
            KeyCode::BackTab => self.dispatch(Msg::PrevTab),
            KeyCode::Char('q') => self.dispatch(Msg::QuitRequested),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter if self.focus == Focus::UploadPath => {
                let path = self.upload.text();
                self.dispatch(Msg::UploadRequested(path));
            }
            _ => {
                if self.focused_field().handle_key(key) {
                    self.publish_focused();
                }
            }
        }
    }

    /// Bracketed paste arrives in one piece, so a large paste is one edit.
    fn handle_paste(&mut self, pasted: &str) {
        if self.view.tab != Tab::TextInput {
            return;
        }
        if self.focused_field().paste(pasted) {
            self.publish_focused();
        }
    }

    fn focused_field(&mut self) -> &mut Field {
        match self.focus {
            Focus::Topic => &mut self.topic,
            Focus::Text => &mut self.text,
            Focus::UploadPath => &mut self.upload,
        }
    }

    fn publish_focused(&mut self) {
        let msg = match self.focus {
            Focus::Topic => Msg::TopicEdited(self.topic.text()),
            Focus::Text => Msg::TextEdited(self.text.text()),
            Focus::UploadPath => return,
        };
        self.dispatch(msg);
    }

    fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;

            for effect in effects {
                if matches!(effect, Effect::Quit) {
                    self.should_quit = true;
                } else if let Some(next) = self.runner.run(effect) {
                    inbox.push_back(next);
                }
            }
        }

        if self.state.consume_dirty() {
            self.refresh_view();
        }
    }

    fn refresh_view(&mut self) {
        let view = self.state.view();
        if view.input_revision != self.synced_revision {
            self.text.set_text(&view.raw_text);
            self.synced_revision = view.input_revision;
        }
        if view.cloud != self.view.cloud {
            self.preview = None;
        }
        self.view = view;
    }
}
