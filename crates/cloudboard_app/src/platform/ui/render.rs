use cloudboard_core::{AppViewModel, FrequencyAnalysis, StatusKind, Tab, RECOMMENDED_MIN_WORDS};
use cloudboard_engine::{slugify, WordCloud};
use ratatui::layout::{Constraint, Direction, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Table, Tabs, Wrap,
};
use ratatui::Frame;

use super::constants::*;
use super::layout;
use crate::platform::input::{Field, Focus};

/// Dashboard-local state the view model does not carry.
pub struct UiContext<'a> {
    pub focus: Focus,
    pub topic: &'a Field,
    pub text: &'a Field,
    pub upload: &'a Field,
    pub preview: Option<&'a WordCloud>,
}

/// Where each field's editor was drawn this frame. Fields on a hidden tab
/// are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorAreas {
    pub topic: Option<Rect>,
    pub text: Option<Rect>,
    pub upload: Option<Rect>,
}

pub fn draw(frame: &mut Frame, view: &AppViewModel, ui: &UiContext) -> EditorAreas {
    let areas = layout::dashboard(frame.area());
    let editing = view.tab == Tab::TextInput;

    let mut editors = EditorAreas {
        topic: Some(draw_editor(
            frame,
            areas.topic,
            TOPIC_LABEL,
            ui.topic,
            editing && ui.focus == Focus::Topic,
        )),
        ..EditorAreas::default()
    };
    draw_tab_bar(frame, view.tab, areas.tabs);

    match view.tab {
        Tab::TextInput => draw_text_tab(frame, view, ui, areas.body, &mut editors),
        Tab::WordCloud => draw_cloud_tab(frame, view, ui.preview, areas.body),
        Tab::WordFrequency => draw_frequency_tab(frame, view, areas.body),
    }

    draw_sidebar(frame, view, areas.sidebar);
    draw_status(frame, view, areas.status);
    editors
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn header_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Draws a bordered field and returns the inner area the editor used.
fn draw_editor(frame: &mut Frame, area: Rect, title: &str, field: &Field, focused: bool) -> Rect {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(focus_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(field.widget(), inner);

    if focused {
        if let Some((x, y)) = field.widget().get_visible_cursor(&inner) {
            frame.set_cursor_position(Position::new(x, y));
        }
    }
    inner
}

fn draw_tab_bar(frame: &mut Frame, active: Tab, area: Rect) {
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("F{} {}", i + 1, tab.title()));
    let tabs = Tabs::new(titles)
        .select(active.index())
        .block(
            Block::default()
                .title(APP_TITLE)
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_text_tab(
    frame: &mut Frame,
    view: &AppViewModel,
    ui: &UiContext,
    area: Rect,
    editors: &mut EditorAreas,
) {
    let areas = layout::text_tab(area);

    editors.text = Some(draw_editor(
        frame,
        areas.editor,
        TEXT_LABEL,
        ui.text,
        ui.focus == Focus::Text,
    ));

    let stats: Vec<Line> = match view.input {
        Some(stats) => {
            let mut lines = vec![Line::from(vec![
                Span::raw("Current word count: "),
                Span::styled(stats.word_count.to_string(), header_style()),
                Span::raw(" words"),
            ])];
            if stats.below_recommended {
                lines.push(Line::styled(
                    format!(
                        "Warning: You have less than {RECOMMENDED_MIN_WORDS} words. Add more text for better word cloud visualization."
                    ),
                    Style::default().fg(Color::Yellow),
                ));
            }
            lines
        }
        None => vec![Line::styled(
            "Type or paste text above, or load a file below.",
            Style::default().fg(Color::DarkGray),
        )],
    };
    frame.render_widget(Paragraph::new(stats).wrap(Wrap { trim: true }), areas.stats);

    editors.upload = Some(draw_editor(
        frame,
        areas.upload,
        UPLOAD_LABEL,
        ui.upload,
        ui.focus == Focus::UploadPath,
    ));
}

fn draw_placeholder(frame: &mut Frame, header: String, text: &str, area: Rect) {
    let lines = vec![
        Line::styled(header, header_style()),
        Line::raw(""),
        Line::styled(text.to_string(), Style::default().fg(Color::Blue)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_cloud_tab(frame: &mut Frame, view: &AppViewModel, preview: Option<&WordCloud>, area: Rect) {
    let (Some(cloud_view), Some(cloud)) = (view.cloud.as_ref(), preview) else {
        draw_placeholder(frame, view.cloud_header(), CLOUD_PLACEHOLDER, area);
        return;
    };
    let areas = layout::cloud_tab(area);

    frame.render_widget(
        Paragraph::new(Line::styled(view.cloud_header(), header_style())),
        areas.header,
    );

    let settings = cloud.settings();
    let (width, height) = (f64::from(settings.width), f64::from(settings.height));
    let title = match view.topic.as_deref() {
        Some(topic) => format!(" Word Cloud - {topic} "),
        None => " Word Cloud ".to_string(),
    };
    let canvas = Canvas::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .background_color(Color::White)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            // Smallest first so larger words stay readable where they overlap.
            for placement in cloud.placements().iter().rev() {
                let [r, g, b] = placement.color;
                let mut style = Style::default().fg(Color::Rgb(r, g, b)).bg(Color::White);
                if placement.font_size >= 48 {
                    style = style.add_modifier(Modifier::BOLD);
                }
                let y = height - f64::from(placement.y) - f64::from(placement.font_size) / 2.0;
                ctx.print(
                    f64::from(placement.x),
                    y.max(0.0),
                    Line::from(Span::styled(placement.text.clone(), style)),
                );
            }
        });
    frame.render_widget(canvas, areas.canvas);

    let footer = vec![
        Line::styled(
            format!(
                "Word cloud generated from {} words ({} shown)",
                cloud_view.source_tokens,
                cloud.placements().len()
            ),
            Style::default().fg(Color::Green),
        ),
        Line::styled(
            format!(
                "Ctrl+S saves {}",
                slugify(view.topic.as_deref().unwrap_or_default())
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(footer), areas.footer);
}

fn draw_frequency_tab(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let Some(analysis) = view.frequency.as_ref() else {
        draw_placeholder(frame, view.frequency_header(), FREQUENCY_PLACEHOLDER, area);
        return;
    };
    let areas = layout::frequency_tab(area);

    frame.render_widget(
        Paragraph::new(Line::styled(view.frequency_header(), header_style())),
        areas.header,
    );
    draw_frequency_table(frame, analysis, areas.table);
    draw_frequency_chart(frame, analysis, areas.chart);

    let summary = &analysis.summary;
    let metrics = [
        ("Total Words Analyzed", summary.total_tokens.to_string()),
        ("Unique Words", summary.unique_tokens.to_string()),
        ("Most Common Word", summary.most_common_label().to_string()),
    ];
    for ((label, value), rect) in metrics.into_iter().zip(areas.metrics) {
        let metric = Paragraph::new(Line::styled(value, header_style()))
            .block(Block::default().title(format!(" {label} ")).borders(Borders::ALL));
        frame.render_widget(metric, rect);
    }
}

fn draw_frequency_table(frame: &mut Frame, analysis: &FrequencyAnalysis, area: Rect) {
    let rows = analysis.top_entries.iter().enumerate().map(|(i, entry)| {
        Row::new(vec![
            (i + 1).to_string(),
            entry.word.clone(),
            entry.count.to_string(),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(9),
        ],
    )
    .header(Row::new(vec!["#", "Word", "Frequency"]).style(header_style()))
    .block(
        Block::default()
            .title(" Top 20 Most Frequent Words ")
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

fn draw_frequency_chart(frame: &mut Frame, analysis: &FrequencyAnalysis, area: Rect) {
    let bars: Vec<Bar> = analysis
        .chart_entries()
        .iter()
        .map(|entry| {
            Bar::default()
                .label(Line::from(entry.word.clone()))
                .value(entry.count as u64)
                .text_value(entry.count.to_string())
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Top 15 Words by Frequency ")
                .borders(Borders::ALL),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::White).bg(Color::Blue))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn draw_sidebar(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let mut lines: Vec<Line> = INSTRUCTIONS.iter().map(|l| Line::raw(*l)).collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled("Tips:", header_style()));
    lines.extend(TIPS.iter().map(|tip| Line::raw(format!("- {tip}"))));
    if let Some(topic) = view.topic.as_deref() {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("Current Topic: "),
            Span::styled(topic.to_string(), header_style().fg(Color::Green)),
        ]));
    }

    let sidebar = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Instructions ").borders(Borders::ALL));
    frame.render_widget(sidebar, area);
}

fn draw_status(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let mut spans = Vec::new();
    if let Some(status) = &view.status {
        let color = match status.kind {
            StatusKind::Info => Color::Blue,
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
        };
        spans.push(Span::styled(status.text.clone(), Style::default().fg(color)));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudboard_core::{update, AppState, Msg};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn short_text_shows_word_count_and_minimum_advisory() {
        let (state, _) = update(AppState::new(), Msg::TextEdited("just a few words".into()));
        let view = state.view();
        let (topic, text, upload) = (
            Field::single_line().unwrap(),
            Field::multi_line().unwrap(),
            Field::single_line().unwrap(),
        );
        let ui = UiContext {
            focus: Focus::Text,
            topic: &topic,
            text: &text,
            upload: &upload,
            preview: None,
        };

        let mut terminal = Terminal::new(TestBackend::new(200, 40)).unwrap();
        let mut editors = EditorAreas::default();
        terminal
            .draw(|frame| editors = draw(frame, &view, &ui))
            .unwrap();

        let rows = screen_rows(&terminal);
        let advisory = format!("less than {RECOMMENDED_MIN_WORDS} words");
        assert!(rows.iter().any(|row| row.contains(&advisory)));
        assert!(rows.iter().any(|row| row.contains("Current word count: 4 words")));
        assert!(editors.topic.is_some());
        assert!(editors.text.is_some());
        assert!(editors.upload.is_some());
    }

    #[test]
    fn hidden_tab_fields_report_no_area() {
        let (state, _) = update(AppState::new(), Msg::TabSelected(Tab::WordFrequency));
        let view = state.view();
        let (topic, text, upload) = (
            Field::single_line().unwrap(),
            Field::multi_line().unwrap(),
            Field::single_line().unwrap(),
        );
        let ui = UiContext {
            focus: Focus::Text,
            topic: &topic,
            text: &text,
            upload: &upload,
            preview: None,
        };

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut editors = EditorAreas::default();
        terminal
            .draw(|frame| editors = draw(frame, &view, &ui))
            .unwrap();

        assert!(editors.topic.is_some());
        assert_eq!(editors.text, None);
        assert_eq!(editors.upload, None);
        let rows = screen_rows(&terminal);
        assert!(rows.iter().any(|row| row.contains(FREQUENCY_PLACEHOLDER)));
    }
}
