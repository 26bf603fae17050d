use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::SIDEBAR_WIDTH;

/// Top-level regions of the dashboard.
pub struct DashboardAreas {
    pub topic: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub sidebar: Rect,
    pub status: Rect,
}

pub fn dashboard(area: Rect) -> DashboardAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(SIDEBAR_WIDTH)])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // topic
            Constraint::Length(3), // tab bar
            Constraint::Min(6),    // active tab
            Constraint::Length(1), // status bar
        ])
        .split(columns[0]);

    DashboardAreas {
        topic: rows[0],
        tabs: rows[1],
        body: rows[2],
        sidebar: columns[1],
        status: rows[3],
    }
}

pub struct TextTabAreas {
    pub editor: Rect,
    pub stats: Rect,
    pub upload: Rect,
}

pub fn text_tab(area: Rect) -> TextTabAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .split(area);
    TextTabAreas {
        editor: rows[0],
        stats: rows[1],
        upload: rows[2],
    }
}

pub struct CloudTabAreas {
    pub header: Rect,
    pub canvas: Rect,
    pub footer: Rect,
}

pub fn cloud_tab(area: Rect) -> CloudTabAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(area);
    CloudTabAreas {
        header: rows[0],
        canvas: rows[1],
        footer: rows[2],
    }
}

pub struct FrequencyTabAreas {
    pub header: Rect,
    pub table: Rect,
    pub chart: Rect,
    pub metrics: [Rect; 3],
}

pub fn frequency_tab(area: Rect) -> FrequencyTabAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    let metrics = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[2]);

    FrequencyTabAreas {
        header: rows[0],
        table: panes[0],
        chart: panes[1],
        metrics: [metrics[0], metrics[1], metrics[2]],
    }
}
