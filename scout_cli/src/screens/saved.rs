/// Saved screen - table of accepted candidates with removal
use crate::components::TableWidget;
use crate::screens::browse::field_or;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use scout_core::store::SavedSet;

pub const EMPTY_NOTICE: &str = "No potential candidates have been accepted yet.";

#[derive(Debug, Clone, Default)]
pub struct SavedScreenState {
    pub selected: usize,
    pub high_contrast: bool,
}

impl SavedScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Pull the selection back into range after a removal.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn selected_login(&self, saved: &SavedSet) -> Option<String> {
        saved.get(self.selected).map(|c| c.login.clone())
    }
}

pub struct SavedScreen<'a> {
    saved: &'a SavedSet,
    state: &'a SavedScreenState,
}

impl<'a> SavedScreen<'a> {
    pub fn new(saved: &'a SavedSet, state: &'a SavedScreenState) -> Self {
        Self { saved, state }
    }

    fn accent(&self) -> Color {
        if self.state.high_contrast {
            Color::White
        } else {
            Color::Rgb(129, 140, 248)
        }
    }

    fn border_style(&self) -> Style {
        if self.state.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl<'a> Widget for SavedScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(area);

        if self.saved.is_empty() {
            self.render_empty(chunks[0], buf);
        } else {
            self.render_table(chunks[0], buf);
        }
        self.render_footer(chunks[1], buf);
    }
}

impl<'a> SavedScreen<'a> {
    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Vec<String>> = self
            .saved
            .candidates()
            .iter()
            .map(|candidate| {
                vec![
                    candidate.login.clone(),
                    candidate.display_name().to_string(),
                    field_or(&candidate.location, "No location provided").to_string(),
                    field_or(&candidate.email, "No email provided").to_string(),
                    field_or(&candidate.company, "No company provided").to_string(),
                ]
            })
            .collect();

        let table = TableWidget::new(
            " Potential Candidates ",
            vec![
                ("Login", 16),
                ("Name", 22),
                ("Location", 20),
                ("Email", 24),
                ("Company", 20),
            ],
        )
        .rows(rows)
        .selected(self.state.selected)
        .high_contrast(self.state.high_contrast);

        Widget::render(table, area, buf);
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(
                " Potential Candidates ",
                Style::default()
                    .fg(self.accent())
                    .add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let paragraph = Paragraph::new(EMPTY_NOTICE)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        Widget::render(paragraph, inner, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let text = vec![Line::from(vec![
            Span::styled("[j/k] ", dim),
            Span::raw("Navigate  "),
            Span::styled("[d] ", dim),
            Span::raw("Remove  "),
            Span::styled("[1] ", dim),
            Span::raw("Browse  "),
            Span::styled("[q] ", dim),
            Span::raw("Quit"),
        ])];

        let paragraph = Paragraph::new(text);
        Widget::render(paragraph, area, buf);
    }
}
