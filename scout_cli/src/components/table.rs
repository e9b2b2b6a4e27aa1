/// Reusable selectable table with a position scrollbar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Row, Table, Widget},
};

/// One column: header label plus fixed width in cells.
pub type Column = (&'static str, u16);

pub struct TableWidget<'a> {
    title: &'a str,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    selected: usize,
    high_contrast: bool,
}

impl<'a> TableWidget<'a> {
    pub fn new(title: &'a str, columns: Vec<Column>) -> Self {
        Self {
            title,
            columns,
            rows: Vec::new(),
            selected: 0,
            high_contrast: false,
        }
    }

    pub fn rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index.min(self.rows.len().saturating_sub(1));
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    fn accent(&self) -> Color {
        if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(129, 140, 248) // Indigo #818CF8
        }
    }
}

impl<'a> Widget for TableWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = self.accent();
        let border_style = if self.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                self.title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let header = Row::new(self.columns.iter().map(|(label, _)| {
            Span::styled(*label, Style::default().fg(accent).add_modifier(Modifier::BOLD))
        }))
        .height(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, cells)| {
                let style = if i == self.selected {
                    Style::default()
                        .bg(accent)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Row::new(cells.iter().map(|c| c.as_str())).style(style)
            })
            .collect();

        let widths = self.columns.iter().map(|(_, width)| *width);
        let table = Table::new(rows, widths).header(header).block(block);
        Widget::render(table, area, buf);

        if area.height > 4 {
            self.render_scrollbar(area, buf);
        }
    }
}

impl<'a> TableWidget<'a> {
    fn render_scrollbar(&self, area: Rect, buf: &mut Buffer) {
        let total = self.rows.len();
        let viewport = (area.height.saturating_sub(3)) as usize; // Borders and header
        if total == 0 || total <= viewport {
            return;
        }

        let x = area.right().saturating_sub(1);
        let track_top = area.top() + 2;
        let track_bottom = area.bottom().saturating_sub(1);
        let track_height = track_bottom.saturating_sub(track_top);
        if track_height == 0 {
            return;
        }

        let position =
            (self.selected as f32 / total.max(1) as f32 * track_height as f32) as u16;
        let thumb_y = track_top + position.min(track_height.saturating_sub(1));

        for y in track_top..track_bottom {
            if let Some(cell) = buf.cell_mut((x, y)) {
                if y == thumb_y {
                    cell.set_char('█').set_fg(self.accent());
                } else {
                    cell.set_char('│').set_fg(Color::DarkGray);
                }
            }
        }
    }
}
