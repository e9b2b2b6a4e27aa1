/// Browse screen - one candidate at a time with accept/reject
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use scout_core::session::BrowseSession;
use scout_core::types::Candidate;

pub const EXHAUSTED_NOTICE: &str = "No more candidates available";
pub const LOADING_NOTICE: &str = "Fetching candidates...";

/// Placeholder text for a nullable profile field.
pub fn field_or<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value.as_deref().unwrap_or(placeholder)
}

pub struct BrowseScreen<'a> {
    session: &'a BrowseSession,
    high_contrast: bool,
}

impl<'a> BrowseScreen<'a> {
    pub fn new(session: &'a BrowseSession, high_contrast: bool) -> Self {
        Self {
            session,
            high_contrast,
        }
    }

    fn accent(&self) -> Color {
        if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(129, 140, 248)
        }
    }

    fn border_style(&self) -> Style {
        if self.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl<'a> Widget for BrowseScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(area);

        match self.session {
            BrowseSession::Loading => self.render_notice(chunks[0], LOADING_NOTICE, buf),
            BrowseSession::Browsing { .. } => {
                if let Some(candidate) = self.session.current() {
                    self.render_card(chunks[0], candidate, buf);
                }
            }
            BrowseSession::Exhausted => self.render_notice(chunks[0], EXHAUSTED_NOTICE, buf),
            BrowseSession::Failed { message } => self.render_notice(chunks[0], message, buf),
        }

        self.render_footer(chunks[1], buf);
    }
}

impl<'a> BrowseScreen<'a> {
    fn render_card(&self, area: Rect, candidate: &Candidate, buf: &mut Buffer) {
        let accent = self.accent();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(
                " Candidate ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let dim = Style::default().add_modifier(Modifier::DIM);
        let text = vec![
            Line::from(Span::styled(
                format!("{} ({})", candidate.display_name(), candidate.login),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Avatar: ", dim),
                Span::raw(candidate.avatar_url.as_str()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Location: ", dim),
                Span::raw(field_or(&candidate.location, "No location provided")),
            ]),
            Line::from(vec![
                Span::styled("Email: ", dim),
                Span::raw(field_or(&candidate.email, "No email provided")),
            ]),
            Line::from(vec![
                Span::styled("Company: ", dim),
                Span::raw(field_or(&candidate.company, "No company provided")),
            ]),
            Line::from(""),
            Line::from(Span::styled("Bio:", dim)),
            Line::from(field_or(&candidate.bio, "No bio provided")),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} candidates remaining in this batch", self.session.remaining()),
                dim,
            )),
        ];

        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        Widget::render(paragraph, inner, buf);
    }

    fn render_notice(&self, area: Rect, notice: &str, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(
                " Candidate Search ",
                Style::default()
                    .fg(self.accent())
                    .add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let paragraph = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        Widget::render(paragraph, inner, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let text = vec![Line::from(vec![
            Span::styled("[-] ", dim),
            Span::raw("Reject  "),
            Span::styled("[+] ", dim),
            Span::raw("Accept  "),
            Span::styled("[2] ", dim),
            Span::raw("Saved  "),
            Span::styled("[?] ", dim),
            Span::raw("Help  "),
            Span::styled("[q] ", dim),
            Span::raw("Quit"),
        ])];

        let paragraph = Paragraph::new(text);
        Widget::render(paragraph, area, buf);
    }
}
