use crate::keymap::KeyMap;
/// Top-level TUI event loop and input handler
use crate::screens::{BrowseScreen, SavedScreen, SavedScreenState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Terminal,
};
use scout_core::directory::{self, GithubDirectory};
use scout_core::session::{self, BrowseSession};
use scout_core::store::{JsonFileStore, SavedSet};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Browse,
    Saved,
    Help,
}

pub struct AppState {
    screen: Screen,
    session: BrowseSession,
    saved: SavedSet,
    saved_screen: SavedScreenState,
    store: JsonFileStore,
    high_contrast: bool,
    last_action: String,
    should_quit: bool,
}

impl AppState {
    fn new(store: JsonFileStore) -> Self {
        // The SavedSet snapshot is taken before any fetch and is never
        // refreshed against the file mid-session.
        let saved = SavedSet::load(&store);

        Self {
            screen: Screen::Browse,
            session: BrowseSession::Loading,
            saved,
            saved_screen: SavedScreenState::new(),
            store,
            high_contrast: false,
            last_action: "Ready".to_string(),
            should_quit: false,
        }
    }

    fn set_last_action(&mut self, action: String) {
        self.last_action = action;
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: crossterm::event::KeyModifiers) {
        if KeyMap::is_quit(code, modifiers) {
            if self.screen != Screen::Browse {
                self.screen = Screen::Browse;
            } else {
                self.should_quit = true;
            }
            return;
        }

        if KeyMap::is_help(code) {
            self.screen = if self.screen == Screen::Help {
                Screen::Browse
            } else {
                Screen::Help
            };
            return;
        }

        if KeyMap::is_toggle_theme(code) {
            self.high_contrast = !self.high_contrast;
            self.saved_screen.high_contrast = self.high_contrast;
            return;
        }

        if KeyMap::is_browse_screen(code) {
            self.screen = Screen::Browse;
            return;
        }

        if KeyMap::is_saved_screen(code) {
            self.open_saved_screen();
            return;
        }

        if KeyMap::is_switch_screen(code) {
            match self.screen {
                Screen::Browse => self.open_saved_screen(),
                _ => self.screen = Screen::Browse,
            }
            return;
        }

        match self.screen {
            Screen::Browse => self.handle_browse_key(code),
            Screen::Saved => self.handle_saved_key(code),
            Screen::Help => {
                // Any key closes help
                if matches!(code, KeyCode::Char(_) | KeyCode::Enter | KeyCode::Esc) {
                    self.screen = Screen::Browse;
                }
            }
        }
    }

    fn open_saved_screen(&mut self) {
        self.saved_screen.clamp(self.saved.len());
        self.screen = Screen::Saved;
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        if KeyMap::is_accept(code) {
            let login = match self.session.current() {
                Some(candidate) => candidate.login.clone(),
                None => return,
            };
            if self.session.accept(&mut self.saved) {
                self.persist_saved();
                self.set_last_action(format!("Accepted {}", login));
            } else {
                self.set_last_action(format!("{} was already saved", login));
            }
        } else if KeyMap::is_reject(code) {
            let login = match self.session.current() {
                Some(candidate) => candidate.login.clone(),
                None => return,
            };
            self.session.reject();
            self.set_last_action(format!("Rejected {}", login));
        }
    }

    fn handle_saved_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            self.saved_screen.move_down(self.saved.len());
        } else if KeyMap::is_up(code) {
            self.saved_screen.move_up();
        } else if KeyMap::is_remove(code) {
            // Immediate removal, no confirmation step.
            if let Some(login) = self.saved_screen.selected_login(&self.saved) {
                self.saved.remove(&login);
                self.persist_saved();
                self.saved_screen.clamp(self.saved.len());
                self.set_last_action(format!("Removed {}", login));
            }
        }
    }

    fn persist_saved(&mut self) {
        if let Err(err) = self.saved.persist(&self.store) {
            self.set_last_action(format!("Failed to save: {}", err));
        }
    }
}

/// Run the whole fetch on a throwaway runtime: one listing call, the
/// concurrent detail fan-out, and resolution into a session.
fn fetch_session(saved: &SavedSet) -> BrowseSession {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            log::warn!("failed to start fetch runtime: {}", err);
            return BrowseSession::failed(session::FETCH_FAILED);
        }
    };

    let logins = saved.logins();
    let outcome = runtime.block_on(async {
        let github = GithubDirectory::new()?;
        directory::fetch_batch(&github, &logins).await
    });

    BrowseSession::resolve(outcome)
}

pub fn run_tui(store_path: PathBuf) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(JsonFileStore::new(store_path));
    let mut pending_fetch = true;

    // Main loop
    while !app.should_quit {
        terminal.draw(|f| draw(f, &app))?;

        if pending_fetch {
            pending_fetch = false;

            // Render the blocking-fetch modal immediately, then fetch.
            terminal.draw(|f| {
                let size = f.area();
                draw(f, &app);
                render_modal(
                    f,
                    size,
                    "FETCHING",
                    "Contacting the profile directory. The whole batch completes before anything is shown.",
                    app.high_contrast,
                );
            })?;

            app.session = fetch_session(&app.saved);
            let action = match &app.session {
                BrowseSession::Browsing { queue, .. } => {
                    format!("Fetched {} candidates", queue.len())
                }
                BrowseSession::Failed { message } => message.clone(),
                _ => "Ready".to_string(),
            };
            app.set_last_action(action);
            continue;
        }

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code, key.modifiers);
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw(f: &mut ratatui::Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    match app.screen {
        Screen::Browse => {
            let browse = BrowseScreen::new(&app.session, app.high_contrast);
            f.render_widget(browse, chunks[0]);
        }
        Screen::Saved => {
            let saved = SavedScreen::new(&app.saved, &app.saved_screen);
            f.render_widget(saved, chunks[0]);
        }
        Screen::Help => {
            render_help(f, chunks[0], app.high_contrast);
        }
    }

    render_nav_bar(f, chunks[1], app);
}

fn accent_color(high_contrast: bool) -> Color {
    if high_contrast {
        Color::White
    } else {
        Color::Rgb(129, 140, 248)
    }
}

fn render_nav_bar(f: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let accent = accent_color(app.high_contrast);

    let screen_label = |screen: Screen, label: &str| -> Span {
        if app.screen == screen {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(accent))
        }
    };

    let text = Line::from(vec![
        screen_label(Screen::Browse, "[1] Candidate Search"),
        Span::raw(" "),
        screen_label(Screen::Saved, "[2] Potential Candidates"),
        Span::raw("  "),
        Span::styled("Status: ", Style::default().add_modifier(Modifier::DIM)),
        Span::styled(app.last_action.as_str(), Style::default().fg(accent)),
        Span::raw("  "),
        Span::styled(
            format!("Saved: {}", app.saved.len()),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    let paragraph = Paragraph::new(text)
        .style(Style::default().bg(Color::Black))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

fn render_help(f: &mut ratatui::Frame, area: Rect, high_contrast: bool) {
    let accent = accent_color(high_contrast);

    let border_style = if high_contrast {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            " Help - Keybindings ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let help_items = KeyMap::help_text();
    let mut lines = vec![
        Line::from(Span::styled(
            "Candidate Scout",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, desc) in help_items {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", key),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}

fn render_modal(
    f: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    message: &str,
    high_contrast: bool,
) {
    let accent = accent_color(high_contrast);

    // Center the modal
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical[1]);

    let modal_area = horizontal[1];

    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let text = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left);
    f.render_widget(text, inner);
}
