//! TUI application state and logic

use crate::core::TileId;
use crate::output::formatters::{feedback_message, summary_message};
use crate::practice::{Advance, Command, Response, Session, SubmitOutcome};
use crate::speech::Announcer;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub announcer: Box<dyn Announcer>,
    pub messages: Vec<Message>,
    /// Tile under the keyboard cursor
    pub selected: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What the Enter key does right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Building,
    Solved,
    Finished,
}

impl App {
    #[must_use]
    pub fn new(session: Session, announcer: Box<dyn Announcer>) -> Self {
        Self {
            session,
            announcer,
            messages: vec![Message {
                text: "Listen to the word, then build it from the tiles.".to_string(),
                style: MessageStyle::Info,
            }],
            selected: 0,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.session.round() {
            None => InputMode::Finished,
            Some(round) if round.is_solved() => InputMode::Solved,
            Some(_) => InputMode::Building,
        }
    }

    /// Forward a gesture to the session and report the result
    pub fn apply(&mut self, command: Command) -> Response {
        let response = self.session.dispatch(command, self.announcer.as_mut());
        match &response {
            Response::Submitted(outcome) => {
                if let Some(text) = feedback_message(outcome) {
                    let style = if matches!(outcome, SubmitOutcome::Correct { .. }) {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.add_message(text, style);
                }
            }
            Response::Advanced(Advance::Finished(summary)) => {
                self.add_message(&summary_message(summary), MessageStyle::Success);
                self.add_message("Press Enter to play again or Esc to quit.", MessageStyle::Info);
            }
            Response::Advanced(Advance::NextWord) | Response::Restarted => {
                self.selected = 0;
                self.hear();
            }
            _ => {}
        }
        response
    }

    pub fn hear(&mut self) {
        self.session.dispatch(Command::Hear, self.announcer.as_mut());
    }

    /// Enter: submit, move on, or start over depending on the round
    pub fn confirm(&mut self) {
        let command = match self.input_mode() {
            InputMode::Building => Command::Submit,
            InputMode::Solved => Command::Next,
            InputMode::Finished => Command::PlayAgain,
        };
        self.apply(command);
    }

    fn pool_len(&self) -> usize {
        self.session.round().map_or(0, |round| round.pool().len())
    }

    pub fn move_selection(&mut self, forward: bool) {
        let len = self.pool_len();
        if len == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }

    pub fn place_selected(&mut self) {
        if self.apply(Command::PlaceTile(TileId::new(self.selected))) == Response::Ignored {
            self.add_message("That tile can't go anywhere.", MessageStyle::Error);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.confirm(),
            KeyCode::Tab => self.hear(),
            KeyCode::Left => self.move_selection(false),
            KeyCode::Right => self.move_selection(true),
            KeyCode::Char(' ') => self.place_selected(),
            KeyCode::Backspace => {
                self.apply(Command::RemoveLast);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(slot) = slot_for_key(c) {
                    self.apply(Command::RemoveTile(slot));
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.apply(Command::PlaceLetter(c.to_ascii_lowercase() as u8))
                    == Response::Ignored
                    && self.input_mode() == InputMode::Building
                {
                    self.add_message(&format!("No free '{c}' tile or open slot."), MessageStyle::Error);
                }
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Answer slot removed by a digit key; only the first nine slots have one
#[must_use]
pub fn slot_for_key(key: char) -> Option<usize> {
    match key {
        '1'..='9' => key.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

/// Digit shown under an answer slot, if it has a key
#[must_use]
pub fn slot_key_label(slot: usize) -> Option<char> {
    match slot {
        0..=8 => char::from_digit(slot as u32 + 1, 10),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.hear();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
