//! TUI application state and logic

use super::rendering::{self, BoardLayout};
use crate::core::{NUM_CLUES_PER_CATEGORY, Showing, Target};
use crate::game::{Game, GameError};
use crate::loader::CategorySource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tokio::runtime::Runtime;

/// Keyboard selection on the grid (0-based clue row and category column)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
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

/// Application state
pub struct App<S> {
    pub game: Game<S>,
    runtime: Runtime,
    pub cursor: Cursor,
    pub messages: Vec<Message>,
    pub loading: bool,
    pub restart_requested: bool,
    pub should_quit: bool,
    /// Terminal area of the last drawn frame, used to map mouse clicks
    pub viewport: Rect,
}

impl<S: CategorySource> App<S> {
    #[must_use]
    pub fn new(game: Game<S>, runtime: Runtime) -> Self {
        Self {
            game,
            runtime,
            cursor: Cursor::default(),
            messages: vec![Message {
                text: "Welcome! Click a clue or press Enter to reveal it.".to_string(),
                style: MessageStyle::Info,
            }],
            loading: false,
            restart_requested: false,
            should_quit: false,
            viewport: Rect::default(),
        }
    }

    /// Deal the first round
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the round cannot be loaded.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.loading = true;
        let result = self.runtime.block_on(self.game.restart());
        self.loading = false;
        result?;

        self.cursor = Cursor::default();
        self.add_message("Board ready. Good luck!", MessageStyle::Success);
        Ok(())
    }

    /// Throw away the current board and deal a new round
    ///
    /// A failed load leaves the board empty and reports the error.
    pub fn restart(&mut self) {
        self.restart_requested = false;
        self.loading = true;
        let result = self.runtime.block_on(self.game.restart());
        self.loading = false;
        self.cursor = Cursor::default();

        match result {
            Ok(()) => self.add_message("New round dealt!", MessageStyle::Success),
            Err(err) => {
                log::warn!("Round setup failed: {err}");
                self.add_message(&format!("Could not load round: {err}"), MessageStyle::Error);
            }
        }
    }

    /// Apply a reveal to the board and describe what changed
    pub fn reveal(&mut self, target: Target) -> Option<Showing> {
        let state = self.game.handle_reveal(target)?;

        if let Target::Clue { row, col } = target {
            let title = self
                .game
                .board()
                .headers()
                .get(col)
                .cloned()
                .unwrap_or_default();
            self.add_message(
                &format!("{title} #{}: {state} revealed", row + 1),
                MessageStyle::Info,
            );
        }

        Some(state)
    }

    pub fn reveal_at_cursor(&mut self) -> Option<Showing> {
        self.reveal(Target::Clue {
            row: self.cursor.row,
            col: self.cursor.col,
        })
    }

    /// Move the selection, clamped to the grid
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let columns = self.game.board().columns();
        if columns == 0 {
            return;
        }

        self.cursor.row = self
            .cursor
            .row
            .saturating_add_signed(d_row)
            .min(NUM_CLUES_PER_CATEGORY - 1);
        self.cursor.col = self
            .cursor
            .col
            .saturating_add_signed(d_col)
            .min(columns - 1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.restart_requested = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.reveal_at_cursor();
            }
            _ => {}
        }
    }

    /// Map a mouse event through the last drawn layout
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = BoardLayout::for_screen(self.viewport, self.game.board().columns());
        let target = layout.target_at(mouse.column, mouse.row);

        if let Target::Clue { row, col } = target {
            self.cursor = Cursor { row, col };
        }
        self.reveal(target);
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

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if the first round
/// cannot be loaded, or if there's an I/O error during rendering or event
/// handling.
pub fn run_tui<S: CategorySource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: CategorySource,
{
    app.loading = true;
    terminal.draw(|f| rendering::ui(f, &app))?;
    app.start()?;

    loop {
        let frame = terminal.draw(|f| rendering::ui(f, &app))?;
        app.viewport = frame.area;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.restart_requested {
            app.loading = true;
            terminal.draw(|f| rendering::ui(f, &app))?;
            app.restart();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
