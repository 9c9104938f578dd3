//! TUI rendering with ratatui
//!
//! The board layout is computed by [`BoardLayout::for_screen`], which both the
//! renderer and the mouse handler use, so a click always lands on the cell
//! that was drawn there.

use super::app::{App, MessageStyle};
use crate::core::{Clue, NUM_CLUES_PER_CATEGORY, Showing, Target};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const BOARD_BLUE: Color = Color::Rgb(6, 12, 233);
const CLUE_GOLD: Color = Color::Rgb(255, 204, 0);

/// Screen split into header, board, messages and status bar
fn screen_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(5), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Cell rectangles of the clue grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardLayout {
    /// One rect per category title
    pub headers: Vec<Rect>,
    /// `cells[row][col]`
    pub cells: Vec<Vec<Rect>>,
}

impl BoardLayout {
    /// Layout of a board with `columns` categories inside `area`
    #[must_use]
    pub fn new(area: Rect, columns: usize) -> Self {
        if columns == 0 {
            return Self::default();
        }

        let mut row_constraints = vec![Constraint::Length(4)];
        row_constraints.extend(std::iter::repeat_n(
            Constraint::Fill(1),
            NUM_CLUES_PER_CATEGORY,
        ));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);

        let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];
        let split_row = |row: Rect| -> Vec<Rect> {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(column_constraints.clone())
                .split(row)
                .to_vec()
        };

        Self {
            headers: split_row(rows[0]),
            cells: rows[1..].iter().map(|&row| split_row(row)).collect(),
        }
    }

    /// Layout of the board region for a full terminal frame
    #[must_use]
    pub fn for_screen(screen: Rect, columns: usize) -> Self {
        Self::new(screen_chunks(screen)[1], columns)
    }

    /// What lies under terminal position (`x`, `y`)
    #[must_use]
    pub fn target_at(&self, x: u16, y: u16) -> Target {
        let position = Position::new(x, y);

        if let Some(col) = self.headers.iter().position(|r| r.contains(position)) {
            return Target::Header { col };
        }

        for (row, cells) in self.cells.iter().enumerate() {
            if let Some(col) = cells.iter().position(|r| r.contains(position)) {
                return Target::Clue { row, col };
            }
        }

        Target::Outside
    }
}

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let [header, board, messages, status] = screen_chunks(f.area());

    render_header(f, app, header);
    render_board(f, app, board);
    render_messages(f, app, messages);
    render_status(f, app, status);
}

fn render_header<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = format!("JEOPARDY!  Round {}", app.game.rounds_started().max(1));
    let header = Paragraph::new(title)
        .style(Style::default().fg(CLUE_GOLD).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let board = app.game.board();

    if app.loading || board.is_empty() {
        let text = if app.loading {
            "Loading categories..."
        } else {
            "No board dealt. Press 'r' to deal a new round."
        };
        let placeholder = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(placeholder, area);
        return;
    }

    let layout = BoardLayout::new(area, board.columns());

    for (title, &rect) in board.headers().iter().zip(&layout.headers) {
        let cell = Paragraph::new(title.to_uppercase())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(BOARD_BLUE)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(cell, rect);
    }

    for (row, (slots, rects)) in board.rows().iter().zip(&layout.cells).enumerate() {
        for (col, (slot, &rect)) in slots.iter().zip(rects).enumerate() {
            let selected = app.cursor.row == row && app.cursor.col == col;
            f.render_widget(clue_cell(slot.as_ref(), selected), rect);
        }
    }
}

fn clue_cell(slot: Option<&Clue>, selected: bool) -> Paragraph<'_> {
    let (text, style) = match slot {
        None => ("", Style::default().bg(Color::Black)),
        Some(clue) => {
            let style = match clue.showing() {
                Showing::None => Style::default()
                    .fg(CLUE_GOLD)
                    .bg(BOARD_BLUE)
                    .add_modifier(Modifier::BOLD),
                Showing::Question => Style::default().fg(Color::White).bg(BOARD_BLUE),
                Showing::Answer => Style::default()
                    .fg(Color::Green)
                    .bg(BOARD_BLUE)
                    .add_modifier(Modifier::ITALIC),
            };
            (clue.display_text(), style)
        }
    };

    let block = if selected {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(CLUE_GOLD))
    } else {
        Block::default().borders(Borders::ALL)
    };

    Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(style)
        .block(block)
}

fn render_messages<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(3)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let board = app.game.board();
    let progress = Line::from(vec![
        Span::raw("Answered: "),
        Span::styled(
            format!(
                "{}/{}",
                board.count_showing(Showing::Answer),
                board.clue_count()
            ),
            Style::default().fg(Color::Green),
        ),
    ]);
    f.render_widget(Paragraph::new(progress).alignment(Alignment::Center), chunks[0]);

    let help = Paragraph::new("←↑→↓/hjkl: Move | Enter/Click: Reveal | r: Restart | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NUM_CATEGORIES, Target};
    use crate::game::Game;
    use crate::loader::OfflineSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn started_app() -> App<OfflineSource> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let source = OfflineSource::embedded().unwrap();
        let max_id = source.max_id();
        let game = Game::new(source, max_id, StdRng::seed_from_u64(21));
        let mut app = App::new(game, runtime);
        app.start().unwrap();
        app
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content.iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn layout_has_six_headers_and_five_rows_of_six() {
        let layout = BoardLayout::new(Rect::new(0, 0, 120, 30), NUM_CATEGORIES);

        assert_eq!(layout.headers.len(), 6);
        assert_eq!(layout.cells.len(), 5);
        assert!(layout.cells.iter().all(|row| row.len() == 6));
    }

    #[test]
    fn layout_of_empty_board_has_no_cells() {
        let layout = BoardLayout::new(Rect::new(0, 0, 120, 30), 0);
        assert!(layout.headers.is_empty());
        assert_eq!(layout.target_at(10, 10), Target::Outside);
    }

    #[test]
    fn target_at_maps_cells_headers_and_outside() {
        let area = Rect::new(0, 3, 120, 30);
        let layout = BoardLayout::new(area, NUM_CATEGORIES);

        let header = layout.headers[4];
        assert_eq!(layout.target_at(header.x, header.y), Target::Header { col: 4 });

        let cell = layout.cells[3][1];
        assert_eq!(
            layout.target_at(cell.x + cell.width - 1, cell.y + cell.height - 1),
            Target::Clue { row: 3, col: 1 }
        );

        assert_eq!(layout.target_at(5, 0), Target::Outside);
        assert_eq!(layout.target_at(5, 200), Target::Outside);
    }

    #[test]
    fn renders_titles_and_placeholders() {
        let app = started_app();
        let mut terminal = Terminal::new(TestBackend::new(160, 45)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("JEOPARDY!"));
        let first_title = app.game.board().headers()[0].to_uppercase();
        let first_word = first_title.split_whitespace().next().unwrap();
        assert!(text.contains(first_word));
        assert!(text.contains('?'));
    }

    #[test]
    fn renders_revealed_answer() {
        let mut app = started_app();
        app.reveal(Target::Clue { row: 0, col: 0 });
        app.reveal(Target::Clue { row: 0, col: 0 });
        let answer = app.game.board().cell(0, 0).unwrap().answer().to_string();

        let mut terminal = Terminal::new(TestBackend::new(160, 45)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        let first_word = answer.split_whitespace().next().unwrap();
        assert!(text.contains(first_word));
    }

    #[test]
    fn renders_loading_placeholder() {
        let mut app = started_app();
        app.loading = true;

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(terminal.backend().buffer()).contains("Loading categories..."));
    }
}
