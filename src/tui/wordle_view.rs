//! Puzzle screen

use crate::core::{TileState, WORD_LENGTH};
use crate::wordle::{GameStatus, WordleGame};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

const INK: Color = Color::Rgb(93, 58, 94);

fn tile_style(state: TileState) -> Style {
    let bg = match state {
        TileState::Correct => Color::Green,
        TileState::Present => Color::Yellow,
        TileState::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {letter} "), style)
}

/// Text of the whole puzzle screen
#[must_use]
pub fn lines(game: &WordleGame) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(hint) = game.visible_hint() {
        lines.push(Line::styled(
            format!("Hint: {hint}  (Esc to close)"),
            Style::default().fg(Color::Magenta),
        ));
    }
    lines.push(Line::default());

    let empty = Style::default().fg(INK).bg(Color::Gray);
    let typing = Style::default().fg(INK).bg(Color::LightMagenta);

    for (guess, feedback) in game.rows() {
        let spans: Vec<_> = guess
            .text()
            .chars()
            .zip(feedback.tiles())
            .flat_map(|(letter, &state)| [tile(letter, tile_style(state)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    let mut blank_rows = game.remaining_attempts();
    if game.status() == GameStatus::Playing && blank_rows > 0 {
        let typed: Vec<char> = game.input().chars().collect();
        let spans: Vec<_> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let t = typed
                    .get(i)
                    .map_or_else(|| tile(' ', empty), |&c| tile(c, typing));
                [t, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        blank_rows -= 1;
    }
    for _ in 0..blank_rows {
        let spans: Vec<_> = (0..WORD_LENGTH)
            .flat_map(|_| [tile(' ', empty), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    match game.status() {
        GameStatus::Won => {
            lines.push(Line::styled(
                "Correct! You got it!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled("+10 Birthday Luck", Style::default().fg(INK)));
        }
        GameStatus::Lost => {
            lines.push(Line::styled(
                format!("Out of tries! The word was {}", game.target()),
                Style::default().fg(INK),
            ));
            lines.push(Line::raw("Esc to leave"));
        }
        GameStatus::Playing => {
            lines.push(Line::raw("Type letters, Enter to guess, Backspace to erase"));
        }
    }

    lines
}

pub fn draw(frame: &mut Frame, game: &WordleGame) {
    let paragraph = Paragraph::new(lines(game))
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" Birthday Wordle "));
    frame.render_widget(paragraph, frame.area());
}
