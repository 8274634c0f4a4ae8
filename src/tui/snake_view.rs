//! Grid-chase screen

use crate::snake::{Cell, EndReason, RunStatus, SnakeGame};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

const HEAD: Color = Color::Rgb(219, 39, 119);
const BODY: Color = Color::Rgb(244, 114, 182);
const FIELD: Color = Color::Rgb(253, 242, 248);

/// Two terminal columns per grid cell keep the board roughly square
fn cell_span(game: &SnakeGame, cell: Cell) -> Span<'static> {
    if game.head() == Some(cell) {
        Span::styled("@@", Style::default().fg(Color::White).bg(HEAD))
    } else if game.body().contains(&cell) {
        Span::styled("  ", Style::default().bg(BODY))
    } else if game.target() == cell {
        Span::styled("()", Style::default().fg(Color::Red).bg(FIELD))
    } else if game.bonus().is_some_and(|b| b.cell == cell) {
        Span::styled(
            "**",
            Style::default()
                .fg(Color::Yellow)
                .bg(FIELD)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" .", Style::default().fg(Color::Gray).bg(FIELD))
    }
}

fn status_lines(game: &SnakeGame) -> Vec<Line<'static>> {
    match game.status() {
        RunStatus::Ready => vec![
            Line::raw("Ready to catch some cake?"),
            Line::raw("Space to start"),
        ],
        RunStatus::Running => vec![Line::raw("Arrow keys or WASD to move")],
        RunStatus::Ended => {
            let why = match game.end_reason() {
                Some(EndReason::HitWall) => "Bumped into the wall",
                Some(EndReason::HitSelf) => "Tangled up",
                Some(EndReason::TimeUp) | None => "Time's up",
            };
            vec![
                Line::styled(
                    format!("Game Over! {why}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::raw(format!(
                    "Final score: {} -> +{} VND",
                    game.score(),
                    game.prize()
                )),
                Line::raw("r: play again   Enter: back to celebration"),
            ]
        }
    }
}

/// Text of the whole snake screen
#[must_use]
pub fn lines(game: &SnakeGame) -> Vec<Line<'static>> {
    let mut lines = vec![Line::raw(format!(
        "Score: {} -> +{} VND    {}s",
        game.score(),
        game.prize(),
        game.remaining_secs()
    ))];

    let size = game.grid().size();
    for y in 0..size {
        let spans: Vec<_> = (0..size).map(|x| cell_span(game, Cell::new(x, y))).collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.extend(status_lines(game));
    lines
}

pub fn draw(frame: &mut Frame, game: &SnakeGame) {
    let paragraph = Paragraph::new(lines(game))
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" Cake Snake "));
    frame.render_widget(paragraph, frame.area());
}
