use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::apple::Apple;
use crate::config::{
    APPLE_COLOR, BG_COLOR, BORDER_COLOR, DIV, HUD_COLOR, LINE_COLOR, SNAKE_COLOR, SNAKE_TAIL_COLOR,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::field::{FieldGeometry, PixelPoint};
use crate::game::{EndReason, GameState, GameStatus};
use crate::snake::Snake;

/// Field width in terminal cells, one cell per `DIV` pixels.
const FIELD_COLS: u16 = (WINDOW_WIDTH / DIV) as u16;

/// Field height in terminal cells.
const FIELD_ROWS: u16 = (WINDOW_HEIGHT / DIV) as u16;

const GLYPH_SEGMENT: &str = "█";
const GLYPH_APPLE: &str = "●";
const GLYPH_LINE_V: &str = "│";
const GLYPH_LINE_H: &str = "─";

/// Renders one full frame: background, field, snake, apple, HUD, and the
/// pause or game-over overlay.
pub fn render(frame: &mut Frame<'_>, state: &GameState, geometry: &FieldGeometry) {
    let area = frame.area();
    let field = field_area(area);

    frame.render_widget(Block::new().style(Style::new().bg(BG_COLOR)), field);

    draw_field(frame, field, geometry);
    draw_apple(frame, field, &state.apple);
    draw_snake(frame, field, &state.snake);
    draw_hud(frame, area, field, state);

    match state.status {
        GameStatus::Paused => draw_overlay(frame, field, "PAUSED (Esc to resume)"),
        GameStatus::Ended => {
            let message = match state.end_reason() {
                Some(EndReason::BoardFull) => {
                    format!("YOU WIN! Score: {} (press a key)", state.score)
                }
                _ => format!("CRASH! Score: {} (press a key)", state.score),
            };
            draw_overlay(frame, field, &message);
        }
        GameStatus::Running => {}
    }
}

/// Draws the border strips and internal gridlines from the precomputed
/// geometry.
fn draw_field(frame: &mut Frame<'_>, field: Rect, geometry: &FieldGeometry) {
    let buffer = frame.buffer_mut();

    let border_style = Style::new().bg(BORDER_COLOR);
    for rect in geometry.borders {
        for py in (rect.y..rect.y + rect.h).step_by(DIV as usize) {
            for px in (rect.x..rect.x + rect.w).step_by(DIV as usize) {
                if let Some((x, y)) = pixel_to_cell(field, PixelPoint { x: px, y: py }) {
                    buffer.set_string(x, y, " ", border_style);
                }
            }
        }
    }

    let line_style = Style::new().fg(LINE_COLOR).bg(BG_COLOR);
    for line in &geometry.lines {
        if line.x1 == line.x2 {
            for py in (line.y1..line.y2).step_by(DIV as usize) {
                if let Some((x, y)) = pixel_to_cell(field, PixelPoint { x: line.x1, y: py }) {
                    buffer.set_string(x, y, GLYPH_LINE_V, line_style);
                }
            }
        } else {
            for px in (line.x1..line.x2).step_by(DIV as usize) {
                if let Some((x, y)) = pixel_to_cell(field, PixelPoint { x: px, y: line.y1 }) {
                    buffer.set_string(x, y, GLYPH_LINE_H, line_style);
                }
            }
        }
    }
}

/// Draws every body segment, with the segment at the tail cursor in its own
/// color.
fn draw_snake(frame: &mut Frame<'_>, field: Rect, snake: &Snake) {
    let buffer = frame.buffer_mut();

    for (index, segment) in snake.body().iter().enumerate() {
        let Some((x, y)) = pixel_to_cell(field, segment.pos()) else {
            continue;
        };

        let color = if index == snake.tail_index() {
            SNAKE_TAIL_COLOR
        } else {
            SNAKE_COLOR
        };
        buffer.set_string(x, y, GLYPH_SEGMENT, Style::new().fg(color).bg(BG_COLOR));
    }
}

fn draw_apple(frame: &mut Frame<'_>, field: Rect, apple: &Apple) {
    let Some((x, y)) = pixel_to_cell(field, apple.shape().pos()) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_APPLE, Style::new().fg(APPLE_COLOR).bg(BG_COLOR));
}

fn draw_hud(frame: &mut Frame<'_>, area: Rect, field: Rect, state: &GameState) {
    let y = field.y.saturating_add(field.height);
    if y >= area.bottom() {
        return;
    }

    let text = format!(" Score: {}  Length: {} ", state.score, state.snake.len());
    frame
        .buffer_mut()
        .set_string(field.x, y, text, Style::new().fg(HUD_COLOR));
}

/// Writes a centered single-line banner over the middle of the field.
fn draw_overlay(frame: &mut Frame<'_>, field: Rect, text: &str) {
    let width = text.width().min(usize::from(field.width)) as u16;
    let x = field.x + (field.width.saturating_sub(width)) / 2;
    let y = field.y + field.height / 2;

    frame.buffer_mut().set_string(
        x,
        y,
        text,
        Style::new()
            .fg(HUD_COLOR)
            .bg(BORDER_COLOR)
            .add_modifier(Modifier::BOLD),
    );
}

/// Centers the field in the available terminal area, reserving one row
/// beneath it for the HUD.
fn field_area(area: Rect) -> Rect {
    let width = FIELD_COLS.min(area.width);
    let height = FIELD_ROWS.min(area.height.saturating_sub(1));

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height.saturating_sub(1) - height) / 2,
        width,
        height,
    }
}

/// Maps a logical pixel position to the terminal cell covering it, or
/// `None` when it falls outside the visible field.
fn pixel_to_cell(field: Rect, p: PixelPoint) -> Option<(u16, u16)> {
    let col = u16::try_from(p.x / DIV).ok()?;
    let row = u16::try_from(p.y / DIV).ok()?;
    if col >= field.width || row >= field.height {
        return None;
    }

    Some((field.x + col, field.y + row))
}
