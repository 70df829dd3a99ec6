use ratatui::style::Color;

/// Logical window width in pixels.
pub const WINDOW_WIDTH: i32 = 800;

/// Logical window height in pixels.
pub const WINDOW_HEIGHT: i32 = 800;

/// Side length of one grid cell in logical pixels.
pub const DIV: i32 = 25;

/// Playable grid width in cells. Two border cells are reserved per axis.
pub const GRID_WIDTH: i32 = WINDOW_WIDTH / DIV - 2;

/// Playable grid height in cells.
pub const GRID_HEIGHT: i32 = WINDOW_HEIGHT / DIV - 2;

/// Default simulation tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval accepted from the command line.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Frame interval for the capped run loop (~30 fps).
pub const FRAME_INTERVAL_MS: u64 = 33;

/// Brightness step used to derive the border and gridline shades from the
/// background.
const MOD: u8 = 20;

/// Background fill.
pub const BG_COLOR: Color = Color::Rgb(30, 30, 30);

/// Border strips.
pub const BORDER_COLOR: Color = Color::Rgb(30 + MOD * 2, 30 + MOD * 2, 30 + MOD * 2);

/// Internal gridlines.
pub const LINE_COLOR: Color = Color::Rgb(30 + MOD, 30 + MOD, 30 + MOD);

/// Snake body segments.
pub const SNAKE_COLOR: Color = Color::Yellow;

/// The segment at the tail cursor, drawn distinctly.
pub const SNAKE_TAIL_COLOR: Color = Color::Green;

/// The apple.
pub const APPLE_COLOR: Color = Color::Red;

/// HUD text.
pub const HUD_COLOR: Color = Color::White;

#[cfg(test)]
mod tests {
    use super::{DIV, GRID_HEIGHT, GRID_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH};

    #[test]
    fn grid_dimensions_leave_room_for_borders() {
        assert_eq!(GRID_WIDTH, WINDOW_WIDTH / DIV - 2);
        assert_eq!(GRID_HEIGHT, WINDOW_HEIGHT / DIV - 2);
        assert!(GRID_WIDTH > 0 && GRID_HEIGHT > 0);
    }
}
