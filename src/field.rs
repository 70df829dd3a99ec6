use crate::config::{DIV, GRID_HEIGHT, GRID_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Position in playable-grid cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    /// Returns true when the point lies inside the playable area.
    #[must_use]
    pub fn is_within_grid(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_WIDTH && self.y < GRID_HEIGHT
    }
}

/// Position in logical window pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

/// Axis-aligned rectangle in logical window pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    /// Top-left corner.
    #[must_use]
    pub fn pos(self) -> PixelPoint {
        PixelPoint {
            x: self.x,
            y: self.y,
        }
    }

    /// Moves the rectangle so its top-left corner is `p`.
    pub fn set_pos(&mut self, p: PixelPoint) {
        self.x = p.x;
        self.y = p.y;
    }
}

/// Line segment in logical window pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelLine {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Maps a playable-grid point to its pixel position inside the border.
///
/// Valid for `0 <= p.x <= GRID_WIDTH` and `0 <= p.y <= GRID_HEIGHT`; passing
/// anything else is a programming error.
#[must_use]
pub fn grid_to_coord(p: GridPoint) -> PixelPoint {
    debug_assert!(
        p.x >= 0 && p.x <= GRID_WIDTH && p.y >= 0 && p.y <= GRID_HEIGHT,
        "point doesn't match the grid: {p:?}"
    );
    PixelPoint {
        x: (p.x + 1) * DIV,
        y: (p.y + 1) * DIV,
    }
}

/// Inverse of [`grid_to_coord`], valid only for pixels strictly inside the
/// border strips.
#[must_use]
pub fn coord_to_grid(p: PixelPoint) -> GridPoint {
    debug_assert!(
        p.x >= DIV && p.x < WINDOW_WIDTH - DIV && p.y >= DIV && p.y < WINDOW_HEIGHT - DIV,
        "coord not within border: {p:?}"
    );
    GridPoint {
        x: p.x / DIV - 1,
        y: p.y / DIV - 1,
    }
}

/// Returns the `DIV`-square pixel rectangle covering one grid cell.
#[must_use]
pub fn cell_rect(p: GridPoint) -> PixelRect {
    let pos = grid_to_coord(p);
    PixelRect {
        x: pos.x,
        y: pos.y,
        w: DIV,
        h: DIV,
    }
}

/// Immutable border and gridline layout, derived once from the window
/// constants at startup and shared for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct FieldGeometry {
    /// Left, top, right, bottom border strips enclosing the grid.
    pub borders: [PixelRect; 4],
    /// Internal gridline segments between playable cells.
    pub lines: Vec<PixelLine>,
}

impl FieldGeometry {
    /// Computes the border rectangles and internal gridlines.
    #[must_use]
    pub fn new() -> Self {
        let borders = [
            PixelRect {
                x: 0,
                y: 0,
                w: DIV,
                h: WINDOW_HEIGHT,
            },
            PixelRect {
                x: DIV,
                y: 0,
                w: WINDOW_WIDTH - 2 * DIV,
                h: DIV,
            },
            PixelRect {
                x: WINDOW_WIDTH - DIV,
                y: 0,
                w: DIV,
                h: WINDOW_HEIGHT,
            },
            PixelRect {
                x: DIV,
                y: WINDOW_HEIGHT - DIV,
                w: WINDOW_WIDTH - 2 * DIV,
                h: DIV,
            },
        ];

        let mut lines = Vec::with_capacity((GRID_WIDTH + GRID_HEIGHT - 2) as usize);

        for i in 0..GRID_WIDTH - 1 {
            let x = DIV * (i + 2);
            lines.push(PixelLine {
                x1: x,
                y1: DIV,
                x2: x,
                y2: WINDOW_HEIGHT - DIV,
            });
        }

        for i in 0..GRID_HEIGHT - 1 {
            let y = DIV * (i + 2);
            lines.push(PixelLine {
                x1: DIV,
                y1: y,
                x2: WINDOW_WIDTH - DIV,
                y2: y,
            });
        }

        Self { borders, lines }
    }
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{DIV, GRID_HEIGHT, GRID_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH};

    use super::{coord_to_grid, grid_to_coord, FieldGeometry, GridPoint};

    #[test]
    fn coordinate_mapping_round_trips_for_every_grid_point() {
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let p = GridPoint { x, y };
                assert_eq!(coord_to_grid(grid_to_coord(p)), p);
            }
        }
    }

    #[test]
    fn grid_to_coord_lands_inside_the_border() {
        let first = grid_to_coord(GridPoint { x: 0, y: 0 });
        assert_eq!((first.x, first.y), (DIV, DIV));

        let last = grid_to_coord(GridPoint {
            x: GRID_WIDTH - 1,
            y: GRID_HEIGHT - 1,
        });
        assert!(last.x < WINDOW_WIDTH - DIV);
        assert!(last.y < WINDOW_HEIGHT - DIV);
    }

    #[test]
    fn geometry_has_one_line_per_internal_boundary() {
        let geometry = FieldGeometry::new();
        assert_eq!(
            geometry.lines.len(),
            (GRID_WIDTH + GRID_HEIGHT - 2) as usize
        );
    }

    #[test]
    fn borders_enclose_the_window() {
        let geometry = FieldGeometry::new();
        let [left, top, right, bottom] = geometry.borders;

        assert_eq!(left.x, 0);
        assert_eq!(top.y, 0);
        assert_eq!(right.x + right.w, WINDOW_WIDTH);
        assert_eq!(bottom.y + bottom.h, WINDOW_HEIGHT);
    }
}
