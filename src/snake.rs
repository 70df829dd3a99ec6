use crate::field::{cell_rect, coord_to_grid, grid_to_coord, GridPoint, PixelRect};
use crate::input::Direction;

/// Result of advancing the snake by one cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveOutcome {
    Ok,
    WallCrash,
    SelfCrash,
}

/// The snake: an ordered arena of cell rectangles plus a circular tail
/// cursor.
///
/// Movement relocates the segment under the cursor to the new head cell and
/// steps the cursor backwards through the arena, wrapping at the front. No
/// other segment moves, so a step is O(1) in the body length.
#[derive(Debug, Clone)]
pub struct Snake {
    heading: Direction,
    head: GridPoint,
    body: Vec<PixelRect>,
    tail_index: usize,
}

impl Snake {
    /// Creates a one-segment snake at `start`, heading right.
    #[must_use]
    pub fn new(start: GridPoint) -> Self {
        Self {
            heading: Direction::Right,
            head: start,
            body: vec![cell_rect(start)],
            tail_index: 0,
        }
    }

    /// Creates a snake from explicit grid cells, the first being the head.
    ///
    /// The tail cursor starts on the last cell, so the body drains in the
    /// given order. `cells` must be non-empty.
    #[must_use]
    pub fn from_cells(cells: &[GridPoint], heading: Direction) -> Self {
        assert!(!cells.is_empty(), "snake needs at least one segment");

        Self {
            heading,
            head: cells[0],
            body: cells.iter().map(|cell| cell_rect(*cell)).collect(),
            tail_index: cells.len() - 1,
        }
    }

    /// Advances the head one cell along the current heading.
    ///
    /// Relocates the segment at the tail cursor to the new head cell, then
    /// steps the cursor. Reports wall contact before touching the body and
    /// self-contact after the relocation.
    pub fn advance(&mut self) -> MoveOutcome {
        match self.heading {
            Direction::Up => self.head.y -= 1,
            Direction::Down => self.head.y += 1,
            Direction::Left => self.head.x -= 1,
            Direction::Right => self.head.x += 1,
        }

        if !self.head.is_within_grid() {
            return MoveOutcome::WallCrash;
        }

        let head_pos = grid_to_coord(self.head);
        self.body[self.tail_index].set_pos(head_pos);

        let hit_self = self
            .body
            .iter()
            .enumerate()
            .any(|(i, segment)| i != self.tail_index && segment.pos() == head_pos);

        self.tail_index = if self.tail_index == 0 {
            self.body.len() - 1
        } else {
            self.tail_index - 1
        };

        if hit_self {
            MoveOutcome::SelfCrash
        } else {
            MoveOutcome::Ok
        }
    }

    /// Updates the heading unless `d` would reverse it in place.
    pub fn set_heading(&mut self, d: Direction) {
        if d != self.heading.opposite() {
            self.heading = d;
        }
    }

    /// Lengthens the body by one segment.
    ///
    /// Duplicates the segment at the tail cursor next to itself and leaves
    /// the cursor on the duplicate, so the next [`Self::advance`] relocates
    /// the copy while the original stays put for one extra cycle.
    pub fn grow(&mut self) {
        let duplicate = self.body[self.tail_index];
        self.body.insert(self.tail_index + 1, duplicate);
        self.tail_index += 1;
    }

    /// Current head cell.
    #[must_use]
    pub fn head_location(&self) -> GridPoint {
        self.head
    }

    /// Current heading.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Read-only view of the body rectangles.
    #[must_use]
    pub fn body(&self) -> &[PixelRect] {
        &self.body
    }

    /// Index of the segment the tail cursor currently points at.
    #[must_use]
    pub fn tail_index(&self) -> usize {
        self.tail_index
    }

    /// Current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns true if any segment covers the grid cell `p`.
    #[must_use]
    pub fn occupies(&self, p: GridPoint) -> bool {
        self.body
            .iter()
            .any(|segment| coord_to_grid(segment.pos()) == p)
    }
}
