use rand::Rng;
use thiserror::Error;

use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::field::{cell_rect, coord_to_grid, GridPoint, PixelRect};
use crate::snake::Snake;

/// The snake covers every cell, leaving nowhere to place an apple.
///
/// On the default grid this only happens when the game is effectively won;
/// the controller treats it as a terminal condition, not a failure.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("no free cell left on the board")]
pub struct BoardFull;

/// The apple currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    position: GridPoint,
    shape: PixelRect,
}

impl Apple {
    /// Creates an apple at a fixed cell.
    #[must_use]
    pub fn at(position: GridPoint) -> Self {
        Self {
            position,
            shape: cell_rect(position),
        }
    }

    /// Places the first apple on a cell the snake does not occupy.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Result<Self, BoardFull> {
        let position = free_cell(rng, snake)?;
        Ok(Self {
            position,
            shape: cell_rect(position),
        })
    }

    /// Moves the apple to a uniformly chosen free cell.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        snake: &Snake,
    ) -> Result<(), BoardFull> {
        self.position = free_cell(rng, snake)?;
        self.shape = cell_rect(self.position);
        Ok(())
    }

    /// Current grid cell.
    #[must_use]
    pub fn location(&self) -> GridPoint {
        self.position
    }

    /// Pixel rectangle for rendering.
    #[must_use]
    pub fn shape(&self) -> PixelRect {
        self.shape
    }
}

/// Picks a free cell uniformly: mark every snake-covered cell in a row-major
/// occupancy mask, draw an ordinal among the free ones, and scan to it.
fn free_cell<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Result<GridPoint, BoardFull> {
    let total = (GRID_WIDTH * GRID_HEIGHT) as usize;
    let mut occupied = vec![false; total];

    for segment in snake.body() {
        let cell = coord_to_grid(segment.pos());
        occupied[(cell.x + GRID_WIDTH * cell.y) as usize] = true;
    }

    let free = occupied.iter().filter(|used| !**used).count();
    if free == 0 {
        return Err(BoardFull);
    }

    let mut ordinal = rng.gen_range(0..free);
    for (index, used) in occupied.iter().enumerate() {
        if *used {
            continue;
        }
        if ordinal == 0 {
            let index = index as i32;
            return Ok(GridPoint {
                x: index % GRID_WIDTH,
                y: index / GRID_WIDTH,
            });
        }
        ordinal -= 1;
    }

    unreachable!("free-cell count disagrees with the occupancy mask")
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::{GRID_HEIGHT, GRID_WIDTH};
    use crate::field::GridPoint;
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{Apple, BoardFull};

    fn serpentine_cells(skip: Option<GridPoint>) -> Vec<GridPoint> {
        let mut cells = Vec::new();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let cell = GridPoint { x, y };
                if Some(cell) != skip {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    #[test]
    fn apple_never_lands_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_cells(
            &[
                GridPoint { x: 2, y: 0 },
                GridPoint { x: 1, y: 0 },
                GridPoint { x: 0, y: 0 },
            ],
            Direction::Right,
        );

        let mut apple = Apple::spawn(&mut rng, &snake).expect("board has free cells");
        for _ in 0..200 {
            apple.respawn(&mut rng, &snake).expect("board has free cells");
            assert!(!snake.occupies(apple.location()));
        }
    }

    #[test]
    fn full_board_reports_board_full() {
        let mut rng = StdRng::seed_from_u64(1);
        let snake = Snake::from_cells(&serpentine_cells(None), Direction::Right);

        assert_eq!(Apple::spawn(&mut rng, &snake), Err(BoardFull));
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let gap = GridPoint { x: 17, y: 23 };
        let snake = Snake::from_cells(&serpentine_cells(Some(gap)), Direction::Right);

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let apple = Apple::spawn(&mut rng, &snake).expect("one cell is free");
            assert_eq!(apple.location(), gap);
        }
    }

    #[test]
    fn same_seed_gives_same_apple() {
        let snake = Snake::new(GridPoint { x: 5, y: 5 });

        let a = Apple::spawn(&mut StdRng::seed_from_u64(42), &snake).unwrap();
        let b = Apple::spawn(&mut StdRng::seed_from_u64(42), &snake).unwrap();

        assert_eq!(a.location(), b.location());
    }
}
