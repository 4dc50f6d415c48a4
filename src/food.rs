use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random draws attempted before falling back to a full-grid scan.
pub const SPAWN_RETRY_CAP: u32 = 64;

/// Picks a free cell for food placement.
///
/// This is a bounded rejection sampler: uniformly random cells are drawn and
/// redrawn while they land on the snake. With the body far smaller than the
/// grid this almost always succeeds within a couple of draws. After
/// [`SPAWN_RETRY_CAP`] misses the sampler switches to scanning the grid for
/// free cells and picking uniformly among them, so placement stays uniform
/// and terminates even on a nearly full board.
///
/// Panics when no cell is free, which cannot happen while a round is in
/// progress.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Position {
    for _ in 0..SPAWN_RETRY_CAP {
        let candidate = random_cell(rng, bounds);
        if !snake.occupies(candidate) {
            return candidate;
        }
    }

    let mut candidates = Vec::new();
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    assert!(
        !candidates.is_empty(),
        "spawn_position: no free cells on the board ({}×{})",
        bounds.width,
        bounds.height,
    );

    let index = rng.gen_range(0..candidates.len());
    candidates[index]
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
