//! Rotation composer that stitches quadrants into a full board.
//!
//! A quadrant is authored as the top-left quarter of a board twice its size.
//! Turning it clockwise `n` times makes it fit the corner reached by turning
//! the top-left corner clockwise `n` times, so the authored inner corner
//! always ends up touching the board center.

use ricochet_worlds_core::{CellCoord, QuarterTurns};

use crate::Board;

/// Corner region of a board composed from four quadrants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoardCorner {
    /// North-west quarter.
    TopLeft,
    /// North-east quarter.
    TopRight,
    /// South-east quarter.
    BottomRight,
    /// South-west quarter.
    BottomLeft,
}

impl BoardCorner {
    /// Corners in clockwise order starting at the top-left.
    pub const CLOCKWISE: [BoardCorner; 4] = [
        BoardCorner::TopLeft,
        BoardCorner::TopRight,
        BoardCorner::BottomRight,
        BoardCorner::BottomLeft,
    ];

    /// Corner reached by turning the top-left corner clockwise.
    #[must_use]
    pub const fn after_turns(turns: QuarterTurns) -> Self {
        Self::CLOCKWISE[turns.get() as usize]
    }

    /// South-west cell of the corner region for the given quadrant size.
    #[must_use]
    pub const fn origin(self, quadrant_size: u32) -> CellCoord {
        match self {
            Self::TopLeft => CellCoord::new(0, quadrant_size),
            Self::TopRight => CellCoord::new(quadrant_size, quadrant_size),
            Self::BottomRight => CellCoord::new(quadrant_size, 0),
            Self::BottomLeft => CellCoord::new(0, 0),
        }
    }
}

/// ORs the interior walls and markers of `source` into `target`.
///
/// `origin` is the target cell that receives the source's south-west cell.
/// The source's own frame (west walls of its first column, south walls of its
/// first row) is skipped so neighboring quadrants meet without a seam wall.
/// Walls already raised on the target are never cleared.
///
/// # Panics
///
/// Panics when the source does not fit inside the target at `origin`.
pub fn merge(target: &mut Board, source: &Board, origin: CellCoord) {
    assert!(
        origin.x() + source.width() <= target.width()
            && origin.y() + source.height() <= target.height(),
        "source does not fit inside target at ({}, {})",
        origin.x(),
        origin.y()
    );

    for id in 0..source.cell_count() {
        let local = source.cell(id);
        let cell = local.offset_by(origin);

        if local.x() > 0 && source.west_wall(id) {
            let target_id = target.id(cell);
            *target.west_wall_mut(target_id) = true;
        }
        if local.y() > 0 && source.south_wall(source.transposed_id(local)) {
            let target_transposed = target.transposed_id(cell);
            *target.south_wall_mut(target_transposed) = true;
        }
        if let Some(marker) = source.markers[id] {
            let target_id = target.id(cell);
            target.markers[target_id] = Some(marker);
        }
    }
}

/// Turns a quadrant clockwise by `turns` and merges it into its corner.
///
/// Returns the corner that received the quadrant.
///
/// # Panics
///
/// Panics unless the quadrant is square and the target is exactly twice its
/// size along both axes.
pub fn place(target: &mut Board, quadrant: &Board, turns: QuarterTurns) -> BoardCorner {
    let size = quadrant.width();
    assert!(
        quadrant.height() == size
            && target.width() == size * 2
            && target.height() == size * 2,
        "quadrant {}x{} cannot tile a {}x{} board",
        quadrant.width(),
        quadrant.height(),
        target.width(),
        target.height()
    );

    let corner = BoardCorner::after_turns(turns);
    merge(target, &quadrant.rotated(turns), corner.origin(size));
    corner
}
