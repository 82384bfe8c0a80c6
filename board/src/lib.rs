#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Wall grid storage for Ricochet Worlds boards.
//!
//! A [`Board`] stores every physical wall exactly once. The west wall of a
//! cell is kept against the cell's row-major id, the south wall against its
//! column-major ("transposed") id. East and north walls are never stored;
//! they are read from the neighboring cell's west or south slot, or reported
//! as present on the outer boundary. Two cells sharing an edge therefore can
//! never disagree about it.
//!
//! Boards additionally carry a sparse landmark layer recording which cells
//! were authored as wall corners and which of those are goal candidates.

pub mod compose;

use ricochet_worlds_core::{CellCoord, Direction, Landmark, Marker, QuarterTurns};
use thiserror::Error;

/// Reasons a board cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// At least one dimension was zero.
    #[error("board dimensions {width}x{height} must both be positive")]
    EmptyDimension {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
    /// The cell count does not fit into the address space.
    #[error("board dimensions {width}x{height} exceed the addressable cell count")]
    TooLarge {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
}

/// Rectangular wall grid with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    west: Vec<bool>,
    south: Vec<bool>,
    markers: Vec<Option<Marker>>,
}

impl Board {
    /// Allocates an open grid whose only walls are the outer boundary.
    pub fn new(width: u32, height: u32) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyDimension { width, height });
        }

        let count = usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|_| BoardError::TooLarge { width, height })?;
        let mut board = Self::open(width, height, count);

        for y in 0..height {
            let id = board.id(CellCoord::new(0, y));
            board.west[id] = true;
        }
        for x in 0..width {
            let transposed = board.transposed_id(CellCoord::new(x, 0));
            board.south[transposed] = true;
        }

        Ok(board)
    }

    fn open(width: u32, height: u32, count: usize) -> Self {
        Self {
            width,
            height,
            west: vec![false; count],
            south: vec![false; count],
            markers: vec![None; count],
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of addressable cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.west.len()
    }

    /// Reports whether the cell lies inside the board.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.x() < self.width && cell.y() < self.height
    }

    /// Row-major id of the cell.
    ///
    /// # Panics
    ///
    /// Panics when the cell lies outside the board.
    #[must_use]
    pub fn id(&self, cell: CellCoord) -> usize {
        self.assert_contains(cell);
        cell.y() as usize * self.width as usize + cell.x() as usize
    }

    /// Column-major id of the cell.
    ///
    /// # Panics
    ///
    /// Panics when the cell lies outside the board.
    #[must_use]
    pub fn transposed_id(&self, cell: CellCoord) -> usize {
        self.assert_contains(cell);
        cell.x() as usize * self.height as usize + cell.y() as usize
    }

    /// Cell addressed by a row-major id.
    ///
    /// # Panics
    ///
    /// Panics when the id is not below [`Board::cell_count`].
    #[must_use]
    pub fn cell(&self, id: usize) -> CellCoord {
        assert!(id < self.cell_count(), "cell id {id} out of range");
        let width = self.width as usize;
        CellCoord::new((id % width) as u32, (id / width) as u32)
    }

    /// Cell addressed by a column-major id.
    ///
    /// # Panics
    ///
    /// Panics when the id is not below [`Board::cell_count`].
    #[must_use]
    pub fn cell_from_transposed(&self, transposed: usize) -> CellCoord {
        assert!(
            transposed < self.cell_count(),
            "transposed id {transposed} out of range"
        );
        let height = self.height as usize;
        CellCoord::new((transposed / height) as u32, (transposed % height) as u32)
    }

    /// Native west wall of the cell with the provided row-major id.
    #[must_use]
    pub fn west_wall(&self, id: usize) -> bool {
        self.west[id]
    }

    /// Mutable access to the native west wall slot.
    pub fn west_wall_mut(&mut self, id: usize) -> &mut bool {
        &mut self.west[id]
    }

    /// Native south wall of the cell with the provided column-major id.
    #[must_use]
    pub fn south_wall(&self, transposed: usize) -> bool {
        self.south[transposed]
    }

    /// Mutable access to the native south wall slot.
    pub fn south_wall_mut(&mut self, transposed: usize) -> &mut bool {
        &mut self.south[transposed]
    }

    /// East wall of the cell, read from its eastern neighbor's west wall.
    #[must_use]
    pub fn east_wall(&self, id: usize) -> bool {
        let cell = self.cell(id);
        if cell.x() + 1 == self.width {
            true
        } else {
            self.west[id + 1]
        }
    }

    /// North wall of the cell, read from its northern neighbor's south wall.
    #[must_use]
    pub fn north_wall(&self, transposed: usize) -> bool {
        let cell = self.cell_from_transposed(transposed);
        if cell.y() + 1 == self.height {
            true
        } else {
            self.south[transposed + 1]
        }
    }

    /// Wall state on the given side of a cell.
    #[must_use]
    pub fn wall(&self, cell: CellCoord, direction: Direction) -> bool {
        match direction {
            Direction::West => self.west_wall(self.id(cell)),
            Direction::South => self.south_wall(self.transposed_id(cell)),
            Direction::East => self.east_wall(self.id(cell)),
            Direction::North => self.north_wall(self.transposed_id(cell)),
        }
    }

    /// Raises the wall on the given side of a cell.
    ///
    /// East and north walls on the outer boundary are implicit, so raising
    /// them leaves the board unchanged.
    pub fn set_wall(&mut self, cell: CellCoord, direction: Direction) {
        match direction {
            Direction::West => {
                let id = self.id(cell);
                *self.west_wall_mut(id) = true;
            }
            Direction::South => {
                let transposed = self.transposed_id(cell);
                *self.south_wall_mut(transposed) = true;
            }
            Direction::East => {
                let id = self.id(cell);
                if cell.x() + 1 < self.width {
                    *self.west_wall_mut(id + 1) = true;
                }
            }
            Direction::North => {
                let transposed = self.transposed_id(cell);
                if cell.y() + 1 < self.height {
                    *self.south_wall_mut(transposed + 1) = true;
                }
            }
        }
    }

    /// Draws the landmark's wall corner and records its marker.
    pub fn place_landmark(&mut self, landmark: Landmark) {
        let cell = landmark.cell();
        for direction in landmark.corner().directions() {
            self.set_wall(cell, direction);
        }
        let id = self.id(cell);
        self.markers[id] = Some(landmark.marker());
    }

    /// Marker recorded on the cell, if any.
    #[must_use]
    pub fn marker(&self, cell: CellCoord) -> Option<Marker> {
        self.markers[self.id(cell)]
    }

    /// Marked cells in ascending row-major id order.
    pub fn landmarks(&self) -> impl Iterator<Item = (CellCoord, Marker)> + '_ {
        self.markers
            .iter()
            .enumerate()
            .filter_map(|(id, marker)| marker.map(|marker| (self.cell(id), marker)))
    }

    /// Walls off every cell of the block centered on the grid.
    ///
    /// The block spans `2 * half_width` columns and `2 * half_height` rows.
    ///
    /// # Panics
    ///
    /// Panics when the block does not fit inside the board.
    pub fn block_center_cells(&mut self, half_width: u32, half_height: u32) {
        assert!(
            half_width.saturating_mul(2) <= self.width
                && half_height.saturating_mul(2) <= self.height,
            "center block {half_width}x{half_height} exceeds the board"
        );

        let center_x = self.width / 2;
        let center_y = self.height / 2;
        for y in center_y - half_height..center_y + half_height {
            for x in center_x - half_width..center_x + half_width {
                for direction in Direction::ALL {
                    self.set_wall(CellCoord::new(x, y), direction);
                }
            }
        }
    }

    /// Returns a copy of the board turned clockwise by one quarter.
    ///
    /// Cell `(x, y)` moves to `(y, width - 1 - x)` and the result has its
    /// dimensions swapped. A south wall becomes a west wall and an east wall
    /// becomes a south wall; markers travel with their cells.
    #[must_use]
    pub fn rotate_quarter_turn(&self) -> Board {
        let mut rotated = Self::open(self.height, self.width, self.cell_count());

        for id in 0..self.cell_count() {
            let cell = self.cell(id);
            let turned = CellCoord::new(cell.y(), self.width - 1 - cell.x());
            let turned_id = rotated.id(turned);
            let turned_transposed = rotated.transposed_id(turned);

            rotated.west[turned_id] = self.south_wall(self.transposed_id(cell));
            rotated.south[turned_transposed] = self.east_wall(id);
            rotated.markers[turned_id] = self.markers[id];
        }

        rotated
    }

    /// Returns a copy of the board turned clockwise by `turns`.
    #[must_use]
    pub fn rotated(&self, turns: QuarterTurns) -> Board {
        let mut board = self.clone();
        for _ in 0..turns.get() {
            board = board.rotate_quarter_turn();
        }
        board
    }

    fn assert_contains(&self, cell: CellCoord) {
        assert!(
            self.contains(cell),
            "cell ({}, {}) outside {}x{} board",
            cell.x(),
            cell.y(),
            self.width,
            self.height
        );
    }
}
