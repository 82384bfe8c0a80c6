#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Board assembler that turns a world id into a finished board and goal.
//!
//! The assembler decodes the id, pulls one quadrant per thematic group from
//! the catalog, turns slot `i` clockwise by `rotation + i` quarter turns and
//! merges it into the matching corner of a fresh full-size board. Target
//! candidates are then enumerated in row-major order and the decoded selector
//! picks the goal among them. The pipeline is a pure function of its input.

use log::{debug, trace};
use ricochet_worlds_board::{
    compose::{self, BoardCorner},
    Board,
};
use ricochet_worlds_core::{
    CellCoord, Color, QuarterTurns, Variant, WorldId, BOARD_SIZE, CENTER_BLOCK_HALF_EXTENT,
    GROUP_COUNT,
};
use ricochet_worlds_system_catalog::Catalog;
use ricochet_worlds_system_codec::{decode, WorldSeed};

/// Quadrant chosen for one placement slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Slot index; slot 0 always holds the red group.
    pub slot: usize,
    /// Thematic group placed in the slot.
    pub color: Color,
    /// Variant of the group's quadrant.
    pub variant: Variant,
    /// Clockwise quarter turns applied to the quadrant.
    pub turns: QuarterTurns,
    /// Board corner receiving the quadrant.
    pub corner: BoardCorner,
}

/// Finished board together with the choices that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembledWorld {
    seed: WorldSeed,
    placements: [Placement; GROUP_COUNT],
    board: Board,
    candidates: Vec<CellCoord>,
    goal: CellCoord,
}

impl AssembledWorld {
    /// Seed the world was assembled from.
    #[must_use]
    pub const fn seed(&self) -> &WorldSeed {
        &self.seed
    }

    /// Quadrant placed in every slot.
    #[must_use]
    pub const fn placements(&self) -> &[Placement; GROUP_COUNT] {
        &self.placements
    }

    /// Finished wall layout.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the world, yielding its board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Goal candidates in ascending row-major order.
    #[must_use]
    pub fn candidates(&self) -> &[CellCoord] {
        &self.candidates
    }

    /// Goal cell chosen by the seed's target selector.
    #[must_use]
    pub const fn goal(&self) -> CellCoord {
        self.goal
    }
}

/// Assembles worlds from a quadrant catalog.
#[derive(Clone, Copy, Debug)]
pub struct Assembler<'catalog> {
    catalog: &'catalog Catalog,
}

impl Assembler<'static> {
    /// Binds the process-wide catalog, building it if this is its first use.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Catalog::shared(),
        }
    }
}

impl Default for Assembler<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'catalog> Assembler<'catalog> {
    /// Binds an explicitly provided catalog.
    #[must_use]
    pub const fn with_catalog(catalog: &'catalog Catalog) -> Self {
        Self { catalog }
    }

    /// Slot placements encoded by the seed.
    #[must_use]
    pub fn layout(&self, seed: &WorldSeed) -> [Placement; GROUP_COUNT] {
        let slots = seed.slots();
        std::array::from_fn(|slot| {
            let color = slots[slot];
            let turns = seed.rotation().then(QuarterTurns::new(slot as u64));
            Placement {
                slot,
                color,
                variant: seed.variant(color),
                turns,
                corner: BoardCorner::after_turns(turns),
            }
        })
    }

    /// Decodes the id and assembles its world.
    #[must_use]
    pub fn assemble(&self, id: WorldId) -> AssembledWorld {
        let world = self.assemble_seed(&decode(id));
        debug!(
            "assembled world {}: slots {:?}, rotation {}, goal {:?}",
            id.get(),
            world.seed.slots(),
            world.seed.rotation().get(),
            world.goal
        );
        world
    }

    /// Assembles the world described by an explicit seed.
    #[must_use]
    pub fn assemble_seed(&self, seed: &WorldSeed) -> AssembledWorld {
        let placements = self.layout(seed);
        let mut board =
            Board::new(BOARD_SIZE, BOARD_SIZE).expect("world dimensions are positive constants");
        let mut blocks_center = false;

        for placement in &placements {
            let quadrant = self.catalog.quadrant(placement.color, placement.variant);
            let corner = compose::place(&mut board, quadrant.board(), placement.turns);
            debug_assert_eq!(corner, placement.corner);
            blocks_center |= quadrant.blocks_center();
            trace!(
                "slot {}: {:?} variant {} turned {} into {:?}",
                placement.slot,
                placement.color,
                placement.variant.get(),
                placement.turns.get(),
                corner
            );
        }

        if blocks_center {
            board.block_center_cells(CENTER_BLOCK_HALF_EXTENT, CENTER_BLOCK_HALF_EXTENT);
        }

        let candidates = target_candidates(&board);
        // Catalog validation puts four planets on every quadrant.
        let index = seed.target_selector() % candidates.len() as u64;
        let goal = candidates[index as usize];

        AssembledWorld {
            seed: *seed,
            placements,
            board,
            candidates,
            goal,
        }
    }
}

/// Planet and swirl cells of the board in ascending row-major id order.
#[must_use]
pub fn target_candidates(board: &Board) -> Vec<CellCoord> {
    board
        .landmarks()
        .filter(|(_, marker)| marker.is_target_candidate())
        .map(|(cell, _)| cell)
        .collect()
}

/// Full wall layout of the world.
#[must_use]
pub fn assemble_world(id: WorldId) -> Board {
    Assembler::new().assemble(id).into_board()
}

/// Goal cell of the world, produced by the same pipeline as
/// [`assemble_world`].
#[must_use]
pub fn target_cell(id: WorldId) -> CellCoord {
    Assembler::new().assemble(id).goal()
}
