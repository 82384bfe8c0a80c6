//! JSON report describing an assembled world.

use ricochet_worlds_core::{CellCoord, Direction, Marker, WorldId};
use ricochet_worlds_system_assembler::AssembledWorld;
use ricochet_worlds_system_codec::WorldSeed;
use serde::Serialize;

/// Snapshot of a world suitable for machine consumption.
///
/// Only interior walls are listed; every outer edge is always walled.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct WorldReport {
    world_id: WorldId,
    seed: WorldSeed,
    width: u32,
    height: u32,
    goal: CellCoord,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates: Option<Vec<CellCoord>>,
    walls: Vec<WallRecord>,
    landmarks: Vec<LandmarkRecord>,
}

/// Interior wall stored against the cell on its east or north side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
struct WallRecord {
    cell: CellCoord,
    side: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
struct LandmarkRecord {
    cell: CellCoord,
    marker: Marker,
}

impl WorldReport {
    /// Captures the report for an assembled world.
    pub(crate) fn capture(id: WorldId, world: &AssembledWorld, with_candidates: bool) -> Self {
        let board = world.board();
        let mut walls = Vec::new();
        for index in 0..board.cell_count() {
            let cell = board.cell(index);
            if cell.x() > 0 && board.west_wall(index) {
                walls.push(WallRecord {
                    cell,
                    side: Direction::West,
                });
            }
            if cell.y() > 0 && board.south_wall(board.transposed_id(cell)) {
                walls.push(WallRecord {
                    cell,
                    side: Direction::South,
                });
            }
        }

        Self {
            world_id: id,
            seed: *world.seed(),
            width: board.width(),
            height: board.height(),
            goal: world.goal(),
            candidates: with_candidates.then(|| world.candidates().to_vec()),
            walls,
            landmarks: board
                .landmarks()
                .map(|(cell, marker)| LandmarkRecord { cell, marker })
                .collect(),
        }
    }

    /// Encodes the report as pretty-printed JSON.
    pub(crate) fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
