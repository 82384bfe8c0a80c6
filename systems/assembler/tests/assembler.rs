use ricochet_worlds_board::{compose::BoardCorner, Board};
use ricochet_worlds_core::{
    CellCoord, Color, Direction, Marker, Variant, WorldId, BOARD_SIZE, QUADRANT_SIZE,
    TARGET_CANDIDATE_COUNT,
};
use ricochet_worlds_system_assembler::{
    assemble_world, target_candidates, target_cell, Assembler, Placement,
};
use ricochet_worlds_system_catalog::get_quadrant;
use ricochet_worlds_system_codec::LAYOUT_SPACE;

fn sample_ids() -> impl Iterator<Item = u64> {
    (0..LAYOUT_SPACE)
        .step_by(97)
        .chain([LAYOUT_SPACE - 1, LAYOUT_SPACE * 17 + 5, u64::MAX])
}

fn in_center_block(cell: CellCoord) -> bool {
    let low = BOARD_SIZE / 2 - 1;
    let high = BOARD_SIZE / 2;
    (low..=high).contains(&cell.x()) && (low..=high).contains(&cell.y())
}

fn touches_center_block(cell: CellCoord, neighbor: CellCoord) -> bool {
    in_center_block(cell) || in_center_block(neighbor)
}

#[test]
fn assembly_is_deterministic() {
    for raw in sample_ids() {
        let id = WorldId::new(raw);
        assert_eq!(assemble_world(id), assemble_world(id), "board {raw} diverged");
        assert_eq!(target_cell(id), target_cell(id), "goal {raw} diverged");
    }
}

#[test]
fn entry_points_agree_with_assembler() {
    let assembler = Assembler::new();
    for raw in sample_ids() {
        let id = WorldId::new(raw);
        let world = assembler.assemble(id);
        assert_eq!(&assemble_world(id), world.board());
        assert_eq!(target_cell(id), world.goal());
    }
}

#[test]
fn shared_walls_agree_between_neighbors() {
    for raw in sample_ids() {
        let board = assemble_world(WorldId::new(raw));
        for id in 0..board.cell_count() {
            let cell = board.cell(id);
            if cell.x() + 1 < board.width() {
                let east = CellCoord::new(cell.x() + 1, cell.y());
                assert_eq!(
                    board.wall(cell, Direction::East),
                    board.wall(east, Direction::West),
                    "world {raw}: east edge of {cell:?}"
                );
            }
            if cell.y() + 1 < board.height() {
                let north = CellCoord::new(cell.x(), cell.y() + 1);
                assert_eq!(
                    board.wall(cell, Direction::North),
                    board.wall(north, Direction::South),
                    "world {raw}: north edge of {cell:?}"
                );
            }
        }
    }
}

#[test]
fn outer_edges_are_walled() {
    for raw in sample_ids() {
        let board = assemble_world(WorldId::new(raw));
        let last = BOARD_SIZE - 1;
        for step in 0..BOARD_SIZE {
            assert!(board.wall(CellCoord::new(0, step), Direction::West));
            assert!(board.wall(CellCoord::new(last, step), Direction::East));
            assert!(board.wall(CellCoord::new(step, 0), Direction::South));
            assert!(board.wall(CellCoord::new(step, last), Direction::North));
        }
    }
}

#[test]
fn every_layout_exposes_reference_candidate_count() {
    let assembler = Assembler::new();
    for raw in 0..LAYOUT_SPACE {
        let world = assembler.assemble(WorldId::new(raw));
        assert_eq!(
            world.candidates().len(),
            TARGET_CANDIDATE_COUNT,
            "world {raw} lost or gained candidates"
        );
    }
}

#[test]
fn candidates_are_listed_in_row_major_order() {
    let world = Assembler::new().assemble(WorldId::new(777));
    let board = world.board();
    let ids: Vec<usize> = world
        .candidates()
        .iter()
        .map(|cell| board.id(*cell))
        .collect();

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(target_candidates(board), world.candidates());
    for cell in world.candidates() {
        assert!(board
            .marker(*cell)
            .is_some_and(|marker| marker.is_target_candidate()));
    }
}

#[test]
fn exactly_one_swirl_per_world() {
    for raw in sample_ids() {
        let board = assemble_world(WorldId::new(raw));
        let swirls = board
            .landmarks()
            .filter(|(_, marker)| *marker == Marker::Swirl)
            .count();
        assert_eq!(swirls, 1, "world {raw}");
    }
}

#[test]
fn target_cell_accepts_huge_ids() {
    let assembler = Assembler::new();
    for raw in [
        u64::MAX,
        u64::MAX - LAYOUT_SPACE,
        LAYOUT_SPACE * 1_000_003,
        1 << 63,
    ] {
        let world = assembler.assemble(WorldId::new(raw));
        assert!(world.candidates().contains(&world.goal()));
        assert_eq!(target_cell(WorldId::new(raw)), world.goal());
    }
}

#[test]
fn selector_wraps_around_candidate_count() {
    let base = WorldId::new(1_234);
    let cycled = WorldId::new(1_234 + LAYOUT_SPACE * TARGET_CANDIDATE_COUNT as u64);

    assert_eq!(assemble_world(base), assemble_world(cycled));
    assert_eq!(target_cell(base), target_cell(cycled));
}

#[test]
fn selector_walks_candidates_in_order() {
    let assembler = Assembler::new();
    let first = assembler.assemble(WorldId::new(0));
    for selector in 0..TARGET_CANDIDATE_COUNT as u64 {
        let world = assembler.assemble(WorldId::new(selector * LAYOUT_SPACE));
        assert_eq!(world.board(), first.board());
        assert_eq!(world.goal(), first.candidates()[selector as usize]);
    }
}

#[test]
fn world_zero_top_left_matches_red_variant_zero() {
    let board = assemble_world(WorldId::new(0));
    let quadrant = get_quadrant(Color::Red, Variant::new(0)).board();
    let origin = BoardCorner::TopLeft.origin(QUADRANT_SIZE);

    for id in 0..quadrant.cell_count() {
        let local = quadrant.cell(id);
        let cell = local.offset_by(origin);
        assert_eq!(board.marker(cell), quadrant.marker(local), "marker at {local:?}");
        if local.x() > 0 && !touches_center_block(cell, CellCoord::new(cell.x() - 1, cell.y())) {
            assert_eq!(
                board.wall(cell, Direction::West),
                quadrant.wall(local, Direction::West),
                "west wall at {local:?}"
            );
        }
        if local.y() > 0 && !touches_center_block(cell, CellCoord::new(cell.x(), cell.y() - 1)) {
            assert_eq!(
                board.wall(cell, Direction::South),
                quadrant.wall(local, Direction::South),
                "south wall at {local:?}"
            );
        }
    }
}

#[test]
fn world_zero_goal_is_first_candidate() {
    let world = Assembler::new().assemble(WorldId::new(0));

    assert_eq!(world.candidates()[0], CellCoord::new(2, 3));
    assert_eq!(world.goal(), CellCoord::new(2, 3));
    assert_eq!(
        target_cell(WorldId::new(LAYOUT_SPACE)),
        CellCoord::new(25, 3)
    );
}

#[test]
fn digit_a_one_swaps_green_and_blue_slots() {
    let assembler = Assembler::new();
    let identity = assembler.assemble(WorldId::new(0));
    let swapped = assembler.assemble(WorldId::new(256));

    let groups = |placements: &[Placement; 4]| {
        placements
            .iter()
            .map(|placement| placement.color)
            .collect::<Vec<_>>()
    };

    let before = groups(identity.placements());
    let after = groups(swapped.placements());
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[2]);
    assert_eq!(after[2], before[1]);
    assert_eq!(after[3], before[3]);
}

#[test]
fn swapped_groups_land_with_slot_rotation() {
    let swapped = Assembler::new().assemble(WorldId::new(256));
    let blue = swapped.placements()[1];
    let green = swapped.placements()[2];

    assert_eq!(blue.color, Color::Blue);
    assert_eq!(blue.corner, BoardCorner::TopRight);
    assert_eq!(green.color, Color::Green);
    assert_eq!(green.corner, BoardCorner::BottomRight);

    let rotated_blue = get_quadrant(Color::Blue, Variant::new(0))
        .board()
        .rotated(blue.turns);
    let origin = blue.corner.origin(QUADRANT_SIZE);
    for (local, marker) in rotated_blue.landmarks() {
        assert_eq!(swapped.board().marker(local.offset_by(origin)), Some(marker));
    }
}

#[test]
fn center_block_is_enclosed_when_requested() {
    let board = assemble_world(WorldId::new(0));
    for x in BOARD_SIZE / 2 - 1..=BOARD_SIZE / 2 {
        for y in BOARD_SIZE / 2 - 1..=BOARD_SIZE / 2 {
            for direction in Direction::ALL {
                assert!(board.wall(CellCoord::new(x, y), direction));
            }
        }
    }
}

#[test]
fn open_center_variants_leave_center_unwalled() {
    // every group on variant 2
    let id = 2 + 2 * 4 + 2 * 16 + 2 * 64;
    let board: Board = assemble_world(WorldId::new(id));
    let center = CellCoord::new(BOARD_SIZE / 2, BOARD_SIZE / 2);

    assert!(!board.wall(center, Direction::West));
    assert!(!board.wall(center, Direction::South));
}
