#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Ricochet Worlds generator.
//!
//! This crate defines the vocabulary that connects the wall grid, the
//! quadrant catalog, the world-id codec and the board assembler. Everything
//! here is plain data: cell coordinates, compass directions, the four
//! thematic colors, landmark descriptions and the world identifier itself.
//! Board geometry constants live here as well because the authored quadrant
//! table is only valid for the sizes declared below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Edge length of a single authored quadrant, measured in cells.
pub const QUADRANT_SIZE: u32 = 16;

/// Edge length of an assembled world, measured in cells.
pub const BOARD_SIZE: u32 = QUADRANT_SIZE * 2;

/// Number of thematic groups contributing one quadrant each.
pub const GROUP_COUNT: usize = 4;

/// Number of authored variants available for every thematic group.
pub const VARIANTS_PER_GROUP: u8 = 4;

/// Half extent of the obstacle block walled off in the middle of a world.
pub const CENTER_BLOCK_HALF_EXTENT: u32 = 1;

/// Number of goal candidates every assembled world exposes.
pub const TARGET_CANDIDATE_COUNT: usize = 17;

/// Location of a single grid cell.
///
/// `x` grows toward the east edge and `y` grows toward the north edge, so
/// `(0, 0)` is the south-west corner of any board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: u32,
    y: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the cell, counted from the west edge.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based row index of the cell, counted from the south edge.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Returns the coordinate shifted by the provided offset.
    #[must_use]
    pub const fn offset_by(self, origin: CellCoord) -> Self {
        Self {
            x: self.x + origin.x,
            y: self.y + origin.y,
        }
    }
}

/// Cardinal compass directions used to address cell edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Edge facing increasing `y`.
    North,
    /// Edge facing increasing `x`.
    East,
    /// Edge facing decreasing `y`.
    South,
    /// Edge facing decreasing `x`.
    West,
}

impl Direction {
    /// All directions in clockwise order starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

/// Thematic group of a quadrant, also used to color planet targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    /// Red group; always occupies placement slot zero.
    Red,
    /// Green group.
    Green,
    /// Blue group.
    Blue,
    /// Yellow group; its quadrants carry the swirl target.
    Yellow,
}

impl Color {
    /// All colors in decoding order.
    pub const ALL: [Color; GROUP_COUNT] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Position of the color inside [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Yellow => 3,
        }
    }

    /// Single-letter tag used by text adapters.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
        }
    }
}

/// Numbered variant selecting one authored quadrant inside a thematic group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Variant(u8);

/// Raised when a raw variant number does not name an authored quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("variant {0} is not below {VARIANTS_PER_GROUP}")]
pub struct VariantOutOfRange(pub u8);

impl TryFrom<u8> for Variant {
    type Error = VariantOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < VARIANTS_PER_GROUP {
            Ok(Self(value))
        } else {
            Err(VariantOutOfRange(value))
        }
    }
}

impl From<Variant> for u8 {
    fn from(variant: Variant) -> Self {
        variant.0
    }
}

impl Variant {
    /// All variants in ascending order.
    pub const ALL: [Variant; VARIANTS_PER_GROUP as usize] =
        [Variant(0), Variant(1), Variant(2), Variant(3)];

    /// Creates a variant, panicking when `value` is not below
    /// [`VARIANTS_PER_GROUP`].
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value < VARIANTS_PER_GROUP, "variant out of range");
        Self(value)
    }

    /// Creates a variant from an arbitrary digit, wrapping it into range.
    #[must_use]
    pub const fn wrapping(digit: u64) -> Self {
        Self((digit % VARIANTS_PER_GROUP as u64) as u8)
    }

    /// Retrieves the numeric representation of the variant.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

/// Number of clockwise quarter turns, always reduced into `0..4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct QuarterTurns(u8);

impl From<u8> for QuarterTurns {
    fn from(count: u8) -> Self {
        Self::new(u64::from(count))
    }
}

impl From<QuarterTurns> for u8 {
    fn from(turns: QuarterTurns) -> Self {
        turns.0
    }
}

impl QuarterTurns {
    /// No rotation at all.
    pub const ZERO: QuarterTurns = QuarterTurns(0);

    /// Creates a rotation from an arbitrary count, wrapping it into `0..4`.
    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self((count % 4) as u8)
    }

    /// Retrieves the number of quarter turns.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Combines two rotations.
    #[must_use]
    pub const fn then(self, other: QuarterTurns) -> Self {
        Self((self.0 + other.0) % 4)
    }
}

/// Two-edge wall shape drawn around a landmark cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    /// Walls on the west and south edges.
    WestSouth,
    /// Walls on the west and north edges.
    WestNorth,
    /// Walls on the east and north edges.
    EastNorth,
    /// Walls on the east and south edges.
    EastSouth,
}

impl Corner {
    /// The two edges walled by the corner shape.
    #[must_use]
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Self::WestSouth => [Direction::West, Direction::South],
            Self::WestNorth => [Direction::West, Direction::North],
            Self::EastNorth => [Direction::East, Direction::North],
            Self::EastSouth => [Direction::East, Direction::South],
        }
    }
}

/// Symbol recorded on a landmark cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Build primitive without a target.
    Plain,
    /// Colored planet target.
    Planet(Color),
    /// Multi-colored swirl target.
    Swirl,
}

impl Marker {
    /// Reports whether a cell carrying this marker may become the goal.
    #[must_use]
    pub const fn is_target_candidate(self) -> bool {
        matches!(self, Self::Planet(_) | Self::Swirl)
    }
}

/// Authored landmark: a cell, the wall corner around it and its marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Landmark {
    cell: CellCoord,
    corner: Corner,
    marker: Marker,
}

impl Landmark {
    /// Creates a landmark at the provided cell.
    #[must_use]
    pub const fn new(x: u32, y: u32, corner: Corner, marker: Marker) -> Self {
        Self {
            cell: CellCoord::new(x, y),
            corner,
            marker,
        }
    }

    /// Cell carrying the landmark.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Wall corner drawn around the cell.
    #[must_use]
    pub const fn corner(&self) -> Corner {
        self.corner
    }

    /// Symbol recorded on the cell.
    #[must_use]
    pub const fn marker(&self) -> Marker {
        self.marker
    }
}

/// Integer that deterministically identifies a generated world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldId(u64);

impl WorldId {
    /// Creates a new world identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for WorldId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
