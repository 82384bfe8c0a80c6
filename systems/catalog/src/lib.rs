#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Process-wide catalog of authored quadrant wall patterns.
//!
//! Four thematic groups contribute four variants each. The catalog is built
//! from a literal table, validated, and then frozen: [`Catalog::shared`]
//! performs the build at most once per process behind a [`OnceLock`], and
//! every caller observes the same instance afterwards.

mod table;

use std::collections::HashSet;
use std::sync::OnceLock;

use log::{debug, trace};
use ricochet_worlds_board::{Board, BoardError};
use ricochet_worlds_core::{
    CellCoord, Color, Direction, Landmark, Marker, Variant, GROUP_COUNT, QUADRANT_SIZE,
    VARIANTS_PER_GROUP,
};
use thiserror::Error;

use crate::table::{QuadrantPattern, PATTERNS};

static SHARED: OnceLock<Catalog> = OnceLock::new();

#[cfg(test)]
static SHARED_BUILDS: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

/// Defects detected while building the catalog from authored data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The quadrant board itself could not be allocated.
    #[error("quadrant board could not be created: {0}")]
    Board(#[from] BoardError),
    /// No pattern was authored for the group and variant.
    #[error("no pattern authored for {color:?} variant {variant}")]
    MissingPattern {
        /// Group lacking the pattern.
        color: Color,
        /// Variant lacking the pattern.
        variant: u8,
    },
    /// A landmark lies outside the quadrant.
    #[error("{color:?} variant {variant}: landmark {cell:?} lies outside the quadrant")]
    LandmarkOutOfBounds {
        /// Group owning the landmark.
        color: Color,
        /// Variant owning the landmark.
        variant: u8,
        /// Offending cell.
        cell: CellCoord,
    },
    /// A landmark wall would coincide with the quadrant frame.
    #[error("{color:?} variant {variant}: landmark {cell:?} walls the quadrant frame")]
    LandmarkOnFrame {
        /// Group owning the landmark.
        color: Color,
        /// Variant owning the landmark.
        variant: u8,
        /// Offending cell.
        cell: CellCoord,
    },
    /// Two landmarks share a cell.
    #[error("{color:?} variant {variant}: cell {cell:?} carries two landmarks")]
    DuplicateLandmark {
        /// Group owning the landmarks.
        color: Color,
        /// Variant owning the landmarks.
        variant: u8,
        /// Shared cell.
        cell: CellCoord,
    },
    /// A quadrant does not carry exactly one planet per color.
    #[error("{color:?} variant {variant}: expected one planet per color, found {found:?}")]
    PlanetSet {
        /// Group owning the quadrant.
        color: Color,
        /// Variant of the quadrant.
        variant: u8,
        /// Planet colors actually authored.
        found: Vec<Color>,
    },
}

/// One authored quadrant with its rendered wall pattern.
#[derive(Clone, Debug)]
pub struct Quadrant {
    color: Color,
    variant: Variant,
    blocks_center: bool,
    landmarks: &'static [Landmark],
    board: Board,
}

impl Quadrant {
    /// Thematic group the quadrant belongs to.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Variant number inside the group.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Reports whether worlds using this quadrant wall off their center.
    #[must_use]
    pub const fn blocks_center(&self) -> bool {
        self.blocks_center
    }

    /// Authored landmarks in table order.
    #[must_use]
    pub const fn landmarks(&self) -> &'static [Landmark] {
        self.landmarks
    }

    /// Unrotated wall pattern.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }
}

/// Immutable library of every quadrant, indexed by group and variant.
#[derive(Clone, Debug)]
pub struct Catalog {
    quadrants: Vec<Quadrant>,
}

impl Catalog {
    /// Builds and validates the catalog from the authored table.
    pub fn build() -> Result<Self, CatalogError> {
        Self::from_patterns(&PATTERNS)
    }

    /// Shared catalog, built on first use.
    ///
    /// # Panics
    ///
    /// Panics when the authored table is malformed. That can only happen
    /// through a defect in the table itself, never through caller input.
    pub fn shared() -> &'static Catalog {
        SHARED.get_or_init(|| {
            #[cfg(test)]
            let _ = SHARED_BUILDS.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            match Self::build() {
                Ok(catalog) => catalog,
                Err(error) => panic!("quadrant catalog is malformed: {error}"),
            }
        })
    }

    fn from_patterns(patterns: &[QuadrantPattern]) -> Result<Self, CatalogError> {
        let mut quadrants = Vec::with_capacity(GROUP_COUNT * usize::from(VARIANTS_PER_GROUP));

        for color in Color::ALL {
            for variant in Variant::ALL {
                let pattern = patterns
                    .iter()
                    .find(|pattern| pattern.color == color && pattern.variant == variant.get())
                    .ok_or(CatalogError::MissingPattern {
                        color,
                        variant: variant.get(),
                    })?;
                quadrants.push(build_quadrant(pattern, variant)?);
            }
        }

        debug!("built quadrant catalog with {} quadrants", quadrants.len());
        Ok(Self { quadrants })
    }

    /// Quadrant authored for the group and variant.
    #[must_use]
    pub fn quadrant(&self, color: Color, variant: Variant) -> &Quadrant {
        let index = color.index() * usize::from(VARIANTS_PER_GROUP) + usize::from(variant.get());
        &self.quadrants[index]
    }

    /// Every quadrant ordered by group, then variant.
    pub fn iter(&self) -> impl Iterator<Item = &Quadrant> {
        self.quadrants.iter()
    }
}

/// Quadrant from the shared catalog.
#[must_use]
pub fn get_quadrant(color: Color, variant: Variant) -> &'static Quadrant {
    Catalog::shared().quadrant(color, variant)
}

fn build_quadrant(pattern: &QuadrantPattern, variant: Variant) -> Result<Quadrant, CatalogError> {
    validate(pattern)?;

    let mut board = Board::new(QUADRANT_SIZE, QUADRANT_SIZE)?;
    for landmark in pattern.landmarks {
        board.place_landmark(*landmark);
    }
    trace!(
        "{:?} variant {}: {} landmarks, center block {}",
        pattern.color,
        pattern.variant,
        pattern.landmarks.len(),
        pattern.blocks_center
    );

    Ok(Quadrant {
        color: pattern.color,
        variant,
        blocks_center: pattern.blocks_center,
        landmarks: pattern.landmarks,
        board,
    })
}

fn validate(pattern: &QuadrantPattern) -> Result<(), CatalogError> {
    let color = pattern.color;
    let variant = pattern.variant;
    let last = QUADRANT_SIZE - 1;
    let mut seen = HashSet::new();
    let mut planets = Vec::new();

    for landmark in pattern.landmarks {
        let cell = landmark.cell();
        if cell.x() > last || cell.y() > last {
            return Err(CatalogError::LandmarkOutOfBounds {
                color,
                variant,
                cell,
            });
        }

        let on_frame = landmark
            .corner()
            .directions()
            .iter()
            .any(|direction| match direction {
                Direction::West => cell.x() == 0,
                Direction::South => cell.y() == 0,
                Direction::East => cell.x() == last,
                Direction::North => cell.y() == last,
            });
        if on_frame {
            return Err(CatalogError::LandmarkOnFrame {
                color,
                variant,
                cell,
            });
        }

        if !seen.insert(cell) {
            return Err(CatalogError::DuplicateLandmark {
                color,
                variant,
                cell,
            });
        }

        if let Marker::Planet(planet) = landmark.marker() {
            planets.push(planet);
        }
    }

    let mut sorted = planets.clone();
    sorted.sort();
    if sorted != Color::ALL {
        return Err(CatalogError::PlanetSet {
            color,
            variant,
            found: planets,
        });
    }

    Ok(())
}
