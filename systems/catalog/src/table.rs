//! Authored quadrant patterns.
//!
//! This table is the generator's own reference configuration; it is not
//! transcribed from any physical board set.
//!
//! Coordinates are local to a 16x16 quadrant drawn as the top-left quarter
//! of a world: `x` grows east, `y` grows north, and the cell `(15, 0)` touches
//! the world center. Every pattern lists its four planets first (red, green,
//! blue, yellow), then its two plain corners, then the swirl for the yellow
//! group. Changing any entry changes the world decoded from every id that
//! selects the pattern.

use ricochet_worlds_core::{Color, Corner, Landmark, Marker};

const WS: Corner = Corner::WestSouth;
const WN: Corner = Corner::WestNorth;
const EN: Corner = Corner::EastNorth;
const ES: Corner = Corner::EastSouth;

const fn planet(x: u32, y: u32, corner: Corner, color: Color) -> Landmark {
    Landmark::new(x, y, corner, Marker::Planet(color))
}

const fn plain(x: u32, y: u32, corner: Corner) -> Landmark {
    Landmark::new(x, y, corner, Marker::Plain)
}

const fn swirl(x: u32, y: u32, corner: Corner) -> Landmark {
    Landmark::new(x, y, corner, Marker::Swirl)
}

/// Literal description of one catalog entry.
#[derive(Clone, Copy, Debug)]
pub(crate) struct QuadrantPattern {
    pub(crate) color: Color,
    pub(crate) variant: u8,
    pub(crate) blocks_center: bool,
    pub(crate) landmarks: &'static [Landmark],
}

pub(crate) const PATTERNS: [QuadrantPattern; 16] = [
    QuadrantPattern {
        color: Color::Red,
        variant: 0,
        blocks_center: true,
        landmarks: &[
            planet(3, 12, WS, Color::Red),
            planet(10, 13, EN, Color::Green),
            planet(12, 5, ES, Color::Blue),
            planet(5, 3, WN, Color::Yellow),
            plain(1, 8, ES),
            plain(7, 1, WN),
        ],
    },
    QuadrantPattern {
        color: Color::Red,
        variant: 1,
        blocks_center: true,
        landmarks: &[
            planet(4, 10, EN, Color::Red),
            planet(13, 11, WS, Color::Green),
            planet(9, 3, WN, Color::Blue),
            planet(2, 5, ES, Color::Yellow),
            plain(1, 13, WS),
            plain(12, 1, EN),
        ],
    },
    QuadrantPattern {
        color: Color::Red,
        variant: 2,
        blocks_center: false,
        landmarks: &[
            planet(6, 13, ES, Color::Red),
            planet(11, 9, WN, Color::Green),
            planet(3, 4, EN, Color::Blue),
            planet(13, 2, WS, Color::Yellow),
            plain(1, 3, WN),
            plain(9, 1, ES),
        ],
    },
    QuadrantPattern {
        color: Color::Red,
        variant: 3,
        blocks_center: false,
        landmarks: &[
            planet(2, 9, WN, Color::Red),
            planet(8, 12, WS, Color::Green),
            planet(14, 6, EN, Color::Blue),
            planet(6, 2, ES, Color::Yellow),
            plain(1, 11, EN),
            plain(11, 1, WS),
        ],
    },
    QuadrantPattern {
        color: Color::Green,
        variant: 0,
        blocks_center: true,
        landmarks: &[
            planet(5, 11, EN, Color::Red),
            planet(12, 12, WN, Color::Green),
            planet(2, 4, WS, Color::Blue),
            planet(10, 2, ES, Color::Yellow),
            plain(1, 6, WN),
            plain(13, 1, WS),
        ],
    },
    QuadrantPattern {
        color: Color::Green,
        variant: 1,
        blocks_center: true,
        landmarks: &[
            planet(9, 13, WS, Color::Red),
            planet(3, 7, ES, Color::Green),
            planet(13, 8, EN, Color::Blue),
            planet(6, 4, WN, Color::Yellow),
            plain(1, 10, ES),
            plain(5, 1, EN),
        ],
    },
    QuadrantPattern {
        color: Color::Green,
        variant: 2,
        blocks_center: false,
        landmarks: &[
            planet(11, 12, EN, Color::Red),
            planet(4, 13, WN, Color::Green),
            planet(7, 6, ES, Color::Blue),
            planet(12, 3, WS, Color::Yellow),
            plain(1, 2, EN),
            plain(8, 1, WN),
        ],
    },
    QuadrantPattern {
        color: Color::Green,
        variant: 3,
        blocks_center: false,
        landmarks: &[
            planet(3, 3, ES, Color::Red),
            planet(7, 10, WS, Color::Green),
            planet(12, 13, WN, Color::Blue),
            planet(10, 5, EN, Color::Yellow),
            plain(1, 12, WS),
            plain(14, 1, ES),
        ],
    },
    QuadrantPattern {
        color: Color::Blue,
        variant: 0,
        blocks_center: true,
        landmarks: &[
            planet(13, 10, ES, Color::Red),
            planet(6, 12, EN, Color::Green),
            planet(4, 6, WN, Color::Blue),
            planet(9, 4, WS, Color::Yellow),
            plain(1, 4, ES),
            plain(3, 1, WN),
        ],
    },
    QuadrantPattern {
        color: Color::Blue,
        variant: 1,
        blocks_center: true,
        landmarks: &[
            planet(2, 13, WN, Color::Red),
            planet(10, 7, WS, Color::Green),
            planet(5, 2, EN, Color::Blue),
            planet(12, 12, ES, Color::Yellow),
            plain(1, 9, WS),
            plain(10, 1, ES),
        ],
    },
    QuadrantPattern {
        color: Color::Blue,
        variant: 2,
        blocks_center: false,
        landmarks: &[
            planet(8, 9, WN, Color::Red),
            planet(2, 11, EN, Color::Green),
            planet(11, 4, ES, Color::Blue),
            planet(5, 5, WS, Color::Yellow),
            plain(1, 14, EN),
            plain(6, 1, WS),
        ],
    },
    QuadrantPattern {
        color: Color::Blue,
        variant: 3,
        blocks_center: false,
        landmarks: &[
            planet(12, 7, WS, Color::Red),
            planet(4, 2, WN, Color::Green),
            planet(9, 12, ES, Color::Blue),
            planet(3, 10, EN, Color::Yellow),
            plain(1, 5, WN),
            plain(13, 1, EN),
        ],
    },
    QuadrantPattern {
        color: Color::Yellow,
        variant: 0,
        blocks_center: true,
        landmarks: &[
            planet(7, 8, WS, Color::Red),
            planet(13, 3, EN, Color::Green),
            planet(3, 13, ES, Color::Blue),
            planet(11, 11, WN, Color::Yellow),
            plain(1, 7, EN),
            plain(4, 1, ES),
            swirl(6, 4, WN),
        ],
    },
    QuadrantPattern {
        color: Color::Yellow,
        variant: 1,
        blocks_center: true,
        landmarks: &[
            planet(4, 4, ES, Color::Red),
            planet(9, 10, WN, Color::Green),
            planet(14, 12, WS, Color::Blue),
            planet(2, 8, EN, Color::Yellow),
            plain(1, 2, WS),
            plain(12, 1, WN),
            swirl(11, 6, ES),
        ],
    },
    QuadrantPattern {
        color: Color::Yellow,
        variant: 2,
        blocks_center: false,
        landmarks: &[
            planet(10, 13, WN, Color::Red),
            planet(3, 6, EN, Color::Green),
            planet(12, 9, WS, Color::Blue),
            planet(7, 3, ES, Color::Yellow),
            plain(1, 11, ES),
            plain(9, 1, EN),
            swirl(5, 10, WS),
        ],
    },
    QuadrantPattern {
        color: Color::Yellow,
        variant: 3,
        blocks_center: false,
        landmarks: &[
            planet(6, 6, EN, Color::Red),
            planet(13, 13, ES, Color::Green),
            planet(2, 12, WS, Color::Blue),
            planet(11, 2, WN, Color::Yellow),
            plain(1, 4, WN),
            plain(7, 1, WS),
            swirl(9, 9, EN),
        ],
    },
];
