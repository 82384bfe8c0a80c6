#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Mixed-radix codec between world ids and layout choices.
//!
//! A [`WorldId`] is unranked digit by digit, least significant first:
//!
//! | field                 | radix |
//! |-----------------------|-------|
//! | red variant           | 4     |
//! | green variant         | 4     |
//! | blue variant          | 4     |
//! | yellow variant        | 4     |
//! | permutation digit A   | 3     |
//! | permutation digit B   | 2     |
//! | global rotation       | 4     |
//! | target selector       | rest  |
//!
//! Every id decodes; the selector absorbs whatever is left and is reduced
//! against the candidate count by the assembler.

use ricochet_worlds_core::{Color, QuarterTurns, Variant, WorldId, GROUP_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const VARIANT_RADIX: u64 = 4;
const DIGIT_A_RADIX: u64 = 3;
const DIGIT_B_RADIX: u64 = 2;
const ROTATION_RADIX: u64 = 4;

/// Number of distinct layouts addressed before the target selector.
pub const LAYOUT_SPACE: u64 =
    VARIANT_RADIX.pow(GROUP_COUNT as u32) * DIGIT_A_RADIX * DIGIT_B_RADIX * ROTATION_RADIX;

/// Two restricted swaps that place green, blue and yellow into slots 1 to 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPermutationDigits")]
pub struct PermutationDigits {
    a: u8,
    b: u8,
}

/// Raised when permutation digits fall outside `a < 3`, `b < 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("permutation digits ({a}, {b}) are out of range")]
pub struct PermutationDigitsOutOfRange {
    /// Rejected swap offset for slot 1.
    pub a: u8,
    /// Rejected swap offset for slot 2.
    pub b: u8,
}

#[derive(Deserialize)]
struct RawPermutationDigits {
    a: u8,
    b: u8,
}

impl TryFrom<RawPermutationDigits> for PermutationDigits {
    type Error = PermutationDigitsOutOfRange;

    fn try_from(raw: RawPermutationDigits) -> Result<Self, Self::Error> {
        Self::checked(raw.a, raw.b).ok_or(PermutationDigitsOutOfRange { a: raw.a, b: raw.b })
    }
}

impl PermutationDigits {
    /// Leaves every group in its home slot.
    pub const IDENTITY: PermutationDigits = PermutationDigits { a: 0, b: 0 };

    /// Creates the digits, panicking unless `a < 3` and `b < 2`.
    #[must_use]
    pub const fn new(a: u8, b: u8) -> Self {
        assert!(
            (a as u64) < DIGIT_A_RADIX && (b as u64) < DIGIT_B_RADIX,
            "permutation digit out of range"
        );
        Self { a, b }
    }

    /// Creates the digits, or `None` unless `a < 3` and `b < 2`.
    #[must_use]
    pub const fn checked(a: u8, b: u8) -> Option<Self> {
        if (a as u64) < DIGIT_A_RADIX && (b as u64) < DIGIT_B_RADIX {
            Some(Self { a, b })
        } else {
            None
        }
    }

    /// Swap offset applied to slot 1.
    #[must_use]
    pub const fn a(&self) -> u8 {
        self.a
    }

    /// Swap offset applied to slot 2.
    #[must_use]
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Group placed in each slot.
    ///
    /// Starts from `[Red, Green, Blue, Yellow]`, swaps slot 1 with slot
    /// `1 + a`, then slot 2 with slot `2 + b`. Red never leaves slot 0.
    #[must_use]
    pub fn slots(&self) -> [Color; GROUP_COUNT] {
        let mut slots = Color::ALL;
        slots.swap(1, 1 + usize::from(self.a));
        slots.swap(2, 2 + usize::from(self.b));
        slots
    }
}

/// Every choice needed to assemble one world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldSeed {
    variants: [Variant; GROUP_COUNT],
    permutation: PermutationDigits,
    rotation: QuarterTurns,
    target_selector: u64,
}

impl WorldSeed {
    /// Creates a seed from explicit fields.
    ///
    /// `variants` is indexed by [`Color::index`]. Rotation and selector are
    /// independent of each other and of the layout digits.
    #[must_use]
    pub const fn new(
        variants: [Variant; GROUP_COUNT],
        permutation: PermutationDigits,
        rotation: QuarterTurns,
        target_selector: u64,
    ) -> Self {
        Self {
            variants,
            permutation,
            rotation,
            target_selector,
        }
    }

    /// Variant selected for the group.
    #[must_use]
    pub const fn variant(&self, color: Color) -> Variant {
        self.variants[color.index()]
    }

    /// Variants of all groups, indexed by [`Color::index`].
    #[must_use]
    pub const fn variants(&self) -> [Variant; GROUP_COUNT] {
        self.variants
    }

    /// Permutation digits controlling slot placement.
    #[must_use]
    pub const fn permutation(&self) -> PermutationDigits {
        self.permutation
    }

    /// Global rotation applied before per-slot rotation.
    #[must_use]
    pub const fn rotation(&self) -> QuarterTurns {
        self.rotation
    }

    /// Unreduced index into the goal candidate list.
    #[must_use]
    pub const fn target_selector(&self) -> u64 {
        self.target_selector
    }

    /// Group placed in each slot.
    #[must_use]
    pub fn slots(&self) -> [Color; GROUP_COUNT] {
        self.permutation.slots()
    }
}

struct Digits {
    rest: u64,
}

impl Digits {
    fn take(&mut self, radix: u64) -> u64 {
        let digit = self.rest % radix;
        self.rest /= radix;
        digit
    }
}

/// Unranks a world id into its seed. Never fails.
#[must_use]
pub fn decode(id: WorldId) -> WorldSeed {
    let mut digits = Digits { rest: id.get() };
    let variants = Color::ALL.map(|_| Variant::wrapping(digits.take(VARIANT_RADIX)));
    let a = digits.take(DIGIT_A_RADIX) as u8;
    let b = digits.take(DIGIT_B_RADIX) as u8;
    let rotation = QuarterTurns::new(digits.take(ROTATION_RADIX));

    WorldSeed {
        variants,
        permutation: PermutationDigits { a, b },
        rotation,
        target_selector: digits.rest,
    }
}

/// Ranks a seed back into the world id that decodes to it.
///
/// Returns `None` when the selector is too large for the remaining digits to
/// fit into a `u64`.
#[must_use]
pub fn encode(seed: &WorldSeed) -> Option<WorldId> {
    let mut fields = vec![
        (u64::from(seed.rotation.get()), ROTATION_RADIX),
        (u64::from(seed.permutation.b), DIGIT_B_RADIX),
        (u64::from(seed.permutation.a), DIGIT_A_RADIX),
    ];
    fields.extend(
        Color::ALL
            .iter()
            .rev()
            .map(|color| (u64::from(seed.variant(*color).get()), VARIANT_RADIX)),
    );

    let mut value = seed.target_selector;
    for (digit, radix) in fields {
        value = value.checked_mul(radix)?.checked_add(digit)?;
    }
    Some(WorldId::new(value))
}
