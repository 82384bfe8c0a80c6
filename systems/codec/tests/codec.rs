use std::collections::HashMap;

use ricochet_worlds_core::{Color, QuarterTurns, Variant, WorldId};
use ricochet_worlds_system_codec::{decode, encode, PermutationDigits, WorldSeed, LAYOUT_SPACE};

#[test]
fn world_zero_decodes_to_identity_layout() {
    let seed = decode(WorldId::new(0));

    for color in Color::ALL {
        assert_eq!(seed.variant(color), Variant::new(0));
    }
    assert_eq!(seed.permutation(), PermutationDigits::IDENTITY);
    assert_eq!(seed.rotation(), QuarterTurns::ZERO);
    assert_eq!(seed.target_selector(), 0);
}

#[test]
fn variant_digits_are_least_significant() {
    // red 1, green 2, blue 3, yellow 1
    let id = 1 + 2 * 4 + 3 * 16 + 64;
    let seed = decode(WorldId::new(id));

    assert_eq!(seed.variant(Color::Red), Variant::new(1));
    assert_eq!(seed.variant(Color::Green), Variant::new(2));
    assert_eq!(seed.variant(Color::Blue), Variant::new(3));
    assert_eq!(seed.variant(Color::Yellow), Variant::new(1));
    assert_eq!(seed.permutation(), PermutationDigits::IDENTITY);
}

#[test]
fn digit_a_one_swaps_slots_one_and_two() {
    let seed = decode(WorldId::new(256));

    assert_eq!(seed.permutation(), PermutationDigits::new(1, 0));
    assert_eq!(
        seed.slots(),
        [Color::Red, Color::Blue, Color::Green, Color::Yellow]
    );
}

#[test]
fn rotation_and_selector_follow_layout_digits() {
    let id = 256 * 6 * 3 + 256 * 6 * 4 * 11;
    let seed = decode(WorldId::new(id));

    assert_eq!(seed.rotation(), QuarterTurns::new(3));
    assert_eq!(seed.target_selector(), 11);
}

#[test]
fn every_permutation_appears_equally_often() {
    let mut frequencies: HashMap<[Color; 4], u64> = HashMap::new();
    for id in 0..LAYOUT_SPACE {
        let slots = decode(WorldId::new(id)).slots();
        assert_eq!(slots[0], Color::Red, "red must stay in slot 0");
        *frequencies.entry(slots).or_default() += 1;
    }

    assert_eq!(frequencies.len(), 6);
    for (slots, count) in frequencies {
        assert_eq!(count, LAYOUT_SPACE / 6, "uneven frequency for {slots:?}");
    }
}

#[test]
fn encode_inverts_decode() {
    let samples = (0..LAYOUT_SPACE * 3)
        .step_by(7)
        .chain([u64::MAX, u64::MAX - 1, 1 << 40, 123_456_789_012]);
    for raw in samples {
        let id = WorldId::new(raw);
        assert_eq!(encode(&decode(id)), Some(id), "id {raw}");
    }
}

#[test]
fn encode_reports_selector_overflow() {
    let seed = WorldSeed::new(
        [Variant::new(0); 4],
        PermutationDigits::IDENTITY,
        QuarterTurns::ZERO,
        u64::MAX,
    );
    assert_eq!(encode(&seed), None);
}

#[test]
fn explicit_seed_keeps_independent_fields() {
    let seed = WorldSeed::new(
        [Variant::new(3), Variant::new(2), Variant::new(1), Variant::new(0)],
        PermutationDigits::new(2, 1),
        QuarterTurns::new(2),
        40,
    );
    let id = encode(&seed).expect("fits");

    assert_eq!(decode(id), seed);
}

#[test]
fn huge_ids_wrap_every_field() {
    let seed = decode(WorldId::new(u64::MAX));

    for color in Color::ALL {
        assert_eq!(seed.variant(color), Variant::new(3));
    }
    assert_eq!(seed.permutation(), PermutationDigits::new(0, 1));
    assert_eq!(seed.target_selector(), u64::MAX / LAYOUT_SPACE);
}

fn encoded_seed(variants: [u8; 4], a: u8, b: u8, rotation: u8, selector: u64) -> Vec<u8> {
    let mut bytes = variants.to_vec();
    bytes.extend([a, b, rotation]);
    bytes.extend(selector.to_le_bytes());
    bytes
}

#[test]
fn stored_seed_matches_decoded_seed() {
    let bytes = encoded_seed([1, 2, 3, 0], 2, 1, 3, 40);
    let seed: WorldSeed = bincode::deserialize(&bytes).expect("valid seed");

    assert_eq!(bincode::serialize(&seed).expect("serialize"), bytes);
    assert_eq!(seed.variant(Color::Green), Variant::new(2));
    assert_eq!(seed.permutation(), PermutationDigits::new(2, 1));
    assert_eq!(seed.rotation(), QuarterTurns::new(3));
    assert_eq!(seed.target_selector(), 40);
}

#[test]
fn stored_seed_with_unknown_variant_is_rejected() {
    let bytes = encoded_seed([9, 0, 0, 0], 0, 0, 0, 0);
    assert!(bincode::deserialize::<WorldSeed>(&bytes).is_err());
}

#[test]
fn stored_seed_with_out_of_range_permutation_is_rejected() {
    for (a, b) in [(5, 0), (3, 0), (0, 2)] {
        let bytes = encoded_seed([0, 0, 0, 0], a, b, 0, 0);
        assert!(
            bincode::deserialize::<WorldSeed>(&bytes).is_err(),
            "digits ({a}, {b}) accepted"
        );
    }
}

#[test]
fn stored_seed_rotation_wraps_into_range() {
    let bytes = encoded_seed([0, 0, 0, 0], 0, 0, 6, 0);
    let seed: WorldSeed = bincode::deserialize(&bytes).expect("valid seed");
    assert_eq!(seed.rotation(), QuarterTurns::new(2));
}
