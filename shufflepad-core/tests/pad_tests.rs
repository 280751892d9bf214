#![allow(missing_docs)]
use shufflepad_core::alphabet;
use shufflepad_core::cipher::PadCipher;
use shufflepad_core::pad::{Pad, PAD_ROWS};
use shufflepad_core::seed::SeedSource;
use shufflepad_core::storage;

fn fixed_source() -> SeedSource {
    SeedSource {
        year: 2023,
        month: 1,
        day: 1,
        hour: 12,
        minute: 0,
        second: 0,
        micros: 0,
    }
}

#[test]
fn test_generate_creates_full_table_of_permutations() {
    let mut cipher = PadCipher::new();
    cipher.set_seed_source(fixed_source());
    let pad = cipher.generate().clone();

    assert_eq!(pad.len(), PAD_ROWS);

    let expected: Vec<u8> = alphabet::codes().collect();
    for row in pad.rows() {
        assert_eq!(row.len(), alphabet::ALPHABET_LEN);
        let mut sorted = row.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, expected, "row must be a permutation of the alphabet");
    }
}

#[test]
fn test_same_seed_source_generates_identical_pads() {
    let mut first = PadCipher::new();
    first.set_seed_source(fixed_source());
    let mut second = PadCipher::new();
    second.set_seed_source(fixed_source());

    assert_eq!(first.generate(), second.generate());
}

#[test]
fn test_distinct_seeds_generate_distinct_pads() {
    assert_ne!(Pad::from_seed(2037), Pad::from_seed(2038));
}

#[test]
fn test_fingerprint_tracks_pad_contents() {
    let pad = Pad::from_seed(2037);
    let same = Pad::from_seed(2037);
    let other = Pad::from_seed(4096);

    assert_eq!(pad.fingerprint(), same.fingerprint());
    assert_ne!(pad.fingerprint(), other.fingerprint());
}

#[test]
fn test_save_and_load_round_trips_exactly() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let pad_path = temp_dir.path().join("pad.json");
    let pad = Pad::from_seed(2037);

    storage::save_pad(&pad_path, &pad).expect("Failed to save pad");
    let loaded = storage::load_pad(&pad_path).expect("Failed to load pad");

    assert_eq!(pad, loaded);
    assert_eq!(pad.fingerprint(), loaded.fingerprint());
}

#[test]
fn test_load_rejects_malformed_pad_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let pad_path = temp_dir.path().join("broken.json");
    std::fs::write(&pad_path, "{\"rows\": 42}").expect("Failed to write file");

    assert!(storage::load_pad(&pad_path).is_err());
}
