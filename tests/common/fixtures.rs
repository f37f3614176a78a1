//! Static corpora used across harnesses.
//!
//! Each spoken corpus entry pairs what a recogniser might return with the
//! plate the normalizer is expected to produce.

/// Plates already in canonical form. Normalising any of these must be a no-op.
pub const CANONICAL_PLATES: &[&str] = &[
    "B1234ABC",
    "AB1",
    "DK4321F",
    "KT9Z",
    "B1234ABI",
    "BE1A",
    "DE77KA",
    "PB0001XY",
];

/// `(recognised text, expected plate)` pairs that must normalise.
pub const SPOKEN_CORPUS: &[(&str, &str)] = &[
    ("Abi 1234 Abc", "AB1234ABC"),
    ("B 2", "B2"),
    ("b 1234 abc", "B1234ABC"),
    ("B-1234-ABC", "B1234ABC"),
    ("be satu dua tiga empat a be ce", "B1234ABC"),
    ("de ka 4321 ef", "DK4321F"),
    ("Deka 88 Zet", "DK88Z"),
    ("Ka Be 7 Ka", "KB7K"),
    ("ade 9 xyz", "AD9XYZ"),
    ("AG 5 tujuh 9", "AG579"),
    ("  dk   1  ", "DK1"),
    ("B 1234 es te", "B1234ST"),
    ("B 12 AB 34", "B1234AB"),
    ("Deka88 Zet", "DK88Z"),
    ("Deka88Zet", "DK88ZET"),
    ("BSATULIMA", "B15"),
    ("dekasatulima", "DK15"),
    ("B 1234 DUA", "B1234DUA"),
];

/// Recognised text that must not yield a plate.
pub const NOISE_CORPUS: &[&str] = &[
    "",
    "   ",
    "???",
    "Q 1234 XYZ",
    "X999ZZ",
    "C 1 A",
    "KI 12",
    "halo selamat pagi",
    "1234",
    "B",
    "B 12345",
    "B 1234 ABCD",
];

/// Words a recogniser plausibly emits while someone reads out a plate.
pub fn spoken_vocabulary() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = nopol_core::tables::PHONETIC_CORRECTIONS
        .iter()
        .flat_map(|(heard, _)| heard.split(' '))
        .collect();
    words.extend(["A", "B", "D", "Q", "X", "ABC", "1", "12", "234", "9999", "-", "."]);
    words
}
