//! Static lookup tables: the regional prefix set and the phonetic correction
//! list.
//!
//! Both tables are immutable. The prefix set is a compile-time perfect hash
//! set; the correction list is an ordered slice because replacement order is
//! significant (see [`PHONETIC_CORRECTIONS`]).

use std::collections::BTreeSet;

use phf::phf_set;

// ---------------------------------------------------------------------------
// Regional prefixes
// ---------------------------------------------------------------------------

/// Indonesian regional registration prefixes, grouped by island.
pub static REGIONAL_PREFIXES: phf::Set<&'static str> = phf_set! {
    // Sumatra
    "BL", "BB", "BK", "BA", "BM", "BP", "BG", "BN", "BE", "BD", "BH",
    // Java
    "A", "B", "D", "E", "F", "T", "Z", "G", "H", "K", "R",
    "AA", "AB", "AD", "AE", "AG", "L", "M", "N", "P", "S", "W",
    // Bali and Nusa Tenggara
    "DK", "DR", "EA", "DH", "EB", "ED",
    // Kalimantan
    "KB", "DA", "KH", "KT", "KU",
    // Sulawesi
    "DB", "DL", "DM", "DN", "DT", "DD", "DC", "DP", "DW",
    // Maluku
    "DE", "DG",
    // Papua
    "PA", "PB", "DS",
};

/// Case-insensitive membership test against [`REGIONAL_PREFIXES`].
pub fn is_valid_prefix(prefix: &str) -> bool {
    REGIONAL_PREFIXES.contains(prefix.to_ascii_uppercase().as_str())
}

/// Sorted read-only snapshot of every valid prefix.
pub fn list_valid_prefixes() -> BTreeSet<&'static str> {
    REGIONAL_PREFIXES.iter().copied().collect()
}

// ---------------------------------------------------------------------------
// Phonetic corrections
// ---------------------------------------------------------------------------

/// Misheard phrase → intended token, applied in slice order.
///
/// Ordering rule: a phrase that contains another phrase comes first, so the
/// longer match is never pre-empted by a shorter one. Multi-word phrases lead,
/// followed by number words, spelled-out prefixes, and finally the two-letter
/// Indonesian letter names. No corrected value is itself a key, so a single
/// pass never chains.
pub static PHONETIC_CORRECTIONS: &[(&str, &str)] = &[
    // Spelled-out prefixes spoken letter by letter
    ("KA BE", "KB"),
    ("KA HA", "KH"),
    ("KA TE", "KT"),
    ("BE KA", "BK"),
    ("BE HA", "BH"),
    ("BE EL", "BL"),
    ("DE KA", "DK"),
    ("DE EL", "DL"),
    ("DE TE", "DT"),
    ("PE BE", "PB"),
    ("A BE", "AB"),
    ("A DE", "AD"),
    ("A GE", "AG"),
    // Number words
    ("SEMBILAN", "9"),
    ("DELAPAN", "8"),
    ("KOSONG", "0"),
    ("TUJUH", "7"),
    ("EMPAT", "4"),
    ("ENAM", "6"),
    ("LIMA", "5"),
    ("TIGA", "3"),
    ("SATU", "1"),
    ("DUA", "2"),
    ("NOL", "0"),
    // Prefixes run together by the recognizer
    ("DEKA", "DK"),
    ("KABE", "KB"),
    ("BEKA", "BK"),
    ("BEHA", "BH"),
    ("BEGE", "BG"),
    ("BEEL", "BL"),
    ("BEEM", "BM"),
    ("DEBE", "DB"),
    ("DEEL", "DL"),
    ("DEEM", "DM"),
    ("DETE", "DT"),
    ("DEHA", "DH"),
    ("KAHA", "KH"),
    ("KATE", "KT"),
    ("PEBE", "PB"),
    ("ABI", "AB"),
    ("ABE", "AB"),
    ("ADI", "AD"),
    ("ADE", "AD"),
    ("AGI", "AG"),
    ("AGE", "AG"),
    // English-flavoured letter names
    ("BEE", "B"),
    ("SEE", "C"),
    ("DEE", "D"),
    ("JAY", "J"),
    ("KAY", "K"),
    ("PEE", "P"),
    ("TEE", "T"),
    ("WHY", "Y"),
    ("ZED", "Z"),
    // Indonesian letter names
    ("EKS", "X"),
    ("ZET", "Z"),
    ("BE", "B"),
    ("CE", "C"),
    ("DE", "D"),
    ("EF", "F"),
    ("GE", "G"),
    ("HA", "H"),
    ("JE", "J"),
    ("KA", "K"),
    ("EL", "L"),
    ("EM", "M"),
    ("EN", "N"),
    ("PE", "P"),
    ("KI", "Q"),
    ("ER", "R"),
    ("ES", "S"),
    ("TE", "T"),
    ("FE", "V"),
    ("WE", "W"),
    ("YE", "Y"),
];
