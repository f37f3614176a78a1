//! Domain-specific assertion macros for nopol harnesses.
//!
//! These wrap `pretty_assertions` and add the raw input to every failure
//! message so a broken corpus entry is obvious from the test output.

/// Assert that `$input` normalises to `$expected`.
///
/// ```rust
/// assert_plate!("Abi 1234 Abc", "AB1234ABC");
/// ```
#[macro_export]
macro_rules! assert_plate {
    ($input:expr, $expected:expr) => {{
        let input: &str = $input;
        let expected: &str = $expected;
        let actual = nopol_core::clean_plate(input);
        if actual != expected {
            let trace = nopol_core::default_normalizer().explain(input);
            panic!(
                "assert_plate! failed for {:?}:\n  expected: {:?}\n  actual:   {:?}\n  trace:    {:#?}",
                input, expected, actual, trace.attempts
            );
        }
    }};
}

/// Assert that `$input` yields no plate.
#[macro_export]
macro_rules! assert_no_plate {
    ($input:expr) => {{
        let input: &str = $input;
        let actual = nopol_core::clean_plate(input);
        if !actual.is_empty() {
            panic!(
                "assert_no_plate! failed: {:?} normalised to {:?}",
                input, actual
            );
        }
    }};
}

/// A non-empty result must parse under the grammar with a known prefix.
pub fn assert_prefix_invariant(input: &str, output: &str) {
    if output.is_empty() {
        return;
    }
    let plate = nopol_core::PlateCandidate::parse(output).unwrap_or_else(|| {
        panic!("{input:?} produced {output:?}, which does not match the plate grammar")
    });
    assert!(
        plate.has_valid_prefix(),
        "{input:?} produced {output:?} with unknown prefix {:?}",
        plate.prefix()
    );
    pretty_assertions::assert_eq!(plate.to_string(), output);
}
