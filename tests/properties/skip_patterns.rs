//! Property tests for directory skip patterns.

use std::path::PathBuf;

use proptest::prelude::*;

use rld::domain::value_objects::SkipPatterns;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z]{1,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: compiling arbitrary pattern text never panics.
    #[test]
    fn property_compile_never_panics(pattern in "(?s).{0,64}") {
        let root = PathBuf::from("/project");
        let _ = SkipPatterns::new(&root, &[pattern]);
    }

    /// PROPERTY: a bare name skips that directory at any depth, and
    /// everything below it.
    #[test]
    fn property_bare_name_matches_at_any_depth(
        name in "[a-z]{1,8}",
        prefix in proptest::collection::vec(segment(), 0..4),
    ) {
        let root = PathBuf::from("/project");
        let skip = SkipPatterns::new(&root, &[name.clone()]).unwrap();

        let mut dir: PathBuf = prefix.iter().collect();
        dir.push(&name);
        prop_assert!(skip.skips_dir(&dir));
        prop_assert!(skip.skips_dir(&dir.join("nested")));

        let mut other: PathBuf = prefix.iter().collect();
        other.push(format!("{}x", name));
        prop_assert!(!skip.skips_dir(&other));
    }
}
