//! Three-level string comparison
//!
//! 1. Token streams compared case-insensitively.
//! 2. If equal, compared case-sensitively (upper case first).
//! 3. If still equal, the raw strings are compared in code point order.
//!
//! Only identical strings compare `Equal`, so the collator can key ordered
//! sets and maps without silently merging distinct entries. An absent string
//! sorts before every present one, including the empty string.

use crate::config::{CaseOrdering, CollatorConfig};
use crate::tokenizer::{CaseMode, Tokenizer};
use std::cmp::Ordering;
use tracing::trace;

/// Level at which a comparison was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// One side was absent
    Presence,
    /// Case-insensitive token comparison
    CaseInsensitive,
    /// Case-sensitive token comparison
    CaseSensitive,
    /// Raw code point order (also reported for identical strings)
    Binary,
}

impl Level {
    /// Short name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Presence => "presence",
            Level::CaseInsensitive => "case-insensitive",
            Level::CaseSensitive => "case-sensitive",
            Level::Binary => "binary",
        }
    }
}

/// Result of a comparison together with the deciding level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Final ordering
    pub ordering: Ordering,
    /// Level that produced it
    pub level: Level,
}

impl Verdict {
    fn new(ordering: Ordering, level: Level) -> Self {
        Self { ordering, level }
    }
}

/// Compare the token streams of two strings at a single level
pub fn compare_level(a: &str, b: &str, case_mode: CaseMode) -> Ordering {
    let mut left = Tokenizer::new(a, case_mode);
    let mut right = Tokenizer::new(b, case_mode);
    loop {
        let (x, y) = (left.next_token(), right.next_token());
        match x.cmp(&y) {
            Ordering::Equal if x.is_end() => return Ordering::Equal,
            Ordering::Equal => continue,
            ordering => return ordering,
        }
    }
}

/// DIN 5007-2 style string collator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Collator {
    config: CollatorConfig,
}

impl Collator {
    /// Create a collator with the given configuration
    pub fn new(config: CollatorConfig) -> Self {
        Self { config }
    }

    /// Collator that discards the case-sensitive level
    pub fn legacy() -> Self {
        Self::new(CollatorConfig::legacy())
    }

    /// Current configuration
    pub fn config(&self) -> &CollatorConfig {
        &self.config
    }

    /// Compare two strings
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.explain(a, b).ordering
    }

    /// Compare two possibly absent strings
    pub fn compare_opt(&self, a: Option<&str>, b: Option<&str>) -> Ordering {
        self.explain_opt(a, b).ordering
    }

    /// Compare two possibly absent strings and report the deciding level
    pub fn explain_opt(&self, a: Option<&str>, b: Option<&str>) -> Verdict {
        match (a, b) {
            (None, None) => Verdict::new(Ordering::Equal, Level::Presence),
            (None, Some(_)) => Verdict::new(Ordering::Less, Level::Presence),
            (Some(_), None) => Verdict::new(Ordering::Greater, Level::Presence),
            (Some(a), Some(b)) => self.explain(a, b),
        }
    }

    /// Compare two strings and report the deciding level
    pub fn explain(&self, a: &str, b: &str) -> Verdict {
        let primary = compare_level(a, b, CaseMode::Insensitive);
        if primary != Ordering::Equal {
            return Verdict::new(primary, Level::CaseInsensitive);
        }

        let secondary = compare_level(a, b, CaseMode::Sensitive);
        if secondary != Ordering::Equal {
            match self.config.case_ordering {
                CaseOrdering::Honored => {
                    trace!(?secondary, "decided by letter case");
                    return Verdict::new(secondary, Level::CaseSensitive);
                }
                CaseOrdering::Legacy => {
                    trace!(?secondary, "case verdict discarded");
                }
            }
        }

        let binary = a.cmp(b);
        trace!(?binary, "decided by binary order");
        Verdict::new(binary, Level::Binary)
    }
}

/// Compare two strings with the default collator
pub fn compare(a: &str, b: &str) -> Ordering {
    Collator::default().compare(a, b)
}

/// Compare two possibly absent strings with the default collator
pub fn compare_opt(a: Option<&str>, b: Option<&str>) -> Ordering {
    Collator::default().compare_opt(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Ordering::*;

    #[test]
    fn test_class_order() {
        assert_eq!(compare("-abc", "1abc"), Less);
        assert_eq!(compare("1abc", "abc"), Less);
        assert_eq!(compare("abc", "-abc"), Greater);
    }

    #[test]
    fn test_terminated_string_first() {
        assert_eq!(compare("", "-"), Less);
        assert_eq!(compare("abc", "abc-"), Less);
        assert_eq!(compare("file", "file1"), Less);
    }

    #[test]
    fn test_numeric_runs() {
        assert_eq!(compare("file2.txt", "file10.txt"), Less);
        assert_eq!(compare("file10.txt", "file9.txt"), Greater);
        assert_eq!(compare("v1.10", "v1.9"), Greater);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(compare("007", "07"), Less);
        assert_eq!(compare("07", "7"), Less);
        assert_eq!(compare("007", "8"), Less);
        assert_eq!(compare("00", "0"), Less);
    }

    #[test]
    fn test_umlaut_expansion() {
        assert_eq!(compare_level("Grüße", "Gruesse", CaseMode::Insensitive), Equal);
        assert_eq!(compare_level("Grüße", "Gruesse", CaseMode::Sensitive), Equal);
        let verdict = Collator::default().explain("Grüße", "Gruesse");
        assert_eq!(verdict.level, Level::Binary);
        assert_eq!(verdict.ordering, Greater);

        assert_ne!(compare("Müller", "Mueller"), Equal);
        assert_eq!(compare("Müller", "Muff"), Less);
        assert_eq!(compare("Mull", "Müller"), Greater);
    }

    #[test]
    fn test_accents_fold_to_base() {
        assert_eq!(compare_level("élan", "elan", CaseMode::Insensitive), Equal);
        assert_eq!(compare("élan", "elba"), Less);
        assert_eq!(compare("Ångström", "Angstroem"), Greater);
    }

    #[test]
    fn test_case_insensitive_first() {
        assert_eq!(compare("apple", "Banana"), Less);
        assert_eq!(compare("Apple", "banana"), Less);
        assert_eq!(compare("ZEBRA", "apple"), Greater);
    }

    #[test]
    fn test_null_handling() {
        assert_eq!(compare_opt(None, Some("")), Less);
        assert_eq!(compare_opt(Some(""), None), Greater);
        assert_eq!(compare_opt(None, None), Equal);
        assert_eq!(compare_opt(Some("a"), Some("a")), Equal);
        assert_eq!(
            Collator::default().explain_opt(None, Some("x")).level,
            Level::Presence
        );
    }

    #[test]
    fn test_case_variants_never_equal() {
        for collator in [Collator::default(), Collator::legacy()] {
            assert_ne!(collator.compare("ABC", "abc"), Equal);
            assert_eq!(collator.compare("ABC", "abc"), Less);
            assert_eq!(collator.compare("abc", "ABC"), Greater);
        }
    }

    #[test]
    fn test_honored_case_level() {
        let collator = Collator::default();
        // Upper case first at the first differing letter
        let verdict = collator.explain("aBC", "Abc");
        assert_eq!(verdict.level, Level::CaseSensitive);
        assert_eq!(verdict.ordering, Greater);
        assert_eq!(collator.compare("Abc", "aBC"), Less);
    }

    #[test]
    fn test_legacy_case_level_is_inert() {
        let collator = Collator::legacy();
        let verdict = collator.explain("aBC", "Abc");
        assert_eq!(verdict.level, Level::Binary);
        // 'a' (0x61) > 'A' (0x41) in code point order
        assert_eq!(verdict.ordering, Greater);

        assert_eq!(collator.compare("Abc", "ABC"), Greater);
        assert_eq!(collator.compare("Äa", "AEA"), Greater);
    }

    #[test]
    fn test_policies_disagree() {
        // Case level: 'Ä' expands to upper 'A' 'E', 'a' 'e' are lower => "Äb" < "aeb"
        // Binary: 'Ä' (0xC4) > 'a' (0x61)
        assert_eq!(Collator::default().compare("Äb", "aeb"), Less);
        assert_eq!(Collator::legacy().compare("Äb", "aeb"), Greater);
    }

    #[test]
    fn test_identical_strings() {
        let verdict = Collator::default().explain("Straße 12", "Straße 12");
        assert_eq!(verdict, Verdict::new(Equal, Level::Binary));
    }

    #[test]
    fn test_unmapped_symbols_compare_raw() {
        assert_eq!(compare("€", "$"), Greater);
        assert_eq!(compare("€", "1"), Less);
        assert_eq!(compare("я", "Я"), Greater);
    }
}
