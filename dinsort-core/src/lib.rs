//! DIN 5007-2 style string collation
//!
//! This crate orders strings the way a German-language index or file
//! listing expects them to be ordered:
//!
//! - symbols go before numbers, numbers go before letters;
//! - digit runs compare by numeric value (`file2` before `file10`), and at
//!   equal value the spelling with more leading zeroes goes first;
//! - letters compare by their expansion form: `Ä` as `AE`, `ß` as `ss`,
//!   `Œ` as `OE`, while other accented letters fold to their base letter;
//! - comparison is case-insensitive first, then case-sensitive with upper
//!   case first, then by raw code point order as the final tie-break.
//!
//! # Architecture
//!
//! - [`table`]: classification tables for U+0000..=U+017E
//! - [`tokenizer`]: lazy tokenizer producing [`Token`]s
//! - [`collator`]: three-level comparison on top of two tokenizers
//! - [`canonical`]: canonical form generator
//! - [`collections`]: sorted sets, maps and slice sorting
//!
//! # Example
//!
//! ```rust
//! use dinsort_core::{canonicalize, compare, sorted_set};
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare("file2.txt", "file10.txt"), Ordering::Less);
//! assert_eq!(canonicalize("Grüße"), "Gruesse");
//!
//! let set = sorted_set(["Zürich", "Aachen", "Ulm"]);
//! let names: Vec<&str> = set.iter().map(|key| key.as_str()).collect();
//! assert_eq!(names, ["Aachen", "Ulm", "Zürich"]);
//! ```

#![warn(missing_docs)]

pub mod canonical;
pub mod collator;
pub mod collections;
pub mod config;
pub mod error;
pub mod table;
pub mod token;
pub mod tokenizer;

// Re-export key types
pub use canonical::{canonicalize, canonicalize_opt};
pub use collator::{compare, compare_level, compare_opt, Collator, Level, Verdict};
pub use collections::{sorted_map, sorted_set, CollationKey};
pub use config::{CaseOrdering, CollatorConfig, CollatorConfigBuilder};
pub use error::{CollationError, Result};
pub use table::LAST_MAPPED;
pub use token::{CharClass, LetterCase, Numeral, Token};
pub use tokenizer::{tokenize, CaseMode, Tokenizer};
