//! Canonical form of a string
//!
//! The canonical form is the case-sensitive token stream written back as
//! text: umlauts and ligatures appear expanded, accents are dropped, and
//! numbers lose one redundant leading zero. It is usable as an external sort
//! key or for equality probing independent of accents.

use crate::token::Token;
use crate::tokenizer::{CaseMode, Tokenizer};

/// Build the canonical form of a string
pub fn canonicalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for token in Tokenizer::new(s, CaseMode::Sensitive) {
        match token {
            Token::Numeral(numeral) => {
                // A lone zero counts as its own leading zero
                for _ in 1..numeral.leading_zeros() {
                    out.push('0');
                }
                out.push_str(numeral.digits());
            }
            Token::Symbol(ch) | Token::Letter(_, ch) => out.push(ch),
            Token::End => break,
        }
    }
    out
}

/// Canonical form of a possibly absent string
pub fn canonicalize_opt(s: Option<&str>) -> Option<String> {
    s.map(canonicalize)
}
