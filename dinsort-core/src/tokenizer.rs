//! Lazy tokenizer over a borrowed string
//!
//! Turns a string into classified tokens. Folded letters that expand to two
//! letters (umlauts, ß, ligatures) produce the primary letter first and the
//! secondary letter on the following read. Consecutive digits collapse into
//! a single [`Numeral`] token. For example, `"Grüße166.txt"` tokenizes to
//! `G r u e s s e 166 . t x t END`.

use crate::error::{CollationError, Result};
use crate::table::{self, Kind};
use crate::token::{CharClass, LetterCase, Numeral, Token};
use std::iter::FusedIterator;

/// Whether letters are folded to upper case before comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// Fold every letter to upper case
    Insensitive,
    /// Keep letter case
    Sensitive,
}

/// Stateful token producer for a single string
///
/// Created fresh for every comparison or canonicalization. Once `End` has
/// been produced, [`Tokenizer::next_token`] keeps returning `End` while the
/// strict [`Tokenizer::read`] reports [`CollationError::ReadPastEnd`].
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    source: Option<&'a str>,
    position: usize,
    case_mode: CaseMode,
    pending: Option<char>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over a string
    pub fn new(source: &'a str, case_mode: CaseMode) -> Self {
        Self::from_option(Some(source), case_mode)
    }

    /// Create a tokenizer over a possibly absent string
    ///
    /// An absent string yields nothing but `End`.
    pub fn from_option(source: Option<&'a str>, case_mode: CaseMode) -> Self {
        Self {
            source,
            position: 0,
            case_mode,
            pending: None,
            finished: false,
        }
    }

    /// Case mode this tokenizer was created with
    pub fn case_mode(&self) -> CaseMode {
        self.case_mode
    }

    /// Whether the terminal `End` token has been produced
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Produce the next token; returns `End` forever once the source is exhausted
    pub fn next_token(&mut self) -> Token<'a> {
        if let Some(secondary) = self.pending.take() {
            return self.secondary_token(secondary);
        }

        let Some(source) = self.source else {
            self.finished = true;
            return Token::End;
        };
        let Some(ch) = source[self.position..].chars().next() else {
            self.finished = true;
            return Token::End;
        };

        let start = self.position;
        self.position += ch.len_utf8();

        let Some(entry) = table::lookup(ch) else {
            return Token::Symbol(ch);
        };

        match entry.kind() {
            Kind::Symbol => Token::Symbol(entry.base()),
            Kind::Digit => self.numeral(source, start),
            Kind::Letter(case) => {
                self.pending = entry.secondary();
                self.letter(case, entry.base())
            }
        }
    }

    /// Strict variant of [`Tokenizer::next_token`] that fails once `End`
    /// has already been delivered
    pub fn read(&mut self) -> Result<Token<'a>> {
        if self.finished {
            return Err(CollationError::ReadPastEnd);
        }
        Ok(self.next_token())
    }

    /// Extend a digit at `start` over every following digit
    fn numeral(&mut self, source: &'a str, start: usize) -> Token<'a> {
        let run_len = source.as_bytes()[self.position..]
            .iter()
            .take_while(|&&b| b.is_ascii() && table::class_of(b as char) == CharClass::Numeral)
            .count();
        self.position += run_len;
        Token::Numeral(Numeral::from_run(&source[start..self.position]))
    }

    fn secondary_token(&self, secondary: char) -> Token<'a> {
        match table::lookup(secondary).map(|entry| (entry.kind(), entry.base())) {
            Some((Kind::Letter(case), base)) => self.letter(case, base),
            // Secondaries are always mapped letters; anything else is kept verbatim
            _ => Token::Symbol(secondary),
        }
    }

    /// Insensitive mode folds the table's ASCII base, not the source code
    /// point. Characters the table classifies as symbols (`µ`) keep their
    /// identity even when their upper case form is a letter elsewhere.
    fn letter(&self, case: LetterCase, base: char) -> Token<'a> {
        match (self.case_mode, case) {
            (CaseMode::Insensitive, LetterCase::Lower) => {
                Token::Letter(LetterCase::Upper, base.to_ascii_uppercase())
            }
            _ => Token::Letter(case, base),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    /// Yields every token before `End`
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token::End => None,
            token => Some(token),
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Collect the tokens of a string, without the terminal `End`
pub fn tokenize(source: &str, case_mode: CaseMode) -> Vec<Token<'_>> {
    Tokenizer::new(source, case_mode).collect()
}
