//! Classification tables for U+0000..=U+017E
//!
//! Every code point in the mapped range has an [`Entry`] holding its
//! character class, its folded base value and an optional secondary letter
//! used to expand umlauts and ligatures (`ä` -> `a` + `e`). The table is a
//! plain `static` built at compile time, so lookups never allocate and the
//! data is shared read-only between threads.
//!
//! Code points above [`LAST_MAPPED`] have no entry; callers treat them as
//! opaque symbols.

use crate::token::{CharClass, LetterCase};

/// Last code point covered by the tables (LATIN SMALL LETTER Z WITH CARON)
pub const LAST_MAPPED: char = '\u{17E}';

const TABLE_LEN: usize = LAST_MAPPED as usize + 1;

/// Base letters for U+00C0..=U+00FF. `.` marks a symbol (`×`, `Þ`, `÷`, `þ`).
const LATIN_1_LETTERS: &[u8; 64] = b"AAAAAAACEEEEIIII\
DNOOOOO.OUUUUY.s\
aaaaaaaceeeeiiii\
dnooooo.ouuuuy.y";

/// Base letters for U+0100..=U+017E (Latin Extended-A).
const EXTENDED_A_LETTERS: &[u8; 127] = b"AaAaAaCcCcCcCcDd\
DdEeEeEeEeEeGgGg\
GgGgHhHhIiIiIiIi\
IiIiJjKkkLlLlLlL\
lLlNnNnNnnNnOoOo\
OoOoRrRrRrSsSsSs\
SsTtTtTtUuUuUuUu\
UuUuWwYyYZzZzZz";

/// Two-letter expansions: the code point and the letter emitted after its base.
const SECONDARIES: [(char, char); 13] = [
    ('Ä', 'E'),
    ('Æ', 'E'),
    ('Ö', 'E'),
    ('Ü', 'E'),
    ('ß', 's'),
    ('ä', 'e'),
    ('æ', 'e'),
    ('ö', 'e'),
    ('ü', 'e'),
    ('Ĳ', 'J'),
    ('ĳ', 'j'),
    ('Œ', 'E'),
    ('œ', 'e'),
];

/// How a mapped code point participates in tokenization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    /// Compared by its own code point
    Symbol,
    /// Decimal digit, part of a numeral run
    Digit,
    /// Letter folding to an ASCII base letter
    Letter(LetterCase),
}

/// Classification of a single mapped code point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    kind: Kind,
    base: char,
    secondary: Option<char>,
}

impl Entry {
    const fn symbol(cp: char) -> Self {
        Self {
            kind: Kind::Symbol,
            base: cp,
            secondary: None,
        }
    }

    const fn from_ascii(byte: u8) -> Self {
        let kind = if byte.is_ascii_digit() {
            Kind::Digit
        } else if byte.is_ascii_uppercase() {
            Kind::Letter(LetterCase::Upper)
        } else if byte.is_ascii_lowercase() {
            Kind::Letter(LetterCase::Lower)
        } else {
            Kind::Symbol
        };
        Self {
            kind,
            base: byte as char,
            secondary: None,
        }
    }

    /// Entry for a non-ASCII code point whose base letter is `letter`
    const fn folded(cp: char, letter: u8) -> Self {
        if letter == b'.' {
            return Self::symbol(cp);
        }
        Self::from_ascii(letter)
    }

    pub(crate) const fn kind(&self) -> Kind {
        self.kind
    }

    /// Character class of this code point
    pub const fn class(&self) -> CharClass {
        match self.kind {
            Kind::Symbol => CharClass::Symbol,
            Kind::Digit => CharClass::Numeral,
            Kind::Letter(LetterCase::Upper) => CharClass::Upper,
            Kind::Letter(LetterCase::Lower) => CharClass::Lower,
        }
    }

    /// Folded base character: the unaccented letter, the digit itself, or
    /// the symbol itself
    pub const fn base(&self) -> char {
        self.base
    }

    /// Numeric value of a digit entry
    pub const fn digit(&self) -> Option<u32> {
        match self.kind {
            Kind::Digit => Some(self.base as u32 - '0' as u32),
            _ => None,
        }
    }

    /// Letter to insert after this one, if it expands to two letters
    pub const fn secondary(&self) -> Option<char> {
        self.secondary
    }
}

const fn build() -> [Entry; TABLE_LEN] {
    let mut table = [Entry::symbol('\0'); TABLE_LEN];

    let mut cp = 0;
    while cp < TABLE_LEN {
        table[cp] = if cp < 0x80 {
            Entry::from_ascii(cp as u8)
        } else if cp < 0xC0 {
            Entry::symbol(to_char(cp))
        } else if cp < 0x100 {
            Entry::folded(to_char(cp), LATIN_1_LETTERS[cp - 0xC0])
        } else {
            Entry::folded(to_char(cp), EXTENDED_A_LETTERS[cp - 0x100])
        };
        cp += 1;
    }

    let mut i = 0;
    while i < SECONDARIES.len() {
        let (cp, secondary) = SECONDARIES[i];
        table[cp as usize].secondary = Some(secondary);
        i += 1;
    }

    table
}

const fn to_char(cp: usize) -> char {
    match char::from_u32(cp as u32) {
        Some(ch) => ch,
        None => panic!("mapped range contains no surrogates"),
    }
}

static TABLE: [Entry; TABLE_LEN] = build();

/// Look up the entry for a code point; `None` above [`LAST_MAPPED`]
#[inline]
pub fn lookup(cp: char) -> Option<&'static Entry> {
    TABLE.get(cp as usize)
}

/// Character class of any code point (unmapped code points are symbols)
#[inline]
pub fn class_of(cp: char) -> CharClass {
    lookup(cp).map_or(CharClass::Symbol, Entry::class)
}

/// Folded value of any code point: digit value for digits, base letter for
/// letters, the code point itself otherwise
#[inline]
pub fn base_of(cp: char) -> u32 {
    match lookup(cp) {
        Some(entry) => entry.digit().unwrap_or(entry.base as u32),
        None => cp as u32,
    }
}

/// Secondary insertion letter for a code point, if any
#[inline]
pub fn secondary_of(cp: char) -> Option<char> {
    lookup(cp).and_then(Entry::secondary)
}
