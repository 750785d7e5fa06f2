//! Token types produced by the tokenizer

use std::cmp::Ordering;
use std::fmt;

/// Character class, in collation order
///
/// `End` sorts before everything so that a string which terminates first
/// goes first. It never classifies an actual character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    /// End of the token stream
    End,
    /// Punctuation, whitespace and any code point outside the mapped range
    Symbol,
    /// A run of decimal digits
    Numeral,
    /// Upper case letter
    Upper,
    /// Lower case letter
    Lower,
}

/// Case of a letter token. Upper case sorts first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterCase {
    /// Upper case
    Upper,
    /// Lower case
    Lower,
}

/// A run of decimal digits
///
/// The run is kept as a slice of the source, so numbers of any length
/// compare exactly: first by the number of significant digits, then digit
/// by digit. At equal value, the run with more leading zeroes sorts first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Numeral<'a> {
    run: &'a str,
    leading_zeros: usize,
}

impl<'a> Numeral<'a> {
    /// Create a numeral from a run of ASCII digits
    pub(crate) fn from_run(run: &'a str) -> Self {
        debug_assert!(run.bytes().all(|b| b.is_ascii_digit()));
        let leading_zeros = run.bytes().take_while(|&b| b == b'0').count();
        Self { run, leading_zeros }
    }

    /// The digit run as it appeared in the source
    pub fn run(&self) -> &'a str {
        self.run
    }

    /// Number of leading zero digits; a run of zeroes counts every one of them
    pub fn leading_zeros(&self) -> usize {
        self.leading_zeros
    }

    /// Decimal digits of the value without leading zeroes (`"0"` for zero)
    pub fn digits(&self) -> &'a str {
        match self.significant() {
            "" => "0",
            digits => digits,
        }
    }

    /// Numeric value, or `None` if it does not fit in a `u64`
    pub fn value(&self) -> Option<u64> {
        self.digits().parse().ok()
    }

    fn significant(&self) -> &'a str {
        &self.run[self.leading_zeros..]
    }
}

impl Ord for Numeral<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant(), other.significant());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| other.leading_zeros.cmp(&self.leading_zeros))
    }
}

impl PartialOrd for Numeral<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A classified token
///
/// The variant order is the class order, so the derived `Ord` compares the
/// class first and the payload second. Letters compare case before base
/// letter, which puts every upper case letter before every lower case one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token<'a> {
    /// End of the stream
    End,
    /// A symbol, compared by code point
    Symbol(char),
    /// A run of digits
    Numeral(Numeral<'a>),
    /// A letter, folded to its unaccented ASCII base
    Letter(LetterCase, char),
}

impl Token<'_> {
    /// Class of this token
    pub fn class(&self) -> CharClass {
        match self {
            Token::End => CharClass::End,
            Token::Symbol(_) => CharClass::Symbol,
            Token::Numeral(_) => CharClass::Numeral,
            Token::Letter(LetterCase::Upper, _) => CharClass::Upper,
            Token::Letter(LetterCase::Lower, _) => CharClass::Lower,
        }
    }

    /// Whether this is the terminal token
    pub fn is_end(&self) -> bool {
        matches!(self, Token::End)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::End => write!(f, "END"),
            Token::Symbol(ch) => write!(f, "SYMBOL({ch:?})"),
            Token::Numeral(n) => write!(f, "NUMERAL({}, zeros={})", n.digits(), n.leading_zeros()),
            Token::Letter(LetterCase::Upper, ch) => write!(f, "UPPER({ch:?})"),
            Token::Letter(LetterCase::Lower, ch) => write!(f, "LOWER({ch:?})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_order() {
        assert!(CharClass::End < CharClass::Symbol);
        assert!(CharClass::Symbol < CharClass::Numeral);
        assert!(CharClass::Numeral < CharClass::Upper);
        assert!(CharClass::Upper < CharClass::Lower);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(Numeral::from_run("7").leading_zeros(), 0);
        assert_eq!(Numeral::from_run("0").leading_zeros(), 1);
        assert_eq!(Numeral::from_run("00").leading_zeros(), 2);
        assert_eq!(Numeral::from_run("007").leading_zeros(), 2);
        assert_eq!(Numeral::from_run("070").leading_zeros(), 1);
    }

    #[test]
    fn test_numeral_value() {
        assert_eq!(Numeral::from_run("007").value(), Some(7));
        assert_eq!(Numeral::from_run("000").value(), Some(0));
        assert_eq!(Numeral::from_run("18446744073709551615").value(), Some(u64::MAX));
        assert_eq!(Numeral::from_run("18446744073709551616").value(), None);
        assert_eq!(Numeral::from_run("000").digits(), "0");
    }

    #[test]
    fn test_numeral_order() {
        let n = Numeral::from_run;
        assert!(n("2") < n("10"));
        assert!(n("9") < n("10"));
        assert!(n("007") < n("07"));
        assert!(n("07") < n("7"));
        assert!(n("00") < n("0"));
        assert!(n("0") < n("1"));
        assert!(n("99999999999999999999") < n("100000000000000000000"));
        assert_eq!(n("42").cmp(&n("42")), Ordering::Equal);
    }

    #[test]
    fn test_token_order() {
        let one = Token::Numeral(Numeral::from_run("1"));
        assert!(Token::End < Token::Symbol('\0'));
        assert!(Token::Symbol('\u{10FFFF}') < one);
        assert!(one < Token::Letter(LetterCase::Upper, 'A'));
        assert!(Token::Letter(LetterCase::Upper, 'Z') < Token::Letter(LetterCase::Lower, 'a'));
        assert!(Token::Letter(LetterCase::Lower, 'a') < Token::Letter(LetterCase::Lower, 'b'));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::End.to_string(), "END");
        assert_eq!(Token::Letter(LetterCase::Upper, 'A').to_string(), "UPPER('A')");
        assert_eq!(
            Token::Numeral(Numeral::from_run("007")).to_string(),
            "NUMERAL(7, zeros=2)"
        );
    }
}
