//! Puzzle word representation
//!
//! A Word stores a 5-letter uppercase word as raw bytes.

use std::fmt;

/// Number of letters in every puzzle word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter puzzle word
///
/// Stores as byte array; text is reconstructed on-demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Converts the input to uppercase and validates it is 5 ASCII letters.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use party_games::core::Word;
    ///
    /// let word = Word::new("happy").unwrap();
    /// assert_eq!(word.text(), "HAPPY");
    ///
    /// assert!(Word::new("birthday").is_err());
    /// assert!(Word::new("c4kes").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Self::from_letters(bytes)
    }

    /// Create a Word from raw letter bytes, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII letter.
    pub fn from_letters(mut letters: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }
        letters.make_ascii_uppercase();
        Ok(Self { chars: letters })
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Never panics. Word validates ASCII letters at construction time.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.chars).expect("Word chars are always valid UTF-8")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter.to_ascii_uppercase())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("HAPPY").unwrap();
        assert_eq!(word.text(), "HAPPY");
        assert_eq!(word.chars(), b"HAPPY");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("happy").unwrap();
        assert_eq!(word.text(), "HAPPY");

        let word2 = Word::new("HaPpY").unwrap();
        assert_eq!(word2.text(), "HAPPY");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("birthday"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(Word::new("cake"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("happ1"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("hap y"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("happ!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("hàppy"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_from_letters_uppercases() {
        let word = Word::from_letters(*b"party").unwrap();
        assert_eq!(word.text(), "PARTY");
        assert!(Word::from_letters(*b"par7y").is_err());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("HAPPY").unwrap();
        assert_eq!(word.char_at(0), b'H');
        assert_eq!(word.char_at(2), b'P');
        assert_eq!(word.char_at(4), b'Y');
    }

    #[test]
    fn word_has_letter_ignores_case() {
        let word = Word::new("HAPPY").unwrap();
        assert!(word.has_letter(b'P'));
        assert!(word.has_letter(b'a'));
        assert!(!word.has_letter(b'Z'));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "cakes".parse().unwrap();
        assert_eq!(format!("{word}"), "CAKES");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("happy").unwrap();
        let word2 = Word::new("HAPPY").unwrap();
        let word3 = Word::new("party").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
