//! Letters of the trie alphabet.
//!
//! A [`Letter`] is a bounded index into a node's child table. Conversion from
//! `char` case-folds ASCII uppercase and rejects everything outside `a-z`, so
//! no unchecked arithmetic on characters happens anywhere else in the trie.

use std::fmt::{Display, Formatter};

use super::error::{AlphabetTrieError, AlphabetTrieResult};

/// Number of letters in the alphabet, and so the fan-out of every node.
pub const ALPHABET_SIZE: usize = 26;

/// One of the 26 lowercase Latin letters, stored as its index (`a` = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Creates a letter from its alphabet index, or `None` if `index >= 26`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Position of this letter in a node's child table.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The lowercase character this letter stands for.
    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Iterates over the whole alphabet in order, `a` through `z`.
    pub fn all() -> impl DoubleEndedIterator<Item = Letter> {
        (0..ALPHABET_SIZE).filter_map(Letter::from_index)
    }

    /// Parses a word into its letters, case-folding as it goes.
    ///
    /// # Errors
    ///
    /// * [`AlphabetTrieError::EmptyWord`] if `word` is empty.
    /// * [`AlphabetTrieError::InvalidCharacter`] on the first character that
    ///   is not an ASCII letter.
    pub fn parse_word(word: &str) -> AlphabetTrieResult<Vec<Letter>> {
        if word.is_empty() {
            return Err(AlphabetTrieError::EmptyWord);
        }

        word.chars()
            .enumerate()
            .map(|(position, character)| {
                Letter::try_from(character).map_err(|_| AlphabetTrieError::InvalidCharacter {
                    word: word.to_string(),
                    character,
                    position,
                })
            })
            .collect()
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8 - b'a'))
        } else {
            Err(c)
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
