//! Error types for the Alphabet Trie.
//!
//! Every trie operation is total over valid words; these errors only describe
//! input that is not a word at all.

/// Errors that can occur in Alphabet Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum AlphabetTrieError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word contains something other than the letters a-z.
    #[error("Invalid character '{character}' at position {position} in word '{word}'")]
    InvalidCharacter {
        /// The rejected word.
        word: String,
        /// The offending character.
        character: char,
        /// Character position of the offending character.
        position: usize,
    },

    /// Error when a word exceeds the configured maximum length.
    #[error("Word of length {length} exceeds maximum word length of {max_length}")]
    WordTooLong {
        /// Length of the rejected word in letters.
        length: usize,
        /// The maximum allowed length.
        max_length: usize,
    },
}

/// Result type for Alphabet Trie operations.
pub type AlphabetTrieResult<T> = Result<T, AlphabetTrieError>;
