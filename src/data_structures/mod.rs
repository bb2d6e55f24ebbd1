//! Data structures for the Trie Speller.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Strict tree ownership, no shared or reference-counted nodes

pub mod alphabet_trie;

// Re-export common data structures
pub use alphabet_trie::{AlphabetTrie, AlphabetTrieConfig, AlphabetTrieError, AlphabetTrieResult};
