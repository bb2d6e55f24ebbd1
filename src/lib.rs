//! Trie Speller Library
//!
//! This library contains the dictionary trie, its configuration and error
//! layers, and the interactive shell used by the `trie_speller` binary.
//!
//! # Architecture
//!
//! - `data_structures::alphabet_trie` is the dictionary: a 26-way prefix tree
//!   with insert, lookup, removal, enumeration and counting.
//! - `shell` is a thin caller that tokenizes user input and prints results.
//! - `config` and `error` carry the ambient concerns shared by both.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod shell;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Trie Speller.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
