//! Test modules for the Trie Speller.
//!
//! This module contains the crate-internal test suites:
//! - Property-based tests of the dictionary trie using proptest
//! - Configuration loading and validation
//! - Error types and reporting
//! - Scripted shell sessions
//! - Shared fixtures and strategies

pub mod alphabet_trie_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, word_strategy, word_set_strategy, TestFixture};
