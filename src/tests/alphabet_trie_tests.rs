//! Property-based and parameterised tests for the Alphabet Trie.

use std::collections::BTreeSet;

use proptest::prelude::*;
use test_case::test_case;

use super::test_utils::{word_set_strategy, word_strategy};
use crate::data_structures::alphabet_trie::{AlphabetTrie, AlphabetTrieError, Letter};

fn trie_from(words: &BTreeSet<String>) -> AlphabetTrie {
    let mut trie = AlphabetTrie::new();
    trie.insert_all(words).unwrap();
    trie
}

/// Every non-empty prefix of every word, plus one for the root.
fn expected_node_count(words: &BTreeSet<String>) -> usize {
    let prefixes: BTreeSet<&str> = words
        .iter()
        .flat_map(|w| (1..=w.len()).map(move |end| &w[..end]))
        .collect();
    prefixes.len() + 1
}

proptest! {
    // Property: a word is present after insert and absent after remove
    #[test]
    fn prop_insert_then_remove_round_trip(word in word_strategy(), others in word_set_strategy()) {
        let mut trie = trie_from(&others);

        trie.insert(&word).unwrap();
        prop_assert!(trie.contains(&word).unwrap());

        prop_assert!(trie.remove(&word).unwrap());
        prop_assert!(!trie.contains(&word).unwrap());
    }

    // Property: inserting the same word twice reports true then false and counts once
    #[test]
    fn prop_duplicate_insert_is_idempotent(word in word_strategy()) {
        let mut trie = AlphabetTrie::new();
        prop_assert!(trie.insert(&word).unwrap());
        prop_assert!(!trie.insert(&word).unwrap());
        prop_assert!(!trie.insert(word.to_uppercase()).unwrap());
        prop_assert_eq!(trie.len(), 1);
    }

    // Property: enumeration is the sorted set of stored words, whatever the insertion order
    #[test]
    fn prop_words_are_lexicographic(words in word_set_strategy()) {
        let mut trie = AlphabetTrie::new();
        for word in words.iter().rev() {
            trie.insert(word).unwrap();
        }

        let listed: Vec<String> = trie.words().collect();
        let expected: Vec<String> = words.iter().cloned().collect();
        prop_assert_eq!(listed, expected);
        prop_assert_eq!(trie.len(), words.len());
    }

    // Property: after inserting N words and removing K of them, N - K remain
    #[test]
    fn prop_count_after_removals(words in word_set_strategy(), keep_every in 1usize..4) {
        let mut trie = trie_from(&words);

        let mut removed = BTreeSet::new();
        for (i, word) in words.iter().enumerate() {
            if i % keep_every != 0 {
                prop_assert!(trie.remove(word).unwrap());
                removed.insert(word.clone());
            }
        }

        prop_assert_eq!(trie.len(), words.len() - removed.len());
        for word in &words {
            prop_assert_eq!(trie.contains(word).unwrap(), !removed.contains(word));
        }

        // Nothing left behind but the paths of the remaining words.
        let remaining: BTreeSet<String> = words.difference(&removed).cloned().collect();
        prop_assert_eq!(trie.node_count(), expected_node_count(&remaining));
    }

    // Property: nodes exist exactly for the prefixes of stored words
    #[test]
    fn prop_node_count_matches_prefixes(words in word_set_strategy()) {
        let trie = trie_from(&words);
        prop_assert_eq!(trie.node_count(), expected_node_count(&words));
    }

    // Property: removing an absent word changes nothing
    #[test]
    fn prop_remove_absent_is_noop(words in word_set_strategy(), probe in word_strategy()) {
        let mut trie = trie_from(&words);
        prop_assume!(!words.contains(&probe.to_lowercase()));

        let before: Vec<String> = trie.words().collect();
        let nodes = trie.node_count();

        prop_assert!(!trie.remove(&probe).unwrap());
        prop_assert_eq!(trie.words().collect::<Vec<_>>(), before);
        prop_assert_eq!(trie.node_count(), nodes);
    }

    // Property: lookups ignore case
    #[test]
    fn prop_lookup_is_case_insensitive(word in word_strategy()) {
        let mut trie = AlphabetTrie::new();
        trie.insert(&word).unwrap();
        prop_assert!(trie.contains(word.to_lowercase()).unwrap());
        prop_assert!(trie.contains(word.to_uppercase()).unwrap());
    }

    // Property: removing everything returns the trie to a lone root
    #[test]
    fn prop_remove_all_leaves_root(words in word_set_strategy()) {
        let mut trie = trie_from(&words);
        for word in &words {
            prop_assert!(trie.remove(word).unwrap());
        }
        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.node_count(), 1);
    }
}

#[test_case('a', 0 ; "first letter")]
#[test_case('z', 25 ; "last letter")]
#[test_case('M', 12 ; "uppercase folds")]
fn test_letter_index(c: char, index: usize) {
    assert_eq!(Letter::try_from(c).unwrap().index(), index);
}

#[test_case('0' ; "digit")]
#[test_case(' ' ; "space")]
#[test_case('é' ; "accented")]
#[test_case('-' ; "hyphen")]
fn test_letter_rejects(c: char) {
    assert_eq!(Letter::try_from(c), Err(c));
}

#[test_case("cat", &["cat", "cats"], &["cats"] ; "prefix word removed")]
#[test_case("cats", &["cat", "cats"], &["cat"] ; "extension removed")]
#[test_case("b", &["a", "b", "c"], &["a", "c"] ; "single letters")]
#[test_case("cat", &["cats"], &["cats"] ; "never inserted prefix")]
fn test_remove_scenarios(target: &str, words: &[&str], remaining: &[&str]) {
    let mut trie = AlphabetTrie::new();
    trie.insert_all(words).unwrap();
    trie.remove(target).unwrap();
    assert_eq!(trie.words().collect::<Vec<_>>(), remaining);
}

#[test]
fn test_enumeration_example() {
    let mut trie = AlphabetTrie::new();
    trie.insert_all(["dog", "cat", "ant"]).unwrap();
    assert_eq!(trie.words().collect::<Vec<_>>(), vec!["ant", "cat", "dog"]);
}

#[test]
fn test_invalid_tokens_are_spelling_mistakes() {
    let mut trie = AlphabetTrie::new();
    trie.insert("word").unwrap();
    assert_eq!(trie.check_spelling("word w0rd"), vec!["w0rd"]);
    assert_eq!(trie.remove(""), Err(AlphabetTrieError::EmptyWord));
}
