//! Alphabet Trie Implementation
//!
//! An in-memory dictionary of lowercase alphabetic words backed by a literal
//! 26-way prefix tree. Every node has one child slot per letter; a word is
//! stored when the node reached by following its letters is terminal.
//!
//! # Example
//!
//! ```
//! use trie_speller_lib::data_structures::alphabet_trie::AlphabetTrie;
//!
//! let mut trie = AlphabetTrie::new();
//! assert!(trie.insert("cat").unwrap());
//! assert!(trie.insert("Cats").unwrap());
//! assert!(!trie.insert("CAT").unwrap());
//!
//! assert!(trie.remove("cat").unwrap());
//! assert!(trie.contains("cats").unwrap());
//! assert_eq!(trie.words().collect::<Vec<_>>(), vec!["cats"]);
//! ```

mod error;
mod iter;
mod letter;
mod node;

pub use error::{AlphabetTrieError, AlphabetTrieResult};
pub use iter::Words;
pub use letter::{Letter, ALPHABET_SIZE};
use node::TrieNode;

/// Default upper bound on word length.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 256;

/// Hard ceiling on `max_word_length`. Removal, counting and dropping all
/// recurse once per letter, so word length is also stack depth.
pub const MAX_WORD_LENGTH_LIMIT: usize = 4096;

/// Configuration options for the Alphabet Trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetTrieConfig {
    /// Maximum number of letters in a word, never above [`MAX_WORD_LENGTH_LIMIT`]
    pub max_word_length: usize,
}

impl AlphabetTrieConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }

    /// Set the maximum number of letters accepted in a word.
    ///
    /// Values above [`MAX_WORD_LENGTH_LIMIT`] are clamped to it.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length.min(MAX_WORD_LENGTH_LIMIT);
        self
    }

    /// The length limit actually enforced, even if the field was set directly.
    fn effective_max_word_length(&self) -> usize {
        self.max_word_length.min(MAX_WORD_LENGTH_LIMIT)
    }
}

impl Default for AlphabetTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Signal from the recursive removal helper to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prune {
    /// The node no longer holds up any word; the parent must drop it.
    Unlink,
    /// The node is still terminal or still has children.
    Keep,
}

impl Prune {
    fn of(node: &TrieNode) -> Self {
        if node.is_prunable() {
            Prune::Unlink
        } else {
            Prune::Keep
        }
    }
}

/// A dictionary of words over the 26-letter alphabet.
///
/// Key features:
/// * Case-insensitive: words are folded to lowercase before use
/// * Removal prunes exactly the suffix path no other word depends on
/// * Lazy, lexicographically ordered enumeration
///
/// The trie is single-threaded; callers sharing one across threads must wrap
/// the whole instance in a lock.
#[derive(Debug)]
pub struct AlphabetTrie {
    /// The root node; never terminal since the empty string is never a word
    root: TrieNode,

    /// Configuration options
    config: AlphabetTrieConfig,
}

impl AlphabetTrie {
    /// Creates a new empty `AlphabetTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(AlphabetTrieConfig::default())
    }

    /// Creates a new empty `AlphabetTrie` with the specified configuration.
    pub fn with_config(config: AlphabetTrieConfig) -> Self {
        Self {
            root: TrieNode::new(false),
            config,
        }
    }

    /// Returns the configuration this trie was created with.
    pub fn config(&self) -> &AlphabetTrieConfig {
        &self.config
    }

    /// Inserts a word into the trie.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was newly added.
    /// * `Ok(false)` - The word was already present; nothing changed.
    /// * `Err(AlphabetTrieError)` - The input is not a valid word.
    pub fn insert<W>(&mut self, word: W) -> AlphabetTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let letters = self.parse(word.as_ref())?;
        let Some((&last, init)) = letters.split_last() else {
            return Err(AlphabetTrieError::EmptyWord);
        };

        let parent = init
            .iter()
            .fold(&mut self.root, |node, &letter| node.child_or_insert(letter));

        let inserted = match parent.child_mut(last) {
            Some(end) if end.terminal => false,
            Some(end) => {
                end.terminal = true;
                true
            }
            None => {
                parent.attach_child(last, TrieNode::new(true));
                true
            }
        };

        tracing::debug!(word = word.as_ref(), inserted, "Insert");
        Ok(inserted)
    }

    /// Inserts every word from `words`, stopping at the first invalid one.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - How many of the words were newly added.
    /// * `Err(AlphabetTrieError)` - The first invalid word encountered.
    pub fn insert_all<I, W>(&mut self, words: I) -> AlphabetTrieResult<usize>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        words.into_iter().try_fold(0, |added, word| {
            Ok(added + usize::from(self.insert(word)?))
        })
    }

    /// Checks if a word is stored in the trie.
    ///
    /// A word that only exists as a prefix of longer stored words is absent.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word is present, `false` otherwise.
    /// * `Err(AlphabetTrieError)` - The input is not a valid word.
    pub fn contains<W>(&self, word: W) -> AlphabetTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let letters = self.parse(word.as_ref())?;
        Ok(self.find(&letters).is_some_and(|node| node.terminal))
    }

    /// Removes a word from the trie.
    ///
    /// Nodes that only served the removed word are unlinked, up to the
    /// nearest ancestor that is terminal or leads to another word.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was present and has been removed.
    /// * `Ok(false)` - The word was not present; nothing changed.
    /// * `Err(AlphabetTrieError)` - The input is not a valid word.
    pub fn remove<W>(&mut self, word: W) -> AlphabetTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let letters = self.parse(word.as_ref())?;
        if !self.find(&letters).is_some_and(|node| node.terminal) {
            tracing::debug!(word = word.as_ref(), "Remove skipped, word not present");
            return Ok(false);
        }

        // The root reports Unlink once the trie is empty; it stays regardless.
        let _ = Self::remove_suffix(&mut self.root, &letters);
        tracing::debug!(word = word.as_ref(), "Removed");
        Ok(true)
    }

    /// Recursive helper for removal.
    ///
    /// `suffix` holds the letters still to follow from `node`. The caller has
    /// already established that the whole word is present.
    fn remove_suffix(node: &mut TrieNode, suffix: &[Letter]) -> Prune {
        match suffix {
            [] => {}
            [last] => {
                if let Some(end) = node.child_mut(*last) {
                    if end.out_degree() == 0 {
                        node.detach_child(*last);
                    } else {
                        // Longer words continue through here.
                        end.terminal = false;
                    }
                }
            }
            [first, rest @ ..] => {
                if let Some(child) = node.child_mut(*first) {
                    if Self::remove_suffix(child, rest) == Prune::Unlink {
                        tracing::trace!(letter = %first, "Pruning trie node");
                        node.detach_child(*first);
                    }
                }
            }
        }

        Prune::of(node)
    }

    /// Returns a lazy iterator over every stored word in lexicographic order.
    ///
    /// Each call starts a fresh traversal from the root.
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.root, String::new())
    }

    /// Returns a lazy iterator over the stored words that start with `prefix`.
    ///
    /// An empty prefix matches every word.
    pub fn words_with_prefix<P>(&self, prefix: P) -> AlphabetTrieResult<Words<'_>>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            return Ok(self.words());
        }

        let letters = self.parse(prefix)?;
        Ok(match self.find(&letters) {
            Some(node) => Words::new(node, letters.iter().map(|l| l.as_char()).collect()),
            None => Words::empty(),
        })
    }

    /// Returns every token of `text` that is not a stored word, in order.
    ///
    /// Tokens are separated by whitespace. A token that is not a valid word
    /// at all counts as a spelling mistake.
    pub fn check_spelling(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter(|token| !self.contains(token).unwrap_or(false))
            .map(str::to_string)
            .collect()
    }

    /// Returns the number of words in the trie.
    ///
    /// This counts terminal nodes over the whole trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.count_terminals()
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.root.out_degree() == 0
    }

    /// Returns the number of nodes in the trie, the root included.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Removes every word from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new(false);
    }

    /// Follows `letters` from the root.
    fn find(&self, letters: &[Letter]) -> Option<&TrieNode> {
        letters
            .iter()
            .try_fold(&self.root, |node, &letter| node.child(letter))
    }

    /// Validates and case-folds a word.
    fn parse(&self, word: &str) -> AlphabetTrieResult<Vec<Letter>> {
        let letters = Letter::parse_word(word)?;
        let max_length = self.config.effective_max_word_length();
        if letters.len() > max_length {
            return Err(AlphabetTrieError::WordTooLong {
                length: letters.len(),
                max_length,
            });
        }
        Ok(letters)
    }
}

impl Default for AlphabetTrie {
    fn default() -> Self {
        Self::new()
    }
}
