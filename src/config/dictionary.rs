//! Dictionary configuration module.
//!
//! Settings for the word store itself: how long a word may be and which
//! words are loaded before the shell starts.

use super::{ConfigResult, Validate};
use crate::data_structures::alphabet_trie::{
    AlphabetTrie, AlphabetTrieConfig, AlphabetTrieResult, Letter, DEFAULT_MAX_WORD_LENGTH,
    MAX_WORD_LENGTH_LIMIT,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Maximum number of letters accepted in a word
    pub max_word_length: usize,

    /// Words inserted into the dictionary at startup
    pub seed_words: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            seed_words: Vec::new(),
        }
    }
}

impl DictionaryConfig {
    /// Builds the trie configuration described by this section.
    pub fn trie_config(&self) -> AlphabetTrieConfig {
        AlphabetTrieConfig::new().with_max_word_length(self.max_word_length)
    }

    /// Creates a trie holding the seed words.
    pub fn build_trie(&self) -> AlphabetTrieResult<AlphabetTrie> {
        let mut trie = AlphabetTrie::with_config(self.trie_config());
        let added = trie.insert_all(&self.seed_words)?;
        tracing::info!(seed_words = added, "Dictionary seeded");
        Ok(trie)
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_word_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.max_word_length > MAX_WORD_LENGTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_word_length".to_string(),
                message: format!("must be at most {MAX_WORD_LENGTH_LIMIT}"),
            });
        }

        for word in &self.seed_words {
            let letters = Letter::parse_word(word).map_err(|e| {
                ConfigError::ValidationError(format!("Invalid seed word '{word}': {e}"))
            })?;

            if letters.len() > self.max_word_length {
                return Err(ConfigError::ValidationError(format!(
                    "Seed word '{word}' is longer than max_word_length ({})",
                    self.max_word_length
                )));
            }
        }

        Ok(())
    }
}
