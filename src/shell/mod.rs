//! Interactive menu shell.
//!
//! A line-oriented front end over [`AlphabetTrie`]. The shell reads menu
//! selections and words from any [`BufRead`] and writes results to any
//! [`Write`], so the whole dialogue can be driven from tests.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::shell::ShellConfig;
use crate::data_structures::alphabet_trie::{AlphabetTrie, AlphabetTrieError};
use crate::error::SpellerResult;

const MENU: &str = "\
Select an option from the following:
1. Display program details
2. Insert a word into the dictionary
3. List all words in the dictionary
4. Count the number of words in the dictionary
5. Check the membership of a word in the dictionary
6. Check the correctness of a list of words
7. Delete a word from the dictionary
8. Exit";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Show the program name and version
    About,
    /// Insert one word
    Insert,
    /// List every word in order
    List,
    /// Print the number of stored words
    Count,
    /// Report whether one word is stored
    Membership,
    /// Report every unknown word in a line of text
    SpellCheck,
    /// Delete one word
    Delete,
    /// Leave the shell
    Exit,
    /// Anything that is not a menu number
    Invalid,
}

impl MenuChoice {
    /// Interprets one line of input as a menu selection.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::About,
            "2" => Self::Insert,
            "3" => Self::List,
            "4" => Self::Count,
            "5" => Self::Membership,
            "6" => Self::SpellCheck,
            "7" => Self::Delete,
            "8" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive shell.
#[derive(Debug)]
pub struct Shell<R, W> {
    trie: AlphabetTrie,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over `trie` reading from `input` and writing to `output`.
    pub fn new(trie: AlphabetTrie, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            trie,
            input,
            output,
            config,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> SpellerResult<()> {
        loop {
            if self.config.show_menu {
                writeln!(self.output, "{MENU}")?;
            }

            let Some(line) = self.prompt("Enter a selection: ")? else {
                break;
            };

            let choice = MenuChoice::parse(&line);
            debug!(?choice, "Menu selection");
            if self.execute(choice)? == Flow::Exit {
                break;
            }

            if self.config.pause_after_command {
                writeln!(self.output, "Press any key to continue.")?;
                if self.read_line()?.is_none() {
                    break;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Consumes the shell, returning the dictionary.
    pub fn into_trie(self) -> AlphabetTrie {
        self.trie
    }

    fn execute(&mut self, choice: MenuChoice) -> SpellerResult<Flow> {
        match choice {
            MenuChoice::About => {
                writeln!(self.output, "Trie Speller v{}", crate::VERSION)?;
                writeln!(
                    self.output,
                    "A dictionary and spell checker over the letters a to z."
                )?;
            }
            MenuChoice::Insert => {
                let Some(word) = self.prompt_word()? else {
                    return Ok(Flow::Exit);
                };
                match self.trie.insert(&word) {
                    Ok(true) => writeln!(self.output, "Word inserted")?,
                    Ok(false) => writeln!(self.output, "Word already exists")?,
                    Err(e) => self.invalid_word(&word, e)?,
                }
            }
            MenuChoice::List => {
                for word in self.trie.words() {
                    writeln!(self.output, "{word}")?;
                }
            }
            MenuChoice::Count => {
                writeln!(self.output, "Membership is {}", self.trie.len())?;
            }
            MenuChoice::Membership => {
                let Some(word) = self.prompt_word()? else {
                    return Ok(Flow::Exit);
                };
                match self.trie.contains(&word) {
                    Ok(true) => writeln!(self.output, "Word found")?,
                    Ok(false) => writeln!(self.output, "Word not found")?,
                    Err(e) => self.invalid_word(&word, e)?,
                }
            }
            MenuChoice::SpellCheck => {
                let Some(line) = self.prompt("Enter a list of words, divided by spaces: ")? else {
                    return Ok(Flow::Exit);
                };
                for mistake in self.trie.check_spelling(&line) {
                    writeln!(self.output, "Spelling mistake {mistake}")?;
                }
            }
            MenuChoice::Delete => {
                let Some(word) = self.prompt_word()? else {
                    return Ok(Flow::Exit);
                };
                match self.trie.remove(&word) {
                    Ok(true) => writeln!(self.output, "Word deleted")?,
                    Ok(false) => writeln!(self.output, "Word not present")?,
                    Err(e) => self.invalid_word(&word, e)?,
                }
            }
            MenuChoice::Exit => return Ok(Flow::Exit),
            MenuChoice::Invalid => writeln!(self.output, "Invalid menu option")?,
        }

        Ok(Flow::Continue)
    }

    /// Asks for a word and keeps only the first token of the reply.
    fn prompt_word(&mut self) -> SpellerResult<Option<String>> {
        let line = self.prompt("Enter a word: ")?;
        Ok(line.map(|line| {
            line.split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string()
        }))
    }

    fn prompt(&mut self, text: &str) -> SpellerResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> SpellerResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn invalid_word(&mut self, word: &str, error: AlphabetTrieError) -> SpellerResult<()> {
        warn!(word, %error, "Rejected word");
        writeln!(self.output, "Invalid word: {error}")?;
        Ok(())
    }
}
