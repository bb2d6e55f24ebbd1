//! Lazy enumeration of stored words.

use std::iter::FusedIterator;

use super::letter::Letter;
use super::node::TrieNode;

/// Depth-first iterator over the words stored below a node.
///
/// Children are visited `a` through `z`, so words come out in lexicographic
/// order. Only the current path and the pending siblings are held; nothing is
/// collected up front.
#[derive(Debug)]
pub struct Words<'a> {
    /// Nodes still to visit, with the path length at which their letter goes
    stack: Vec<(usize, Letter, &'a TrieNode)>,

    /// Letters from the root to the node most recently visited
    path: String,

    /// The start node's own word, emitted before anything below it
    start: Option<String>,
}

impl<'a> Words<'a> {
    pub(super) fn new(start: &'a TrieNode, prefix: String) -> Self {
        let mut words = Self {
            stack: Vec::new(),
            start: start.terminal.then(|| prefix.clone()),
            path: prefix,
        };
        words.push_children(words.path.len(), start);
        words
    }

    /// An iterator that yields nothing.
    pub(super) fn empty() -> Self {
        Self {
            stack: Vec::new(),
            path: String::new(),
            start: None,
        }
    }

    fn push_children(&mut self, depth: usize, node: &'a TrieNode) {
        // Reversed so the smallest letter is popped first.
        self.stack.extend(
            node.children()
                .rev()
                .map(|(letter, child)| (depth, letter, child)),
        );
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(word) = self.start.take() {
            return Some(word);
        }

        while let Some((depth, letter, node)) = self.stack.pop() {
            self.path.truncate(depth);
            self.path.push(letter.as_char());
            self.push_children(depth + 1, node);

            if node.terminal {
                return Some(self.path.clone());
            }
        }

        None
    }
}

impl FusedIterator for Words<'_> {}
