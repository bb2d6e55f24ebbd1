//! Node implementation for the Alphabet Trie.
//!
//! Edges, not nodes, carry the letters: a node is the position reached after
//! following some path of letters from the root. Each node owns its children
//! outright, so the trie is a plain owning tree with no shared nodes.

use super::letter::{Letter, ALPHABET_SIZE};

/// A node in the Alphabet Trie.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Whether the path from the root to this node spells a stored word
    pub terminal: bool,

    /// Number of occupied slots in `children`
    out_degree: usize,

    /// One slot per letter, `a` at index 0
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

impl TrieNode {
    /// Creates a new childless node.
    pub fn new(terminal: bool) -> Self {
        Self {
            terminal,
            ..Self::default()
        }
    }

    /// Number of children this node currently has.
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// A node that is neither terminal nor has children holds up no word and
    /// must be unlinked from its parent.
    pub fn is_prunable(&self) -> bool {
        self.out_degree == 0 && !self.terminal
    }

    pub fn child(&self, letter: Letter) -> Option<&TrieNode> {
        self.children[letter.index()].as_deref()
    }

    pub fn child_mut(&mut self, letter: Letter) -> Option<&mut TrieNode> {
        self.children[letter.index()].as_deref_mut()
    }

    /// Places `node` in the empty slot for `letter` and returns it.
    ///
    /// An occupied slot is left as it is.
    pub fn attach_child(&mut self, letter: Letter, node: TrieNode) -> &mut TrieNode {
        let slot = &mut self.children[letter.index()];
        if slot.is_none() {
            self.out_degree += 1;
        }
        slot.get_or_insert_with(|| Box::new(node))
    }

    /// Returns the child for `letter`, creating a non-terminal one if the slot is empty.
    pub fn child_or_insert(&mut self, letter: Letter) -> &mut TrieNode {
        let slot = &mut self.children[letter.index()];
        if slot.is_none() {
            tracing::trace!(letter = %letter, "Creating trie node");
            self.out_degree += 1;
        }
        slot.get_or_insert_with(|| Box::new(TrieNode::new(false)))
    }

    /// Severs the link to the child for `letter`, returning the detached subtree.
    pub fn detach_child(&mut self, letter: Letter) -> Option<Box<TrieNode>> {
        let detached = self.children[letter.index()].take();
        if detached.is_some() {
            self.out_degree -= 1;
        }
        detached
    }

    /// Iterates over the occupied child slots in alphabetical order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (Letter, &TrieNode)> {
        Letter::all().filter_map(move |letter| self.child(letter).map(|child| (letter, child)))
    }

    /// Visits every node of this subtree, this node first.
    ///
    /// Uses an explicit stack, so depth is bounded by the heap only.
    pub fn subtree(&self) -> impl Iterator<Item = &TrieNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().map(|(_, child)| child));
            Some(node)
        })
    }

    /// Number of terminal nodes in this subtree, this node included.
    pub fn count_terminals(&self) -> usize {
        self.subtree().filter(|node| node.terminal).count()
    }

    /// Number of nodes in this subtree, this node included.
    pub fn count_nodes(&self) -> usize {
        self.subtree().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    #[test]
    fn test_out_degree_tracks_children() {
        let mut node = TrieNode::new(false);
        assert!(node.is_prunable());

        node.attach_child(letter('c'), TrieNode::new(true));
        node.attach_child(letter('a'), TrieNode::new(false));
        assert_eq!(node.out_degree(), 2);

        // Re-attaching to an occupied slot keeps the existing child.
        node.attach_child(letter('c'), TrieNode::new(false));
        assert_eq!(node.out_degree(), 2);
        assert!(node.child(letter('c')).unwrap().terminal);

        let order: Vec<char> = node.children().map(|(l, _)| l.as_char()).collect();
        assert_eq!(order, vec!['a', 'c']);

        assert!(node.detach_child(letter('a')).is_some());
        assert!(node.detach_child(letter('a')).is_none());
        assert_eq!(node.out_degree(), 1);
        assert!(!node.is_prunable());
    }

    #[test]
    fn test_subtree_counts() {
        let mut root = TrieNode::new(false);
        let a = root.child_or_insert(letter('c')).child_or_insert(letter('a'));
        a.attach_child(letter('t'), TrieNode::new(true))
            .attach_child(letter('s'), TrieNode::new(true));

        assert_eq!(root.count_terminals(), 2);
        assert_eq!(root.count_nodes(), 5);
    }

    #[test]
    fn test_counts_on_a_long_chain() {
        let mut root = TrieNode::new(false);
        let mut tip = &mut root;
        for _ in 0..1000 {
            tip = tip.child_or_insert(letter('q'));
        }
        tip.terminal = true;

        assert_eq!(root.count_nodes(), 1001);
        assert_eq!(root.count_terminals(), 1);
    }
}
