//! Fixed-depth nucleotide sequence trie

/// Child slot for a nucleotide. Anything outside the uppercase DNA alphabet
/// has no slot.
fn base_slot(base: u8) -> Option<usize> {
    match base {
        b'A' => Some(0),
        b'G' => Some(1),
        b'C' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct TrieNode {
    children: [Option<u32>; 4],
}

/// Multiway trie over the DNA alphabet holding every window of one fixed
/// length from a genome. All stored windows share the trie's depth, so
/// membership is simply whether a full-depth path exists.
///
/// Nodes live in a single arena and children are arena indexes, keeping the
/// structure compact for the millions of windows a genome produces.
#[derive(Debug)]
pub struct SequenceTrie {
    nodes: Vec<TrieNode>,
    depth: usize,
}

impl SequenceTrie {
    /// Create an empty trie accepting windows of exactly `depth` bases.
    pub fn new(depth: usize) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total arena nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert one window. Windows of the wrong length or containing a
    /// non-nucleotide byte are dropped whole, never as a partial path.
    pub fn insert(&mut self, window: &[u8]) {
        if window.len() != self.depth {
            return;
        }
        let mut slots = Vec::with_capacity(window.len());
        for &base in window {
            match base_slot(base) {
                Some(slot) => slots.push(slot),
                None => return,
            }
        }

        let mut node = 0usize;
        for slot in slots {
            node = match self.nodes[node].children[slot] {
                Some(child) => child as usize,
                None => {
                    let child = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children[slot] = Some(child);
                    child as usize
                }
            };
        }
    }

    /// True when `window` was inserted. Queries of the wrong length or with
    /// bytes outside the alphabet are never contained.
    pub fn contains(&self, window: &[u8]) -> bool {
        if window.len() != self.depth {
            return false;
        }
        let mut node = 0usize;
        for &base in window {
            let slot = match base_slot(base) {
                Some(slot) => slot,
                None => return false,
            };
            match self.nodes[node].children[slot] {
                Some(child) => node = child as usize,
                None => return false,
            }
        }
        true
    }
}
