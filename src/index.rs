//! TreeIndex: flat arena index with parent/child links.
//!
//! All nodes live in one `Vec` arena in insertion order, with an id-to-index
//! map for O(1) lookup. Parent and child links are arena indices rather than
//! owning references, so malformed input (cycles, orphans) is a traversal
//! concern, never an ownership hazard.

use crate::error::IndexError;
use crate::record::{Id, Record};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, warn};

/// Arena node: one record plus its structural links.
#[derive(Debug)]
struct Node {
    record: Record,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl Node {
    fn new(record: Record) -> Self {
        Self {
            record,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Read-only index over a flat collection of parent-referencing records.
///
/// Built once from an ordered record sequence; every query thereafter is a
/// pure read. Unknown ids never fail — queries degrade to `None` or an
/// empty result.
#[derive(Debug)]
pub struct TreeIndex {
    nodes: Vec<Node>,
    by_id: HashMap<Id, usize>,
    root: Option<usize>,
}

impl TreeIndex {
    /// Build the index from an ordered sequence of records.
    ///
    /// Accepts malformed input without error: a duplicate id replaces the
    /// earlier record in place (last write wins, original position kept),
    /// and when several records have unmatched parents the last one seen
    /// becomes the designated root. Both conditions are logged at `warn`.
    pub fn new(records: impl IntoIterator<Item = Record>) -> Self {
        let mut index = Self {
            nodes: Vec::new(),
            by_id: HashMap::new(),
            root: None,
        };

        // Pass 1: allocate one node per record, keyed by id.
        for record in records {
            match index.by_id.get(&record.id) {
                Some(&existing) => {
                    warn!(id = %record.id, "duplicate record id, last write wins");
                    index.nodes[existing].record = record;
                }
                None => {
                    index.by_id.insert(record.id.clone(), index.nodes.len());
                    index.nodes.push(Node::new(record));
                }
            }
        }

        // Pass 2: link parents and children, designating the root.
        let unmatched = index.link();
        if unmatched.len() > 1 {
            warn!(
                roots = unmatched.len(),
                "multiple records with unmatched parents, last one wins as root"
            );
        }
        index.root = unmatched.last().copied();

        debug!(
            records = index.nodes.len(),
            root = ?index.root.map(|i| &index.nodes[i].record.id),
            "tree index built"
        );
        index
    }

    /// Build the index, rejecting input the lenient constructor papers over.
    ///
    /// Fails on a repeated id, on more than one record with an unmatched
    /// parent, or when every parent resolves and no root exists. On success
    /// the structure is identical to [`TreeIndex::new`] on the same input.
    pub fn try_new(records: impl IntoIterator<Item = Record>) -> Result<Self, IndexError> {
        let mut index = Self {
            nodes: Vec::new(),
            by_id: HashMap::new(),
            root: None,
        };

        for record in records {
            if index.by_id.contains_key(&record.id) {
                return Err(IndexError::DuplicateId(record.id));
            }
            index.by_id.insert(record.id.clone(), index.nodes.len());
            index.nodes.push(Node::new(record));
        }

        let unmatched = index.link();
        match unmatched.as_slice() {
            [] => Err(IndexError::NoRoot),
            [root] => {
                index.root = Some(*root);
                Ok(index)
            }
            [first, second, ..] => Err(IndexError::MultipleRoots {
                first: index.nodes[*first].record.id.clone(),
                second: index.nodes[*second].record.id.clone(),
            }),
        }
    }

    /// Link every node to its parent, in arena (insertion) order.
    ///
    /// Appending children in this order is what preserves the original
    /// input order in child lists. Returns the arena indices of nodes whose
    /// parent matched no id, in order of appearance.
    fn link(&mut self) -> Vec<usize> {
        let mut unmatched = Vec::new();
        for i in 0..self.nodes.len() {
            match self.by_id.get(&self.nodes[i].record.parent) {
                Some(&p) => {
                    self.nodes[i].parent = Some(p);
                    self.nodes[p].children.push(i);
                }
                None => unmatched.push(i),
            }
        }
        unmatched
    }

    /// Every indexed record, in insertion order.
    pub fn all(&self) -> Vec<&Record> {
        self.nodes.iter().map(|node| &node.record).collect()
    }

    /// O(1) lookup by id. `None` when no record has that id.
    pub fn get(&self, id: &Id) -> Option<&Record> {
        self.by_id.get(id).map(|&i| &self.nodes[i].record)
    }

    /// Direct children of the given node, in original input order.
    ///
    /// Empty for an unknown id or a node without children; the two cases
    /// are not distinguished.
    pub fn children(&self, id: &Id) -> Vec<&Record> {
        match self.by_id.get(id) {
            Some(&i) => self.nodes[i]
                .children
                .iter()
                .map(|&c| &self.nodes[c].record)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every descendant of the given node, in breadth-first level order.
    ///
    /// A FIFO queue is seeded with the direct children; each dequeued node
    /// is emitted and its own children enqueued, so the result is
    /// level-by-level, left-to-right within a level. Empty for an unknown
    /// id or a node without descendants.
    pub fn descendants(&self, id: &Id) -> Vec<&Record> {
        let Some(&start) = self.by_id.get(id) else {
            return Vec::new();
        };

        let mut queue: VecDeque<usize> = self.nodes[start].children.iter().copied().collect();
        let mut result = Vec::new();
        while let Some(i) = queue.pop_front() {
            result.push(&self.nodes[i].record);
            queue.extend(self.nodes[i].children.iter().copied());
        }
        result
    }

    /// Ancestor chain of the given node, root first, immediate parent last.
    ///
    /// Empty for an unknown id or for the root itself. Does not terminate
    /// on cyclic parent chains; the index performs no cycle detection.
    pub fn ancestors(&self, id: &Id) -> Vec<&Record> {
        let Some(&start) = self.by_id.get(id) else {
            return Vec::new();
        };

        let mut chain = Vec::new();
        let mut current = self.nodes[start].parent;
        while let Some(i) = current {
            chain.push(&self.nodes[i].record);
            current = self.nodes[i].parent;
        }
        chain.reverse();
        chain
    }

    /// The designated root's record, if any record had an unmatched parent.
    pub fn root(&self) -> Option<&Record> {
        self.root.map(|i| &self.nodes[i].record)
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
