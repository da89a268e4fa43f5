//! Disjoint-set (union-find) over dense vertex ids.

use primer_core::{InputError, InputResult, VertexId};

/// Partition of the vertices `0..len` into disjoint sets.
///
/// Each entry holds a parent offset and a rank. A root is its own parent.
/// Ranks only bound tree height; they are not set sizes.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl DisjointSet {
    /// Create `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Rank of a vertex's entry, if the vertex exists.
    pub fn rank(&self, vertex: VertexId) -> Option<u32> {
        self.rank.get(vertex.index()).copied()
    }

    /// Find the representative of the set containing `vertex`.
    pub fn find(&mut self, vertex: VertexId) -> InputResult<VertexId> {
        let index = self.check(vertex)?;
        Ok(to_vertex(self.root_of(index)))
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns false when both are already in the same set.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> InputResult<bool> {
        let a = self.check(a)?;
        let b = self.check(b)?;
        let (root_a, root_b) = (self.root_of(a), self.root_of(b));
        Ok(self.link(root_a, root_b))
    }

    /// Returns true if `a` and `b` are in the same set.
    pub fn same_set(&mut self, a: VertexId, b: VertexId) -> InputResult<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    fn check(&self, vertex: VertexId) -> InputResult<usize> {
        if vertex.is_within(self.len()) {
            Ok(vertex.index())
        } else {
            Err(InputError::vertex_out_of_range(vertex, self.len()))
        }
    }

    /// Root of `index`, compressing the visited path onto the root.
    ///
    /// `index` must be in range.
    pub(crate) fn root_of(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = index;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Attach one root under the other by rank. On equal rank `root_a`
    /// survives and its rank grows.
    ///
    /// Both arguments must be roots.
    pub(crate) fn link(&mut self, root_a: usize, root_b: usize) -> bool {
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        self.sets -= 1;
        true
    }
}

fn to_vertex(index: usize) -> VertexId {
    // Indexes come from VertexId offsets, so they fit in u32.
    VertexId::new(index as u32)
}
