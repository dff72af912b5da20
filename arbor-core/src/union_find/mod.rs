//! Disjoint-set union over positive vertex identifiers.
//!
//! Both Kruskal construction and the exchange enumerator's cycle check build
//! a fresh [`UnionFind`] per call. Vertices are `1..=n`; anything outside that
//! range is reported as not found rather than treated as an error, so callers
//! can feed raw identifiers straight through.

/// Union-find with iterative path compression and union by size.
///
/// # Examples
/// ```
/// use arbor_core::UnionFind;
///
/// let mut sets = UnionFind::new(4);
/// assert!(sets.union(1, 2));
/// assert!(sets.in_same_set(2, 1));
/// assert_eq!(sets.group_size(1), Some(2));
/// assert_eq!(sets.find(9), None);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    group_size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates `vertex_count` singleton sets for vertices `1..=vertex_count`.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            parent: (1..=vertex_count).collect(),
            group_size: vec![1; vertex_count],
            components: vertex_count,
        }
    }

    /// Returns the number of vertices tracked by the structure.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when `vertex` lies within `1..=vertex_count`.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.slot(vertex).is_some()
    }

    /// Returns the number of disjoint sets currently tracked.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `vertex`.
    ///
    /// Every vertex visited on the way is re-pointed directly at the root, so
    /// repeated lookups are near-constant. Returns `None` for out-of-range
    /// vertices.
    pub fn find(&mut self, vertex: usize) -> Option<usize> {
        let start = self.slot(vertex)?;

        let mut root = vertex;
        loop {
            let parent = self.parent[root - 1];
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = start;
        while self.parent[current] != root {
            let next = self.parent[current] - 1;
            self.parent[current] = root;
            current = next;
        }

        Some(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The smaller group's root is attached beneath the larger group's root;
    /// equal sizes attach `right`'s root beneath `left`'s. Returns `false`
    /// without changing anything when either vertex is out of range or both
    /// already share a set, which is the cycle signal Kruskal relies on.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let (Some(left_root), Some(right_root)) = (self.find(left), self.find(right)) else {
            return false;
        };
        if left_root == right_root {
            return false;
        }

        let left_size = self.group_size[left_root - 1];
        let right_size = self.group_size[right_root - 1];
        let (larger, smaller) = if left_size >= right_size {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };

        self.parent[smaller - 1] = larger;
        self.group_size[larger - 1] = left_size + right_size;
        self.components -= 1;
        true
    }

    /// Returns `true` when both vertices are valid and share a set.
    pub fn in_same_set(&mut self, left: usize, right: usize) -> bool {
        match (self.find(left), self.find(right)) {
            (Some(left_root), Some(right_root)) => left_root == right_root,
            _ => false,
        }
    }

    /// Returns the size of the set containing `vertex`, or `None` when the
    /// vertex is out of range.
    pub fn group_size(&mut self, vertex: usize) -> Option<usize> {
        let root = self.find(vertex)?;
        self.group_size.get(root - 1).copied()
    }

    fn slot(&self, vertex: usize) -> Option<usize> {
        (1..=self.parent.len())
            .contains(&vertex)
            .then(|| vertex - 1)
    }
}
