//! Disjoint-set forest for tracking which rooms are already connected
//!
//! Keyed by any copyable identity. Path-compressing `find`, union by rank.

use core::hash::Hash;

use hashbrown::HashMap;

/// Disjoint-set forest over keys of type `K`
#[derive(Debug, Clone)]
pub struct UnionFind<K> {
    parent: HashMap<K, K>,
    rank: HashMap<K, u32>,
    sets: usize,
}

impl<K: Copy + Eq + Hash> Default for UnionFind<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> UnionFind<K> {
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
            sets: 0,
        }
    }

    /// Forest with one singleton set per key
    pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Self {
        let mut uf = Self::new();
        for key in keys {
            uf.make_set(key);
        }
        uf
    }

    /// Add `key` as a singleton set. No-op if already present.
    pub fn make_set(&mut self, key: K) {
        if self.parent.contains_key(&key) {
            return;
        }
        self.parent.insert(key, key);
        self.rank.insert(key, 0);
        self.sets += 1;
    }

    pub fn contains(&self, key: K) -> bool {
        self.parent.contains_key(&key)
    }

    /// Representative of `key`'s set, or `None` for unknown keys
    pub fn find(&mut self, key: K) -> Option<K> {
        let mut root = *self.parent.get(&key)?;
        while let Some(&next) = self.parent.get(&root) {
            if next == root {
                break;
            }
            root = next;
        }

        // Point every node on the path straight at the root
        let mut node = key;
        while node != root {
            let next = self.parent[&node];
            self.parent.insert(node, root);
            node = next;
        }

        Some(root)
    }

    /// Merge the sets of `a` and `b`
    ///
    /// Returns true if two distinct sets were merged, false if they were
    /// already one set or either key is unknown.
    pub fn union(&mut self, a: K, b: K) -> bool {
        let (Some(ra), Some(rb)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if ra == rb {
            return false;
        }

        let rank_a = self.rank[&ra];
        let rank_b = self.rank[&rb];
        if rank_a < rank_b {
            self.parent.insert(ra, rb);
        } else if rank_a > rank_b {
            self.parent.insert(rb, ra);
        } else {
            self.parent.insert(rb, ra);
            self.rank.insert(ra, rank_a + 1);
        }

        self.sets -= 1;
        true
    }

    /// Check if two keys are in the same set
    pub fn are_connected(&mut self, a: K, b: K) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find_basic() {
        let mut uf = UnionFind::from_keys(0..5u32);
        assert_eq!(uf.set_count(), 5);

        // Initially, nothing is connected
        assert!(!uf.are_connected(0, 1));
        assert!(!uf.are_connected(1, 2));

        assert!(uf.union(0, 1));
        assert!(uf.are_connected(0, 1));
        assert!(!uf.are_connected(0, 2));

        // Transitive
        assert!(uf.union(1, 2));
        assert!(uf.are_connected(0, 2));
        assert_eq!(uf.set_count(), 3);

        // Redundant union changes nothing
        assert!(!uf.union(2, 0));
        assert_eq!(uf.set_count(), 3);

        uf.union(2, 3);
        uf.union(3, 4);
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn test_unknown_keys() {
        let mut uf = UnionFind::from_keys(['a', 'b']);
        assert_eq!(uf.find('z'), None);
        assert!(!uf.union('a', 'z'));
        assert!(!uf.are_connected('z', 'z'));
        assert_eq!(uf.set_count(), 2);
    }

    #[test]
    fn test_make_set_is_idempotent() {
        let mut uf = UnionFind::new();
        uf.make_set(7u8);
        uf.make_set(7u8);
        assert_eq!(uf.len(), 1);
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn test_path_compression() {
        let mut uf = UnionFind::from_keys(0..64u32);
        for i in 1..64 {
            uf.union(i - 1, i);
        }
        let root = uf.find(63).unwrap();
        for i in 0..64 {
            assert_eq!(uf.find(i), Some(root));
            assert_eq!(uf.parent[&i], root);
        }
    }
}
