use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::error::{GraphError, Result};

/// A group of original vertices merged by contraction, together with the
/// multiset of edges leaving the group.
///
/// Edges are stored as the original identifiers of their far endpoints.
/// Parallel edges are kept as repeated entries, which is what weights the
/// random edge draw by multiplicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supervertex<V> {
    members: BTreeSet<V>,
    edges: Vec<V>,
}

impl<V> Supervertex<V>
where
    V: Ord + Copy + Debug,
{
    /// Creates a singleton supervertex for `id` with its original neighbor list.
    pub fn new(id: V, edges: Vec<V>) -> Self {
        let mut members = BTreeSet::new();
        members.insert(id);
        Self { members, edges }
    }

    /// Original vertices grouped in this supervertex.
    pub fn members(&self) -> &BTreeSet<V> {
        &self.members
    }

    pub fn into_members(self) -> BTreeSet<V> {
        self.members
    }

    /// Far endpoints of every edge leaving this supervertex.
    pub fn edges(&self) -> &[V] {
        &self.edges
    }

    /// Number of edges leaving this supervertex, counting parallel edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: &V) -> bool {
        self.members.contains(id)
    }

    /// Whether at least one edge of `self` ends inside `other`.
    pub fn is_adjacent(&self, other: &Supervertex<V>) -> bool {
        self.edges.iter().any(|e| other.members.contains(e))
    }

    /// Merges `other` into `self`.
    ///
    /// The members are united and the edge multisets concatenated; every edge
    /// that now points inside the merged group is dropped. That single filter
    /// removes the contracted edges along with any self-loops, while edges to
    /// other groups keep their multiplicity.
    ///
    /// # Errors
    /// * `InvalidContraction` if no edge of `self` reaches `other`
    pub fn contract(&mut self, other: &Supervertex<V>) -> Result<()> {
        if !self.is_adjacent(other) {
            return Err(GraphError::invalid_contraction(format!(
                "{:?} and {:?} are not connected",
                self.members, other.members
            )));
        }

        self.members.extend(other.members.iter().copied());
        self.edges.extend(other.edges.iter().copied());
        let members = &self.members;
        self.edges.retain(|e| !members.contains(e));
        Ok(())
    }

    /// Drops edges that point back into this supervertex.
    pub(crate) fn strip_self_loops(&mut self) -> usize {
        let before = self.edges.len();
        let members = &self.members;
        self.edges.retain(|e| !members.contains(e));
        before - self.edges.len()
    }
}
