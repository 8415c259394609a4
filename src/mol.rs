use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::stereocenter::TetrahedralCenter;

/// A molecular graph: atoms on nodes, bonds on edges, plus the molecule's
/// recorded tetrahedral stereocenters.
///
/// `Mol` is generic over the node and edge payloads so callers can bring
/// their own atom/bond types; the CIP code only requires the capability
/// traits in [`traits`](crate::traits). The graph itself is never mutated
/// by a ranking call — all CIP traversal state lives in per-call ligand
/// trees.
pub struct Mol<A, B> {
    graph: UnGraph<A, B>,
    stereocenters: Vec<TetrahedralCenter>,
}

impl<A, B> Mol<A, B> {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            stereocenters: Vec::new(),
        }
    }

    pub fn graph(&self) -> &UnGraph<A, B> {
        &self.graph
    }

    pub fn atom(&self, idx: NodeIndex) -> &A {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut A {
        &mut self.graph[idx]
    }

    /// Like [`atom`](Self::atom) but without panicking on a stale index.
    pub fn try_atom(&self, idx: NodeIndex) -> Option<&A> {
        self.graph.node_weight(idx)
    }

    pub fn bond(&self, idx: EdgeIndex) -> &B {
        &self.graph[idx]
    }

    pub fn bond_mut(&mut self, idx: EdgeIndex) -> &mut B {
        &mut self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: A) -> NodeIndex {
        self.graph.add_node(atom)
    }

    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: B) -> EdgeIndex {
        self.graph.add_edge(a, b, bond)
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    pub fn stereocenters(&self) -> &[TetrahedralCenter] {
        &self.stereocenters
    }

    pub fn set_stereocenters(&mut self, stereocenters: Vec<TetrahedralCenter>) {
        self.stereocenters = stereocenters;
    }

    pub fn stereocenter_for(&self, center: NodeIndex) -> Option<&TetrahedralCenter> {
        self.stereocenters.iter().find(|s| s.center == center)
    }

    pub fn add_stereocenter(&mut self, stereocenter: TetrahedralCenter) {
        self.stereocenters.push(stereocenter);
    }

    pub fn remove_stereocenter(&mut self, center: NodeIndex) {
        self.stereocenters.retain(|s| s.center != center);
    }
}

impl<A: Clone, B: Clone> Clone for Mol<A, B> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            stereocenters: self.stereocenters.clone(),
        }
    }
}

impl<A, B> Default for Mol<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Mol<A, B> {
    fn eq(&self, other: &Self) -> bool {
        if self.atom_count() != other.atom_count() || self.bond_count() != other.bond_count() {
            return false;
        }
        for idx in self.atoms() {
            if idx.index() >= other.atom_count() {
                return false;
            }
            if self.atom(idx) != other.atom(idx) {
                return false;
            }
        }
        for idx in self.bonds() {
            if idx.index() >= other.bond_count() {
                return false;
            }
            if self.bond(idx) != other.bond(idx) {
                return false;
            }
            if self.bond_endpoints(idx) != other.bond_endpoints(idx) {
                return false;
            }
        }
        self.stereocenters == other.stereocenters
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for Mol<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mol")
            .field("atom_count", &self.atom_count())
            .field("bond_count", &self.bond_count())
            .field("stereocenters", &self.stereocenters)
            .finish()
    }
}

/// Whether `to` is an even permutation of `from`. Used by the chirality
/// resolver: an odd permutation between the input ligand order and the CIP
/// priority order flips the recorded handedness.
pub(crate) fn permutation_parity<T: Eq>(from: &[T], to: &[T]) -> bool {
    let n = from.len();
    if n != to.len() {
        return true;
    }
    let perm: Vec<usize> = from
        .iter()
        .map(|f| to.iter().position(|t| t == f).unwrap_or(0))
        .collect();
    let mut visited = vec![false; n];
    let mut swaps = 0usize;
    for i in 0..n {
        if visited[i] {
            continue;
        }
        let mut cycle_len = 0;
        let mut j = i;
        while !visited[j] {
            visited[j] = true;
            j = perm[j];
            cycle_len += 1;
        }
        swaps += cycle_len - 1;
    }
    swaps % 2 == 0
}
