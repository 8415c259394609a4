use petgraph::graph::NodeIndex;

use crate::cip::error::CipError;
use crate::mol::Mol;
use crate::stereocenter::LigandRef;
use crate::traits::{HasAtomicNum, HasBondOrder};

/// One node of a ligand's substituent tree, explored outward from the
/// stereocenter one sphere at a time.
///
/// Three kinds of node share this struct: real atoms (backed by a graph
/// node), phantom duplicates inserted for ring closures and multiple
/// bonds, and the implicit-hydrogen sentinel root. Phantoms and the
/// sentinel carry an atomic number only and are permanently leaves.
///
/// The tree is built fresh for each ranking call and owned exclusively by
/// it; nothing persists once the call returns.
#[derive(Debug)]
pub(crate) struct LigandNode {
    atomic_num: u8,
    /// Graph node behind this tree node; `None` for phantoms and the
    /// implicit-hydrogen sentinel.
    atom: Option<NodeIndex>,
    /// Atomic number of the atom this node was reached from. Duplicated
    /// under this node once per extra order of the incoming bond.
    parent_atomic_num: u8,
    /// Multiplicity of the bond this node was reached through.
    incoming_order: u8,
    /// Real atoms on the walk from the central atom to this node,
    /// inclusive at both ends. A neighbor already on this path is a ring
    /// closure and becomes a phantom, which bounds every path by the
    /// graph's atom count.
    path: Vec<NodeIndex>,
    /// `None` until the node's sphere has been expanded.
    children: Option<Vec<LigandNode>>,
}

impl LigandNode {
    /// Build the tree root for one of a stereocenter's four ligands.
    ///
    /// Fails with [`CipError::GraphInconsistency`] if the ligand atom or
    /// its bond to the central atom cannot be resolved.
    pub(crate) fn root<A, B>(
        mol: &Mol<A, B>,
        center: NodeIndex,
        ligand: LigandRef,
    ) -> Result<LigandNode, CipError>
    where
        A: HasAtomicNum,
        B: HasBondOrder,
    {
        match ligand {
            LigandRef::ImplicitH => Ok(LigandNode::leaf(1)),
            LigandRef::Atom(atom) => {
                let atomic_num = mol
                    .try_atom(atom)
                    .ok_or(CipError::GraphInconsistency)?
                    .atomic_num();
                let center_atomic_num = mol
                    .try_atom(center)
                    .ok_or(CipError::GraphInconsistency)?
                    .atomic_num();
                let bond = mol
                    .bond_between(center, atom)
                    .ok_or(CipError::GraphInconsistency)?;
                Ok(LigandNode {
                    atomic_num,
                    atom: Some(atom),
                    parent_atomic_num: center_atomic_num,
                    incoming_order: mol.bond(bond).bond_order().multiplicity(),
                    path: vec![center, atom],
                    children: None,
                })
            }
        }
    }

    /// A node with no graph atom and no children, ever: a phantom
    /// duplicate or the implicit-hydrogen sentinel.
    fn leaf(atomic_num: u8) -> LigandNode {
        LigandNode {
            atomic_num,
            atom: None,
            parent_atomic_num: 0,
            incoming_order: 1,
            path: Vec::new(),
            children: Some(Vec::new()),
        }
    }

    pub(crate) fn atomic_num(&self) -> u8 {
        self.atomic_num
    }

    #[cfg(test)]
    pub(crate) fn is_phantom(&self) -> bool {
        self.atom.is_none()
    }

    /// Materialize this node's next sphere: one child per bonded atom
    /// (excluding the atom we came from), with phantom substitution for
    /// ring closures and multiple bonds. A no-op on phantoms, the
    /// implicit-hydrogen sentinel, and nodes already expanded.
    ///
    /// Child order follows the graph's adjacency order, so repeated calls
    /// on identical input are deterministic.
    pub(crate) fn expand_one_sphere<A, B>(&mut self, mol: &Mol<A, B>) -> Result<(), CipError>
    where
        A: HasAtomicNum,
        B: HasBondOrder,
    {
        if self.children.is_some() {
            return Ok(());
        }
        let atom = match self.atom {
            Some(atom) => atom,
            None => return Ok(()),
        };
        let came_from = self.path[self.path.len() - 2];

        let mut children = Vec::new();

        // The far side of a multiple bond duplicates the near side: one
        // phantom of the parent per extra bond order.
        for _ in 1..self.incoming_order {
            children.push(LigandNode::leaf(self.parent_atomic_num));
        }

        for neighbor in mol.neighbors(atom) {
            if neighbor == came_from {
                continue;
            }
            let bond = mol
                .bond_between(atom, neighbor)
                .ok_or(CipError::GraphInconsistency)?;
            let order = mol.bond(bond).bond_order().multiplicity();
            let neighbor_atomic_num = mol
                .try_atom(neighbor)
                .ok_or(CipError::GraphInconsistency)?
                .atomic_num();

            if self.path.contains(&neighbor) {
                // Ring closure: the revisited atom appears as a phantom,
                // once per bond order.
                for _ in 0..order {
                    children.push(LigandNode::leaf(neighbor_atomic_num));
                }
            } else {
                let mut path = self.path.clone();
                path.push(neighbor);
                children.push(LigandNode {
                    atomic_num: neighbor_atomic_num,
                    atom: Some(neighbor),
                    parent_atomic_num: self.atomic_num,
                    incoming_order: order,
                    path,
                    children: None,
                });
                for _ in 1..order {
                    children.push(LigandNode::leaf(neighbor_atomic_num));
                }
            }
        }

        self.children = Some(children);
        Ok(())
    }

    /// Children of an expanded node, sorted descending by atomic number.
    /// The sort is stable, so equal atomic numbers keep adjacency order
    /// and pair deterministically during recursive comparison.
    pub(crate) fn sorted_children_mut(&mut self) -> &mut [LigandNode] {
        let children = match self.children.as_mut() {
            Some(children) => children,
            None => return &mut [],
        };
        children.sort_by(|a, b| b.atomic_num.cmp(&a.atomic_num));
        children
    }
}
