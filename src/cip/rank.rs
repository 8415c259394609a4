use std::cmp::Ordering;

use crate::cip::compare::compare_ligands;
use crate::cip::error::CipError;
use crate::cip::ligand::LigandNode;
use crate::mol::Mol;
use crate::stereocenter::TetrahedralCenter;
use crate::traits::{HasAtomicNum, HasBondOrder};

/// A stereocenter's four ligands ordered by CIP priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityOrder {
    ranked: [usize; 4],
    resolved: bool,
}

impl PriorityOrder {
    /// Input positions of the four ligands, highest priority first.
    pub fn ranked(&self) -> [usize; 4] {
        self.ranked
    }

    /// `false` if some adjacent pair in the ranking stayed tied under
    /// Rule 1a; the order between those two positions is then arbitrary
    /// and no configuration can be assigned from it.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

/// Rank a stereocenter's four ligands by descending CIP priority.
///
/// Validates the stereocenter, builds one ligand tree per input position,
/// and sorts the positions with the sphere-expanding comparator. The sort
/// is stable: exact ties keep their input order and mark the result
/// unresolved.
pub fn rank_ligands<A, B>(
    mol: &Mol<A, B>,
    stereocenter: &TetrahedralCenter,
) -> Result<PriorityOrder, CipError>
where
    A: HasAtomicNum,
    B: HasBondOrder,
{
    // Re-validate: the struct fields are public, so the caller may not
    // have gone through `TetrahedralCenter::new`.
    TetrahedralCenter::new(
        stereocenter.center,
        stereocenter.ligands,
        stereocenter.handedness,
    )?;

    let mut nodes: Vec<LigandNode> = stereocenter
        .ligands
        .iter()
        .map(|&ligand| LigandNode::root(mol, stereocenter.center, ligand))
        .collect::<Result<_, _>>()?;

    // All six pairwise comparisons up front; the sort below reads from
    // this matrix instead of re-running the traversal.
    let mut matrix = [[Ordering::Equal; 4]; 4];
    for i in 0..4 {
        for j in (i + 1)..4 {
            let (head, tail) = nodes.split_at_mut(j);
            let decision = compare_ligands(&mut head[i], &mut tail[0], mol)?;
            matrix[i][j] = decision;
            matrix[j][i] = decision.reverse();
        }
    }

    let mut ranked = [0usize, 1, 2, 3];
    // Insertion sort, descending and stable over exact ties.
    for i in 1..4 {
        let mut j = i;
        while j > 0 && matrix[ranked[j - 1]][ranked[j]] == Ordering::Less {
            ranked.swap(j - 1, j);
            j -= 1;
        }
    }

    let resolved = (0..3).all(|k| matrix[ranked[k]][ranked[k + 1]] != Ordering::Equal);

    Ok(PriorityOrder { ranked, resolved })
}
