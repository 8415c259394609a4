use std::cmp::Ordering;

use crate::cip::error::CipError;
use crate::cip::ligand::LigandNode;
use crate::mol::Mol;
use crate::traits::{HasAtomicNum, HasBondOrder};

/// Compare two ligands by CIP Rule 1a, expanding spheres on demand.
///
/// `Ordering::Greater` means `a` has the higher priority. `Ordering::Equal`
/// means the ligands stayed tied after every branch was exhausted — a real
/// outcome the ranker reports, not a fallback.
///
/// Per sphere: higher own atomic number wins; otherwise the children's
/// atomic numbers, sorted descending, are compared lexicographically over
/// the common prefix; a still-tied prefix is broken by child count (more
/// substituents win); only then does the comparison recurse into the
/// rank-matched child pairs. Phantom insertion during expansion bounds the
/// recursion depth by the graph's atom count, so no depth check is needed.
pub(crate) fn compare_ligands<A, B>(
    a: &mut LigandNode,
    b: &mut LigandNode,
    mol: &Mol<A, B>,
) -> Result<Ordering, CipError>
where
    A: HasAtomicNum,
    B: HasBondOrder,
{
    match a.atomic_num().cmp(&b.atomic_num()) {
        Ordering::Equal => {}
        decisive => return Ok(decisive),
    }

    a.expand_one_sphere(mol)?;
    b.expand_one_sphere(mol)?;
    let a_children = a.sorted_children_mut();
    let b_children = b.sorted_children_mut();

    let common = a_children.len().min(b_children.len());
    for i in 0..common {
        match a_children[i].atomic_num().cmp(&b_children[i].atomic_num()) {
            Ordering::Equal => {}
            decisive => return Ok(decisive),
        }
    }

    // Equal over the common prefix: the ligand with more substituents in
    // this sphere outranks the one that ran out.
    if a_children.len() != b_children.len() {
        return Ok(a_children.len().cmp(&b_children.len()));
    }

    for (a_child, b_child) in a_children.iter_mut().zip(b_children.iter_mut()) {
        match compare_ligands(a_child, b_child, mol)? {
            Ordering::Equal => {}
            decisive => return Ok(decisive),
        }
    }

    Ok(Ordering::Equal)
}
