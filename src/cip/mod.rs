//! Cahn–Ingold–Prelog R/S assignment for tetrahedral stereocenters.
//!
//! Implements CIP Rule 1a (atomic number precedence) with recursive,
//! sphere-by-sphere tie-breaking over the substituent trees of the four
//! ligands. Rings and multiple bonds are handled with phantom duplicate
//! atoms, which also guarantees termination on fused and bridged
//! polycyclic systems. Higher sequence rules (mass number, like/unlike
//! descriptors) are extension points, not implemented here; ligands that
//! remain tied after Rule 1a yield [`CipChirality::Undetermined`].
//!
//! # Examples
//!
//! Bromochlorofluoromethane, built by hand:
//!
//! ```
//! use cipcrab::{cip_chirality, Atom, Bond, CipChirality, Handedness, LigandRef, Mol};
//! use cipcrab::TetrahedralCenter;
//!
//! let mut mol = Mol::<Atom, Bond>::new();
//! let c = mol.add_atom(Atom { atomic_num: 6, ..Atom::default() });
//! let f = mol.add_atom(Atom { atomic_num: 9, ..Atom::default() });
//! let cl = mol.add_atom(Atom { atomic_num: 17, ..Atom::default() });
//! let br = mol.add_atom(Atom { atomic_num: 35, ..Atom::default() });
//! for halogen in [f, cl, br] {
//!     mol.add_bond(c, halogen, Bond::default());
//! }
//!
//! let stereocenter = TetrahedralCenter::new(
//!     c,
//!     [
//!         LigandRef::Atom(br),
//!         LigandRef::Atom(cl),
//!         LigandRef::Atom(f),
//!         LigandRef::ImplicitH,
//!     ],
//!     Handedness::Clockwise,
//! )?;
//! assert_eq!(cip_chirality(&mol, &stereocenter)?, CipChirality::R);
//! # Ok::<(), cipcrab::CipError>(())
//! ```

mod compare;
mod error;
mod ligand;
mod rank;

pub use error::CipError;
pub use rank::{rank_ligands, PriorityOrder};

use petgraph::graph::NodeIndex;

use crate::mol::{permutation_parity, Mol};
use crate::stereocenter::{Handedness, TetrahedralCenter};
use crate::traits::{HasAtomicNum, HasBondOrder};

/// Absolute configuration of a tetrahedral stereocenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipChirality {
    R,
    S,
    /// The ligand priorities could not be totally ordered under Rule 1a.
    /// This is a computed outcome, distinct from a [`CipError`].
    Undetermined,
}

/// Assign R, S or Undetermined to one stereocenter.
///
/// The ligands are ranked with [`rank_ligands`]; the recorded handedness,
/// which is relative to the *input* ligand order, is flipped when the
/// permutation from input order to priority order is odd. With the ligands
/// in descending priority order, a clockwise arrangement (viewed from the
/// highest-priority ligand, equivalently from the side opposite the
/// lowest) is R and an anticlockwise one is S.
pub fn cip_chirality<A, B>(
    mol: &Mol<A, B>,
    stereocenter: &TetrahedralCenter,
) -> Result<CipChirality, CipError>
where
    A: HasAtomicNum,
    B: HasBondOrder,
{
    let order = rank_ligands(mol, stereocenter)?;
    if !order.is_resolved() {
        return Ok(CipChirality::Undetermined);
    }

    let input = [0usize, 1, 2, 3];
    let handedness = if permutation_parity(&input, &order.ranked()) {
        stereocenter.handedness
    } else {
        stereocenter.handedness.flipped()
    };

    Ok(match handedness {
        Handedness::Clockwise => CipChirality::R,
        Handedness::AntiClockwise => CipChirality::S,
    })
}

/// Assign a configuration to every stereocenter recorded on the molecule,
/// in storage order.
pub fn assign_all<A, B>(mol: &Mol<A, B>) -> Result<Vec<(NodeIndex, CipChirality)>, CipError>
where
    A: HasAtomicNum,
    B: HasBondOrder,
{
    mol.stereocenters()
        .iter()
        .map(|stereocenter| Ok((stereocenter.center, cip_chirality(mol, stereocenter)?)))
        .collect()
}
