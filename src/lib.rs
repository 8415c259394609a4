pub mod atom;
pub mod bond;
pub mod cip;
pub mod mol;
pub mod stereocenter;
pub mod traits;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use cip::{assign_all, cip_chirality, rank_ligands, CipChirality, CipError, PriorityOrder};
pub use mol::Mol;
pub use stereocenter::{Handedness, LigandRef, TetrahedralCenter};
pub use traits::{HasAtomicNum, HasBondOrder, HasHydrogenCount, HasIsotope};

#[cfg(test)]
mod tests;
