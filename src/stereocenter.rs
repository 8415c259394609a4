use petgraph::graph::NodeIndex;

use crate::cip::CipError;

/// One of the four substituents listed on a tetrahedral stereocenter.
///
/// A ligand is either a real graph atom or the implicit-hydrogen sentinel:
/// a hydrogen that exists only as a suppressed count on the central atom,
/// with no node of its own. The sentinel behaves like a ligand root with
/// atomic number 1 and no substituents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LigandRef {
    Atom(NodeIndex),
    ImplicitH,
}

/// Observed spatial arrangement of a stereocenter's ligands.
///
/// Looking from the first-listed ligand toward the central atom, the
/// remaining three ligands in listed order trace a clockwise or
/// anticlockwise path. The flag is tied to the *input* ligand order;
/// reordering the ligands changes its meaning (see
/// [`TetrahedralCenter`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Clockwise,
    AntiClockwise,
}

impl Handedness {
    pub fn flipped(self) -> Handedness {
        match self {
            Handedness::Clockwise => Handedness::AntiClockwise,
            Handedness::AntiClockwise => Handedness::Clockwise,
        }
    }
}

/// A tetrahedral stereocenter: a central atom, its four ligands in a fixed
/// input order, and the handedness observed relative to that order.
///
/// Exactly one ligand may be the implicit-hydrogen sentinel. The ligand
/// identities must be pairwise distinct and must not include the central
/// atom; [`TetrahedralCenter::new`] enforces both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrahedralCenter {
    pub center: NodeIndex,
    pub ligands: [LigandRef; 4],
    pub handedness: Handedness,
}

impl TetrahedralCenter {
    pub fn new(
        center: NodeIndex,
        ligands: [LigandRef; 4],
        handedness: Handedness,
    ) -> Result<Self, CipError> {
        for (i, ligand) in ligands.iter().enumerate() {
            if *ligand == LigandRef::Atom(center) {
                return Err(CipError::MalformedStereocenter);
            }
            if ligands[..i].contains(ligand) {
                return Err(CipError::MalformedStereocenter);
            }
        }
        Ok(Self {
            center,
            ligands,
            handedness,
        })
    }

    /// The mirror image of this stereocenter: same ligands, opposite
    /// handedness.
    pub fn inverted(self) -> Self {
        Self {
            handedness: self.handedness.flipped(),
            ..self
        }
    }
}
