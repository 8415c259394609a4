use std::fmt;

/// Errors produced while ranking a stereocenter's ligands.
///
/// An unresolved priority tie is *not* an error — it is reported as
/// [`CipChirality::Undetermined`](crate::cip::CipChirality::Undetermined).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipError {
    /// The molecular graph could not resolve an atom or one of its
    /// incident bonds. Fatal to the ranking call; the graph is assumed
    /// caller-validated, so this is never retried.
    GraphInconsistency,
    /// The stereocenter does not have four distinct ligand identities, or
    /// lists its own central atom as a ligand.
    MalformedStereocenter,
}

impl fmt::Display for CipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GraphInconsistency => {
                write!(f, "molecular graph could not resolve an atom or bond")
            }
            Self::MalformedStereocenter => {
                write!(f, "stereocenter must have four distinct ligands, none of them the center")
            }
        }
    }
}

impl std::error::Error for CipError {}
