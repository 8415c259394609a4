use crate::bond::BondOrder;

/// Read access to an atom's atomic number.
///
/// This is the only atom property CIP Rule 1a consumes; keeping it behind a
/// trait lets the ranking code run over any node type a caller stores in a
/// [`Mol`](crate::Mol). Implementations must be deterministic and
/// side-effect-free for a fixed graph.
pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

/// Read access to an atom's mass number (`0` = natural abundance).
///
/// Not consulted by Rule 1a; carried so a mass-based Rule 2 pass can be
/// layered on the same node types later.
pub trait HasIsotope {
    fn isotope(&self) -> u16;
}

/// Read access to an atom's suppressed hydrogen count.
pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> u8;
}

/// Read access to a bond's order.
///
/// The CIP traversal uses this to insert duplicate atoms for double and
/// triple bonds.
pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}
