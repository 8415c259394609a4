/// Default atom type for a molecular graph node.
///
/// `Atom` stores the intrinsic properties the CIP traversal and its
/// extension points read — the things you would read off a structural
/// formula. Computed properties (valence, coordinates, aromaticity) are
/// deliberately out of scope for this crate.
///
/// # Examples
///
/// ```
/// use cipcrab::Atom;
///
/// let carbon = Atom {
///     atomic_num: 6,
///     isotope: 0,
///     hydrogen_count: 3,
/// };
/// assert_eq!(carbon.atomic_num, 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Mass number. `0` means natural isotopic abundance (the common case).
    pub isotope: u16,
    /// Number of virtual (suppressed) hydrogens on this atom.
    ///
    /// These are not graph nodes — they are implied by the atom's valence.
    /// An implicit hydrogen acting as a stereocenter ligand is addressed
    /// with [`LigandRef::ImplicitH`](crate::LigandRef::ImplicitH), not via
    /// this count.
    pub hydrogen_count: u8,
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasIsotope for Atom {
    fn isotope(&self) -> u16 {
        self.isotope
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}
