use crate::*;

#[test]
fn mol_add_atoms_and_bonds() {
    let mut mol = Mol::<Atom, Bond>::new();
    let c = mol.add_atom(Atom {
        atomic_num: 6,
        ..Atom::default()
    });
    let o = mol.add_atom(Atom {
        atomic_num: 8,
        ..Atom::default()
    });
    let bond_idx = mol.add_bond(
        c,
        o,
        Bond {
            order: BondOrder::Double,
        },
    );

    assert_eq!(mol.atom_count(), 2);
    assert_eq!(mol.bond_count(), 1);
    assert_eq!(mol.atom(c).atomic_num, 6);
    assert_eq!(mol.atom(o).atomic_num, 8);
    assert_eq!(mol.bond(bond_idx).order, BondOrder::Double);
}

#[test]
fn mol_neighbors_and_bonds_of() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::default());
    let b = mol.add_atom(Atom::default());
    let c = mol.add_atom(Atom::default());
    mol.add_bond(a, b, Bond::default());
    mol.add_bond(a, c, Bond::default());

    let neighbors: Vec<_> = mol.neighbors(a).collect();
    assert_eq!(neighbors.len(), 2);

    let incident: Vec<_> = mol.bonds_of(a).collect();
    assert_eq!(incident.len(), 2);
}

#[test]
fn mol_bond_between_and_endpoints() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::default());
    let b = mol.add_atom(Atom::default());
    let c = mol.add_atom(Atom::default());
    let e = mol.add_bond(a, b, Bond::default());

    assert_eq!(mol.bond_between(a, b), Some(e));
    assert_eq!(mol.bond_between(a, c), None);

    let (src, dst) = mol.bond_endpoints(e).unwrap();
    assert!((src == a && dst == b) || (src == b && dst == a));
}

#[test]
fn mol_try_atom() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::default());
    assert!(mol.try_atom(a).is_some());
    assert!(mol.try_atom(petgraph::graph::NodeIndex::new(7)).is_none());
}

#[test]
fn mol_stereocenter_storage() {
    let mut mol = Mol::<Atom, Bond>::new();
    let center = mol.add_atom(Atom {
        atomic_num: 6,
        ..Atom::default()
    });
    let ligands: Vec<_> = (0..3)
        .map(|_| {
            let a = mol.add_atom(Atom::default());
            mol.add_bond(center, a, Bond::default());
            a
        })
        .collect();

    let stereocenter = TetrahedralCenter::new(
        center,
        [
            LigandRef::Atom(ligands[0]),
            LigandRef::Atom(ligands[1]),
            LigandRef::Atom(ligands[2]),
            LigandRef::ImplicitH,
        ],
        Handedness::Clockwise,
    )
    .unwrap();
    mol.add_stereocenter(stereocenter);

    assert_eq!(mol.stereocenters().len(), 1);
    assert_eq!(mol.stereocenter_for(center), Some(&stereocenter));
    assert_eq!(mol.stereocenter_for(ligands[0]), None);

    mol.remove_stereocenter(center);
    assert!(mol.stereocenters().is_empty());
}

#[test]
fn bond_order_multiplicity() {
    assert_eq!(BondOrder::Single.multiplicity(), 1);
    assert_eq!(BondOrder::Double.multiplicity(), 2);
    assert_eq!(BondOrder::Triple.multiplicity(), 3);
}

#[test]
fn atom_trait_impls() {
    let atom = Atom {
        atomic_num: 7,
        isotope: 15,
        hydrogen_count: 2,
    };
    assert_eq!(HasAtomicNum::atomic_num(&atom), 7);
    assert_eq!(HasIsotope::isotope(&atom), 15);
    assert_eq!(HasHydrogenCount::hydrogen_count(&atom), 2);

    let bond = Bond {
        order: BondOrder::Triple,
    };
    assert_eq!(HasBondOrder::bond_order(&bond), BondOrder::Triple);
}

#[test]
fn cip_error_display() {
    assert!(CipError::GraphInconsistency.to_string().contains("graph"));
    assert!(CipError::MalformedStereocenter
        .to_string()
        .contains("ligands"));
}
