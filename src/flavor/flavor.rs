//! Composite flavors: the qualifier lattice and its subsumption order.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::atom::Atom;

static DEFAULT: Lazy<Flavor> = Lazy::new(|| Flavor {
    inner: Arc::new(FlavorInner {
        atoms: Vec::new(),
        defining_atoms: Vec::new(),
    }),
});

/// An immutable composite of [`Atom`]s describing a point in the qualifier
/// space.
///
/// A flavor carries two views of itself:
///
/// - [`atoms`](Flavor::atoms): the *full closure* — every atom implied
///   directly or transitively through default-flavor chains;
/// - [`defining_atoms`](Flavor::defining_atoms): the *minimal generators* —
///   the smallest subset whose expansion under the default relation
///   reproduces the closure.
///
/// The distinction matters for matching: a rule is as specific as its full
/// closure, but a query satisfies it as soon as the rule's generators are
/// present.
///
/// Flavors are cheap to clone and safe to share across threads; once
/// constructed they never change.
///
/// # Example
///
/// ```rust
/// use flavors::Flavor;
///
/// let disabled = Flavor::atomic("disabled", &Flavor::default());
/// let immutable = Flavor::atomic("immutable", &disabled);
///
/// // "immutable" always carries its baseline along.
/// assert!(immutable.implies(&disabled));
/// assert_eq!(immutable.atoms().len(), 2);
/// assert_eq!(immutable.defining_atoms().len(), 1);
/// ```
#[derive(Clone)]
pub struct Flavor {
    inner: Arc<FlavorInner>,
}

struct FlavorInner {
    /// Full closure, strictly ascending by atom id.
    atoms: Vec<Atom>,
    /// Minimal generating subset of `atoms`, strictly ascending by atom id.
    defining_atoms: Vec<Atom>,
}

impl Flavor {
    /// Defines a new leaf qualifier.
    ///
    /// Allocates a fresh atom whose baseline is `default`, then folds the
    /// baseline in: the result's generators are exactly the new atom, and its
    /// closure is the new atom plus everything `default` carries.
    pub fn atomic(name: &str, default: &Flavor) -> Flavor {
        let atom = Atom::allocate(name, default.clone());
        let singleton = Flavor {
            inner: Arc::new(FlavorInner {
                atoms: vec![atom.clone()],
                defining_atoms: vec![atom],
            }),
        };
        Flavor::aggregate(&[singleton, default.clone()])
    }

    /// Combines any number of flavors into their union.
    ///
    /// Zero inputs yield [`Flavor::default`]; a single input is returned
    /// unchanged. When the union collapses to the atom set of one of the
    /// inputs, that input is returned directly — callers may not rely on
    /// physical identity here, only on value equality.
    pub fn aggregate(flavors: &[Flavor]) -> Flavor {
        match flavors {
            [] => Flavor::default(),
            [one] => one.clone(),
            _ => {
                let mut union: Vec<Atom> = flavors
                    .iter()
                    .flat_map(|f| f.atoms().iter().cloned())
                    .collect();
                union.sort();
                union.dedup();

                // The union is a superset of every input's closure, so equal
                // length means equal set.
                if let Some(same) = flavors.iter().find(|f| f.atoms().len() == union.len()) {
                    return same.clone();
                }

                let defining_atoms = minimal_generators(&union);
                Flavor {
                    inner: Arc::new(FlavorInner {
                        atoms: union,
                        defining_atoms,
                    }),
                }
            }
        }
    }

    /// Binary [`aggregate`](Flavor::aggregate), for fluent composition.
    pub fn plus(&self, other: &Flavor) -> Flavor {
        Flavor::aggregate(&[self.clone(), other.clone()])
    }

    /// Tests whether this flavor is at least as specific as `other`.
    ///
    /// Holds iff every *generator* of `other` occurs in this flavor's full
    /// closure. Implemented as a single forward merge over the two
    /// id-sorted sequences. `other == DEFAULT` always yields true.
    pub fn implies(&self, other: &Flavor) -> bool {
        let mut mine = self.atoms().iter();
        'next_needed: for needed in other.defining_atoms() {
            for atom in mine.by_ref() {
                if atom.id() == needed.id() {
                    continue 'next_needed;
                }
                if atom.id() > needed.id() {
                    return false;
                }
            }
            return false;
        }
        true
    }

    /// The full closure: every atom this flavor implies, ascending by id.
    pub fn atoms(&self) -> &[Atom] {
        &self.inner.atoms
    }

    /// The minimal generating subset of [`atoms`](Flavor::atoms).
    pub fn defining_atoms(&self) -> &[Atom] {
        &self.inner.defining_atoms
    }

    /// The number of atoms in the closure; higher means more specific.
    pub fn selectivity(&self) -> usize {
        self.inner.atoms.len()
    }

    /// True for the distinguished empty flavor.
    pub fn is_default(&self) -> bool {
        self.inner.atoms.is_empty()
    }
}

/// Computes the minimal generating subset of a full closure.
///
/// An atom that occurs in some member's default closure is reproduced
/// automatically once that member is present, so it is dropped as a
/// generator.
fn minimal_generators(atoms: &[Atom]) -> Vec<Atom> {
    use std::collections::HashSet;

    let mut shadowed: HashSet<u64> = HashSet::new();
    for atom in atoms {
        for implied in atom.default_flavor().atoms() {
            shadowed.insert(implied.id());
        }
    }
    atoms
        .iter()
        .filter(|atom| !shadowed.contains(&atom.id()))
        .cloned()
        .collect()
}

impl Default for Flavor {
    /// The distinguished empty flavor: implied by everything, implying
    /// nothing but itself.
    fn default() -> Self {
        DEFAULT.clone()
    }
}

impl PartialEq for Flavor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.atoms().len() == other.atoms().len()
                && self
                    .atoms()
                    .iter()
                    .zip(other.atoms())
                    .all(|(a, b)| a == b))
    }
}

impl Eq for Flavor {}

impl Hash for Flavor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for atom in self.atoms() {
            atom.id().hash(state);
        }
    }
}

impl fmt::Display for Flavor {
    /// Joins the generator names with `+`; the empty flavor prints as
    /// `default`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            return f.write_str("default");
        }
        for (i, atom) in self.defining_atoms().iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            f.write_str(atom.name())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flavor({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let default = Flavor::default();
        assert!(default.is_default());
        assert!(default.atoms().is_empty());
        assert!(default.defining_atoms().is_empty());
        assert_eq!(default.selectivity(), 0);
    }

    #[test]
    fn everything_implies_default() {
        let default = Flavor::default();
        let a = Flavor::atomic("a", &default);
        let b = Flavor::atomic("b", &a);

        assert!(default.implies(&default));
        assert!(a.implies(&default));
        assert!(b.implies(&default));
    }

    #[test]
    fn default_implies_only_itself() {
        let default = Flavor::default();
        let a = Flavor::atomic("a", &default);

        assert!(default.implies(&default));
        assert!(!default.implies(&a));
    }

    #[test]
    fn implies_is_reflexive() {
        let a = Flavor::atomic("a", &Flavor::default());
        let b = Flavor::atomic("b", &Flavor::default());
        let ab = a.plus(&b);

        assert!(a.implies(&a));
        assert!(ab.implies(&ab));
    }

    #[test]
    fn atomic_has_minimal_generators() {
        let base = Flavor::atomic("base", &Flavor::default());
        let derived = Flavor::atomic("derived", &base);

        // Closure carries the baseline; generators do not.
        assert_eq!(derived.atoms().len(), 2);
        assert_eq!(derived.defining_atoms().len(), 1);
        assert_eq!(derived.defining_atoms()[0].name(), "derived");
        assert_eq!(derived.selectivity(), 2);
    }

    #[test]
    fn default_chain_implies_transitively() {
        // IMMUTABLE defined with default DISABLED: the query never mentions
        // DISABLED explicitly, yet carries it.
        let disabled = Flavor::atomic("disabled", &Flavor::default());
        let immutable = Flavor::atomic("immutable", &disabled);

        assert!(immutable.implies(&disabled));
        assert!(!disabled.implies(&immutable));
    }

    #[test]
    fn implies_tests_target_generators_against_full_closure() {
        // The right-hand side of the subsumption test is the target's
        // generator set, checked against the caller's full closure. A flavor
        // whose generators are present matches even when those generators
        // were only reached through a default chain.
        let disabled = Flavor::atomic("disabled", &Flavor::default());
        let immutable = Flavor::atomic("immutable", &disabled);
        let mandatory = Flavor::atomic("mandatory", &Flavor::default());

        let query = immutable.plus(&mandatory);
        // `immutable` has closure {immutable, disabled} but a single
        // generator; the query's closure contains that generator.
        assert!(query.implies(&immutable));
        assert!(query.implies(&disabled));
        assert!(query.implies(&mandatory));
        // Missing generator fails, regardless of shared baseline atoms.
        let other = Flavor::atomic("other", &disabled);
        assert!(!query.implies(&other));
    }

    #[test]
    fn aggregate_of_nothing_is_default() {
        assert_eq!(Flavor::aggregate(&[]), Flavor::default());
    }

    #[test]
    fn aggregate_of_one_is_that_flavor() {
        let a = Flavor::atomic("a", &Flavor::default());
        assert_eq!(Flavor::aggregate(&[a.clone()]), a);
    }

    #[test]
    fn aggregate_is_idempotent() {
        let a = Flavor::atomic("a", &Flavor::default());
        assert_eq!(Flavor::aggregate(&[a.clone(), a.clone()]), a);
        assert_eq!(a.plus(&a), a);
    }

    #[test]
    fn aggregate_is_commutative_and_associative() {
        let a = Flavor::atomic("a", &Flavor::default());
        let b = Flavor::atomic("b", &Flavor::default());
        let c = Flavor::atomic("c", &Flavor::default());

        let left = a.plus(&b).plus(&c);
        let right = a.plus(&b.plus(&c));
        let flat = Flavor::aggregate(&[a.clone(), b.clone(), c.clone()]);
        let reversed = Flavor::aggregate(&[c, b, a]);

        assert_eq!(left, right);
        assert_eq!(left, flat);
        assert_eq!(left, reversed);
    }

    #[test]
    fn aggregate_with_default_is_identity() {
        let a = Flavor::atomic("a", &Flavor::default());
        assert_eq!(a.plus(&Flavor::default()), a);
        assert_eq!(Flavor::default().plus(&a), a);
    }

    #[test]
    fn aggregate_absorbs_subsumed_flavors() {
        let disabled = Flavor::atomic("disabled", &Flavor::default());
        let immutable = Flavor::atomic("immutable", &disabled);

        // `disabled` is already in `immutable`'s closure.
        assert_eq!(immutable.plus(&disabled), immutable);
    }

    #[test]
    fn aggregate_unions_closures() {
        let mandatory = Flavor::atomic("mandatory", &Flavor::default());
        let disabled = Flavor::atomic("disabled", &Flavor::default());
        let both = mandatory.plus(&disabled);

        assert_eq!(both.atoms().len(), 2);
        assert_eq!(both.defining_atoms().len(), 2);
        assert!(both.implies(&mandatory));
        assert!(both.implies(&disabled));
        assert!(!mandatory.implies(&both));
    }

    #[test]
    fn aggregate_drops_generators_covered_by_defaults() {
        let disabled = Flavor::atomic("disabled", &Flavor::default());
        let immutable = Flavor::atomic("immutable", &disabled);
        let mandatory = Flavor::atomic("mandatory", &Flavor::default());

        let combined = Flavor::aggregate(&[immutable.clone(), disabled, mandatory]);
        // `disabled` is covered by `immutable`'s default chain, so it is not
        // a generator of the union.
        assert_eq!(combined.atoms().len(), 3);
        let names: Vec<&str> = combined.defining_atoms().iter().map(|a| a.name()).collect();
        assert_eq!(names, ["immutable", "mandatory"]);
    }

    #[test]
    fn equality_is_by_atom_set() {
        let a = Flavor::atomic("a", &Flavor::default());
        let b = Flavor::atomic("b", &Flavor::default());

        // Two separately built aggregates of the same atoms compare equal;
        // no physical sharing is promised.
        let one = a.plus(&b);
        let two = b.plus(&a);
        assert_eq!(one, two);

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        one.hash(&mut h1);
        two.hash(&mut h2);
        assert_eq!(h1.finish(), h2.finish());
    }

    #[test]
    fn closure_is_ascending_and_duplicate_free() {
        let a = Flavor::atomic("a", &Flavor::default());
        let b = Flavor::atomic("b", &a);
        let c = Flavor::atomic("c", &b);
        let all = Flavor::aggregate(&[c, b, a]);

        let ids: Vec<u64> = all.atoms().iter().map(|atom| atom.id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn display_names_generators() {
        let mandatory = Flavor::atomic("mandatory", &Flavor::default());
        let disabled = Flavor::atomic("disabled", &Flavor::default());

        assert_eq!(Flavor::default().to_string(), "default");
        assert_eq!(mandatory.to_string(), "mandatory");
        assert_eq!(mandatory.plus(&disabled).to_string(), "mandatory+disabled");
    }
}
