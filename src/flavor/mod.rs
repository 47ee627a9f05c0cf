//! The flavor algebra: atomic qualifiers and their composites.
//!
//! This module provides the core qualifier primitives:
//!
//! - [`Atom`]: an indivisible, uniquely identified qualifier
//! - [`Flavor`]: an immutable composite of atoms with composition
//!   ([`Flavor::aggregate`]) and subsumption ([`Flavor::implies`])
//!
//! Flavors form a lattice ordered by specificity: a flavor implies another
//! when it carries all of the other's generating atoms, directly or through
//! a default-flavor chain.

mod atom;
#[allow(clippy::module_inception)]
mod flavor;

pub use atom::Atom;
pub use flavor::Flavor;
