//! Atomic style qualifiers and their global id allocator.

use std::cmp::Ordering as CmpOrdering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::flavor::Flavor;

/// The only shared mutable state in the engine: a single counter handing out
/// strictly increasing atom ids. Ids are never reused.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// An indivisible, uniquely identified style qualifier (e.g. "disabled").
///
/// Atoms are allocated once and live for as long as anything references them.
/// Identity, ordering, and hashing are defined solely by the allocated id;
/// the name is a diagnostic label and plays no part in comparisons.
///
/// Most callers never allocate atoms directly: [`Flavor::atomic`] wraps a
/// fresh atom into a usable flavor.
#[derive(Clone)]
pub struct Atom {
    inner: Arc<AtomInner>,
}

struct AtomInner {
    id: u64,
    name: String,
    default_flavor: Flavor,
}

impl Atom {
    /// Allocates a new atom with the next sequential id.
    ///
    /// Safe to call from any number of threads concurrently; ids are unique
    /// and strictly increasing in allocation order. Atoms are never rejected
    /// or merged.
    pub fn allocate(name: &str, default_flavor: Flavor) -> Atom {
        Atom {
            inner: Arc::new(AtomInner {
                id: next_id(),
                name: name.to_string(),
                default_flavor,
            }),
        }
    }

    /// The globally unique id assigned at allocation.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// The diagnostic name. Not used in comparisons.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The baseline flavor this atom always additionally implies.
    pub fn default_flavor(&self) -> &Flavor {
        &self.inner.default_flavor
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Atom {}

impl PartialOrd for Atom {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
        Some(self.cmp(other))
    }
}

impl Ord for Atom {
    fn cmp(&self, other: &Self) -> CmpOrdering {
        self.inner.id.cmp(&other.inner.id)
    }
}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({}#{})", self.inner.name, self.inner.id)
    }
}
