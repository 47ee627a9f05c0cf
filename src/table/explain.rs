//! Lookup tracing for debugging cascade decisions.
//!
//! [`StyleTable::explain`] replays a lookup and records every rule the scan
//! inspected, in inspection order. The trace serializes with serde so it can
//! be dumped next to the rendering output it explains.

use serde::Serialize;
use std::sync::Arc;

use crate::flavor::Flavor;

use super::rule::RuleEntry;
use super::style_table::StyleTable;

/// One rule inspected during a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Display form of the rule's flavor (generator names joined by `+`).
    pub flavor: String,
    /// Atom count of the rule's flavor.
    pub selectivity: usize,
    /// Position of the rule in the build sequence.
    pub order: usize,
    /// Whether the query implied the rule's flavor.
    pub implied: bool,
}

/// The full record of one lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Display form of the query flavor.
    pub query: String,
    /// Every rule inspected, in inspection order. Rules skipped by the
    /// early-exit pruning do not appear.
    pub candidates: Vec<Candidate>,
    /// The winning rule, if any. Always agrees with
    /// [`StyleTable::get_value`].
    pub winner: Option<Candidate>,
}

impl<T> StyleTable<T> {
    /// Replays [`get_value`](StyleTable::get_value) for `query`, recording
    /// the rules it inspected and the winner.
    ///
    /// Purely observational: the winner (and its absence) always matches
    /// what `get_value` returns for the same query.
    pub fn explain(&self, query: &Flavor) -> Resolution {
        let mut candidates = Vec::new();
        let mut best: Option<&Arc<RuleEntry<T>>> = None;

        for atom in query.atoms() {
            if let Some(list) = self.buckets.get(&atom.id()) {
                Self::scan_traced(list, query, &mut best, &mut candidates);
            }
        }
        Self::scan_traced(&self.base, query, &mut best, &mut candidates);

        Resolution {
            query: query.to_string(),
            winner: best.map(|entry| candidate(entry, true)),
            candidates,
        }
    }

    fn scan_traced<'a>(
        list: &'a [Arc<RuleEntry<T>>],
        query: &Flavor,
        best: &mut Option<&'a Arc<RuleEntry<T>>>,
        candidates: &mut Vec<Candidate>,
    ) {
        for entry in list.iter().rev() {
            if let Some(current) = best {
                if entry.rank() <= current.rank() {
                    return;
                }
            }
            let implied = query.implies(&entry.flavor);
            candidates.push(candidate(entry, implied));
            if implied {
                *best = Some(entry);
                return;
            }
        }
    }
}

fn candidate<T>(entry: &RuleEntry<T>, implied: bool) -> Candidate {
    Candidate {
        flavor: entry.flavor.to_string(),
        selectivity: entry.selectivity,
        order: entry.order,
        implied,
    }
}
