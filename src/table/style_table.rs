//! Most-specific-match lookup over a set of rules.
//!
//! # Design
//!
//! A [`StyleTable`] is built once from an ordered rule list and is read-only
//! afterwards. Each rule is filed under every *generating* atom of its
//! flavor, so a lookup only ever touches buckets for atoms the query
//! actually carries. Buckets are kept sorted ascending by
//! `(selectivity, order)`, which lets the lookup scan each bucket from its
//! most specific end and stop as soon as nothing left can beat the current
//! best — the same cascade policy CSS uses, with "later rule wins" breaking
//! ties between equally specific matches.
//!
//! A missing match is a normal outcome, not an error: [`get_value`] returns
//! `None` and the caller decides on a fallback.
//!
//! [`get_value`]: StyleTable::get_value

use std::collections::HashMap;
use std::sync::Arc;

use crate::flavor::Flavor;

use super::rule::{Rule, RuleEntry};

/// A build-once, read-many rule index answering "which value applies to this
/// flavor?" with a most-specific-match policy.
///
/// # Example
///
/// ```rust
/// use flavors::{Flavor, Rule, StyleTable};
///
/// let mandatory = Flavor::atomic("mandatory", &Flavor::default());
/// let disabled = Flavor::atomic("disabled", &Flavor::default());
/// let both = mandatory.plus(&disabled);
///
/// let table = StyleTable::build(vec![
///     Rule::new(mandatory.clone(), "M"),
///     Rule::new(disabled.clone(), "D"),
///     Rule::new(both.clone(), "MD"),
/// ]);
///
/// assert_eq!(table.get_value(&both), Some(&"MD"));
/// assert_eq!(table.get_value(&mandatory), Some(&"M"));
/// assert_eq!(table.get_value(&Flavor::default()), None);
/// ```
#[derive(Debug)]
pub struct StyleTable<T> {
    /// Per-atom buckets, each sorted ascending by `(selectivity, order)`.
    pub(crate) buckets: HashMap<u64, Vec<Arc<RuleEntry<T>>>>,
    /// Rules targeting the default flavor; consulted by every lookup as the
    /// least specific candidates.
    pub(crate) base: Vec<Arc<RuleEntry<T>>>,
    rules: usize,
}

impl<T> StyleTable<T> {
    /// Builds a table from rules in cascade order.
    ///
    /// Rule positions in `rules` are their cascade order: among equally
    /// specific matches, the rule appearing later wins.
    pub fn build(rules: Vec<Rule<T>>) -> Self {
        let mut buckets: HashMap<u64, Vec<Arc<RuleEntry<T>>>> = HashMap::new();
        let mut base: Vec<Arc<RuleEntry<T>>> = Vec::new();
        let count = rules.len();

        for (order, rule) in rules.into_iter().enumerate() {
            let entry = Arc::new(RuleEntry {
                order,
                selectivity: rule.flavor.selectivity(),
                flavor: rule.flavor,
                value: rule.value,
            });
            if entry.flavor.defining_atoms().is_empty() {
                base.push(entry);
            } else {
                for atom in entry.flavor.defining_atoms() {
                    buckets.entry(atom.id()).or_default().push(Arc::clone(&entry));
                }
            }
        }

        for list in buckets.values_mut() {
            list.sort_by_key(|entry| entry.rank());
        }
        base.sort_by_key(|entry| entry.rank());

        Self {
            buckets,
            base,
            rules: count,
        }
    }

    /// Returns the value of the most specific rule the query satisfies, or
    /// `None` when no rule applies.
    ///
    /// Every atom in the query's full closure is consulted, so a rule can
    /// match through atoms the query only carries via default chains.
    pub fn get_value(&self, query: &Flavor) -> Option<&T> {
        let mut best: Option<&Arc<RuleEntry<T>>> = None;
        for atom in query.atoms() {
            if let Some(list) = self.buckets.get(&atom.id()) {
                Self::scan(list, query, &mut best);
            }
        }
        Self::scan(&self.base, query, &mut best);
        best.map(|entry| &entry.value)
    }

    /// Scans one sorted bucket from its most specific end.
    ///
    /// Stops as soon as the current entry no longer outranks `best`
    /// (everything before it ranks lower still), or as soon as an implied
    /// entry is accepted (everything before it cannot beat it).
    fn scan<'a>(
        list: &'a [Arc<RuleEntry<T>>],
        query: &Flavor,
        best: &mut Option<&'a Arc<RuleEntry<T>>>,
    ) {
        for entry in list.iter().rev() {
            if let Some(current) = best {
                if entry.rank() <= current.rank() {
                    return;
                }
            }
            if query.implies(&entry.flavor) {
                *best = Some(entry);
                return;
            }
        }
    }

    /// The number of rules the table was built from.
    pub fn len(&self) -> usize {
        self.rules
    }

    /// True when the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules == 0
    }
}
