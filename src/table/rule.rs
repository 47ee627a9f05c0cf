//! Rules pairing a flavor with an arbitrary value.

use crate::flavor::Flavor;

/// A single resolution rule: when a query implies `flavor`, `value` applies.
///
/// Rules are supplied to [`StyleTable::build`](crate::StyleTable::build) in a
/// caller-determined order; among equally specific matching rules, the rule
/// given later wins.
#[derive(Debug, Clone)]
pub struct Rule<T> {
    pub(crate) flavor: Flavor,
    pub(crate) value: T,
}

impl<T> Rule<T> {
    /// Creates a rule binding `value` to queries at least as specific as
    /// `flavor`.
    pub fn new(flavor: Flavor, value: T) -> Self {
        Self { flavor, value }
    }

    /// The flavor this rule targets.
    pub fn flavor(&self) -> &Flavor {
        &self.flavor
    }

    /// The value this rule resolves to.
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// A rule as filed inside a [`StyleTable`](crate::StyleTable): the rule plus
/// its position in the build sequence and its precomputed selectivity.
///
/// One entry exists per rule; the table shares it between every per-atom
/// bucket the rule is filed under.
#[derive(Debug)]
pub(crate) struct RuleEntry<T> {
    pub(crate) order: usize,
    pub(crate) selectivity: usize,
    pub(crate) flavor: Flavor,
    pub(crate) value: T,
}

impl<T> RuleEntry<T> {
    /// Precedence key: selectivity first, insertion order as tie-breaker.
    pub(crate) fn rank(&self) -> (usize, usize) {
        (self.selectivity, self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_exposes_flavor_and_value() {
        let mandatory = Flavor::atomic("mandatory", &Flavor::default());
        let rule = Rule::new(mandatory.clone(), "field-mandatory");
        assert_eq!(rule.flavor(), &mandatory);
        assert_eq!(*rule.value(), "field-mandatory");
    }

    #[test]
    fn rank_orders_selectivity_before_order() {
        let a = Flavor::atomic("a", &Flavor::default());
        let b = Flavor::atomic("b", &Flavor::default());
        let ab = a.plus(&b);

        let wide = RuleEntry {
            order: 5,
            selectivity: a.selectivity(),
            flavor: a,
            value: (),
        };
        let narrow = RuleEntry {
            order: 0,
            selectivity: ab.selectivity(),
            flavor: ab,
            value: (),
        };
        // A more selective rule outranks an older, broader one.
        assert!(narrow.rank() > wide.rank());
    }
}
