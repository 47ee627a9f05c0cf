//! Rule tables with most-specific-match lookup.
//!
//! This module provides:
//!
//! - [`Rule`]: a `(flavor, value)` pair in cascade order
//! - [`StyleTable`]: the build-once, read-many rule index
//! - [`Resolution`] / [`Candidate`]: serializable lookup traces
//!
//! Tables resolve a query flavor to the value of the most specific matching
//! rule, breaking ties in favor of the rule added later.

mod explain;
mod rule;
mod style_table;

pub use explain::{Candidate, Resolution};
pub use rule::Rule;
pub use style_table::StyleTable;
