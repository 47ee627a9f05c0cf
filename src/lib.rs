//! Most-specific-match style resolution over composable rendering qualifiers.
//!
//! UI components describe how their presentation changes under combinations
//! of orthogonal, named qualifiers — *flavors* such as `expanded`,
//! `disabled`, `mandatory`, `immutable`. A [`StyleTable`] then answers
//! "which value applies to this object, given its current qualifiers?" with
//! a most-specific-match policy analogous to CSS specificity resolution.
//!
//! # Building blocks
//!
//! - [`Flavor::atomic`] defines a new qualifier, optionally anchored to a
//!   baseline it always implies (`immutable` implies `disabled`).
//! - [`Flavor::aggregate`] combines qualifiers losslessly; [`Flavor::implies`]
//!   tests subsumption.
//! - [`StyleTable::build`] indexes `(flavor, value)` rules once;
//!   [`StyleTable::get_value`] returns the most specific matching value, with
//!   later rules winning ties — or `None`, which callers handle as a normal
//!   "no rule applies" outcome.
//! - [`Theme`] wraps a table of [`console::Style`] values for terminal
//!   rendering.
//!
//! Everything downstream of atom allocation is immutable: flavors, tables,
//! and compiled themes can be queried from any number of threads without
//! synchronization.
//!
//! # Example
//!
//! ```rust
//! use flavors::{Flavor, Rule, StyleTable};
//!
//! let mandatory = Flavor::atomic("mandatory", &Flavor::default());
//! let disabled = Flavor::atomic("disabled", &Flavor::default());
//! let both = mandatory.plus(&disabled);
//!
//! let icons = StyleTable::build(vec![
//!     Rule::new(mandatory.clone(), "star.png"),
//!     Rule::new(disabled.clone(), "grey.png"),
//!     Rule::new(both.clone(), "grey-star.png"),
//! ]);
//!
//! assert_eq!(icons.get_value(&both), Some(&"grey-star.png"));
//! assert_eq!(icons.get_value(&mandatory), Some(&"star.png"));
//! assert_eq!(icons.get_value(&Flavor::default()), None);
//! ```

pub mod flavor;
pub mod table;
pub mod theme;

pub use flavor::{Atom, Flavor};
pub use table::{Candidate, Resolution, Rule, StyleTable};
pub use theme::{CompiledTheme, Theme};
