//! Terminal theming on top of the rule table.
//!
//! This module provides:
//!
//! - [`Theme`]: a fluent builder collecting `(flavor, style)` rules
//! - [`CompiledTheme`]: the frozen lookup form backed by a
//!   [`StyleTable`](crate::StyleTable) of [`console::Style`] values
//!
//! Themes are the consumer-side glue: callers map object state to a query
//! flavor and apply whatever style the cascade resolves.

#[allow(clippy::module_inception)]
mod theme;

pub use theme::{CompiledTheme, Theme};
