//! Theme struct binding flavors to terminal styles.

use console::Style;

use crate::flavor::Flavor;
use crate::table::{Resolution, Rule, StyleTable};

/// An ordered collection of `(flavor, style)` rules used when rendering.
///
/// Themes provide a fluent builder API over a [`StyleTable`] of
/// [`console::Style`] values; [`compile`](Theme::compile) freezes the rules
/// into a [`CompiledTheme`] for lookup.
///
/// # Example
///
/// ```rust
/// use flavors::{Flavor, Theme};
/// use console::Style;
///
/// let disabled = Flavor::atomic("disabled", &Flavor::default());
/// let mandatory = Flavor::atomic("mandatory", &Flavor::default());
///
/// let theme = Theme::new()
///     .add(&Flavor::default(), Style::new())
///     .add(&disabled, Style::new().dim())
///     .add(&mandatory, Style::new().bold())
///     .add(&mandatory.plus(&disabled), Style::new().dim().bold())
///     .compile();
///
/// assert!(theme.style_for(&disabled).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    rules: Vec<Rule<Style>>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule, returning an updated theme for chaining.
    ///
    /// Rules added later win ties against equally specific earlier rules.
    pub fn add(mut self, flavor: &Flavor, style: Style) -> Self {
        self.rules.push(Rule::new(flavor.clone(), style));
        self
    }

    /// The number of rules added so far.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules have been added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Freezes the theme into its read-only lookup form.
    pub fn compile(self) -> CompiledTheme {
        CompiledTheme {
            table: StyleTable::build(self.rules),
        }
    }
}

/// A compiled, read-only theme; safe to share across threads.
#[derive(Debug)]
pub struct CompiledTheme {
    table: StyleTable<Style>,
}

impl CompiledTheme {
    /// The most specific style for `query`, or `None` when no rule applies.
    pub fn style_for(&self, query: &Flavor) -> Option<&Style> {
        self.table.get_value(query)
    }

    /// Renders `text` with the style resolved for `query`.
    ///
    /// When no rule applies, the text is returned unstyled — a missing rule
    /// is a normal outcome, not an error.
    pub fn apply(&self, query: &Flavor, text: &str) -> String {
        match self.style_for(query) {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }

    /// Traces the cascade decision for `query`.
    pub fn explain(&self, query: &Flavor) -> Resolution {
        self.table.explain(query)
    }
}
