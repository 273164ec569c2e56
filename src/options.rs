//! Configuration options for value rendering.
//!
//! [`Options`] is an immutable record read by every renderer component.
//! Builder methods consume and return by value, so a shared configuration can
//! never be mutated behind another caller's back. Two named presets exist:
//!
//! - [`Options::new`]: type-annotated dump output, compact format output.
//! - [`Options::clean`]: minimal bracketed style with no type annotations and
//!   no pointer addresses.
//!
//! ## Examples
//!
//! ```rust
//! use deepfmt::{sdump_with_options, Options, Value};
//!
//! let v = Value::from(127i8);
//! assert_eq!(sdump_with_options(&v, &Options::new()).unwrap(), "(i8) 127\n");
//! assert_eq!(sdump_with_options(&v, &Options::clean()).unwrap(), "127\n");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::resolve::{CodeResolver, NoSymbols};

/// Immutable rendering configuration.
///
/// All fields are public so a configuration can be built record-style with
/// functional update syntax:
///
/// ```rust
/// use deepfmt::Options;
///
/// let options = Options {
///     max_depth: 1,
///     ..Options::new()
/// };
/// assert_eq!(options.max_depth, 1);
/// ```
#[derive(Clone)]
pub struct Options {
    /// String emitted once per indentation level in dump output.
    pub indent: String,
    /// Maximum aggregate nesting depth; 0 means unlimited.
    pub max_depth: usize,
    /// Disables all custom-rendering capabilities.
    pub disable_methods: bool,
    /// Disables reference-receiver capabilities on addressable bare values.
    pub disable_pointer_methods: bool,
    /// Renders a capability's output *and* continues structurally.
    pub continue_on_method: bool,
    /// Suppresses `0x…` address chains on references and channels.
    pub disable_pointer_addresses: bool,
    /// Suppresses `cap=` annotations on sequences.
    pub disable_capacities: bool,
    /// Skips fields flagged private in [`FieldMap`](crate::FieldMap) entries.
    pub skip_private_fields: bool,
    /// Quotes format-mode strings and capability output.
    pub quote_strings: bool,
    /// Emits a separator after the last element too.
    pub trailing_commas: bool,
    /// Minimal bracketed style: no type names, no size annotations.
    pub clean: bool,
    /// Resolver for function-like values.
    pub resolver: Arc<dyn CodeResolver>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            indent: " ".to_string(),
            max_depth: 0,
            disable_methods: false,
            disable_pointer_methods: false,
            continue_on_method: false,
            disable_pointer_addresses: false,
            disable_capacities: false,
            skip_private_fields: false,
            quote_strings: false,
            trailing_commas: false,
            clean: false,
            resolver: Arc::new(NoSymbols),
        }
    }
}

impl Options {
    /// Creates the default configuration: annotated dump output with a
    /// one-space indent, compact format output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the "clean" configuration: minimal bracketed lists, two-space
    /// indent, no type annotations, no pointer addresses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deepfmt::Options;
    ///
    /// let options = Options::clean();
    /// assert!(options.clean);
    /// assert!(options.disable_pointer_addresses);
    /// ```
    #[must_use]
    pub fn clean() -> Self {
        Options {
            indent: "  ".to_string(),
            clean: true,
            disable_pointer_addresses: true,
            ..Self::default()
        }
    }

    /// Sets the per-level indent string for dump output.
    #[must_use]
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Sets the maximum traversal depth (0 = unlimited).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deepfmt::Options;
    ///
    /// let options = Options::new().with_max_depth(1);
    /// assert_eq!(options.max_depth, 1);
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables quoting of format-mode strings and capability output.
    #[must_use]
    pub fn with_quoted_strings(mut self) -> Self {
        self.quote_strings = true;
        self
    }

    /// Emits a separator after the last element of every aggregate.
    #[must_use]
    pub fn with_trailing_commas(mut self) -> Self {
        self.trailing_commas = true;
        self
    }

    /// Installs a code location resolver for function-like values.
    #[must_use]
    pub fn with_resolver<R: CodeResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("indent", &self.indent)
            .field("max_depth", &self.max_depth)
            .field("disable_methods", &self.disable_methods)
            .field("disable_pointer_methods", &self.disable_pointer_methods)
            .field("continue_on_method", &self.continue_on_method)
            .field("disable_pointer_addresses", &self.disable_pointer_addresses)
            .field("disable_capacities", &self.disable_capacities)
            .field("skip_private_fields", &self.skip_private_fields)
            .field("quote_strings", &self.quote_strings)
            .field("trailing_commas", &self.trailing_commas)
            .field("clean", &self.clean)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset() {
        let options = Options::new();
        assert_eq!(options.indent, " ");
        assert_eq!(options.max_depth, 0);
        assert!(!options.clean);
    }

    #[test]
    fn test_clean_preset() {
        let options = Options::clean();
        assert!(options.clean);
        assert!(options.disable_pointer_addresses);
        assert_eq!(options.indent, "  ");
    }

    #[test]
    fn test_builders_do_not_alias() {
        let base = Options::new();
        let tweaked = base.clone().with_max_depth(3).with_quoted_strings();
        assert_eq!(base.max_depth, 0);
        assert_eq!(tweaked.max_depth, 3);
        assert!(tweaked.quote_strings);
        assert!(!base.quote_strings);
    }
}
