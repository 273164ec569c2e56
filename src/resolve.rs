//! Code location resolution for function-like values.
//!
//! Function values carry an opaque [`FuncId`] rather than a name; mapping an
//! identity to a qualified name and source position is the job of a
//! [`CodeResolver`], injected through [`Options`](crate::Options). When no
//! resolver (or no symbol information) is available the renderers substitute
//! a fixed `<unknown>` placeholder instead of failing.
//!
//! ## Examples
//!
//! ```rust
//! use deepfmt::{sdump_with_options, FuncId, Options, SymbolTable, Value};
//!
//! let symbols = SymbolTable::new().register(FuncId(1), "demo::run", "demo.rs", 42);
//! let options = Options::new().with_resolver(symbols);
//!
//! let f = Value::func("fn()", FuncId(1));
//! assert_eq!(sdump_with_options(&f, &options).unwrap(), "(fn()) demo::run[demo.rs:42]\n");
//! ```

use std::collections::HashMap;

/// Opaque identity of a function-like value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FuncId(pub u64);

/// A resolved source position for a function-like value.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeLocation {
    pub name: String,
    pub file: String,
    pub line: u32,
}

/// Maps a function identity to a qualified name and source position.
///
/// Returning `None` means no symbol information is available; the renderers
/// then emit the `<unknown>` placeholder.
pub trait CodeResolver: Send + Sync {
    fn resolve(&self, id: FuncId) -> Option<CodeLocation>;
}

/// A resolver with no symbol information; resolves nothing.
///
/// This is the default resolver on [`Options`](crate::Options).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSymbols;

impl CodeResolver for NoSymbols {
    fn resolve(&self, _id: FuncId) -> Option<CodeLocation> {
        None
    }
}

/// An explicit identity-to-location table.
///
/// Rust exposes no portable runtime symbol lookup, so callers that want
/// resolved function names register them up front.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<FuncId, CodeLocation>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function identity, consuming and returning the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deepfmt::{FuncId, SymbolTable};
    ///
    /// let symbols = SymbolTable::new()
    ///     .register(FuncId(1), "demo::run", "demo.rs", 42)
    ///     .register(FuncId(2), "demo::stop", "demo.rs", 77);
    /// ```
    #[must_use]
    pub fn register(mut self, id: FuncId, name: &str, file: &str, line: u32) -> Self {
        self.entries.insert(
            id,
            CodeLocation {
                name: name.to_string(),
                file: file.to_string(),
                line,
            },
        );
        self
    }
}

impl CodeResolver for SymbolTable {
    fn resolve(&self, id: FuncId) -> Option<CodeLocation> {
        self.entries.get(&id).cloned()
    }
}
