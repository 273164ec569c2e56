//! The single-line, verb-driven renderer.
//!
//! Format output is the inline display style: aggregates render on one line
//! with space-separated elements, and a [`Verb`] selects how much detail to
//! show. [`Verb::Compact`] prints bare values, [`Verb::WithFields`] adds
//! `name:` prefixes inside structs, and the two type-annotated verbs prefix
//! every value with `(type)`. Cycles are cut with `<shown>` and bounded
//! traversals with `<max>`.
//!
//! [`Formatted`] adapts a value to [`std::fmt::Display`] and
//! [`std::fmt::Debug`], mapping the standard formatting flags onto verbs so
//! values drop into ordinary `format!` strings:
//!
//! ```rust
//! use deepfmt::{wrap, Struct, Value};
//!
//! let point = Value::from(Struct::new("demo::Point").field("x", 1i32).field("y", 2i32));
//! assert_eq!(format!("{}", wrap(&point)), "{1 2}");
//! assert_eq!(format!("{:+}", wrap(&point)), "{x:1 y:2}");
//! ```

use std::fmt;

use crate::dispatch::custom_repr;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::track::Tracker;
use crate::value::{escape_str, unwind, Custom, Ref, Value};

/// How much detail the format renderer shows.
///
/// The four verbs form a 2x2 grid: field names on or off, type annotations
/// on or off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    /// Bare values, no field names, no types.
    Compact,
    /// Struct fields carry `name:` prefixes.
    WithFields,
    /// Every value carries a `(type)` prefix.
    WithTypes,
    /// Both field names and type prefixes.
    WithTypesAndFields,
}

impl Verb {
    /// Whether this verb prints `(type)` prefixes.
    #[inline]
    #[must_use]
    pub const fn with_types(self) -> bool {
        matches!(self, Verb::WithTypes | Verb::WithTypesAndFields)
    }

    /// Whether this verb prints `name:` prefixes on struct fields.
    #[inline]
    #[must_use]
    pub const fn with_fields(self) -> bool {
        matches!(self, Verb::WithFields | Verb::WithTypesAndFields)
    }
}

/// Renders `value` in the inline style selected by `verb`. No trailing
/// newline is added.
pub(crate) fn format_value(verb: Verb, value: &Value, options: &Options) -> Result<String> {
    let mut formatter = Formatter {
        out: String::new(),
        opts: options,
        verb,
        tracker: Tracker::new(options.max_depth),
    };
    formatter.value(value, false, false, true)?;
    Ok(formatter.out)
}

struct Formatter<'a> {
    out: String,
    opts: &'a Options,
    verb: Verb,
    tracker: Tracker,
}

impl Formatter<'_> {
    fn value(&mut self, v: &Value, skip_type: bool, via_ref: bool, root: bool) -> Result<()> {
        match v {
            Value::Nil(t) => {
                if let Some(t) = t {
                    self.type_prefix(t, skip_type, root);
                }
                self.out.push_str("<nil>");
                Ok(())
            }
            Value::Bool(b) => {
                self.type_prefix("bool", skip_type, root);
                self.out.push_str(if *b { "true" } else { "false" });
                Ok(())
            }
            Value::Int(i) => {
                self.type_prefix(i.type_name(), skip_type, root);
                self.out.push_str(&i.to_string());
                Ok(())
            }
            Value::Uint(u) => {
                self.type_prefix(u.type_name(), skip_type, root);
                self.out.push_str(&u.to_string());
                Ok(())
            }
            Value::Float(fl) => {
                self.type_prefix(fl.type_name(), skip_type, root);
                self.out.push_str(&fl.to_string());
                Ok(())
            }
            Value::Char(c) => {
                self.type_prefix("char", skip_type, root);
                if self.quoting() {
                    self.out.push('\'');
                    self.out.push(*c);
                    self.out.push('\'');
                } else {
                    self.out.push(*c);
                }
                Ok(())
            }
            Value::Str(s) => {
                self.type_prefix("string", skip_type, root);
                if self.quoting() {
                    self.out.push('"');
                    self.out.push_str(&escape_str(s));
                    self.out.push('"');
                } else {
                    self.out.push_str(s);
                }
                Ok(())
            }
            Value::Seq(s) => {
                self.type_prefix(&v.type_name(), skip_type, root);
                self.seq_body(&s.items)
            }
            Value::Map(m) => {
                self.type_prefix(&v.type_name(), skip_type, root);
                self.map_body(&m.entries)
            }
            Value::Struct(st) => {
                self.type_prefix(&st.name, skip_type, root);
                self.struct_body(st)
            }
            Value::Ref(r) => self.reference(r, skip_type, root),
            Value::Func(f) => {
                self.type_prefix(&f.type_name, skip_type, root);
                match self.opts.resolver.resolve(f.id) {
                    Some(loc) => {
                        self.out.push_str(&loc.name);
                        self.out.push('[');
                        self.out.push_str(&loc.file);
                        self.out.push(':');
                        self.out.push_str(&loc.line.to_string());
                        self.out.push(']');
                    }
                    None => self.out.push_str("<unknown>"),
                }
                Ok(())
            }
            Value::Chan(c) => {
                self.type_prefix(&c.type_name, skip_type, root);
                match c.id {
                    None => self.out.push_str("<nil>"),
                    Some(_) if self.opts.disable_pointer_addresses => {
                        self.out.push_str("<chan>");
                    }
                    Some(id) => self.out.push_str(&format!("{:#x}", id)),
                }
                Ok(())
            }
            Value::Custom(c) => self.custom(c, skip_type, via_ref, root),
        }
    }

    /// Format-mode strings are quoted only on request; clean output always
    /// quotes so string boundaries survive the comma separators.
    fn quoting(&self) -> bool {
        self.opts.quote_strings || self.opts.clean
    }

    /// `(type)` prefix with no trailing space. Clean output annotates the
    /// root value only.
    fn type_prefix(&mut self, type_name: &str, skip_type: bool, root: bool) {
        if !self.verb.with_types() || skip_type {
            return;
        }
        if self.opts.clean && !root {
            return;
        }
        self.out.push('(');
        self.out.push_str(type_name);
        self.out.push(')');
    }

    fn element_separator(&mut self, is_last: bool) {
        if is_last {
            return;
        }
        self.out.push_str(if self.opts.clean { "," } else { " " });
    }

    fn seq_body(&mut self, items: &[Value]) -> Result<()> {
        if self.tracker.enter(None).is_err() {
            self.out.push_str("[<max>]");
            return Ok(());
        }
        self.out.push('[');
        let count = items.len();
        for (i, item) in items.iter().enumerate() {
            self.value(item, false, false, false)?;
            self.element_separator(i + 1 == count);
        }
        self.out.push(']');
        self.tracker.leave(None);
        Ok(())
    }

    fn map_body(&mut self, entries: &[(Value, Value)]) -> Result<()> {
        let (open, close) = if self.opts.clean {
            ("{", "}")
        } else {
            ("map[", "]")
        };
        if self.tracker.enter(None).is_err() {
            self.out.push_str(open);
            self.out.push_str("<max>");
            self.out.push_str(close);
            return Ok(());
        }
        self.out.push_str(open);
        let count = entries.len();
        for (i, (key, val)) in entries.iter().enumerate() {
            self.value(key, false, false, false)?;
            self.out.push(':');
            self.value(val, false, false, false)?;
            self.element_separator(i + 1 == count);
        }
        self.out.push_str(close);
        self.tracker.leave(None);
        Ok(())
    }

    fn struct_body(&mut self, st: &crate::value::Struct) -> Result<()> {
        if self.tracker.enter(None).is_err() {
            self.out.push_str("{<max>}");
            return Ok(());
        }
        self.out.push('{');
        let fields: Vec<_> = st
            .fields
            .iter()
            .filter(|(_, field)| !(self.opts.skip_private_fields && field.private))
            .collect();
        let count = fields.len();
        for (i, (name, field)) in fields.into_iter().enumerate() {
            if self.verb.with_fields() {
                self.out.push_str(name);
                self.out.push(':');
            }
            self.value(&field.value, false, false, false)?;
            self.element_separator(i + 1 == count);
        }
        self.out.push('}');
        self.tracker.leave(None);
        Ok(())
    }

    fn reference(&mut self, r: &Ref, skip_type: bool, root: bool) -> Result<()> {
        let uw = unwind(r, &self.tracker);
        let transparent = self.opts.clean && !(root && self.verb.with_types());
        if self.verb.with_types() && !skip_type && !transparent {
            self.out.push('(');
            self.out.push_str(&"*".repeat(uw.indirections));
            self.out.push_str(&uw.target_type());
            self.out.push(')');
        } else if !self.verb.with_types() && !self.opts.clean {
            for _ in 0..uw.indirections {
                self.out.push_str("<*>");
            }
        }
        if uw.cycle {
            self.out.push_str("<shown>");
            return Ok(());
        }
        let cell = match &uw.target {
            None => {
                self.out.push_str("<nil>");
                return Ok(());
            }
            Some(cell) => cell.clone(),
        };
        for &addr in &uw.addrs {
            let _ = self.tracker.enter(Some(addr));
        }
        let result = {
            let inner = cell.borrow();
            self.value(&inner, true, true, false)
        };
        for &addr in uw.addrs.iter().rev() {
            self.tracker.leave(Some(addr));
        }
        result
    }

    fn custom(&mut self, c: &Custom, skip_type: bool, via_ref: bool, root: bool) -> Result<()> {
        let type_name = c
            .type_name
            .clone()
            .unwrap_or_else(|| c.value.type_name());
        self.type_prefix(&type_name, skip_type, root);
        match custom_repr(c, via_ref, self.opts, self.verb.with_types()) {
            Some(Ok(repr)) => {
                if self.opts.continue_on_method {
                    self.out.push('(');
                    self.out.push_str(&repr);
                    self.out.push_str(") ");
                    self.value(&c.value, true, via_ref, false)
                } else {
                    if self.opts.quote_strings {
                        self.out.push('"');
                        self.out.push_str(&escape_str(&repr));
                        self.out.push('"');
                    } else {
                        self.out.push_str(&repr);
                    }
                    Ok(())
                }
            }
            Some(Err(source)) => Err(Error::repr(&type_name, source)),
            None => self.value(&c.value, true, via_ref, false),
        }
    }
}

/// A value bound to rendering options, usable with the standard formatting
/// machinery.
///
/// `Display` maps the `+` flag to [`Verb::WithFields`] and the `#` flag to
/// [`Verb::WithTypes`] (both together select [`Verb::WithTypesAndFields`]).
/// `Debug` always annotates types; `{:#?}` adds field names.
///
/// Rendering failures surface as [`std::fmt::Error`], since the `fmt` traits
/// carry no payload.
#[derive(Clone)]
pub struct Formatted<'a> {
    value: &'a Value,
    options: Options,
}

impl<'a> Formatted<'a> {
    pub(crate) fn new(value: &'a Value, options: Options) -> Self {
        Formatted { value, options }
    }
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match (f.sign_plus(), f.alternate()) {
            (false, false) => Verb::Compact,
            (true, false) => Verb::WithFields,
            (false, true) => Verb::WithTypes,
            (true, true) => Verb::WithTypesAndFields,
        };
        let rendered = format_value(verb, self.value, &self.options).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl fmt::Debug for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if f.alternate() {
            Verb::WithTypesAndFields
        } else {
            Verb::WithTypes
        };
        let rendered = format_value(verb, self.value, &self.options).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
