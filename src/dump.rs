//! The multi-line, annotated renderer.
//!
//! Dump output is the verbose display style: one element per line, nested
//! aggregates indented one level per depth, every value prefixed with its
//! type in parentheses, and sized values annotated with `(len=N)` and
//! `(cap=M)`. References show their full address chain and dereference
//! through to the target; cycles are cut with `<already shown>` and bounded
//! traversals with `<max depth reached>`.
//!
//! Under [`Options::clean`](crate::Options::clean) the same traversal emits a
//! minimal bracketed style instead: no types, no annotations, no addresses,
//! sequences in `[` `]` and maps and structs in `{` `}`.
//!
//! Entry points live in the crate root ([`sdump`](crate::sdump) and
//! friends); this module only exposes the renderer to them.

use crate::dispatch::custom_repr;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::track::Tracker;
use crate::value::{escape_str, unwind, Custom, Ref, Value};

/// Renders `value` in the dump style, ending with exactly one newline.
pub(crate) fn dump_value(value: &Value, options: &Options) -> Result<String> {
    let mut dumper = Dumper {
        out: String::new(),
        opts: options,
        tracker: Tracker::new(options.max_depth),
    };
    dumper.value(value, false, false, false)?;
    dumper.out.push('\n');
    Ok(dumper.out)
}

struct Dumper<'a> {
    out: String,
    opts: &'a Options,
    tracker: Tracker,
}

impl Dumper<'_> {
    // `skip_annotation` is set when re-entering a custom value's structure:
    // the annotation was already written ahead of the capability dispatch.
    fn value(
        &mut self,
        v: &Value,
        skip_type: bool,
        via_ref: bool,
        skip_annotation: bool,
    ) -> Result<()> {
        match v {
            Value::Nil(t) => {
                if !skip_type && !self.opts.clean {
                    if let Some(t) = t {
                        self.out.push('(');
                        self.out.push_str(t);
                        self.out.push_str(") ");
                    }
                }
                self.out.push_str("<nil>");
                Ok(())
            }
            Value::Bool(b) => {
                self.type_prefix(&v.type_name(), skip_type);
                self.out.push_str(if *b { "true" } else { "false" });
                Ok(())
            }
            Value::Int(i) => {
                self.type_prefix(i.type_name(), skip_type);
                self.out.push_str(&i.to_string());
                Ok(())
            }
            Value::Uint(u) => {
                self.type_prefix(u.type_name(), skip_type);
                self.out.push_str(&u.to_string());
                Ok(())
            }
            Value::Float(fl) => {
                self.type_prefix(fl.type_name(), skip_type);
                self.out.push_str(&fl.to_string());
                Ok(())
            }
            Value::Char(c) => {
                self.type_prefix("char", skip_type);
                self.char_literal(*c);
                Ok(())
            }
            Value::Str(s) => {
                self.type_prefix("string", skip_type);
                if !skip_annotation {
                    self.annotation(s.len(), None);
                }
                self.out.push('"');
                self.out.push_str(&escape_str(s));
                self.out.push('"');
                Ok(())
            }
            Value::Seq(s) => {
                self.type_prefix(&v.type_name(), skip_type);
                if !skip_annotation {
                    self.annotation(s.items.len(), s.capacity);
                }
                self.seq_body(&s.items)
            }
            Value::Map(m) => {
                self.type_prefix(&v.type_name(), skip_type);
                if !skip_annotation {
                    self.annotation(m.entries.len(), None);
                }
                self.map_body(&m.entries)
            }
            Value::Struct(st) => {
                self.type_prefix(&st.name, skip_type);
                self.struct_body(st)
            }
            Value::Ref(r) => self.reference(r),
            Value::Func(f) => {
                self.type_prefix(&f.type_name, skip_type);
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
                self.type_prefix(&c.type_name, skip_type);
                match c.id {
                    None => self.out.push_str("<nil>"),
                    Some(_) if self.opts.disable_pointer_addresses => {
                        self.out.push_str("<chan>");
                    }
                    Some(id) => self.out.push_str(&format!("{:#x}", id)),
                }
                Ok(())
            }
            Value::Custom(c) => self.custom(c, skip_type, via_ref, skip_annotation),
        }
    }

    /// `(type) ` prefix; suppressed in clean output and inside references.
    fn type_prefix(&mut self, type_name: &str, skip_type: bool) {
        if self.opts.clean || skip_type {
            return;
        }
        self.out.push('(');
        self.out.push_str(type_name);
        self.out.push_str(") ");
    }

    /// `(len=N cap=M) ` annotation; zero-valued parts are dropped.
    fn annotation(&mut self, len: usize, cap: Option<usize>) {
        if self.opts.clean {
            return;
        }
        let cap = cap.filter(|&c| c != 0 && !self.opts.disable_capacities);
        if len == 0 && cap.is_none() {
            return;
        }
        self.out.push('(');
        if len != 0 {
            self.out.push_str(&format!("len={}", len));
        }
        if let Some(cap) = cap {
            if len != 0 {
                self.out.push(' ');
            }
            self.out.push_str(&format!("cap={}", cap));
        }
        self.out.push_str(") ");
    }

    fn pad(&mut self) {
        for _ in 0..self.tracker.depth() {
            self.out.push_str(&self.opts.indent);
        }
    }

    fn separator(&mut self, is_last: bool) {
        if !is_last || self.opts.trailing_commas {
            self.out.push(',');
        }
        self.out.push('\n');
    }

    fn seq_body(&mut self, items: &[Value]) -> Result<()> {
        let (open, close) = if self.opts.clean { ("[", "]") } else { ("{", "}") };
        if self.opts.clean && items.is_empty() {
            self.out.push_str("[]");
            return Ok(());
        }
        if self.tracker.enter(None).is_err() {
            self.depth_marker(open, close);
            return Ok(());
        }
        self.out.push_str(open);
        self.out.push('\n');
        let count = items.len();
        for (i, item) in items.iter().enumerate() {
            self.pad();
            self.value(item, false, false, false)?;
            self.separator(i + 1 == count);
        }
        self.tracker.leave(None);
        self.pad();
        self.out.push_str(close);
        Ok(())
    }

    fn map_body(&mut self, entries: &[(Value, Value)]) -> Result<()> {
        if self.opts.clean && entries.is_empty() {
            self.out.push_str("{}");
            return Ok(());
        }
        if self.tracker.enter(None).is_err() {
            self.depth_marker("{", "}");
            return Ok(());
        }
        self.out.push_str("{\n");
        let count = entries.len();
        for (i, (key, val)) in entries.iter().enumerate() {
            self.pad();
            self.value(key, false, false, false)?;
            self.out.push_str(": ");
            self.value(val, false, false, false)?;
            self.separator(i + 1 == count);
        }
        self.tracker.leave(None);
        self.pad();
        self.out.push('}');
        Ok(())
    }

    fn struct_body(&mut self, st: &crate::value::Struct) -> Result<()> {
        let visible = st
            .fields
            .iter()
            .filter(|(_, field)| !(self.opts.skip_private_fields && field.private))
            .count();
        if self.opts.clean && visible == 0 {
            self.out.push_str("{}");
            return Ok(());
        }
        if self.tracker.enter(None).is_err() {
            self.depth_marker("{", "}");
            return Ok(());
        }
        self.out.push_str("{\n");
        // Separators track positions over all declared fields, so a skipped
        // trailing private field leaves one after the last shown field.
        let total = st.fields.len();
        for (i, (name, field)) in st.fields.iter().enumerate() {
            if self.opts.skip_private_fields && field.private {
                continue;
            }
            self.pad();
            self.out.push_str(name);
            self.out.push_str(": ");
            self.value(&field.value, false, false, false)?;
            self.separator(i + 1 == total);
        }
        self.tracker.leave(None);
        self.pad();
        self.out.push('}');
        Ok(())
    }

    /// Emits an `open … <max depth reached> … close` body at the current
    /// depth. Called only after `enter(None)` was refused, so the marker is
    /// indented one level past the braces.
    fn depth_marker(&mut self, open: &str, close: &str) {
        self.out.push_str(open);
        self.out.push('\n');
        let depth = self.tracker.depth();
        for _ in 0..=depth {
            self.out.push_str(&self.opts.indent);
        }
        self.out.push_str("<max depth reached>");
        self.out.push('\n');
        self.pad();
        self.out.push_str(close);
    }

    fn reference(&mut self, r: &Ref) -> Result<()> {
        let uw = unwind(r, &self.tracker);
        if self.opts.clean {
            // Clean output dereferences transparently.
            if uw.cycle {
                self.out.push_str("<already shown>");
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
                self.value(&inner, false, true, false)
            };
            for &addr in uw.addrs.iter().rev() {
                self.tracker.leave(Some(addr));
            }
            return result;
        }

        self.out.push('(');
        self.out.push_str(&"*".repeat(uw.indirections));
        self.out.push_str(&uw.target_type());
        self.out.push(')');
        if !self.opts.disable_pointer_addresses && !uw.addrs.is_empty() {
            let joined: Vec<String> = uw.addrs.iter().map(|a| format!("{:#x}", a)).collect();
            self.out.push('(');
            self.out.push_str(&joined.join("->"));
            self.out.push(')');
        }
        if uw.cycle {
            self.out.push_str("(<already shown>)");
            return Ok(());
        }
        let cell = match &uw.target {
            None => {
                self.out.push_str("(<nil>)");
                return Ok(());
            }
            Some(cell) => cell.clone(),
        };
        for &addr in &uw.addrs {
            let _ = self.tracker.enter(Some(addr));
        }
        self.out.push('(');
        let result = {
            let inner = cell.borrow();
            self.value(&inner, true, true, false)
        };
        self.out.push(')');
        for &addr in uw.addrs.iter().rev() {
            self.tracker.leave(Some(addr));
        }
        result
    }

    fn custom(
        &mut self,
        c: &Custom,
        skip_type: bool,
        via_ref: bool,
        skip_annotation: bool,
    ) -> Result<()> {
        let type_name = c
            .type_name
            .clone()
            .unwrap_or_else(|| c.value.type_name());
        self.type_prefix(&type_name, skip_type);
        if !skip_annotation {
            let cap = match &*c.value {
                Value::Seq(s) => s.capacity,
                _ => None,
            };
            self.annotation(c.value.size().unwrap_or(0), cap);
        }
        match custom_repr(c, via_ref, self.opts, false) {
            Some(Ok(repr)) => {
                if self.opts.continue_on_method {
                    self.out.push('(');
                    self.out.push_str(&repr);
                    self.out.push_str(") ");
                    self.value(&c.value, true, via_ref, true)
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
            None => self.value(&c.value, true, via_ref, true),
        }
    }

    fn char_literal(&mut self, c: char) {
        self.out.push('\'');
        match c {
            '\'' => self.out.push_str("\\'"),
            '\\' => self.out.push_str("\\\\"),
            '\n' => self.out.push_str("\\n"),
            '\r' => self.out.push_str("\\r"),
            '\t' => self.out.push_str("\\t"),
            _ => self.out.push(c),
        }
        self.out.push('\'');
    }
}
